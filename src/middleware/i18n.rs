// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

// Extrator de idioma. String vazia = cliente não pediu idioma,
// o I18nStore usa o idioma padrão configurado.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Locale(pub String);

impl Locale {
    pub fn from_header(raw: &str) -> Self {
        let lang = accept_language::parse(raw)
            .first() // Pega o primeiro idioma (ex: "es-MX")
            .map(|tag| {
                // "es-MX" -> "es"
                tag.split('-').next().unwrap_or(tag).to_lowercase()
            })
            .unwrap_or_default();

        Locale(lang)
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(Locale::from_header)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_primary_tag_of_preferred_language() {
        assert_eq!(Locale::from_header("es-MX,es;q=0.9,en;q=0.8").0, "es");
        assert_eq!(Locale::from_header("en;q=0.5, pt-BR").0, "pt");
        assert_eq!(Locale::from_header("").0, "");
    }
}
