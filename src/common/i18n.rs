// src/common/i18n.rs

use std::{collections::HashMap, sync::OnceLock};

use anyhow::Context;

// Catálogos embutidos no binário: (idioma, JSON chave -> mensagem)
const CATALOGS: &[(&str, &str)] = &[
    ("es", include_str!("../../locales/es.json")),
    ("en", include_str!("../../locales/en.json")),
    ("pt", include_str!("../../locales/pt.json")),
];

pub const DEFAULT_LOCALE: &str = "es";

#[derive(Debug, Clone)]
pub struct I18nStore {
    default_locale: String,
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl I18nStore {
    /// Carrega os catálogos embutidos. `default_locale` precisa ser um deles.
    pub fn load(default_locale: &str) -> anyhow::Result<Self> {
        let mut catalogs = HashMap::new();
        for (lang, raw) in CATALOGS {
            let messages: HashMap<String, String> = serde_json::from_str(raw)
                .with_context(|| format!("Catálogo de mensagens '{}' inválido", lang))?;
            catalogs.insert(lang.to_string(), messages);
        }

        if !catalogs.contains_key(default_locale) {
            anyhow::bail!("Idioma padrão '{}' não suportado", default_locale);
        }

        Ok(Self {
            default_locale: default_locale.to_string(),
            catalogs,
        })
    }

    /// Store global com o idioma padrão, para respostas sem `AppState`.
    pub fn builtin() -> &'static I18nStore {
        static BUILTIN: OnceLock<I18nStore> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            I18nStore::load(DEFAULT_LOCALE).unwrap_or_else(|e| {
                tracing::error!("Falha ao carregar catálogos de mensagens: {:#}", e);
                I18nStore {
                    default_locale: DEFAULT_LOCALE.to_string(),
                    catalogs: HashMap::new(),
                }
            })
        })
    }

    // idioma pedido -> idioma padrão -> a própria chave
    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.catalogs
            .get(lang)
            .and_then(|messages| messages.get(key))
            .or_else(|| {
                self.catalogs
                    .get(&self.default_locale)
                    .and_then(|messages| messages.get(key))
            })
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_has_the_same_keys() {
        let store = I18nStore::load(DEFAULT_LOCALE).unwrap();
        let reference = &store.catalogs[DEFAULT_LOCALE];

        for (lang, messages) in &store.catalogs {
            for key in reference.keys() {
                assert!(messages.contains_key(key), "'{}' sem a chave '{}'", lang, key);
            }
            assert_eq!(messages.len(), reference.len(), "'{}' tem chaves extras", lang);
        }
    }

    #[test]
    fn unknown_language_falls_back_to_default() {
        let store = I18nStore::load("es").unwrap();
        assert_eq!(store.translate("de", "invalid_credentials"), "Credenciales inválidas");
        assert_eq!(store.translate("", "duplicate_active_shift"), "Ya tienes un turno activo");
        assert_eq!(store.translate("en", "invalid_shift_data"), "Invalid shift data");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let store = I18nStore::load("en").unwrap();
        assert_eq!(store.translate("en", "no_such_key"), "no_such_key");
    }

    #[test]
    fn unsupported_default_locale_is_rejected() {
        assert!(I18nStore::load("fr").is_err());
    }
}
