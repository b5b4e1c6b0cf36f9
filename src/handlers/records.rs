// src/handlers/records.rs
//
// Peças comuns dos handlers CRUD (clientes, estoque, reservas, contas).

use axum::{extract::rejection::JsonRejection, Json};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    common::{
        error::{ApiError, AppError},
        i18n::I18nStore,
    },
    middleware::i18n::Locale,
};

/// Corpo JSON malformado vira `InvalidData` (400), não o 422 padrão do axum.
/// O corpo chega como `Value` para que um tipo errado aponte o campo culpado.
pub(crate) fn json_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
    locale: &Locale,
    i18n: &I18nStore,
) -> Result<T, ApiError> {
    let Json(value) = payload
        .map_err(|e| AppError::InvalidData(e.body_text()).to_api_error(locale, i18n))?;

    serde_path_to_error::deserialize(value).map_err(|e| {
        let field = e.path().to_string();
        let reason = e.inner().to_string();
        // "." = erro na raiz (ex.: corpo que não é objeto)
        let err = if field == "." {
            AppError::InvalidData(reason)
        } else {
            AppError::InvalidField { field, reason }
        };
        err.to_api_error(locale, i18n)
    })
}

/// `:id` não numérico é tratado como registro inexistente.
pub(crate) fn record_id(raw: &str, locale: &Locale, i18n: &I18nStore) -> Result<i32, ApiError> {
    raw.parse()
        .map_err(|_| AppError::NotFound.to_api_error(locale, i18n))
}
