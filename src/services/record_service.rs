// src/services/record_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{common::error::AppError, db::RecordStore, models::record::Record};

// Serviço CRUD genérico: valida na borda e delega ao store.
pub struct RecordService<R: Record> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R: Record> Clone for RecordService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: Record> RecordService<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<R>, AppError> {
        self.store.list().await
    }

    pub async fn get(&self, id: i32) -> Result<R, AppError> {
        self.store.get(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create(&self, payload: R::Create) -> Result<R, AppError> {
        payload.validate()?;
        let record = self.store.create(payload.into()).await?;
        tracing::info!(kind = R::KIND, id = record.id(), "Registro criado");
        Ok(record)
    }

    pub async fn update(&self, id: i32, patch: R::Update) -> Result<R, AppError> {
        patch.validate()?;
        self.store.update(id, patch).await?.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(AppError::NotFound);
        }
        tracing::info!(kind = R::KIND, id, "Registro removido");
        Ok(())
    }
}
