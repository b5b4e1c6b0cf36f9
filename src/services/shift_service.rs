// src/services/shift_service.rs

use std::sync::Arc;

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::ShiftStore,
    models::shift::{OpenShiftPayload, Shift},
};

// Ciclo de vida do turno: no máximo um turno ativo por usuário.
#[derive(Clone)]
pub struct ShiftService {
    store: Arc<dyn ShiftStore>,
}

impl ShiftService {
    pub fn new(store: Arc<dyn ShiftStore>) -> Self {
        Self { store }
    }

    pub async fn active_shift(&self, user_id: i32) -> Result<Option<Shift>, AppError> {
        self.store.find_active(user_id).await
    }

    pub async fn list_shifts(&self, user_id: i32) -> Result<Vec<Shift>, AppError> {
        self.store.list_for_user(user_id).await
    }

    pub async fn open_shift(&self, user_id: i32, payload: OpenShiftPayload) -> Result<Shift, AppError> {
        // Validação primeiro: payload inválido não toca o store
        let new_shift = payload.into_new_shift(user_id, Utc::now())?;

        if self.store.find_active(user_id).await?.is_some() {
            return Err(AppError::DuplicateActiveShift);
        }

        // O store repete a checagem de forma atômica (índice único / trava)
        let shift = self.store.insert_active(new_shift).await?;

        tracing::info!(user_id, shift_id = shift.id, shift_type = %shift.shift_type, "Turno aberto");
        Ok(shift)
    }

    pub async fn close_shift(&self, user_id: i32, shift_id: i32) -> Result<Shift, AppError> {
        // Turno alheio, já fechado ou inexistente: todos viram ShiftNotFound.
        let active = self
            .store
            .find_active(user_id)
            .await?
            .filter(|shift| shift.id == shift_id)
            .ok_or(AppError::ShiftNotFound)?;

        let ended_at = Utc::now().max(active.start_time);

        let closed = self
            .store
            .close(user_id, shift_id, ended_at)
            .await?
            .ok_or(AppError::ShiftNotFound)?;

        tracing::info!(user_id, shift_id, "Turno fechado");
        Ok(closed)
    }
}
