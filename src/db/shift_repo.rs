// src/db/shift_repo.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::shift::{NewShift, Shift},
};

// Índice parcial criado na migração inicial. É ele que fecha a corrida
// entre dois "abrir turno" simultâneos do mesmo usuário.
pub const ONE_ACTIVE_SHIFT_INDEX: &str = "shifts_one_active_per_user";

#[async_trait]
pub trait ShiftStore: Send + Sync {
    /// Turno com status active e end_time nulo, se houver.
    async fn find_active(&self, user_id: i32) -> Result<Option<Shift>, AppError>;

    /// Todos os turnos do usuário, mais recentes primeiro.
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<Shift>, AppError>;

    /// Insere um turno ativo. Atômico por usuário: se já existir um turno
    /// ativo, nada é inserido e retorna `DuplicateActiveShift`.
    async fn insert_active(&self, shift: NewShift) -> Result<Shift, AppError>;

    /// Fecha o turno somente se ainda estiver ativo e pertencer ao usuário.
    /// `None` quando nenhuma linha casou (inexistente, alheio ou já fechado).
    async fn close(
        &self,
        user_id: i32,
        shift_id: i32,
        ended_at: DateTime<Utc>,
    ) -> Result<Option<Shift>, AppError>;
}

#[derive(Clone)]
pub struct ShiftRepository {
    pool: PgPool,
}

impl ShiftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShiftStore for ShiftRepository {
    async fn find_active(&self, user_id: i32) -> Result<Option<Shift>, AppError> {
        let shift = sqlx::query_as::<_, Shift>(
            r#"
            SELECT * FROM shifts
            WHERE user_id = $1 AND status = 'active' AND end_time IS NULL
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(shift)
    }

    async fn list_for_user(&self, user_id: i32) -> Result<Vec<Shift>, AppError> {
        let shifts = sqlx::query_as::<_, Shift>(
            "SELECT * FROM shifts WHERE user_id = $1 ORDER BY start_time DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(shifts)
    }

    async fn insert_active(&self, shift: NewShift) -> Result<Shift, AppError> {
        sqlx::query_as::<_, Shift>(
            r#"
            INSERT INTO shifts (user_id, start_time, end_time, status, shift_type, notes)
            VALUES ($1, $2, NULL, 'active', $3, $4)
            RETURNING *
            "#,
        )
        .bind(shift.user_id)
        .bind(shift.start_time)
        .bind(shift.shift_type)
        .bind(shift.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some(ONE_ACTIVE_SHIFT_INDEX) {
                    return AppError::DuplicateActiveShift;
                }
            }
            AppError::DatabaseError(e)
        })
    }

    async fn close(
        &self,
        user_id: i32,
        shift_id: i32,
        ended_at: DateTime<Utc>,
    ) -> Result<Option<Shift>, AppError> {
        // Update condicional: um segundo fechamento concorrente não casa nenhuma linha.
        let shift = sqlx::query_as::<_, Shift>(
            r#"
            UPDATE shifts
            SET status = 'closed', end_time = $3
            WHERE id = $1 AND user_id = $2 AND status = 'active' AND end_time IS NULL
            RETURNING *
            "#,
        )
        .bind(shift_id)
        .bind(user_id)
        .bind(ended_at)
        .fetch_optional(&self.pool)
        .await?;
        Ok(shift)
    }
}
