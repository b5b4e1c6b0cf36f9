// src/db/record_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::{
        billing::{Bill, NewBill, UpdateBillPayload},
        clients::{Client, NewClient, UpdateClientPayload},
        inventory::{InventoryItem, NewInventoryItem, UpdateInventoryPayload},
        record::Record,
        reservations::{NewReservation, Reservation, UpdateReservationPayload},
    },
};

// CRUD genérico das entidades planas.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Em ordem de id (ordem de criação), em qualquer backend.
    async fn list(&self) -> Result<Vec<R>, AppError>;

    async fn get(&self, id: i32) -> Result<Option<R>, AppError>;

    async fn create(&self, new: R::New) -> Result<R, AppError>;

    /// Aplica só os campos presentes no patch. `None` se o id não existe.
    async fn update(&self, id: i32, patch: R::Update) -> Result<Option<R>, AppError>;

    /// `false` se o id não existe.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

// Um único repositório Postgres; cada entidade tem seu `impl RecordStore<_>`.
#[derive(Clone)]
pub struct RecordRepository {
    pool: PgPool,
}

impl RecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn delete_from(&self, table: &str, id: i32) -> Result<bool, AppError> {
        // `table` vem sempre de literais deste módulo
        let sql = format!("DELETE FROM {} WHERE id = $1", table);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
//  CLIENTES
// =============================================================================

#[async_trait]
impl RecordStore<Client> for RecordRepository {
    async fn list(&self) -> Result<Vec<Client>, AppError> {
        let rows = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Client>, AppError> {
        let row = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, new: NewClient) -> Result<Client, AppError> {
        let row = sqlx::query_as::<_, Client>(
            "INSERT INTO clients (name, email, phone) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(new.name)
        .bind(new.email)
        .bind(new.phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, patch: UpdateClientPayload) -> Result<Option<Client>, AppError> {
        let row = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.email)
        .bind(patch.phone)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        self.delete_from("clients", id).await
    }
}

// =============================================================================
//  ESTOQUE
// =============================================================================

#[async_trait]
impl RecordStore<InventoryItem> for RecordRepository {
    async fn list(&self) -> Result<Vec<InventoryItem>, AppError> {
        let rows = sqlx::query_as::<_, InventoryItem>("SELECT * FROM inventory ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<InventoryItem>, AppError> {
        let row = sqlx::query_as::<_, InventoryItem>("SELECT * FROM inventory WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, new: NewInventoryItem) -> Result<InventoryItem, AppError> {
        let row = sqlx::query_as::<_, InventoryItem>(
            r#"
            INSERT INTO inventory (name, description, quantity, price)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new.name)
        .bind(new.description)
        .bind(new.quantity)
        .bind(new.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        patch: UpdateInventoryPayload,
    ) -> Result<Option<InventoryItem>, AppError> {
        let row = sqlx::query_as::<_, InventoryItem>(
            r#"
            UPDATE inventory SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                quantity = COALESCE($4, quantity),
                price = COALESCE($5, price)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.quantity)
        .bind(patch.price)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        self.delete_from("inventory", id).await
    }
}

// =============================================================================
//  RESERVAS
// =============================================================================

#[async_trait]
impl RecordStore<Reservation> for RecordRepository {
    async fn list(&self) -> Result<Vec<Reservation>, AppError> {
        let rows = sqlx::query_as::<_, Reservation>("SELECT * FROM reservations ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Reservation>, AppError> {
        let row = sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, new: NewReservation) -> Result<Reservation, AppError> {
        let row = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (client_id, date, status, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new.client_id)
        .bind(new.date)
        .bind(new.status)
        .bind(new.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        patch: UpdateReservationPayload,
    ) -> Result<Option<Reservation>, AppError> {
        let row = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations SET
                client_id = COALESCE($2, client_id),
                date = COALESCE($3, date),
                status = COALESCE($4, status),
                notes = COALESCE($5, notes)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.client_id)
        .bind(patch.date)
        .bind(patch.status)
        .bind(patch.notes)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        self.delete_from("reservations", id).await
    }
}

// =============================================================================
//  CONTAS (FATURAMENTO)
// =============================================================================

#[async_trait]
impl RecordStore<Bill> for RecordRepository {
    async fn list(&self) -> Result<Vec<Bill>, AppError> {
        let rows = sqlx::query_as::<_, Bill>("SELECT * FROM bills ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Bill>, AppError> {
        let row = sqlx::query_as::<_, Bill>("SELECT * FROM bills WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, new: NewBill) -> Result<Bill, AppError> {
        let row = sqlx::query_as::<_, Bill>(
            r#"
            INSERT INTO bills (client_id, amount, status, date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new.client_id)
        .bind(new.amount)
        .bind(new.status)
        .bind(new.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, patch: UpdateBillPayload) -> Result<Option<Bill>, AppError> {
        let row = sqlx::query_as::<_, Bill>(
            r#"
            UPDATE bills SET
                client_id = COALESCE($2, client_id),
                amount = COALESCE($3, amount),
                status = COALESCE($4, status),
                date = COALESCE($5, date)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.client_id)
        .bind(patch.amount)
        .bind(patch.status)
        .bind(patch.date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        self.delete_from("bills", id).await
    }
}
