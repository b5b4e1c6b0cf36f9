// src/db/memory.rs
//
// Stores em memória. Usados nos testes e quando o servidor sobe sem DATABASE_URL.
// Nenhuma trava é mantida através de um `.await`.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    common::error::AppError,
    db::{record_repo::RecordStore, shift_repo::ShiftStore, user_repo::UserStore},
    models::{
        auth::{User, DEFAULT_ROLE},
        record::Record,
        shift::{NewShift, Shift, ShiftStatus},
    },
};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, AppError> {
    mutex
        .lock()
        .map_err(|_| AppError::InternalServerError(anyhow::anyhow!("store em memória envenenado")))
}

// Tabela simples com id serial, igual ao SERIAL do Postgres.
#[derive(Debug)]
struct Table<T> {
    next_id: i32,
    rows: BTreeMap<i32, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// =============================================================================
//  USUÁRIOS
// =============================================================================

#[derive(Clone, Default)]
pub struct MemoryUserStore {
    table: Arc<Mutex<Table<User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let table = lock(&self.table)?;
        Ok(table.rows.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(lock(&self.table)?.rows.get(&id).cloned())
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        let mut table = lock(&self.table)?;
        if table.rows.values().any(|u| u.username == username) {
            return Err(AppError::UsernameTaken);
        }

        let user = User {
            id: table.next_id(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            role: DEFAULT_ROLE.to_string(),
            created_at: Utc::now(),
        };
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }
}

// =============================================================================
//  TURNOS
// =============================================================================

#[derive(Clone, Default)]
pub struct MemoryShiftStore {
    table: Arc<Mutex<Table<Shift>>>,
}

impl MemoryShiftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShiftStore for MemoryShiftStore {
    async fn find_active(&self, user_id: i32) -> Result<Option<Shift>, AppError> {
        let table = lock(&self.table)?;
        Ok(table
            .rows
            .values()
            .find(|s| s.user_id == user_id && s.is_active())
            .cloned())
    }

    async fn list_for_user(&self, user_id: i32) -> Result<Vec<Shift>, AppError> {
        let table = lock(&self.table)?;
        let mut shifts: Vec<Shift> = table
            .rows
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        shifts.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(b.id.cmp(&a.id)));
        Ok(shifts)
    }

    async fn insert_active(&self, new: NewShift) -> Result<Shift, AppError> {
        // Checagem e inserção sob a mesma trava: equivale ao índice único parcial.
        let mut table = lock(&self.table)?;
        if table
            .rows
            .values()
            .any(|s| s.user_id == new.user_id && s.is_active())
        {
            return Err(AppError::DuplicateActiveShift);
        }

        let shift = Shift {
            id: table.next_id(),
            user_id: new.user_id,
            start_time: new.start_time,
            end_time: None,
            status: ShiftStatus::Active,
            shift_type: new.shift_type,
            notes: new.notes,
        };
        table.rows.insert(shift.id, shift.clone());
        Ok(shift)
    }

    async fn close(
        &self,
        user_id: i32,
        shift_id: i32,
        ended_at: DateTime<Utc>,
    ) -> Result<Option<Shift>, AppError> {
        let mut table = lock(&self.table)?;
        match table.rows.get_mut(&shift_id) {
            Some(shift) if shift.user_id == user_id && shift.is_active() => {
                shift.status = ShiftStatus::Closed;
                shift.end_time = Some(ended_at);
                Ok(Some(shift.clone()))
            }
            _ => Ok(None),
        }
    }
}

// =============================================================================
//  REGISTROS GENÉRICOS
// =============================================================================

pub struct MemoryRecordStore<R> {
    table: Arc<Mutex<Table<R>>>,
}

impl<R> MemoryRecordStore<R> {
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(Table::default())),
        }
    }
}

impl<R> Default for MemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for MemoryRecordStore<R> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryRecordStore<R> {
    async fn list(&self) -> Result<Vec<R>, AppError> {
        Ok(lock(&self.table)?.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<R>, AppError> {
        Ok(lock(&self.table)?.rows.get(&id).cloned())
    }

    async fn create(&self, new: R::New) -> Result<R, AppError> {
        let mut table = lock(&self.table)?;
        let id = table.next_id();
        let record = R::from_new(id, new);
        table.rows.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn update(&self, id: i32, patch: R::Update) -> Result<Option<R>, AppError> {
        let mut table = lock(&self.table)?;
        Ok(table.rows.get_mut(&id).map(|record| {
            record.apply(patch);
            record.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(lock(&self.table)?.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::ShiftType;

    fn new_shift(user_id: i32) -> NewShift {
        NewShift {
            user_id,
            start_time: Utc::now(),
            shift_type: ShiftType::Matutino,
            notes: None,
        }
    }

    #[tokio::test]
    async fn second_active_shift_for_same_user_is_refused() {
        let store = MemoryShiftStore::new();
        store.insert_active(new_shift(1)).await.unwrap();

        let err = store.insert_active(new_shift(1)).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateActiveShift));

        // Outro usuário não é afetado
        assert!(store.insert_active(new_shift(2)).await.is_ok());
    }

    #[tokio::test]
    async fn close_only_matches_owned_active_shift() {
        let store = MemoryShiftStore::new();
        let shift = store.insert_active(new_shift(1)).await.unwrap();

        assert!(store.close(2, shift.id, Utc::now()).await.unwrap().is_none());

        let closed = store.close(1, shift.id, Utc::now()).await.unwrap().unwrap();
        assert_eq!(closed.status, ShiftStatus::Closed);
        assert!(closed.end_time.is_some());

        // Já fechado: não fecha de novo
        assert!(store.close(1, shift.id, Utc::now()).await.unwrap().is_none());
        assert!(store.find_active(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn usernames_are_unique_and_case_sensitive() {
        let store = MemoryUserStore::new();
        store.create_user("ana", "hash").await.unwrap();

        assert!(matches!(
            store.create_user("ana", "hash").await.unwrap_err(),
            AppError::UsernameTaken
        ));
        assert!(store.create_user("Ana", "hash").await.is_ok());
        assert!(store.find_by_username("ANA").await.unwrap().is_none());
    }
}
