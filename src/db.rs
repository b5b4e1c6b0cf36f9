pub mod memory;
pub mod record_repo;
pub mod shift_repo;
pub mod user_repo;

pub use record_repo::{RecordRepository, RecordStore};
pub use shift_repo::{ShiftRepository, ShiftStore};
pub use user_repo::{UserRepository, UserStore};

use std::sync::Arc;

use sqlx::PgPool;

use crate::models::{billing::Bill, clients::Client, inventory::InventoryItem, reservations::Reservation};

/// Todos os stores que os serviços recebem por injeção.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub shifts: Arc<dyn ShiftStore>,
    pub clients: Arc<dyn RecordStore<Client>>,
    pub inventory: Arc<dyn RecordStore<InventoryItem>>,
    pub reservations: Arc<dyn RecordStore<Reservation>>,
    pub bills: Arc<dyn RecordStore<Bill>>,
}

impl Stores {
    pub fn postgres(pool: PgPool) -> Self {
        let records = Arc::new(RecordRepository::new(pool.clone()));
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            shifts: Arc::new(ShiftRepository::new(pool)),
            clients: records.clone(),
            inventory: records.clone(),
            reservations: records.clone(),
            bills: records,
        }
    }

    pub fn memory() -> Self {
        Self {
            users: Arc::new(memory::MemoryUserStore::new()),
            shifts: Arc::new(memory::MemoryShiftStore::new()),
            clients: Arc::new(memory::MemoryRecordStore::<Client>::new()),
            inventory: Arc::new(memory::MemoryRecordStore::<InventoryItem>::new()),
            reservations: Arc::new(memory::MemoryRecordStore::<Reservation>::new()),
            bills: Arc::new(memory::MemoryRecordStore::<Bill>::new()),
        }
    }
}
