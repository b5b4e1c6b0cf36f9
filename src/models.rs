pub mod auth;
pub mod billing;
pub mod clients;
pub mod inventory;
pub mod record;
pub mod reservations;
pub mod shift;
