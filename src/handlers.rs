// src/handlers.rs

pub mod auth;
pub mod bills;
pub mod clients;
pub mod inventory;
pub mod records;
pub mod reservations;
pub mod shifts;
