// src/models/reservations.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::record::Record;

// Mapeia o CREATE TYPE reservation_status do banco
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "reservation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i32,
    // Referência solta: não há FK nem cascata
    pub client_id: i32,
    pub date: DateTime<Utc>,
    pub status: ReservationStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationPayload {
    #[validate(required(message = "required"), range(min = 1, message = "invalid_client"))]
    #[schema(value_type = i32, example = 3)]
    pub client_id: Option<i32>,

    #[validate(required(message = "required"))]
    #[schema(value_type = String, format = DateTime, example = "2024-06-10T19:00:00Z")]
    pub date: Option<DateTime<Utc>>,

    // pending quando omitido
    pub status: Option<ReservationStatus>,

    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewReservation {
    pub client_id: i32,
    pub date: DateTime<Utc>,
    pub status: ReservationStatus,
    pub notes: Option<String>,
}

impl From<CreateReservationPayload> for NewReservation {
    fn from(p: CreateReservationPayload) -> Self {
        Self {
            client_id: p.client_id.unwrap_or_default(),
            date: p.date.unwrap_or_default(),
            status: p.status.unwrap_or_default(),
            notes: p.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationPayload {
    #[validate(range(min = 1, message = "invalid_client"))]
    pub client_id: Option<i32>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<ReservationStatus>,
    pub notes: Option<String>,
}

impl Record for Reservation {
    type Create = CreateReservationPayload;
    type New = NewReservation;
    type Update = UpdateReservationPayload;

    const KIND: &'static str = "reservation";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_new(id: i32, new: NewReservation) -> Self {
        Self {
            id,
            client_id: new.client_id,
            date: new.date,
            status: new.status,
            notes: new.notes,
        }
    }

    fn apply(&mut self, patch: UpdateReservationPayload) {
        if let Some(client_id) = patch.client_id {
            self.client_id = client_id;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_defaults_to_pending() {
        let payload: CreateReservationPayload = serde_json::from_value(json!({
            "clientId": 3,
            "date": "2024-06-10T19:00:00Z"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());

        let new: NewReservation = payload.into();
        assert_eq!(new.status, ReservationStatus::Pending);
    }

    #[test]
    fn unknown_status_does_not_deserialize() {
        let result = serde_json::from_value::<CreateReservationPayload>(json!({
            "clientId": 3,
            "date": "2024-06-10T19:00:00Z",
            "status": "maybe"
        }));
        assert!(result.is_err());
    }
}
