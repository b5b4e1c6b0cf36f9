// src/models/billing.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::record::{non_negative, Record};

// Mapeia o CREATE TYPE bill_status do banco
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "bill_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: i32,
    pub client_id: i32,
    #[schema(value_type = f64, example = 150.5)]
    pub amount: Decimal,
    pub status: BillStatus,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillPayload {
    #[validate(required(message = "required"), range(min = 1, message = "invalid_client"))]
    #[schema(value_type = i32, example = 3)]
    pub client_id: Option<i32>,

    #[validate(required(message = "required"), custom(function = "non_negative"))]
    #[schema(value_type = f64, example = 150.5)]
    pub amount: Option<Decimal>,

    pub status: Option<BillStatus>,

    #[validate(required(message = "required"))]
    #[schema(value_type = String, format = DateTime, example = "2024-06-10T19:00:00Z")]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewBill {
    pub client_id: i32,
    pub amount: Decimal,
    pub status: BillStatus,
    pub date: DateTime<Utc>,
}

impl From<CreateBillPayload> for NewBill {
    fn from(p: CreateBillPayload) -> Self {
        Self {
            client_id: p.client_id.unwrap_or_default(),
            amount: p.amount.unwrap_or_default(),
            status: p.status.unwrap_or_default(),
            date: p.date.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBillPayload {
    #[validate(range(min = 1, message = "invalid_client"))]
    pub client_id: Option<i32>,
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Decimal>,
    pub status: Option<BillStatus>,
    pub date: Option<DateTime<Utc>>,
}

impl Record for Bill {
    type Create = CreateBillPayload;
    type New = NewBill;
    type Update = UpdateBillPayload;

    const KIND: &'static str = "bill";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_new(id: i32, new: NewBill) -> Self {
        Self {
            id,
            client_id: new.client_id,
            amount: new.amount,
            status: new.status,
            date: new.date,
        }
    }

    fn apply(&mut self, patch: UpdateBillPayload) {
        if let Some(client_id) = patch.client_id {
            self.client_id = client_id;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}
