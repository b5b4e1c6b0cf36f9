// src/models/inventory.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::record::{non_negative, Record};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: i32,
    #[schema(example = "Toalla grande")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 40)]
    pub quantity: i32,
    #[schema(value_type = f64, example = 12.5)]
    pub price: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryPayload {
    #[validate(required(message = "required"), length(min = 1, message = "required"))]
    #[schema(value_type = String, example = "Toalla grande")]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(required(message = "required"), range(min = 0, message = "must_not_be_negative"))]
    #[schema(value_type = i32, example = 40)]
    pub quantity: Option<i32>,

    #[validate(required(message = "required"), custom(function = "non_negative"))]
    #[schema(value_type = f64, example = 12.5)]
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
}

impl From<CreateInventoryPayload> for NewInventoryItem {
    fn from(p: CreateInventoryPayload) -> Self {
        Self {
            name: p.name.unwrap_or_default(),
            description: p.description.filter(|d| !d.trim().is_empty()),
            quantity: p.quantity.unwrap_or_default(),
            price: p.price.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventoryPayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "must_not_be_negative"))]
    pub quantity: Option<i32>,
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
}

impl Record for InventoryItem {
    type Create = CreateInventoryPayload;
    type New = NewInventoryItem;
    type Update = UpdateInventoryPayload;

    const KIND: &'static str = "inventory_item";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_new(id: i32, new: NewInventoryItem) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            quantity: new.quantity,
            price: new.price,
        }
    }

    fn apply(&mut self, patch: UpdateInventoryPayload) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}
