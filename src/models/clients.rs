// src/models/clients.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::record::Record;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,
    #[schema(example = "María López")]
    pub name: String,
    #[schema(example = "maria@correo.com")]
    pub email: String,
    #[schema(example = "+52 55 1234 5678")]
    pub phone: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientPayload {
    #[validate(required(message = "required"), length(min = 1, message = "required"))]
    #[schema(value_type = String, example = "María López")]
    pub name: Option<String>,

    #[validate(required(message = "required"), email(message = "invalid_email"))]
    #[schema(value_type = String, example = "maria@correo.com")]
    pub email: Option<String>,

    #[validate(required(message = "required"), length(min = 1, message = "required"))]
    #[schema(value_type = String, example = "+52 55 1234 5678")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<CreateClientPayload> for NewClient {
    fn from(p: CreateClientPayload) -> Self {
        Self {
            name: p.name.unwrap_or_default(),
            email: p.email.unwrap_or_default(),
            phone: p.phone.unwrap_or_default(),
        }
    }
}

// Campos alteráveis via PATCH
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientPayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub phone: Option<String>,
}

impl Record for Client {
    type Create = CreateClientPayload;
    type New = NewClient;
    type Update = UpdateClientPayload;

    const KIND: &'static str = "client";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_new(id: i32, new: NewClient) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
        }
    }

    fn apply(&mut self, patch: UpdateClientPayload) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
    }
}
