// src/models/shift.rs

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::common::error::AppError;

// --- ENUMS ---

// Mapeia o CREATE TYPE shift_status do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "shift_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    Active,
    Closed,
}

// Mapeia o CREATE TYPE shift_type do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "shift_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Matutino,
    Vespertino,
}

impl FromStr for ShiftType {
    type Err = AppError;

    // Sem coerção: só os dois valores exatos são aceitos.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matutino" => Ok(ShiftType::Matutino),
            "vespertino" => Ok(ShiftType::Vespertino),
            _ => Err(AppError::InvalidShiftData),
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftType::Matutino => f.write_str("matutino"),
            ShiftType::Vespertino => f.write_str("vespertino"),
        }
    }
}

// --- TURNO ---

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    #[schema(example = 7)]
    pub id: i32,
    #[schema(example = 1)]
    pub user_id: i32,
    pub start_time: DateTime<Utc>,
    // null enquanto o turno estiver aberto
    pub end_time: Option<DateTime<Utc>>,
    pub status: ShiftStatus,
    pub shift_type: ShiftType,
    pub notes: Option<String>,
}

impl Shift {
    pub fn is_active(&self) -> bool {
        self.status == ShiftStatus::Active && self.end_time.is_none()
    }
}

// Turno validado, pronto para inserir. O dono vem sempre da sessão.
#[derive(Debug, Clone)]
pub struct NewShift {
    pub user_id: i32,
    pub start_time: DateTime<Utc>,
    pub shift_type: ShiftType,
    pub notes: Option<String>,
}

// Corpo cru do POST /api/shifts. Tudo opcional e sem tipo forte para que
// qualquer forma inválida vire InvalidShiftData (e não 422 do extrator).
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenShiftPayload {
    #[schema(value_type = String, example = "matutino")]
    pub shift_type: Option<Value>,
    #[schema(value_type = Option<String>, example = "Apertura de caja")]
    pub notes: Option<Value>,
    #[schema(value_type = Option<String>, format = DateTime, example = "2024-05-01T08:00:00Z")]
    pub start_time: Option<Value>,
}

impl OpenShiftPayload {
    /// Valida o corpo e monta o turno. `now` é usado quando startTime não vem.
    pub fn into_new_shift(self, user_id: i32, now: DateTime<Utc>) -> Result<NewShift, AppError> {
        let shift_type = match self.shift_type {
            Some(Value::String(s)) => s.parse::<ShiftType>()?,
            _ => return Err(AppError::InvalidShiftData),
        };

        let start_time = match self.start_time {
            None | Some(Value::Null) => now,
            Some(Value::String(s)) => parse_timestamp(&s).ok_or(AppError::InvalidShiftData)?,
            Some(_) => return Err(AppError::InvalidShiftData),
        };

        let notes = match self.notes {
            // Texto livre, guardado exatamente como veio
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(_) => return Err(AppError::InvalidShiftData),
        };

        Ok(NewShift {
            user_id,
            start_time,
            shift_type,
            notes,
        })
    }
}

// RFC 3339, ou data/hora sem fuso (lida como UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
