// src/models/record.rs

use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Serialize};
use validator::{Validate, ValidationError};

/// Entidade "plana" servida pelo CRUD genérico (clientes, estoque, reservas, contas).
///
/// `Create` é o corpo cru do POST (campos opcionais + regras do validator),
/// `New` é o mesmo dado já validado e `Update` lista exatamente os campos
/// que um PATCH pode alterar.
pub trait Record: Serialize + Clone + Send + Sync + 'static {
    type Create: Validate + DeserializeOwned + Into<Self::New> + Send + 'static;
    type New: Send + Sync + 'static;
    type Update: Validate + DeserializeOwned + Send + Sync + 'static;

    /// Nome usado nos logs ("client", "bill"...).
    const KIND: &'static str;

    fn id(&self) -> i32;

    // Usados pelo store em memória; o Postgres faz o equivalente em SQL.
    fn from_new(id: i32, new: Self::New) -> Self;
    fn apply(&mut self, patch: Self::Update);
}

pub(crate) fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative").with_message("must_not_be_negative".into()));
    }
    Ok(())
}
