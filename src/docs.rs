// src/docs.rs

use utoipa::openapi::security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::middleware::auth::SESSION_COOKIE;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::get_me,

        // --- Shifts ---
        handlers::shifts::list_shifts,
        handlers::shifts::get_active_shift,
        handlers::shifts::open_shift,
        handlers::shifts::close_shift,

        // --- Clients ---
        handlers::clients::list_clients,
        handlers::clients::get_client,
        handlers::clients::create_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,

        // --- Inventory ---
        handlers::inventory::list_items,
        handlers::inventory::get_item,
        handlers::inventory::create_item,
        handlers::inventory::update_item,
        handlers::inventory::delete_item,

        // --- Reservations ---
        handlers::reservations::list_reservations,
        handlers::reservations::get_reservation,
        handlers::reservations::create_reservation,
        handlers::reservations::update_reservation,
        handlers::reservations::delete_reservation,

        // --- Billing ---
        handlers::bills::list_bills,
        handlers::bills::get_bill,
        handlers::bills::create_bill,
        handlers::bills::update_bill,
        handlers::bills::delete_bill,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::PublicUser,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::MessageResponse,

            // --- Shifts ---
            models::shift::ShiftStatus,
            models::shift::ShiftType,
            models::shift::Shift,
            models::shift::OpenShiftPayload,

            // --- Registros ---
            models::clients::Client,
            models::clients::CreateClientPayload,
            models::clients::UpdateClientPayload,
            models::inventory::InventoryItem,
            models::inventory::CreateInventoryPayload,
            models::inventory::UpdateInventoryPayload,
            models::reservations::ReservationStatus,
            models::reservations::Reservation,
            models::reservations::CreateReservationPayload,
            models::reservations::UpdateReservationPayload,
            models::billing::BillStatus,
            models::billing::Bill,
            models::billing::CreateBillPayload,
            models::billing::UpdateBillPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação, Registro e Sessão"),
        (name = "Shifts", description = "Abertura e Fechamento de Turnos"),
        (name = "Clients", description = "Cadastro de Clientes"),
        (name = "Inventory", description = "Itens de Estoque"),
        (name = "Reservations", description = "Reservas"),
        (name = "Billing", description = "Contas a Pagar e Receber")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}
