mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{Auth, TestApp};

async fn session(app: &TestApp) -> Result<String> {
    app.register("recepcion", "secreto123").await
}

#[tokio::test]
async fn client_crud_cycle() -> Result<()> {
    let app = TestApp::new();
    let token = session(&app).await?;
    let auth = Auth::Cookie(&token);

    let created = app
        .post(
            "/api/clients",
            auth,
            json!({ "name": "María López", "email": "maria@correo.com", "phone": "555-0101" }),
        )
        .await?;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_i64().expect("id");
    let path = format!("/api/clients/{}", id);

    let fetched = app.get(&path, auth).await?;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);

    let updated = app
        .patch(&path, auth, Some(json!({ "phone": "555-0202" })))
        .await?;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["phone"], "555-0202");
    assert_eq!(updated.body["name"], "María López");

    let list = app.get("/api/clients", auth).await?;
    assert_eq!(list.body.as_array().map(Vec::len), Some(1));

    let deleted = app.delete(&path, auth).await?;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert_eq!(deleted.body, Value::Null);

    let gone = app.get(&path, auth).await?;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.message(), "Registro no encontrado");

    let again = app.delete(&path, auth).await?;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn client_validation_reports_fields() -> Result<()> {
    let app = TestApp::new();
    let token = session(&app).await?;

    let res = app
        .post(
            "/api/clients",
            Auth::Cookie(&token),
            json!({ "name": "Sin correo", "email": "no-es-correo" }),
        )
        .await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.message(), "Datos inválidos");
    assert_eq!(res.body["details"]["email"], json!(["invalid_email"]));
    assert_eq!(res.body["details"]["phone"], json!(["required"]));
    Ok(())
}

#[tokio::test]
async fn malformed_bodies_and_ids() -> Result<()> {
    let app = TestApp::new();
    let token = session(&app).await?;
    let auth = Auth::Cookie(&token);

    let wrong_shape = app.post("/api/clients", auth, json!("texto")).await?;
    assert_eq!(wrong_shape.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_shape.message(), "Datos inválidos");

    for path in ["/api/clients/abc", "/api/inventory/1.5", "/api/bills/999"] {
        let res = app.get(path, auth).await?;
        assert_eq!(res.status, StatusCode::NOT_FOUND, "{}", path);
    }

    let missing = app
        .patch("/api/reservations/42", auth, Some(json!({ "notes": "x" })))
        .await?;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn wrong_json_types_point_at_the_field() -> Result<()> {
    let app = TestApp::new();
    let token = session(&app).await?;
    let auth = Auth::Cookie(&token);

    let res = app
        .post(
            "/api/inventory",
            auth,
            json!({ "name": "x", "quantity": "3", "price": 2 }),
        )
        .await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.message(), "Datos inválidos");
    assert!(res.body["details"]["quantity"].is_array(), "{}", res.body);

    let bad_date = app
        .post(
            "/api/reservations",
            auth,
            json!({ "clientId": 1, "date": "mañana" }),
        )
        .await?;
    assert_eq!(bad_date.status, StatusCode::BAD_REQUEST);
    assert!(bad_date.body["details"]["date"].is_array(), "{}", bad_date.body);

    let bad_patch = app
        .patch("/api/clients/1", auth, Some(json!({ "phone": 5550101 })))
        .await?;
    assert_eq!(bad_patch.status, StatusCode::BAD_REQUEST);
    assert!(bad_patch.body["details"]["phone"].is_array(), "{}", bad_patch.body);
    Ok(())
}

#[tokio::test]
async fn inventory_rejects_negative_values() -> Result<()> {
    let app = TestApp::new();
    let token = session(&app).await?;
    let auth = Auth::Cookie(&token);

    let negative = app
        .post(
            "/api/inventory",
            auth,
            json!({ "name": "Toalla", "quantity": -1, "price": 10.0 }),
        )
        .await?;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);
    assert!(negative.body["details"]["quantity"].is_array());

    let created = app
        .post(
            "/api/inventory",
            auth,
            json!({ "name": "Toalla", "quantity": 40, "price": 12.5 }),
        )
        .await?;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["quantity"], 40);
    assert_eq!(created.body["price"], json!(12.5));

    let path = format!("/api/inventory/{}", created.body["id"]);
    let bad_patch = app.patch(&path, auth, Some(json!({ "price": -3 }))).await?;
    assert_eq!(bad_patch.status, StatusCode::BAD_REQUEST);

    let unchanged = app.get(&path, auth).await?;
    assert_eq!(unchanged.body["price"], json!(12.5));
    Ok(())
}

#[tokio::test]
async fn reservations_and_bills_default_to_pending() -> Result<()> {
    let app = TestApp::new();
    let token = session(&app).await?;
    let auth = Auth::Bearer(&token);

    let reservation = app
        .post(
            "/api/reservations",
            auth,
            json!({ "clientId": 3, "date": "2024-06-10T19:00:00Z" }),
        )
        .await?;
    assert_eq!(reservation.status, StatusCode::CREATED);
    assert_eq!(reservation.body["status"], "pending");
    assert_eq!(reservation.body["date"], "2024-06-10T19:00:00Z");

    let bill = app
        .post(
            "/api/bills",
            auth,
            json!({ "clientId": 3, "amount": 150.5, "date": "2024-06-10T19:00:00Z" }),
        )
        .await?;
    assert_eq!(bill.status, StatusCode::CREATED);
    assert_eq!(bill.body["status"], "pending");

    let paid = app
        .patch(
            &format!("/api/bills/{}", bill.body["id"]),
            auth,
            Some(json!({ "status": "paid" })),
        )
        .await?;
    assert_eq!(paid.status, StatusCode::OK);
    assert_eq!(paid.body["status"], "paid");
    assert_eq!(paid.body["amount"], json!(150.5));

    let bad_status = app
        .post(
            "/api/reservations",
            auth,
            json!({ "clientId": 3, "date": "2024-06-10T19:00:00Z", "status": "maybe" }),
        )
        .await?;
    assert_eq!(bad_status.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn lists_come_back_in_creation_order() -> Result<()> {
    let app = TestApp::new();
    let token = session(&app).await?;
    let auth = Auth::Cookie(&token);

    for name in ["Zeta", "Alfa", "Mesa"] {
        app.post(
            "/api/inventory",
            auth,
            json!({ "name": name, "quantity": 1, "price": 1 }),
        )
        .await?;
    }
    for date in ["2024-06-12T10:00:00Z", "2024-06-01T10:00:00Z"] {
        app.post(
            "/api/reservations",
            auth,
            json!({ "clientId": 1, "date": date }),
        )
        .await?;
    }

    let items = app.get("/api/inventory", auth).await?;
    let names: Vec<&str> = items
        .body
        .as_array()
        .map(|rows| rows.iter().filter_map(|row| row["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, ["Zeta", "Alfa", "Mesa"]);

    let reservations = app.get("/api/reservations", auth).await?;
    assert_eq!(reservations.body[0]["date"], "2024-06-12T10:00:00Z");
    assert_eq!(reservations.body[1]["date"], "2024-06-01T10:00:00Z");
    Ok(())
}

#[tokio::test]
async fn deleting_a_client_keeps_its_reservations() -> Result<()> {
    let app = TestApp::new();
    let token = session(&app).await?;
    let auth = Auth::Cookie(&token);

    let client = app
        .post(
            "/api/clients",
            auth,
            json!({ "name": "Ana", "email": "ana@correo.com", "phone": "555" }),
        )
        .await?;
    let reservation = app
        .post(
            "/api/reservations",
            auth,
            json!({ "clientId": client.body["id"], "date": "2024-06-10T19:00:00Z" }),
        )
        .await?;

    app.delete(&format!("/api/clients/{}", client.body["id"]), auth)
        .await?;

    let kept = app
        .get(&format!("/api/reservations/{}", reservation.body["id"]), auth)
        .await?;
    assert_eq!(kept.status, StatusCode::OK);
    assert_eq!(kept.body["clientId"], client.body["id"]);
    Ok(())
}
