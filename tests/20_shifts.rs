mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{Auth, TestApp};

#[tokio::test]
async fn open_shift_creates_an_active_shift() -> Result<()> {
    let app = TestApp::new();
    let token = app.register("recepcion", "secreto123").await?;

    let res = app
        .post("/api/shifts", Auth::Cookie(&token), json!({ "shiftType": "matutino" }))
        .await?;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["status"], "active");
    assert_eq!(res.body["shiftType"], "matutino");
    assert_eq!(res.body["endTime"], Value::Null);

    let active = app.get("/api/shifts/active", Auth::Cookie(&token)).await?;
    assert_eq!(active.status, StatusCode::OK);
    assert_eq!(active.body["id"], res.body["id"]);
    Ok(())
}

#[tokio::test]
async fn blank_notes_are_stored_as_sent() -> Result<()> {
    let app = TestApp::new();
    let token = app.register("recepcion", "secreto123").await?;

    let res = app
        .post(
            "/api/shifts",
            Auth::Cookie(&token),
            json!({ "shiftType": "matutino", "notes": "   " }),
        )
        .await?;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["notes"], "   ");
    Ok(())
}

#[tokio::test]
async fn second_open_is_rejected() -> Result<()> {
    let app = TestApp::new();
    let token = app.register("recepcion", "secreto123").await?;

    app.post("/api/shifts", Auth::Cookie(&token), json!({ "shiftType": "matutino" }))
        .await?;
    let res = app
        .post("/api/shifts", Auth::Cookie(&token), json!({ "shiftType": "matutino" }))
        .await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.message(), "Ya tienes un turno activo");
    Ok(())
}

#[tokio::test]
async fn invalid_shift_bodies_are_rejected() -> Result<()> {
    let app = TestApp::new();
    let token = app.register("recepcion", "secreto123").await?;

    let bodies = [
        json!({ "shiftType": "invalid-type" }),
        json!({ "shiftType": "Matutino" }),
        json!({}),
        json!({ "shiftType": "vespertino", "startTime": "ayer" }),
        json!({ "shiftType": "vespertino", "notes": 42 }),
    ];
    for body in bodies {
        let res = app.post("/api/shifts", Auth::Cookie(&token), body.clone()).await?;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(res.message(), "Datos de turno inválidos");
    }

    let active = app.get("/api/shifts/active", Auth::Cookie(&token)).await?;
    assert_eq!(active.body, Value::Null);
    Ok(())
}

#[tokio::test]
async fn open_then_close_round_trip() -> Result<()> {
    let app = TestApp::new();
    let token = app.register("recepcion", "secreto123").await?;

    let opened = app
        .post(
            "/api/shifts",
            Auth::Bearer(&token),
            json!({ "shiftType": "vespertino", "notes": "caja 2", "startTime": "2024-05-01T14:00:00Z" }),
        )
        .await?;
    assert_eq!(opened.status, StatusCode::CREATED);
    let id = opened.body["id"].as_i64().expect("id");

    let closed = app
        .patch(&format!("/api/shifts/{}/close", id), Auth::Bearer(&token), None)
        .await?;
    assert_eq!(closed.status, StatusCode::OK);
    assert_eq!(closed.body["status"], "closed");
    assert!(closed.body["endTime"].is_string());
    assert_eq!(closed.body["notes"], "caja 2");

    let again = app
        .patch(&format!("/api/shifts/{}/close", id), Auth::Bearer(&token), None)
        .await?;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.message(), "Turno no encontrado");

    let active = app.get("/api/shifts/active", Auth::Bearer(&token)).await?;
    assert_eq!(active.body, Value::Null);

    // fechado o turno, um novo pode ser aberto
    let reopened = app
        .post("/api/shifts", Auth::Bearer(&token), json!({ "shiftType": "matutino" }))
        .await?;
    assert_eq!(reopened.status, StatusCode::CREATED);

    let history = app.get("/api/shifts", Auth::Bearer(&token)).await?;
    assert_eq!(history.body.as_array().map(Vec::len), Some(2));
    assert_eq!(history.body[0]["id"], reopened.body["id"]);
    Ok(())
}

#[tokio::test]
async fn cannot_close_someone_elses_shift() -> Result<()> {
    let app = TestApp::new();
    let owner = app.register("recepcion", "secreto123").await?;
    let other = app.register("intruso", "secreto123").await?;

    let opened = app
        .post("/api/shifts", Auth::Cookie(&owner), json!({ "shiftType": "matutino" }))
        .await?;
    let id = opened.body["id"].as_i64().expect("id");

    let res = app
        .patch(&format!("/api/shifts/{}/close", id), Auth::Cookie(&other), None)
        .await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let still_active = app.get("/api/shifts/active", Auth::Cookie(&owner)).await?;
    assert_eq!(still_active.body["id"], opened.body["id"]);
    assert_eq!(still_active.body["status"], "active");
    Ok(())
}

#[tokio::test]
async fn unknown_or_malformed_ids_are_not_found() -> Result<()> {
    let app = TestApp::new();
    let token = app.register("recepcion", "secreto123").await?;

    for path in ["/api/shifts/999/close", "/api/shifts/abc/close"] {
        let res = app.patch(path, Auth::Cookie(&token), None).await?;
        assert_eq!(res.status, StatusCode::NOT_FOUND, "{}", path);
        assert_eq!(res.message(), "Turno no encontrado");
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_opens_create_exactly_one_shift() -> Result<()> {
    let app = TestApp::new();
    let token = app.register("recepcion", "secreto123").await?;

    let mut handles = Vec::new();
    for _ in 0..16 {
        let app = app.clone();
        let token = token.clone();
        handles.push(tokio::spawn(async move {
            app.post("/api/shifts", Auth::Cookie(&token), json!({ "shiftType": "matutino" }))
                .await
                .map(|res| res.status)
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await?? {
            StatusCode::CREATED => created += 1,
            StatusCode::BAD_REQUEST => {}
            other => panic!("status inesperado: {}", other),
        }
    }
    assert_eq!(created, 1);

    let history = app.get("/api/shifts", Auth::Cookie(&token)).await?;
    assert_eq!(history.body.as_array().map(Vec::len), Some(1));
    Ok(())
}
