// backend/tests/helpers.rs
#![allow(dead_code)]

use backend::{
    config::{AppConfig, CatalogConfig, WebConfig},
    web_server::AppState,
};
use common::RegisterRequest;
use reqwest::StatusCode;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

pub fn test_config(port: u16, seed_demo_data: bool) -> AppConfig {
    AppConfig {
        web: WebConfig {
            addr: "127.0.0.1".to_string(),
            port,
            cors_origin: "http://localhost:5173".to_string(),
            static_dir: None,
        },
        catalog: CatalogConfig::default(),
        seed_demo_data,
    }
}

/// Spawn a seeded test server and return the address, a reqwest client and
/// the state backing the server.
pub async fn spawn_app() -> (SocketAddr, reqwest::Client, AppState) {
    spawn_app_with(true).await
}

pub async fn spawn_app_with(seed_demo_data: bool) -> (SocketAddr, reqwest::Client, AppState) {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let app_state = AppState::in_memory(test_config(addr.port(), seed_demo_data));
    let app = backend::web_server::create_router(app_state.clone());

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .unwrap();
    });

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    (addr, client, app_state)
}

pub fn registration(email: &str, password: &str, name: &str) -> RegisterRequest {
    RegisterRequest {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
        name: Some(name.to_string()),
    }
}

/// Registers a user and returns the raw JSON body of the response.
pub async fn register_user(
    addr: &SocketAddr,
    client: &reqwest::Client,
    email: &str,
    password: &str,
) -> serde_json::Value {
    let response = client
        .post(format!("http://{addr}/auth/register"))
        .json(&registration(email, password, "Test User"))
        .send()
        .await
        .expect("Failed to register user");

    assert_eq!(response.status(), StatusCode::CREATED, "Registration failed");
    response.json().await.expect("Failed to parse register response")
}
