#![allow(dead_code)]

use appointment_relay::{api, AppState, Config, Credentials};
use axum::{
    body::{to_bytes, Body},
    extract::{Json, Query, State},
    http::{header, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Bind a router on an ephemeral port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[derive(Clone, Copy)]
pub enum TokenBehaviour {
    Issue,
    Reject(StatusCode),
    NoToken,
}

#[derive(Clone)]
pub struct TokenStub {
    behaviour: TokenBehaviour,
    delay: Option<Duration>,
    issued: Arc<AtomicUsize>,
    forms: Arc<Mutex<Vec<String>>>,
}

impl TokenStub {
    pub fn new(behaviour: TokenBehaviour) -> Self {
        Self {
            behaviour,
            delay: None,
            issued: Arc::new(AtomicUsize::new(0)),
            forms: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Hold every answer back for `delay`.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }

    pub fn forms(&self) -> Vec<String> {
        self.forms.lock().unwrap().clone()
    }

    pub async fn start(&self) -> String {
        let router = Router::new()
            .route("/token", post(token_endpoint))
            .with_state(self.clone());
        format!("{}/token", serve(router).await)
    }
}

async fn token_endpoint(State(stub): State<TokenStub>, body: String) -> Response {
    stub.forms.lock().unwrap().push(body);
    let n = stub.issued.fetch_add(1, Ordering::SeqCst) + 1;
    if let Some(delay) = stub.delay {
        tokio::time::sleep(delay).await;
    }

    match stub.behaviour {
        TokenBehaviour::Issue => Json(json!({
            "access_token": format!("token-{}", n),
            "token_type": "Bearer",
            "expires_in": 3600,
        }))
        .into_response(),
        TokenBehaviour::Reject(status) => {
            (status, Json(json!({ "error": "invalid_client" }))).into_response()
        }
        TokenBehaviour::NoToken => Json(json!({ "token_type": "Bearer" })).into_response(),
    }
}

#[derive(Clone, Debug)]
pub struct Seen {
    pub method: &'static str,
    pub authorization: Option<String>,
    pub email: Option<String>,
    pub body: Option<Value>,
}

/// Appointment service double: answers every call with a fixed status and body.
#[derive(Clone)]
pub struct AppointmentStub {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: String,
    delay: Option<Duration>,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl AppointmentStub {
    fn new(status: StatusCode, content_type: Option<&'static str>, body: String) -> Self {
        Self {
            status,
            content_type,
            body,
            delay: None,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn json(status: StatusCode, body: Value) -> Self {
        Self::new(status, Some("application/json"), body.to_string())
    }

    pub fn text(status: StatusCode, body: &str) -> Self {
        Self::new(status, Some("text/plain"), body.to_string())
    }

    /// Answers without any `Content-Type` header.
    pub fn bare(status: StatusCode, body: &str) -> Self {
        Self::new(status, None, body.to_string())
    }

    /// Hold every answer back for `delay`.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub async fn start(&self) -> String {
        let router = Router::new()
            .route("/appointments", get(list_appointments).post(create_appointment))
            .with_state(self.clone());
        serve(router).await
    }

    async fn reply(&self) -> Response {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let mut response = (self.status, Body::from(self.body.clone())).into_response();
        if let Some(content_type) = self.content_type {
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                header::HeaderValue::from_static(content_type),
            );
        }
        response
    }
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
}

async fn list_appointments(
    State(stub): State<AppointmentStub>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    stub.seen.lock().unwrap().push(Seen {
        method: "GET",
        authorization: bearer(&headers),
        email: query.get("email").cloned(),
        body: None,
    });
    stub.reply().await
}

async fn create_appointment(
    State(stub): State<AppointmentStub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    stub.seen.lock().unwrap().push(Seen {
        method: "POST",
        authorization: bearer(&headers),
        email: None,
        body: Some(body),
    });
    stub.reply().await
}

pub fn config(token_url: String, appointment_service_url: Option<String>) -> Config {
    Config {
        port: 0,
        bind_address: "127.0.0.1".to_string(),
        oauth: Credentials {
            token_url,
            client_id: "relay".to_string(),
            client_secret: "s3cret".to_string(),
            scope: None,
        },
        appointment_service_url,
        request_timeout: None,
    }
}

pub fn config_with_timeout(
    token_url: String,
    appointment_service_url: Option<String>,
    timeout: Duration,
) -> Config {
    Config {
        request_timeout: Some(timeout),
        ..config(token_url, appointment_service_url)
    }
}

pub fn relay(config: Config) -> Router {
    api::app(AppState::new(config).unwrap())
}

pub async fn call(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
