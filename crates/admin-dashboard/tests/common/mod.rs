#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use admin_dashboard::config::{
    AppConfig, AppEnvironment, BackendConfig, BannerConfig, TelemetryConfig,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

/// In-process stand-in for the dashboard REST API.
#[derive(Default)]
pub struct FakeApi {
    employees: Mutex<Vec<Value>>,
    vendors: Mutex<Vec<Value>>,
    sent: Mutex<Vec<String>>,
    requests: Mutex<Vec<String>>,
    send_batches: Mutex<Vec<Value>>,
    employee_bodies: Mutex<Vec<Value>>,
    fail_lists: AtomicBool,
}

impl FakeApi {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests mutex").clone()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().expect("requests mutex").clear();
    }

    pub fn send_batches(&self) -> Vec<Value> {
        self.send_batches.lock().expect("batches mutex").clone()
    }

    pub fn employee_bodies(&self) -> Vec<Value> {
        self.employee_bodies.lock().expect("bodies mutex").clone()
    }

    pub fn seed_vendor(&self, name: &str, email: &str, upi: &str) {
        let mut vendors = self.vendors.lock().expect("vendors mutex");
        let id = vendors.len() as i64 + 1;
        vendors.push(json!({ "id": id, "name": name, "email": email, "upi": upi }));
    }

    pub fn seed_employee(&self, name: &str, email: &str) {
        let mut employees = self.employees.lock().expect("employees mutex");
        let id = employees.len() as i64 + 1;
        employees.push(json!({
            "id": id,
            "name": name,
            "designation": null,
            "ctc": null,
            "email": email,
        }));
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    fn record(&self, request: &str) {
        self.requests
            .lock()
            .expect("requests mutex")
            .push(request.to_string());
    }

    fn failing(&self) -> bool {
        self.fail_lists.load(Ordering::SeqCst)
    }
}

pub struct FakeBackend {
    pub base_url: String,
    pub api: Arc<FakeApi>,
}

impl FakeBackend {
    pub fn config(&self) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            backend: BackendConfig::new(self.base_url.clone()).expect("fake url is valid"),
            banner: BannerConfig::default(),
            telemetry: TelemetryConfig {
                log_level: "debug".to_string(),
            },
        }
    }
}

pub async fn spawn_backend() -> FakeBackend {
    let api = Arc::new(FakeApi::default());
    let app = Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route("/api/vendors", get(list_vendors).post(create_vendor))
        .route("/api/vendors/send-email", post(send_email))
        .route("/api/vendors/sent-emails", get(sent_emails))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake backend serves");
    });

    FakeBackend {
        base_url: format!("http://{addr}/api"),
        api,
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}/api")
}

async fn list_employees(State(api): State<Arc<FakeApi>>) -> Response {
    api.record("GET /employees");
    if api.failing() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database offline").into_response();
    }
    let employees = api.employees.lock().expect("employees mutex").clone();
    Json(Value::Array(employees)).into_response()
}

async fn create_employee(State(api): State<Arc<FakeApi>>, Json(body): Json<Value>) -> Response {
    api.record("POST /employees");
    api.employee_bodies
        .lock()
        .expect("bodies mutex")
        .push(body.clone());
    let mut employees = api.employees.lock().expect("employees mutex");
    let mut created = body;
    created["id"] = json!(employees.len() as i64 + 1);
    employees.push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn list_vendors(State(api): State<Arc<FakeApi>>) -> Response {
    api.record("GET /vendors");
    if api.failing() {
        return (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "message": "try later" })))
            .into_response();
    }
    let vendors = api.vendors.lock().expect("vendors mutex").clone();
    Json(Value::Array(vendors)).into_response()
}

async fn create_vendor(State(api): State<Arc<FakeApi>>, Json(body): Json<Value>) -> Response {
    api.record("POST /vendors");
    let mut vendors = api.vendors.lock().expect("vendors mutex");
    if vendors.iter().any(|vendor| vendor["email"] == body["email"]) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Email already exists" })),
        )
            .into_response();
    }
    let mut created = body;
    created["id"] = json!(vendors.len() as i64 + 1);
    vendors.push(created.clone());
    Json(created).into_response()
}

async fn send_email(State(api): State<Arc<FakeApi>>, Json(ids): Json<Value>) -> Response {
    api.record("POST /vendors/send-email");
    api.send_batches
        .lock()
        .expect("batches mutex")
        .push(ids.clone());
    let vendors = api.vendors.lock().expect("vendors mutex").clone();
    let mut sent = api.sent.lock().expect("sent mutex");
    for id in ids.as_array().into_iter().flatten() {
        if let Some(vendor) = vendors.iter().find(|vendor| &vendor["id"] == id) {
            sent.push(format!(
                "Email sent to {} ({})",
                vendor["name"].as_str().unwrap_or_default(),
                vendor["email"].as_str().unwrap_or_default()
            ));
        }
    }
    StatusCode::OK.into_response()
}

async fn sent_emails(State(api): State<Arc<FakeApi>>) -> Response {
    api.record("GET /vendors/sent-emails");
    let sent = api.sent.lock().expect("sent mutex").clone();
    Json(sent).into_response()
}
