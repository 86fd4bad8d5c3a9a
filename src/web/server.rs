use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::booking::store::{AppointmentBook, BookingError, BookingRequest};
use crate::catalog::store::DiseaseCatalog;
use crate::cli::ServeArgs;
use crate::core::doctor::Doctor;
use crate::core::query::SymptomQuery;
use crate::matching::engine::{MatchingConfig, SymptomMatcher};
use crate::utils::validation::{
    measurement_from_json, symptoms_from_json, ValidationError, MAX_AGE_YEARS, MAX_WEIGHT_KG,
};

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_REQUEST_BODY_SIZE: usize = 64 * 1024; // 64KB
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Shared application state, built once at startup and handed to every
/// handler.
pub struct AppState {
    pub catalog: DiseaseCatalog,
    pub config: MatchingConfig,
    pub appointments: AppointmentBook,
}

impl AppState {
    pub fn new(catalog: DiseaseCatalog, config: MatchingConfig) -> Self {
        Self {
            catalog,
            config,
            appointments: AppointmentBook::new(),
        }
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Body of `POST /api/symptom-check`.
///
/// Fields stay loosely typed here so that type errors produce our own
/// error bodies instead of the extractor's.
#[derive(Debug, Deserialize)]
pub struct SymptomCheckRequest {
    #[serde(default)]
    pub symptoms: serde_json::Value,
    #[serde(default)]
    pub age: Option<serde_json::Value>,
    #[serde(default)]
    pub weight: Option<serde_json::Value>,
}

/// Body of `POST /api/appointments`
#[derive(Debug, Deserialize)]
pub struct AppointmentRequest {
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub doctor: String,
    /// RFC 3339 timestamp, e.g. `2030-05-01T10:30:00Z`
    #[serde(default)]
    pub date_time: String,
    #[serde(default)]
    pub symptoms_summary: String,
}

#[derive(Deserialize)]
struct DoctorQueryParams {
    specialist: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

fn invalid_body_response(rejection: &JsonRejection) -> Response {
    (
        rejection.status(),
        Json(create_safe_error_response(
            "invalid_body",
            "Request body must be a JSON object",
            Some(&rejection.body_text()),
        )),
    )
        .into_response()
}

fn booking_error_response(error: &BookingError) -> Response {
    tracing::debug!("Rejected booking: {error}");
    (
        StatusCode::BAD_REQUEST,
        Json(create_safe_error_response(
            error.error_type(),
            &error.to_string(),
            None,
        )),
    )
        .into_response()
}

fn validation_error_response(error: &ValidationError) -> Response {
    tracing::debug!("Rejected symptom check: {error}");
    (
        StatusCode::BAD_REQUEST,
        Json(create_safe_error_response(
            error.error_type(),
            &error.to_string(),
            None,
        )),
    )
        .into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created, the catalog
/// cannot be loaded, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Routes only, without the security middleware stack.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/symptom-check", post(symptom_check_handler))
        .route("/api/catalog", get(catalog_handler))
        .route("/api/symptoms", get(symptoms_handler))
        .route("/api/doctors", get(doctors_handler))
        .route("/api/appointments", post(book_appointment_handler))
        .route("/api/appointments/{id}", get(appointment_handler))
        .with_state(state)
}

/// Create the application router with all routes and middleware configured.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
pub fn create_router(state: Arc<AppState>) -> Router {
    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .unwrap();

    api_router(state).layer(
        ServiceBuilder::new()
            // Security headers for browser protection
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("cache-control"),
                HeaderValue::from_static("no-store"),
            ))
            // IP-based rate limiting to prevent abuse
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            // Request timeout to prevent slow client attacks
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                REQUEST_TIMEOUT,
            ))
            // Limit concurrent requests to prevent DOS
            .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
            .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE)),
    )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let catalog = DiseaseCatalog::load(args.catalog.as_deref())?;
    let config = MatchingConfig {
        result_limit: args.max_results,
    };
    tracing::info!(
        "Loaded catalog with {} diseases and {} doctors",
        catalog.len(),
        catalog.doctors.len()
    );

    let app = create_router(Arc::new(AppState::new(catalog, config)));

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting symptom-matcher API at http://{addr}");

    if args.open {
        if let Err(e) = open::that(format!("http://{addr}/api/health")) {
            tracing::warn!("Could not open browser: {e}");
        }
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "diseases": state.catalog.len(),
    }))
}

/// Rank diseases for the reported symptoms
async fn symptom_check_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SymptomCheckRequest>, JsonRejection>,
) -> Response {
    let start_time = std::time::Instant::now();

    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body_response(&rejection),
    };

    let query = match build_query(&request) {
        Ok(query) => query,
        Err(error) => return validation_error_response(&error),
    };

    let engine = SymptomMatcher::with_config(&state.catalog, state.config.clone());
    let results = engine.find_matches(&query);

    tracing::debug!(
        "Symptom check: {} symptom(s) -> {} result(s) in {}us",
        query.symptom_set.len(),
        results.len(),
        start_time.elapsed().as_micros()
    );

    Json(serde_json::json!({ "results": results })).into_response()
}

fn build_query(request: &SymptomCheckRequest) -> Result<SymptomQuery, ValidationError> {
    let symptoms = symptoms_from_json(&request.symptoms)?;
    let age = measurement_from_json(request.age.as_ref(), "age", MAX_AGE_YEARS)?;
    let weight = measurement_from_json(request.weight.as_ref(), "weight", MAX_WEIGHT_KG)?;

    Ok(SymptomQuery::new(symptoms).with_age(age).with_weight(weight))
}

/// Return list of diseases in catalog
async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let diseases: Vec<serde_json::Value> = state
        .catalog
        .diseases
        .iter()
        .map(|d| {
            serde_json::json!({
                "name": d.name,
                "severity": d.severity,
                "specialist": d.specialist,
                "symptoms": d.symptoms,
                "medicine_count": d.medicines.len(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": diseases.len(),
        "diseases": diseases,
    }))
}

async fn symptoms_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let symptoms = state.catalog.symptom_vocabulary();
    Json(serde_json::json!({
        "count": symptoms.len(),
        "symptoms": symptoms,
    }))
}

async fn doctors_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DoctorQueryParams>,
) -> Json<serde_json::Value> {
    let doctors: Vec<&Doctor> = match params.specialist.as_deref() {
        Some(specialist) if !specialist.trim().is_empty() => state.catalog.doctors_for(specialist),
        _ => state.catalog.doctors.iter().collect(),
    };

    Json(serde_json::json!({
        "count": doctors.len(),
        "doctors": doctors,
    }))
}

/// Book a consultation with a doctor from the directory
async fn book_appointment_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AppointmentRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body_response(&rejection),
    };

    let Ok(date_time) = chrono::DateTime::parse_from_rfc3339(request.date_time.trim()) else {
        return booking_error_response(&BookingError::InvalidDateTime);
    };

    let booking = BookingRequest {
        patient_name: request.patient_name,
        doctor: request.doctor,
        date_time: date_time.with_timezone(&chrono::Utc),
        symptoms_summary: request.symptoms_summary,
    };

    match state
        .appointments
        .book(&state.catalog, booking, chrono::Utc::now())
    {
        Ok(appointment) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Appointment booked successfully",
                "appointment_id": appointment.id,
                "appointment": appointment,
            })),
        )
            .into_response(),
        Err(error) => booking_error_response(&error),
    }
}

async fn appointment_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Response {
    match state.appointments.get(id) {
        Some(appointment) => Json(appointment).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(create_safe_error_response(
                "not_found",
                "Appointment not found",
                None,
            )),
        )
            .into_response(),
    }
}
