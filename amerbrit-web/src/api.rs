use std::any::Any;
use std::path::Path;
use std::sync::Arc;

use axum::{
    Form, Json, Router,
    body::Body,
    extract::{FromRequest, Request, State},
    handler::HandlerWithoutStateExt,
    http::{Response, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use amerbrit::{Translation, Translator};

/// Request body for `POST /api/translate`
///
/// Fields are loosely typed so that absent, null and wrongly typed values
/// reach validation instead of being rejected by the JSON extractor.
#[derive(Debug, Default, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub locale: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct TranslateForm {
    text: Option<String>,
    locale: Option<String>,
}

impl From<TranslateForm> for TranslateRequest {
    fn from(form: TranslateForm) -> Self {
        TranslateRequest {
            text: form.text.map(Value::String),
            locale: form.locale.map(Value::String),
        }
    }
}

/// Extractor reading a [`TranslateRequest`] from a JSON or urlencoded body
///
/// Bodies of any other content type carry no fields, so they fail validation
/// as missing. A body that cannot be parsed is answered with the generic
/// server error and no parser detail.
pub struct TranslatePayload(pub TranslateRequest);

impl<S> FromRequest<S> for TranslatePayload
where
    S: Send + Sync,
{
    type Rejection = Response<Body>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<TranslateForm>::from_request(req, state)
                .await
                .map_err(|rejection| malformed_body(rejection.body_text()))?;
            Ok(TranslatePayload(form.into()))
        } else if content_type.starts_with("application/json") {
            let Json(request) = Json::<TranslateRequest>::from_request(req, state)
                .await
                .map_err(|rejection| malformed_body(rejection.body_text()))?;
            Ok(TranslatePayload(request))
        } else {
            Ok(TranslatePayload(TranslateRequest::default()))
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TranslateResponse {
    pub text: String,
    pub translation: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
}

pub fn router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/translate", post(translate))
        .nest_service(
            "/public",
            ServeDir::new(public_dir).not_found_service(not_found.into_service()),
        )
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(internal_error))
        .with_state(state)
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Not Found",
    )
}

/// Validation failures answer 200 with an `error` field; clients rely on it
async fn translate(
    State(state): State<AppState>,
    TranslatePayload(request): TranslatePayload,
) -> axum::response::Response {
    let (Some(text), Some(locale)) = (request.text, request.locale) else {
        return failure(amerbrit::InvalidInput::MissingFields.to_string());
    };

    // A locale that is not a string can never name a direction
    let locale = locale.as_str().unwrap_or_default();

    match state.translator.translate(text.as_str(), locale) {
        Ok(Translation::NothingToTranslate) => {
            failure(Translation::NothingToTranslate.to_string())
        }
        Ok(translation) => {
            let text = text.as_str().unwrap_or_default().to_string();
            info!(locale, changed = translation.is_translated(), "translated");
            Json(TranslateResponse {
                text,
                translation: translation.into_string(),
            })
            .into_response()
        }
        Err(e) => failure(e.to_string()),
    }
}

fn failure(message: String) -> axum::response::Response {
    info!(error = %message, "rejected translation request");
    Json(ErrorResponse { error: message }).into_response()
}

fn malformed_body(detail: String) -> Response<Body> {
    warn!(%detail, "unreadable request body");
    something_went_wrong()
}

fn internal_error(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(detail, "handler panicked");
    something_went_wrong()
}

fn something_went_wrong() -> Response<Body> {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Something went wrong!".to_string(),
        }),
    )
        .into_response()
}
