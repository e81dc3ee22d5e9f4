use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use recall::AnswerPipeline;

/// State shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AnswerPipeline>,
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

pub async fn index() -> Html<&'static str> {
    info!("index requested");
    Html("Coach server is running. POST a question to /generate")
}

/// `POST /generate` with `{ "question": string }`.
///
/// The body is decoded by hand so anything without a string `question`
/// field, JSON or not, gets the same fixed 400 message.
pub async fn generate(State(state): State<AppState>, body: Bytes) -> Response {
    let question = serde_json::from_slice::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("question").and_then(|q| q.as_str()).map(str::to_owned));
    let Some(question) = question else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                message: "Missing question in body",
            }),
        )
            .into_response();
    };

    match state.pipeline.answer(&question).await {
        Ok(generated) => (StatusCode::OK, Json(generated)).into_response(),
        Err(err) => {
            error!(%err, "answer generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: "Internal server error",
                }),
            )
                .into_response()
        }
    }
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            message: "Method not allowed",
        }),
    )
        .into_response()
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate).fallback(method_not_allowed))
        .with_state(state)
}
