//! Sign-up handlers.
//!
//! The browser flow posts the form to `/signup` and gets the page back with
//! an inline notice. `/api/signup` accepts the same payload as JSON.

use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::pages::{self, Notice};
use crate::api::server::AppState;
use crate::store::UserRecord;

/// Notice shown when a sign-up was appended.
pub const SUCCESS_MESSAGE: &str = "You have successfully signed up!";
/// Notice shown when any field was left empty.
pub const EMPTY_FIELDS_MESSAGE: &str = "Please fill out all fields.";

const STORE_FAILURE_MESSAGE: &str = "Could not save your sign-up. Please try again.";

/// A submitted sign-up, from either the HTML form or the JSON API.
///
/// Missing fields deserialize as empty strings so they fail validation
/// instead of rejecting the request at the extractor.
#[derive(Debug, Deserialize)]
pub struct SignupPayload {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl SignupPayload {
    /// Check that every field is filled in and build the record to store.
    ///
    /// Values are trimmed; whitespace-only input counts as empty.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message when any field is empty.
    pub fn validate(&self) -> Result<UserRecord, &'static str> {
        let username = self.username.trim();
        let email = self.email.trim();
        let password = self.password.trim();

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(EMPTY_FIELDS_MESSAGE);
        }

        Ok(UserRecord {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /` - render the sign-up page.
pub async fn show_form() -> Html<String> {
    pages::signup_page("", "", None)
}

/// `POST /signup` - handle a browser form submission.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<SignupPayload>,
) -> Response {
    let record = match payload.validate() {
        Ok(record) => record,
        Err(message) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                pages::signup_page(&payload.username, &payload.email, Some(Notice::Error(message))),
            )
                .into_response();
        }
    };

    match state.store.append(&record) {
        Ok(()) => {
            info!(username = %record.username, "user signed up");
            pages::signup_page("", "", Some(Notice::Success(SUCCESS_MESSAGE))).into_response()
        }
        Err(e) => {
            error!("failed to append sign-up: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                pages::signup_page(
                    &payload.username,
                    &payload.email,
                    Some(Notice::Error(STORE_FAILURE_MESSAGE)),
                ),
            )
                .into_response()
        }
    }
}

/// `POST /api/signup` - handle a JSON submission.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupPayload>,
) -> Response {
    let record = match payload.validate() {
        Ok(record) => record,
        Err(message) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: message.to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.store.append(&record) {
        Ok(()) => {
            info!(username = %record.username, "user signed up");
            (
                StatusCode::CREATED,
                Json(SignupResponse {
                    message: SUCCESS_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("failed to append sign-up: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "could not save sign-up".to_string(),
                }),
            )
                .into_response()
        }
    }
}
