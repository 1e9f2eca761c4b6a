//! Defines the app level error type and conversions to rendered alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, client::ApiError};

/// The dashboard operations that can fail, each wrapping the accounts API error.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The account list could not be fetched.
    #[error("could not load accounts: {0}")]
    LoadAccounts(ApiError),

    /// The account totals could not be fetched.
    ///
    /// This is only logged, the previous totals stay on screen.
    #[error("could not load summary: {0}")]
    LoadSummary(ApiError),

    /// An account could not be created or updated.
    #[error("could not save account: {0}")]
    SaveAccount(ApiError),

    /// An account could not be deleted.
    #[error("could not delete account: {0}")]
    DeleteAccount(ApiError),

    /// A deposit or withdrawal could not be applied.
    #[error("could not process transaction: {0}")]
    ProcessTransaction(ApiError),
}

impl Error {
    fn api_error(&self) -> &ApiError {
        match self {
            Error::LoadAccounts(error)
            | Error::LoadSummary(error)
            | Error::SaveAccount(error)
            | Error::DeleteAccount(error)
            | Error::ProcessTransaction(error) => error,
        }
    }

    /// The message shown when the request never reached the accounts API.
    fn network_failure_message(&self) -> &'static str {
        match self {
            Error::LoadAccounts(_) => "Error loading accounts",
            Error::LoadSummary(_) => "Error loading summary",
            Error::SaveAccount(_) => "Error saving account",
            Error::DeleteAccount(_) => "Error deleting account",
            Error::ProcessTransaction(_) => "Error processing transaction",
        }
    }

    fn rejection_title(&self) -> &'static str {
        match self {
            Error::LoadAccounts(_) => "Could not load accounts",
            Error::LoadSummary(_) => "Could not load summary",
            Error::SaveAccount(_) => "Could not save account",
            Error::DeleteAccount(_) => "Could not delete account",
            Error::ProcessTransaction(_) => "Could not process transaction",
        }
    }

    /// The status code to respond with.
    ///
    /// Rejections keep the accounts API's status code, anything else is a bad gateway.
    ///
    /// A `422` from the accounts API is sent as a `400`, since the dialogs swap
    /// `422` responses over themselves to show form errors.
    pub fn status_code(&self) -> StatusCode {
        match self.api_error() {
            ApiError::RequestRejected { status, .. } => match StatusCode::from_u16(*status) {
                Ok(StatusCode::UNPROCESSABLE_ENTITY) => StatusCode::BAD_REQUEST,
                Ok(status) => status,
                Err(_) => StatusCode::BAD_GATEWAY,
            },
            ApiError::NetworkFailure(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Convert the error into an alert for the user.
    ///
    /// Network failures are logged and shown with a generic message, rejections
    /// show the accounts API's message verbatim.
    pub fn into_alert(self) -> Alert {
        match self.api_error() {
            ApiError::NetworkFailure(cause) => {
                tracing::error!("{}: {cause}", self.network_failure_message());

                Alert::ErrorSimple {
                    message: self.network_failure_message().to_owned(),
                }
            }
            ApiError::RequestRejected { message, .. } => Alert::Error {
                message: self.rejection_title().to_owned(),
                details: message.clone(),
            },
        }
    }

    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let status_code = self.status_code();

        (status_code, self.into_alert()).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Error::LoadSummary(error) = &self {
            tracing::error!("Error loading summary: {error}");
            return self.status_code().into_response();
        }

        self.into_alert_response()
    }
}
