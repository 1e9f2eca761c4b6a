//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered into the [ALERT_CONTAINER] either as the main body of a
//! response targeting the container or as an out-of-band swap alongside other
//! content. An alert stays on screen until it is dismissed.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::elements::ALERT_CONTAINER;

/// A notification for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Success { message: String, details: String },
    SuccessSimple { message: String },
    Error { message: String, details: String },
    ErrorSimple { message: String },
}

impl Alert {
    /// Render the alert to be placed inside the alert container.
    pub fn into_html(self) -> Markup {
        let (is_error, message, details) = match self {
            Alert::Success { message, details } => (false, message, Some(details)),
            Alert::SuccessSimple { message } => (false, message, None),
            Alert::Error { message, details } => (true, message, Some(details)),
            Alert::ErrorSimple { message } => (true, message, None),
        };

        let style = if is_error {
            "text-red-800 border-red-300 bg-red-50 dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
        } else {
            "text-green-800 border-green-300 bg-green-50 dark:bg-gray-800 dark:text-green-400 dark:border-green-800"
        };

        html!(
            div
                class={ "flex items-start justify-between gap-4 p-4 mb-4 text-sm border rounded-lg shadow " (style) }
                role="alert"
                data-alert=(if is_error { "error" } else { "success" })
            {
                div
                {
                    p class="font-medium" { (message) }

                    @if let Some(details) = details {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    class="font-bold"
                    aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "×"
                }
            }
        )
    }

    /// Render the alert as an out-of-band swap into the alert container.
    pub fn into_oob_html(self) -> Markup {
        html!(
            div id=(ALERT_CONTAINER) hx-swap-oob="innerHTML"
            {
                (self.into_html())
            }
        )
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
