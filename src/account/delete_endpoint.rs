//! Defines the endpoint for deleting an account.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    AppState, Error,
    account::AccountId,
    alert::Alert,
    dashboard::{Completion, complete_mutation},
};

/// A route handler for deleting an account, responds with an alert.
///
/// On success the account list and totals are reloaded and swapped in out of
/// band. The user has already confirmed the deletion in the browser.
pub async fn delete_account_endpoint(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Response {
    if let Err(error) = state.api.delete_account(account_id).await {
        return Error::DeleteAccount(error).into_alert_response();
    }

    let success = Alert::SuccessSimple {
        message: "Account deleted successfully".to_owned(),
    };

    complete_mutation(&state, success, Completion::Notify).await
}
