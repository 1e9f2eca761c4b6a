//! Defines the endpoint for applying a deposit or withdrawal.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    alert::Alert,
    dashboard::{Completion, complete_mutation},
    html::format_currency,
    transaction::dialog::{TransactionForm, transaction_dialog_view},
};

/// A route handler for submitting the transaction dialog.
///
/// An invalid amount re-renders the dialog with a `422` and nothing is sent
/// to the accounts API. Unreadable hidden fields are reported as a `400`
/// alert, leaving the dialog open.
pub async fn process_transaction_endpoint(
    State(state): State<AppState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let Some((account_id, kind)) = form.target() else {
        tracing::warn!(
            "transaction form has invalid account id {:?} or kind {:?}",
            form.account_id,
            form.kind
        );

        let alert = Alert::ErrorSimple {
            message: "Invalid transaction request".to_owned(),
        };
        return (StatusCode::BAD_REQUEST, alert).into_response();
    };

    let amount = match form.validate() {
        Ok(amount) => amount,
        Err(errors) => {
            let account = state.cache.find(account_id);

            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                transaction_dialog_view(
                    &state.transaction_editor,
                    kind,
                    &form,
                    account.as_ref(),
                    &errors,
                ),
            )
                .into_response();
        }
    };

    if let Err(error) = state.api.apply_transaction(account_id, kind, amount).await {
        return Error::ProcessTransaction(error).into_alert_response();
    }

    let success = Alert::SuccessSimple {
        message: format!("{} {}", kind.past_tense(), format_currency(amount)),
    };

    complete_mutation(
        &state,
        success,
        Completion::CloseDialog(state.transaction_editor),
    )
    .await
}
