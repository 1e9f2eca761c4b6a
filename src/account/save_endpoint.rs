//! Defines the endpoint for creating or updating an account from the account editor.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    account::editor::{AccountForm, account_editor_view},
    alert::Alert,
    dashboard::{Completion, complete_mutation},
};

/// A route handler for saving the account editor.
///
/// Creates an account if the form has no id and updates the account otherwise.
/// Invalid input re-renders the editor with a `422` and nothing is sent to the
/// accounts API.
pub async fn save_account_endpoint(
    State(state): State<AppState>,
    Form(form): Form<AccountForm>,
) -> Response {
    let (account_id, record) = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                account_editor_view(&state.account_editor, &form, &errors),
            )
                .into_response();
        }
    };

    let result = match account_id {
        Some(id) => state.api.update_account(id, &record).await,
        None => state.api.create_account(&record).await,
    };

    if let Err(error) = result {
        return Error::SaveAccount(error).into_alert_response();
    }

    let message = match account_id {
        Some(_) => "Account updated",
        None => "Account created",
    };
    let success = Alert::Success {
        message: message.to_owned(),
        details: format!("{} ({})", record.holder_name, record.account_number),
    };

    complete_mutation(&state, success, Completion::CloseDialog(state.account_editor)).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{Form, extract::State, http::StatusCode};
    use scraper::{Html, Selector};

    use crate::{
        AppState,
        account::{AccountRecord, editor::AccountForm},
        client::ApiError,
        test_utils::{
            ApiCall, FakeAccountsApi, assert_valid_html, parse_html_fragment, test_account,
        },
    };

    use super::save_account_endpoint;

    fn new_account_form() -> AccountForm {
        AccountForm {
            account_id: String::new(),
            account_number: "ACC100".to_owned(),
            holder_name: "Ada Lovelace".to_owned(),
            account_type: "business".to_owned(),
            balance: "250".to_owned(),
        }
    }

    fn count(html: &Html, selector: &str) -> usize {
        html.select(&Selector::parse(selector).unwrap()).count()
    }

    #[tokio::test]
    async fn creates_account_and_refreshes_dashboard() {
        let api = Arc::new(FakeAccountsApi::with_accounts(vec![test_account(
            1, "Alice", "savings", 10.0,
        )]));
        let state = AppState::new(api.clone());

        let response = save_account_endpoint(State(state.clone()), Form(new_account_form())).await;

        assert_eq!(StatusCode::OK, response.status());
        assert_eq!(
            vec![ApiCall::CreateAccount(AccountRecord {
                account_number: "ACC100".to_owned(),
                holder_name: "Ada Lovelace".to_owned(),
                account_type: "business".to_owned(),
                balance: 250.0,
            })],
            api.mutations()
        );
        assert_eq!(2, state.cache.len());

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert_eq!(0, count(&html, "dialog"));
        assert_eq!(2, count(&html, "#accounts-list[hx-swap-oob] [data-account-card]"));
        assert_eq!(1, count(&html, "#summary[hx-swap-oob]"));
        assert_eq!(1, count(&html, "#alert-container [data-alert=success]"));
    }

    #[tokio::test]
    async fn form_with_id_updates_account() {
        let api = Arc::new(FakeAccountsApi::with_accounts(vec![test_account(
            4, "Alice", "savings", 10.0,
        )]));
        let state = AppState::new(api.clone());
        let form = AccountForm {
            account_id: "4".to_owned(),
            account_number: "ACC0004".to_owned(),
            holder_name: "Alice Smith".to_owned(),
            account_type: "checking".to_owned(),
            balance: "10".to_owned(),
        };

        let response = save_account_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(StatusCode::OK, response.status());
        assert!(matches!(
            api.mutations().as_slice(),
            [ApiCall::UpdateAccount(4, record)] if record.holder_name == "Alice Smith"
        ));
        assert_eq!(
            Some("Alice Smith".to_owned()),
            state.cache.find(4).map(|account| account.holder_name)
        );
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let api = Arc::new(FakeAccountsApi::new());
        let state = AppState::new(api.clone());
        let form = AccountForm {
            balance: "-5".to_owned(),
            holder_name: "  ".to_owned(),
            ..new_account_form()
        };

        let response = save_account_endpoint(State(state), Form(form)).await;

        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());
        assert!(api.calls().is_empty());

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert_eq!(1, count(&html, "dialog[open] form"));
        assert_eq!(1, count(&html, "[data-field-error=balance]"));
        assert_eq!(1, count(&html, "[data-field-error=holder_name]"));
        assert_eq!(0, count(&html, "[data-field-error=account_number]"));
    }

    #[tokio::test]
    async fn rejection_shows_backend_message_and_keeps_cache() {
        let api = Arc::new(FakeAccountsApi::with_accounts(vec![test_account(
            1, "Alice", "savings", 10.0,
        )]));
        let state = AppState::new(api.clone());
        crate::dashboard::reload_accounts(&state).await.unwrap();
        let form = AccountForm {
            account_number: "ACC0001".to_owned(),
            ..new_account_form()
        };

        let response = save_account_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(StatusCode::BAD_REQUEST, response.status());
        assert_eq!(1, state.cache.len());
        let html = parse_html_fragment(response).await;
        let alert = html
            .select(&Selector::parse("[data-alert=error]").unwrap())
            .next()
            .expect("Could not find error alert");
        assert!(
            alert
                .text()
                .collect::<String>()
                .contains("Account number already exists")
        );
        assert_eq!(0, count(&html, "#accounts-list"));
    }

    #[tokio::test]
    async fn unprocessable_rejection_is_not_swapped_into_dialog() {
        let api = Arc::new(FakeAccountsApi::new());
        api.fail_next(ApiError::RequestRejected {
            status: 422,
            message: "Invalid account type".to_owned(),
        });
        let state = AppState::new(api);

        let response = save_account_endpoint(State(state), Form(new_account_form())).await;

        assert_eq!(StatusCode::BAD_REQUEST, response.status());
        let html = parse_html_fragment(response).await;
        assert_eq!(0, count(&html, "dialog"));
        assert_eq!(1, count(&html, "[data-alert=error]"));
    }

    #[tokio::test]
    async fn network_failure_is_a_bad_gateway() {
        let api = Arc::new(FakeAccountsApi::new());
        api.fail_next(ApiError::NetworkFailure("connection refused".to_owned()));
        let state = AppState::new(api);

        let response = save_account_endpoint(State(state), Form(new_account_form())).await;

        assert_eq!(StatusCode::BAD_GATEWAY, response.status());
        let html = parse_html_fragment(response).await;
        let alert = html
            .select(&Selector::parse("[data-alert=error]").unwrap())
            .next()
            .expect("Could not find error alert");
        assert!(alert.text().collect::<String>().contains("Error saving account"));
    }
}
