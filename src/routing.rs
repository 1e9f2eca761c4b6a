//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    account::{
        delete_account_endpoint, get_accounts_fragment, get_edit_account_dialog,
        get_new_account_dialog, save_account_endpoint,
    },
    dashboard::{get_dashboard_page, get_summary_fragment},
    endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
    transaction::{get_deposit_dialog, get_withdraw_dialog, process_transaction_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(
            endpoints::ACCOUNTS_FRAGMENT,
            get(get_accounts_fragment).post(save_account_endpoint),
        )
        .route(endpoints::SUMMARY_FRAGMENT, get(get_summary_fragment))
        .route(endpoints::NEW_ACCOUNT_DIALOG, get(get_new_account_dialog))
        .route(endpoints::EDIT_ACCOUNT_DIALOG, get(get_edit_account_dialog))
        .route(endpoints::DELETE_ACCOUNT, delete(delete_account_endpoint))
        .route(endpoints::DEPOSIT_DIALOG, get(get_deposit_dialog))
        .route(endpoints::WITHDRAW_DIALOG, get(get_withdraw_dialog))
        .route(endpoints::PROCESS_TRANSACTION, post(process_transaction_endpoint))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
