//! The dashboard's endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/dashboard/accounts/{account_id}/edit', use
//! [format_endpoint].

/// The dashboard page.
pub const ROOT: &str = "/";
/// The account list fragment.
pub const ACCOUNTS_FRAGMENT: &str = "/dashboard/accounts";
/// The account totals fragment.
pub const SUMMARY_FRAGMENT: &str = "/dashboard/summary";
/// The account editor dialog for adding an account.
pub const NEW_ACCOUNT_DIALOG: &str = "/dashboard/accounts/new";
/// The account editor dialog for an existing account.
pub const EDIT_ACCOUNT_DIALOG: &str = "/dashboard/accounts/{account_id}/edit";
/// The transaction dialog for a deposit.
pub const DEPOSIT_DIALOG: &str = "/dashboard/accounts/{account_id}/deposit";
/// The transaction dialog for a withdrawal.
pub const WITHDRAW_DIALOG: &str = "/dashboard/accounts/{account_id}/withdraw";

/// The route the account editor submits to, both for new and existing accounts.
pub const SAVE_ACCOUNT: &str = "/dashboard/accounts";
/// The route to delete an account.
pub const DELETE_ACCOUNT: &str = "/dashboard/accounts/{account_id}";
/// The route the transaction dialog submits to.
pub const PROCESS_TRANSACTION: &str = "/dashboard/transactions";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/accounts/{account_id}', '{account_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
