//! Displays accounts as cards with their balances and actions.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    account::Account,
    dashboard::reload_accounts,
    elements::{ACCOUNT_EDITOR, ALERT_CONTAINER, TRANSACTION_EDITOR},
    endpoints::{self, format_endpoint},
    html::{BADGE_STYLE, BUTTON_SMALL_STYLE, format_currency},
};

/// The message shown in place of the cards when there are no accounts.
pub const NO_ACCOUNTS_MESSAGE: &str =
    "No accounts found. Create your first account to get started.";

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this account?";

/// Renders the contents of the account list region.
pub(crate) fn account_list_view(accounts: &[Account]) -> Markup {
    if accounts.is_empty() {
        return html!(
            p class="py-6 text-center text-gray-500 dark:text-gray-400" data-empty-state="true"
            {
                (NO_ACCOUNTS_MESSAGE)
            }
        );
    }

    html!(
        ul class="grid gap-4 md:grid-cols-2 lg:grid-cols-3"
        {
            @for account in accounts {
                (account_card(account))
            }
        }
    )
}

fn account_card(account: &Account) -> Markup {
    let account_type = account.account_kind();
    let badge_class = format!("{BADGE_STYLE} {}", account_type.badge_color().class());
    let deposit_url = format_endpoint(endpoints::DEPOSIT_DIALOG, account.id);
    let withdraw_url = format_endpoint(endpoints::WITHDRAW_DIALOG, account.id);
    let edit_url = format_endpoint(endpoints::EDIT_ACCOUNT_DIALOG, account.id);
    let delete_url = format_endpoint(endpoints::DELETE_ACCOUNT, account.id);
    let transaction_target = TRANSACTION_EDITOR.selector();
    let alert_target = ALERT_CONTAINER.selector();

    html!(
        li
            class="rounded-lg border border-gray-200 bg-white px-4 py-3 shadow-sm dark:border-gray-700 dark:bg-gray-800"
            data-account-card="true"
            data-account-id=(account.id)
        {
            div class="flex items-start justify-between gap-3 mb-2"
            {
                h3 class="text-lg font-semibold text-gray-900 dark:text-white" data-field="holder-name"
                { (account.holder_name) }

                span class=(badge_class) data-field="account-type"
                { (account.account_type) }
            }

            p class="text-xs text-gray-500 dark:text-gray-400" data-field="account-number"
            { "Account #: " (account.account_number) }

            @if let Some(opened_on) = account.opened_on() {
                p class="text-xs text-gray-500 dark:text-gray-400" data-field="opened-on"
                { "Opened " (opened_on) }
            }

            p class="mt-2 mb-1 text-2xl font-bold tabular-nums text-blue-600 dark:text-blue-400" data-field="balance"
            { (format_currency(account.balance)) }

            @if let Some(transaction) = account.last_transaction() {
                p class="text-xs text-gray-500 dark:text-gray-400" data-field="last-transaction"
                { "Last " (transaction.kind) ": " (format_currency(transaction.amount)) }
            }

            div class="mt-3 flex flex-wrap gap-2"
            {
                button
                    type="button"
                    class={ (BUTTON_SMALL_STYLE) " bg-green-600 hover:bg-green-700" }
                    hx-get=(deposit_url)
                    hx-target=(transaction_target)
                    hx-target-error=(alert_target)
                    data-action="deposit"
                {
                    "Deposit"
                }

                button
                    type="button"
                    class={ (BUTTON_SMALL_STYLE) " bg-yellow-500 hover:bg-yellow-600" }
                    hx-get=(withdraw_url)
                    hx-target=(transaction_target)
                    hx-target-error=(alert_target)
                    data-action="withdraw"
                {
                    "Withdraw"
                }

                button
                    type="button"
                    class={ (BUTTON_SMALL_STYLE) " bg-sky-600 hover:bg-sky-700" }
                    hx-get=(edit_url)
                    hx-target=(ACCOUNT_EDITOR.selector())
                    hx-target-error=(alert_target)
                    data-action="edit"
                {
                    "Edit"
                }

                button
                    type="button"
                    class={ (BUTTON_SMALL_STYLE) " bg-red-600 hover:bg-red-700" }
                    hx-delete=(delete_url)
                    hx-confirm=(DELETE_CONFIRMATION)
                    hx-target=(alert_target)
                    hx-target-error=(alert_target)
                    data-action="delete"
                {
                    "Delete"
                }
            }
        }
    )
}

/// Fetches the account list into the cache and renders it, along with fresh totals.
///
/// On failure the cache and the displayed list are left as they were and an
/// alert is returned for the alert container.
pub async fn get_accounts_fragment(State(state): State<AppState>) -> Response {
    match reload_accounts(&state).await {
        Ok(refreshed) => refreshed.into_fragment().into_response(),
        Err(error) => error.into_alert_response(),
    }
}
