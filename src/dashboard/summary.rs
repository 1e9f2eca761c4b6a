//! The totals shown above the account list.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    account::{AccountType, Summary},
    elements::{ACCOUNT_TYPES, SUMMARY, TOTAL_ACCOUNTS, TOTAL_BALANCE},
    html::{BADGE_STYLE, format_currency},
};

/// Fetch the totals from the accounts API.
pub(crate) async fn load_summary(state: &AppState) -> Result<Summary, Error> {
    state.api.get_summary().await.map_err(Error::LoadSummary)
}

/// Renders the contents of the summary region.
pub(crate) fn summary_view(summary: &Summary) -> Markup {
    html!(
        div class="grid gap-4 sm:grid-cols-2"
        {
            div class="rounded-lg bg-white p-4 shadow-sm dark:bg-gray-800"
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Total Balance" }
                p id=(TOTAL_BALANCE) class="text-3xl font-bold tabular-nums"
                { (format_currency(summary.total_balance)) }
            }

            div class="rounded-lg bg-white p-4 shadow-sm dark:bg-gray-800"
            {
                p class="text-sm text-gray-500 dark:text-gray-400" { "Total Accounts" }
                p id=(TOTAL_ACCOUNTS) class="text-3xl font-bold tabular-nums"
                { (summary.total_accounts) }
            }
        }

        div id=(ACCOUNT_TYPES) class="flex flex-wrap gap-2 mt-4"
        {
            @for (account_type, balance) in &summary.account_type_summary {
                @let color = AccountType::from_label(account_type).badge_color().class();
                span class={ (BADGE_STYLE) " " (color) } data-account-type=(account_type)
                {
                    (account_type) ": " (format_currency(*balance))
                }
            }
        }
    )
}

/// Renders the summary as an out-of-band swap into the summary region.
pub(crate) fn summary_oob_view(summary: &Summary) -> Markup {
    html!(
        div id=(SUMMARY) hx-swap-oob="innerHTML"
        {
            (summary_view(summary))
        }
    )
}

/// Fetches and renders the totals.
///
/// A failure is only logged and the previous totals stay on screen.
pub async fn get_summary_fragment(State(state): State<AppState>) -> Response {
    match load_summary(&state).await {
        Ok(summary) => summary_view(&summary).into_response(),
        Err(error) => error.into_response(),
    }
}
