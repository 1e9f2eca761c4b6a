//! Reloads the account list and totals, and builds the response to a successful change.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    account::{Account, Summary, account_list_view},
    alert::Alert,
    dashboard::summary::{load_summary, summary_oob_view},
    dialog::Dialog,
    elements::ACCOUNTS_LIST,
};

/// A freshly loaded account list and the totals fetched after it.
#[derive(Debug)]
pub(crate) struct Refreshed {
    accounts: Vec<Account>,
    summary: Option<Summary>,
}

impl Refreshed {
    /// Render the list for the list region with the totals swapped in out of band.
    pub(crate) fn into_fragment(self) -> Markup {
        html!(
            (account_list_view(&self.accounts))
            @if let Some(summary) = &self.summary {
                (summary_oob_view(summary))
            }
        )
    }

    /// Render both the list and the totals as out-of-band swaps.
    pub(crate) fn into_oob_html(self) -> Markup {
        html!(
            div id=(ACCOUNTS_LIST) hx-swap-oob="innerHTML"
            {
                (account_list_view(&self.accounts))
            }
            @if let Some(summary) = &self.summary {
                (summary_oob_view(summary))
            }
        )
    }
}

/// Fetch the account list into the cache, then fetch the totals.
///
/// A failed list fetch leaves the cache as it was. A failed summary fetch is
/// logged and leaves the totals out of the result.
pub(crate) async fn reload_accounts(state: &AppState) -> Result<Refreshed, Error> {
    let ticket = state.cache.begin_fetch();
    let accounts = state
        .api
        .list_accounts()
        .await
        .map_err(Error::LoadAccounts)?;

    if !state.cache.replace(ticket, accounts) {
        tracing::debug!("discarded account list from a fetch that was overtaken");
    }

    let summary = match load_summary(state).await {
        Ok(summary) => Some(summary),
        Err(error) => {
            tracing::error!("{error}");
            None
        }
    };

    Ok(Refreshed {
        accounts: state.cache.accounts(),
        summary,
    })
}

/// Where the response to a successful change is swapped in.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Completion {
    /// The request was sent from a dialog, which is closed.
    CloseDialog(Dialog),
    /// The request targets the alert container.
    Notify,
}

/// Reload the dashboard after a successful change and report it with `success`.
///
/// If the reload fails the dialog still closes, but the load failure is shown
/// in place of `success` and the stale list stays on screen.
pub(crate) async fn complete_mutation(
    state: &AppState,
    success: Alert,
    completion: Completion,
) -> Response {
    let (alert, refreshed) = match reload_accounts(state).await {
        Ok(refreshed) => (success, Some(refreshed.into_oob_html())),
        Err(error) => (error.into_alert(), None),
    };

    let markup = match completion {
        Completion::CloseDialog(dialog) => html!(
            (dialog.close())
            (alert.into_oob_html())
            @if let Some(refreshed) = refreshed { (refreshed) }
        ),
        Completion::Notify => html!(
            (alert.into_html())
            @if let Some(refreshed) = refreshed { (refreshed) }
        ),
    };

    markup.into_response()
}
