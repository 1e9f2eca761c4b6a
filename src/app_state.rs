//! Implements a struct that holds the state of the dashboard server.

use std::sync::Arc;

use crate::{
    cache::AccountCache,
    client::{AccountsApi, AccountsApiHandle},
    dialog::Dialog,
    elements::{
        ACCOUNT_EDITOR, ACCOUNT_EDITOR_TITLE, TRANSACTION_EDITOR, TRANSACTION_EDITOR_TITLE,
    },
};

/// The state of the dashboard server.
///
/// There is one instance per server and it lives as long as the server does.
#[derive(Clone)]
pub struct AppState {
    /// The client for the accounts API.
    pub api: AccountsApiHandle,

    /// The latest account list fetched from the accounts API.
    pub cache: Arc<AccountCache>,

    /// The dialog for creating and editing accounts.
    pub account_editor: Dialog,

    /// The dialog for deposits and withdrawals.
    pub transaction_editor: Dialog,
}

impl AppState {
    /// Create a new [AppState] with an empty account cache.
    pub fn new(api: Arc<dyn AccountsApi>) -> Self {
        Self {
            api,
            cache: Arc::new(AccountCache::new()),
            account_editor: Dialog::new(ACCOUNT_EDITOR, ACCOUNT_EDITOR_TITLE),
            transaction_editor: Dialog::new(TRANSACTION_EDITOR, TRANSACTION_EDITOR_TITLE),
        }
    }
}
