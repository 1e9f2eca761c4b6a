//! The client for the external accounts API that owns the account records.
//!
//! The dashboard never changes account data itself; every change is a request
//! to the accounts API through the [AccountsApi] trait.

pub(crate) mod http;

use std::sync::Arc;

use async_trait::async_trait;

pub use http::HttpAccountsApi;

use crate::account::{Account, AccountId, AccountRecord, Summary, TransactionKind};

/// The ways a request to the accounts API can fail.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiError {
    /// The request could not be completed, e.g. the API is unreachable or
    /// the response body could not be read.
    #[error("the request could not be completed: {0}")]
    NetworkFailure(String),

    /// The API responded with a non-success status.
    ///
    /// `message` is the `error` field of the response body, shown to users
    /// verbatim.
    #[error("the request was rejected with status {status}: {message}")]
    RequestRejected {
        /// The HTTP status code.
        status: u16,
        /// The reason given by the API.
        message: String,
    },
}

/// The operations the dashboard needs from the accounts API.
#[async_trait]
pub trait AccountsApi: Send + Sync {
    /// Get every account.
    async fn list_accounts(&self) -> Result<Vec<Account>, ApiError>;

    /// Get the totals across all accounts.
    async fn get_summary(&self) -> Result<Summary, ApiError>;

    /// Create a new account from `record`.
    async fn create_account(&self, record: &AccountRecord) -> Result<(), ApiError>;

    /// Replace the fields of the account `id` with `record`.
    async fn update_account(&self, id: AccountId, record: &AccountRecord)
    -> Result<(), ApiError>;

    /// Delete the account `id`.
    async fn delete_account(&self, id: AccountId) -> Result<(), ApiError>;

    /// Deposit `amount` into, or withdraw `amount` from, the account `id`.
    async fn apply_transaction(
        &self,
        id: AccountId,
        kind: TransactionKind,
        amount: f64,
    ) -> Result<(), ApiError>;
}

/// A shareable handle to an accounts API client.
pub type AccountsApiHandle = Arc<dyn AccountsApi>;
