//! [AccountsApi] over HTTP with JSON bodies.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    account::{Account, AccountId, AccountRecord, Summary, TransactionKind},
    client::{AccountsApi, ApiError},
    endpoints::format_endpoint,
};

/// The accounts API route for listing and creating accounts.
pub const ACCOUNTS: &str = "/api/accounts";
/// The accounts API route for a single account.
pub const ACCOUNT: &str = "/api/accounts/{account_id}";
/// The accounts API route for the account totals.
pub const SUMMARY: &str = "/api/summary";

#[derive(Debug, Serialize)]
struct TransactionRequest {
    amount: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Talks to the accounts API at `base_url`.
#[derive(Debug, Clone)]
pub struct HttpAccountsApi {
    client: Client,
    base_url: String,
}

impl HttpAccountsApi {
    /// Create a client for the accounts API served from `base_url`, e.g.
    /// "http://127.0.0.1:5000".
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client that sends requests through `client`.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AccountsApi for HttpAccountsApi {
    async fn list_accounts(&self) -> Result<Vec<Account>, ApiError> {
        let response = send(self.client.get(self.url(ACCOUNTS))).await?;

        read_json(response).await
    }

    async fn get_summary(&self) -> Result<Summary, ApiError> {
        let response = send(self.client.get(self.url(SUMMARY))).await?;

        read_json(response).await
    }

    async fn create_account(&self, record: &AccountRecord) -> Result<(), ApiError> {
        send(self.client.post(self.url(ACCOUNTS)).json(record))
            .await
            .map(drop)
    }

    async fn update_account(
        &self,
        id: AccountId,
        record: &AccountRecord,
    ) -> Result<(), ApiError> {
        let url = self.url(&format_endpoint(ACCOUNT, id));

        send(self.client.put(url).json(record)).await.map(drop)
    }

    async fn delete_account(&self, id: AccountId) -> Result<(), ApiError> {
        let url = self.url(&format_endpoint(ACCOUNT, id));

        send(self.client.delete(url)).await.map(drop)
    }

    async fn apply_transaction(
        &self,
        id: AccountId,
        kind: TransactionKind,
        amount: f64,
    ) -> Result<(), ApiError> {
        let url = format!(
            "{}/{}",
            self.url(&format_endpoint(ACCOUNT, id)),
            kind.path_segment()
        );

        send(self.client.post(url).json(&TransactionRequest { amount }))
            .await
            .map(drop)
    }
}

/// Send `request` and turn any non-success status into [ApiError::RequestRejected].
async fn send(request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|error| ApiError::NetworkFailure(error.to_string()))?;

    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(error) => {
            tracing::debug!("response with status {status} had no error message: {error}");
            format!("The server responded with status {}", status.as_u16())
        }
    };

    Err(ApiError::RequestRejected {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|error| ApiError::NetworkFailure(format!("could not read response: {error}")))
}
