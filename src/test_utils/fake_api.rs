use std::{
    collections::{BTreeMap, VecDeque},
    sync::Mutex,
};

use async_trait::async_trait;

use crate::{
    account::{Account, AccountId, AccountRecord, Summary, TransactionKind, TransactionRecord},
    client::{AccountsApi, ApiError},
};

/// A request received by [FakeAccountsApi].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiCall {
    ListAccounts,
    GetSummary,
    CreateAccount(AccountRecord),
    UpdateAccount(AccountId, AccountRecord),
    DeleteAccount(AccountId),
    ApplyTransaction(AccountId, TransactionKind, f64),
}

#[derive(Default)]
struct FakeState {
    accounts: Vec<Account>,
    next_id: AccountId,
    calls: Vec<ApiCall>,
    failures: VecDeque<ApiError>,
    summary_failure: Option<ApiError>,
}

/// An in-memory accounts API that records every request it receives.
pub(crate) struct FakeAccountsApi {
    state: Mutex<FakeState>,
}

impl FakeAccountsApi {
    pub(crate) fn new() -> Self {
        Self::with_accounts(Vec::new())
    }

    pub(crate) fn with_accounts(accounts: Vec<Account>) -> Self {
        let next_id = accounts.iter().map(|account| account.id).max().unwrap_or(0) + 1;

        Self {
            state: Mutex::new(FakeState {
                accounts,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Make the next request fail with `error`.
    pub(crate) fn fail_next(&self, error: ApiError) {
        self.state.lock().unwrap().failures.push_back(error);
    }

    /// Make every summary request fail with `error`.
    pub(crate) fn fail_summary(&self, error: ApiError) {
        self.state.lock().unwrap().summary_failure = Some(error);
    }

    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// The requests that would change account data.
    pub(crate) fn mutations(&self) -> Vec<ApiCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, ApiCall::ListAccounts | ApiCall::GetSummary))
            .collect()
    }

    pub(crate) fn accounts(&self) -> Vec<Account> {
        self.state.lock().unwrap().accounts.clone()
    }

    fn begin(&self, call: ApiCall) -> Result<std::sync::MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);

        match state.failures.pop_front() {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

fn not_found() -> ApiError {
    ApiError::RequestRejected {
        status: 404,
        message: "Account not found".to_owned(),
    }
}

fn bad_request(message: &str) -> ApiError {
    ApiError::RequestRejected {
        status: 400,
        message: message.to_owned(),
    }
}

#[async_trait]
impl AccountsApi for FakeAccountsApi {
    async fn list_accounts(&self) -> Result<Vec<Account>, ApiError> {
        let state = self.begin(ApiCall::ListAccounts)?;

        Ok(state.accounts.clone())
    }

    async fn get_summary(&self) -> Result<Summary, ApiError> {
        let state = self.begin(ApiCall::GetSummary)?;

        if let Some(error) = &state.summary_failure {
            return Err(error.clone());
        }

        let mut account_type_summary = BTreeMap::new();
        for account in &state.accounts {
            *account_type_summary
                .entry(account.account_type.clone())
                .or_insert(0.0) += account.balance;
        }

        Ok(Summary {
            total_balance: state.accounts.iter().map(|account| account.balance).sum(),
            total_accounts: state.accounts.len() as u64,
            account_type_summary,
        })
    }

    async fn create_account(&self, record: &AccountRecord) -> Result<(), ApiError> {
        let mut state = self.begin(ApiCall::CreateAccount(record.clone()))?;

        if state
            .accounts
            .iter()
            .any(|account| account.account_number == record.account_number)
        {
            return Err(bad_request("Account number already exists"));
        }

        let id = state.next_id;
        state.next_id += 1;
        state.accounts.push(Account {
            id,
            account_number: record.account_number.clone(),
            holder_name: record.holder_name.clone(),
            account_type: record.account_type.clone(),
            balance: record.balance,
            transactions: Vec::new(),
            created_at: None,
        });

        Ok(())
    }

    async fn update_account(
        &self,
        id: AccountId,
        record: &AccountRecord,
    ) -> Result<(), ApiError> {
        let mut state = self.begin(ApiCall::UpdateAccount(id, record.clone()))?;

        let account = state
            .accounts
            .iter_mut()
            .find(|account| account.id == id)
            .ok_or_else(not_found)?;
        account.holder_name = record.holder_name.clone();
        account.account_type = record.account_type.clone();

        Ok(())
    }

    async fn delete_account(&self, id: AccountId) -> Result<(), ApiError> {
        let mut state = self.begin(ApiCall::DeleteAccount(id))?;

        let index = state
            .accounts
            .iter()
            .position(|account| account.id == id)
            .ok_or_else(not_found)?;
        state.accounts.remove(index);

        Ok(())
    }

    async fn apply_transaction(
        &self,
        id: AccountId,
        kind: TransactionKind,
        amount: f64,
    ) -> Result<(), ApiError> {
        let mut state = self.begin(ApiCall::ApplyTransaction(id, kind, amount))?;

        let account = state
            .accounts
            .iter_mut()
            .find(|account| account.id == id)
            .ok_or_else(not_found)?;

        match kind {
            TransactionKind::Deposit => account.balance += amount,
            TransactionKind::Withdraw if amount > account.balance => {
                return Err(bad_request("Insufficient funds"));
            }
            TransactionKind::Withdraw => account.balance -= amount,
        }

        let balance_after = account.balance;
        account.transactions.push(TransactionRecord {
            kind: kind.to_string(),
            amount,
            timestamp: "2025-01-01T00:00:00".to_owned(),
            balance_after,
        });

        Ok(())
    }
}

/// An account with a generated account number.
pub(crate) fn test_account(
    id: AccountId,
    holder_name: &str,
    account_type: &str,
    balance: f64,
) -> Account {
    Account {
        id,
        account_number: format!("ACC{id:04}"),
        holder_name: holder_name.to_owned(),
        account_type: account_type.to_owned(),
        balance,
        transactions: Vec::new(),
        created_at: None,
    }
}
