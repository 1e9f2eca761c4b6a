//! The dashboard's copy of the account list.
//!
//! The cache is only ever replaced wholesale with a freshly fetched list.
//! Each fetch takes a [FetchTicket] before its request is sent and a result
//! is only stored if its ticket is newer than the one already stored, so when
//! reloads overlap the most recently started one wins.

use std::sync::{
    PoisonError, RwLock,
    atomic::{AtomicU64, Ordering},
};

use crate::account::{Account, AccountId};

/// Marks when an account list fetch was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
struct Snapshot {
    ticket: u64,
    accounts: Vec<Account>,
}

/// The latest account list fetched from the accounts API.
#[derive(Debug, Default)]
pub struct AccountCache {
    snapshot: RwLock<Snapshot>,
    last_ticket: AtomicU64,
}

impl AccountCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch. Call this before sending the request.
    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket(self.last_ticket.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Replace the cached accounts with `accounts` fetched under `ticket`.
    ///
    /// Returns `false`, leaving the cache untouched, if a fetch started after
    /// `ticket` has already been stored.
    pub fn replace(&self, ticket: FetchTicket, accounts: Vec<Account>) -> bool {
        let mut snapshot = self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if ticket.0 <= snapshot.ticket {
            return false;
        }

        *snapshot = Snapshot {
            ticket: ticket.0,
            accounts,
        };

        true
    }

    /// A copy of the cached accounts in the order the API listed them.
    pub fn accounts(&self) -> Vec<Account> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .accounts
            .clone()
    }

    /// Find the cached account with `id`.
    pub fn find(&self, id: AccountId) -> Option<Account> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .accounts
            .iter()
            .find(|account| account.id == id)
            .cloned()
    }

    /// The number of cached accounts.
    pub fn len(&self) -> usize {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .accounts
            .len()
    }

    /// Whether the cache holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
