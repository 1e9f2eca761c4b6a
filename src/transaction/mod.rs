//! Deposits and withdrawals.
//!
//! This module contains the transaction dialog and the endpoint that sends a
//! deposit or withdrawal to the accounts API.

mod dialog;
mod process_endpoint;

pub use dialog::{MINIMUM_AMOUNT, TransactionForm, get_deposit_dialog, get_withdraw_dialog};
pub use process_endpoint::process_transaction_endpoint;
