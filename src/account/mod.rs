mod core;
mod delete_endpoint;
mod editor;
mod list;
mod save_endpoint;

pub use core::{
    Account, AccountId, AccountRecord, AccountType, BadgeColor, Summary, TransactionKind,
    TransactionRecord,
};
pub use delete_endpoint::delete_account_endpoint;
pub use editor::{AccountForm, get_edit_account_dialog, get_new_account_dialog};
pub(crate) use list::account_list_view;
pub use list::{NO_ACCOUNTS_MESSAGE, get_accounts_fragment};
pub use save_endpoint::save_account_endpoint;
