//! Dashboard module
//!
//! Provides the dashboard page, the totals shown on it and the reload that
//! follows every change to an account.

mod page;
mod refresh;
mod summary;

pub use page::get_dashboard_page;
pub(crate) use refresh::{Completion, complete_mutation, reload_accounts};
pub use summary::get_summary_fragment;
