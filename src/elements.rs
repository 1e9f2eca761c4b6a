//! The ids of the page regions the dashboard renders into.
//!
//! Handlers refer to page regions through these constants rather than
//! spelling out id strings, so a region can only be targeted if it exists.

use maud::Render;

/// The `id` of an element on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementId(&'static str);

impl ElementId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// The CSS selector for the element, e.g. for `hx-target`.
    pub fn selector(&self) -> String {
        format!("#{}", self.0)
    }
}

impl Render for ElementId {
    fn render_to(&self, buffer: &mut String) {
        self.0.render_to(buffer);
    }
}

/// Holds the account cards or the empty-state message.
pub const ACCOUNTS_LIST: ElementId = ElementId::new("accounts-list");
/// Holds the account totals.
pub const SUMMARY: ElementId = ElementId::new("summary");
pub const TOTAL_BALANCE: ElementId = ElementId::new("total-balance");
pub const TOTAL_ACCOUNTS: ElementId = ElementId::new("total-accounts");
/// Holds one badge per account type.
pub const ACCOUNT_TYPES: ElementId = ElementId::new("account-types");
/// Where notifications are shown.
pub const ALERT_CONTAINER: ElementId = ElementId::new("alert-container");

pub const ACCOUNT_EDITOR: ElementId = ElementId::new("account-editor");
pub const ACCOUNT_EDITOR_TITLE: ElementId = ElementId::new("account-editor-title");
pub const ACCOUNT_FORM: ElementId = ElementId::new("account-form");

pub const TRANSACTION_EDITOR: ElementId = ElementId::new("transaction-editor");
pub const TRANSACTION_EDITOR_TITLE: ElementId = ElementId::new("transaction-editor-title");
pub const TRANSACTION_FORM: ElementId = ElementId::new("transaction-form");
/// Shows the balance of the account in the transaction dialog.
pub const CURRENT_BALANCE: ElementId = ElementId::new("current-balance");
