use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};
use time::{
    Date, PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

/// The accounts API's identifier for an account.
pub type AccountId = i64;

const CREATED_AT_FORMAT: &[BorrowedFormatItem] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
);
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// A bank account as reported by the accounts API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The id assigned by the accounts API.
    pub id: AccountId,
    /// The account number, fixed once the account has been created.
    pub account_number: String,
    /// The name of the account holder.
    pub holder_name: String,
    /// The account type exactly as stored, e.g. "savings".
    pub account_type: String,
    /// The current balance.
    pub balance: f64,
    /// The deposits and withdrawals applied to the account, oldest first.
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    /// When the account was opened, as an ISO 8601 date-time without an offset.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Account {
    /// The account type parsed into one of the known kinds.
    pub fn account_kind(&self) -> AccountType {
        AccountType::from_label(&self.account_type)
    }

    /// The date the account was opened, if the API reported a valid one.
    pub fn opened_on(&self) -> Option<Date> {
        let created_at = self.created_at.as_deref()?;

        PrimitiveDateTime::parse(created_at, CREATED_AT_FORMAT)
            .map(|date_time| date_time.date())
            .or_else(|_| Date::parse(created_at, DATE_FORMAT))
            .inspect_err(|error| {
                tracing::debug!("could not parse created_at \"{created_at}\": {error}")
            })
            .ok()
    }

    /// The most recent deposit or withdrawal.
    pub fn last_transaction(&self) -> Option<&TransactionRecord> {
        self.transactions.last()
    }
}

/// A deposit or withdrawal recorded against an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Either "deposit" or "withdrawal".
    #[serde(rename = "type")]
    pub kind: String,
    /// The amount moved, always positive.
    pub amount: f64,
    /// When the transaction was applied, as an ISO 8601 date-time.
    pub timestamp: String,
    /// The account balance once the transaction was applied.
    pub balance_after: f64,
}

/// The fields sent to the accounts API when creating or updating an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// The bank's number for the account, unique across accounts.
    pub account_number: String,
    /// The name of the person who holds the account.
    pub holder_name: String,
    /// A free-text label such as "savings".
    pub account_type: String,
    /// The opening or corrected balance in dollars.
    pub balance: f64,
}

/// The kinds of account the dashboard knows how to style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountType {
    /// A savings account.
    Savings,
    /// A day-to-day checking account.
    Checking,
    /// An account held by a business.
    Business,
    /// Any other label, kept as given.
    Other(String),
}

impl AccountType {
    /// The types offered when creating an account.
    pub const KNOWN: [AccountType; 3] = [
        AccountType::Savings,
        AccountType::Checking,
        AccountType::Business,
    ];

    /// Parse an account type label, ignoring case.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "savings" => AccountType::Savings,
            "checking" => AccountType::Checking,
            "business" => AccountType::Business,
            _ => AccountType::Other(label.to_owned()),
        }
    }

    /// The canonical label sent to the accounts API.
    pub fn label(&self) -> &str {
        match self {
            AccountType::Savings => "savings",
            AccountType::Checking => "checking",
            AccountType::Business => "business",
            AccountType::Other(label) => label,
        }
    }

    /// The label shown to users.
    pub fn display_name(&self) -> &str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Checking => "Checking",
            AccountType::Business => "Business",
            AccountType::Other(label) => label,
        }
    }

    /// The colour of the badge shown next to accounts of this type.
    pub fn badge_color(&self) -> BadgeColor {
        match self {
            AccountType::Savings => BadgeColor::Success,
            AccountType::Checking => BadgeColor::Primary,
            AccountType::Business => BadgeColor::Accent,
            AccountType::Other(_) => BadgeColor::Neutral,
        }
    }
}

/// The colour of the badge that marks an account's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum BadgeColor {
    Success,
    Primary,
    Accent,
    Neutral,
}

impl BadgeColor {
    /// The Tailwind classes for the badge.
    pub fn class(self) -> &'static str {
        match self {
            BadgeColor::Success => {
                "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300"
            }
            BadgeColor::Primary => "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300",
            BadgeColor::Accent => {
                "bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-300"
            }
            BadgeColor::Neutral => "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-300",
        }
    }
}

/// Moves money into or out of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Add money to the account.
    Deposit,
    /// Take money out of the account.
    Withdraw,
}

impl TransactionKind {
    /// The last segment of the accounts API path for this transaction.
    pub fn path_segment(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
        }
    }

    /// Parse the last segment of the accounts API path, e.g. "deposit".
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "deposit" => Some(TransactionKind::Deposit),
            "withdraw" => Some(TransactionKind::Withdraw),
            _ => None,
        }
    }

    /// The title of the transaction dialog.
    pub fn title(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit Money",
            TransactionKind::Withdraw => "Withdraw Money",
        }
    }

    /// The verb used in the success alert, e.g. "Deposited $5.00".
    pub fn past_tense(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposited",
            TransactionKind::Withdraw => "Withdrew",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Totals across all accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of every account balance.
    pub total_balance: f64,
    /// The number of accounts.
    pub total_accounts: u64,
    /// The total balance for each account type label.
    pub account_type_summary: BTreeMap<String, f64>,
}

#[cfg(test)]
mod account_type_tests {
    use super::{AccountType, BadgeColor};

    #[test]
    fn badge_colors_ignore_case() {
        let cases = [
            ("savings", BadgeColor::Success),
            ("SAVINGS", BadgeColor::Success),
            ("Savings", BadgeColor::Success),
            ("checking", BadgeColor::Primary),
            ("ChEcKiNg", BadgeColor::Primary),
            ("business", BadgeColor::Accent),
            ("BUSINESS", BadgeColor::Accent),
            ("investment", BadgeColor::Neutral),
            ("", BadgeColor::Neutral),
        ];

        for (label, want) in cases {
            let got = AccountType::from_label(label).badge_color();
            assert_eq!(want, got, "want {want:?} for label {label:?}, got {got:?}");
        }
    }

    #[test]
    fn other_types_keep_their_label() {
        let account_type = AccountType::from_label("Joint");

        assert_eq!(AccountType::Other("Joint".to_owned()), account_type);
        assert_eq!("Joint", account_type.label());
    }
}
