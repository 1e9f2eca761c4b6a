//! The dialog for depositing into or withdrawing from an account.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState,
    account::{Account, AccountId, TransactionKind},
    dialog::{Dialog, no_swap},
    elements::{ALERT_CONTAINER, CURRENT_BALANCE, TRANSACTION_EDITOR, TRANSACTION_FORM},
    endpoints,
    form::{FieldErrors, required_amount},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        format_currency,
    },
};

/// The smallest amount that can be deposited or withdrawn.
pub const MINIMUM_AMOUNT: f64 = 0.01;

/// The transaction dialog's fields as submitted by the browser.
///
/// The hidden fields are kept as text so that a tampered value is reported
/// by the handler rather than rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub amount: String,
}

impl TransactionForm {
    /// An empty form for moving money into or out of `account_id`.
    pub fn new(account_id: AccountId, kind: TransactionKind) -> Self {
        Self {
            account_id: account_id.to_string(),
            kind: kind.path_segment().to_owned(),
            amount: String::new(),
        }
    }

    /// The account and kind of transaction named by the hidden fields, or
    /// `None` if either does not parse.
    pub fn target(&self) -> Option<(AccountId, TransactionKind)> {
        let account_id = self.account_id.trim().parse().ok()?;
        let kind = TransactionKind::from_path_segment(self.kind.trim())?;

        Some((account_id, kind))
    }

    /// Parse the amount, which must be a number of at least [MINIMUM_AMOUNT].
    pub fn validate(&self) -> Result<f64, FieldErrors> {
        let mut errors = FieldErrors::new();

        match required_amount(&self.amount, MINIMUM_AMOUNT, "amount", &mut errors) {
            Some(amount) => Ok(amount),
            None => Err(errors),
        }
    }
}

fn transaction_form_view(
    kind: TransactionKind,
    form: &TransactionForm,
    account: Option<&Account>,
    errors: &FieldErrors,
) -> Markup {
    let editor = TRANSACTION_EDITOR.selector();
    let submit_label = match kind {
        TransactionKind::Deposit => "Deposit",
        TransactionKind::Withdraw => "Withdraw",
    };

    html!(
        form
            id=(TRANSACTION_FORM)
            hx-post=(endpoints::PROCESS_TRANSACTION)
            hx-target=(editor)
            hx-target-422=(editor)
            hx-target-error=(ALERT_CONTAINER.selector())
            class="w-full space-y-4"
        {
            input type="hidden" name="account_id" value=(form.account_id);
            input type="hidden" name="kind" value=(kind);

            @if let Some(account) = account {
                div class="text-sm"
                {
                    p data-field="holder-name"
                    { (account.holder_name) " (" (account.account_number) ")" }

                    p
                    {
                        "Current Balance: "
                        span id=(CURRENT_BALANCE) class="font-semibold tabular-nums"
                        { (format_currency(account.balance)) }
                    }
                }
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper"
                {
                    input
                        id="amount"
                        type="number"
                        name="amount"
                        step="0.01"
                        min=(MINIMUM_AMOUNT)
                        placeholder="0.00"
                        value=(form.amount)
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                (errors.render("amount"))
            }

            div class="flex gap-4 pt-2"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_label) }

                button
                    type="button"
                    class=(BUTTON_SECONDARY_STYLE)
                    onclick="this.closest('[data-dialog]').remove()"
                {
                    "Cancel"
                }
            }
        }
    )
}

/// Render the transaction dialog for `form`.
///
/// `account` is the cached account the form refers to, if it is still cached.
pub(crate) fn transaction_dialog_view(
    dialog: &Dialog,
    kind: TransactionKind,
    form: &TransactionForm,
    account: Option<&Account>,
    errors: &FieldErrors,
) -> Markup {
    dialog.show(
        kind.title(),
        &transaction_form_view(kind, form, account, errors),
    )
}

fn open_transaction_dialog(
    state: &AppState,
    account_id: AccountId,
    kind: TransactionKind,
) -> Response {
    let Some(account) = state.cache.find(account_id) else {
        tracing::debug!("cannot {kind} for account {account_id}, it is not in the cache");
        return no_swap();
    };

    transaction_dialog_view(
        &state.transaction_editor,
        kind,
        &TransactionForm::new(account_id, kind),
        Some(&account),
        &FieldErrors::new(),
    )
    .into_response()
}

/// Open the deposit dialog for the cached account `account_id`.
pub async fn get_deposit_dialog(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Response {
    open_transaction_dialog(&state, account_id, TransactionKind::Deposit)
}

/// Open the withdrawal dialog for the cached account `account_id`.
pub async fn get_withdraw_dialog(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Response {
    open_transaction_dialog(&state, account_id, TransactionKind::Withdraw)
}
