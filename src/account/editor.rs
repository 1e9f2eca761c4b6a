//! The dialog for adding and editing accounts.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState,
    account::{Account, AccountId, AccountRecord, AccountType},
    dialog::{Dialog, no_swap},
    elements::{ACCOUNT_EDITOR, ACCOUNT_FORM, ALERT_CONTAINER},
    endpoints,
    form::{FieldErrors, required_amount, required_text},
    html::{BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

const ADD_TITLE: &str = "Add New Account";
const EDIT_TITLE: &str = "Edit Account";

/// The account editor's fields as submitted by the browser.
///
/// An empty `account_id` means a new account is being created.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AccountForm {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub holder_name: String,
    #[serde(default)]
    pub account_type: String,
    #[serde(default)]
    pub balance: String,
}

impl AccountForm {
    /// The form pre-filled with the stored values of `account`.
    pub fn from_account(account: &Account) -> Self {
        Self {
            account_id: account.id.to_string(),
            account_number: account.account_number.clone(),
            holder_name: account.holder_name.clone(),
            account_type: account.account_type.clone(),
            balance: account.balance.to_string(),
        }
    }

    fn is_edit(&self) -> bool {
        !self.account_id.trim().is_empty()
    }

    /// Check the fields and build the record to send to the accounts API.
    ///
    /// Returns the id of the account being edited, or `None` for a new account.
    pub fn validate(&self) -> Result<(Option<AccountId>, AccountRecord), FieldErrors> {
        let mut errors = FieldErrors::new();

        let account_id = match self.account_id.trim() {
            "" => None,
            id => match id.parse::<AccountId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push("account_id", "Invalid account id.");
                    None
                }
            },
        };
        let account_number = required_text(&self.account_number, "account_number", &mut errors);
        let holder_name = required_text(&self.holder_name, "holder_name", &mut errors);
        let account_type = required_text(&self.account_type, "account_type", &mut errors);
        let balance = required_amount(&self.balance, 0.0, "balance", &mut errors);

        match (account_number, holder_name, account_type, balance) {
            (Some(account_number), Some(holder_name), Some(account_type), Some(balance))
                if errors.is_empty() =>
            {
                Ok((
                    account_id,
                    AccountRecord {
                        account_number: account_number.to_owned(),
                        holder_name: holder_name.to_owned(),
                        account_type: account_type.to_owned(),
                        balance,
                    },
                ))
            }
            _ => Err(errors),
        }
    }
}

fn account_type_options(account_type: &str) -> Markup {
    let selected_type = AccountType::from_label(account_type);

    html!(
        option value="" disabled selected[account_type.is_empty()] { "Select account type" }

        @for known_type in AccountType::KNOWN {
            @let is_selected = known_type == selected_type;
            // Stored spelling, e.g. "Savings".
            @let value = if is_selected { account_type } else { known_type.label() };
            option value=(value) selected[is_selected] { (known_type.display_name()) }
        }

        @if let AccountType::Other(other) = &selected_type {
            @if !other.is_empty() {
                option value=(other) selected { (other) }
            }
        }
    )
}

fn account_form_view(form: &AccountForm, errors: &FieldErrors) -> Markup {
    let is_edit = form.is_edit();
    let editor = ACCOUNT_EDITOR.selector();

    html!(
        form
            id=(ACCOUNT_FORM)
            hx-post=(endpoints::SAVE_ACCOUNT)
            hx-target=(editor)
            hx-target-422=(editor)
            hx-target-error=(ALERT_CONTAINER.selector())
            class="w-full space-y-4"
        {
            input type="hidden" name="account_id" value=(form.account_id);
            (errors.render("account_id"))

            div
            {
                label for="account_number" class=(FORM_LABEL_STYLE) { "Account Number" }

                input
                    id="account_number"
                    type="text"
                    name="account_number"
                    placeholder="ACC001"
                    value=(form.account_number)
                    required
                    readonly[is_edit]
                    class=(FORM_TEXT_INPUT_STYLE);

                (errors.render("account_number"))
            }

            div
            {
                label for="holder_name" class=(FORM_LABEL_STYLE) { "Account Holder" }

                input
                    id="holder_name"
                    type="text"
                    name="holder_name"
                    placeholder="Jane Doe"
                    value=(form.holder_name)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);

                (errors.render("holder_name"))
            }

            div
            {
                label for="account_type" class=(FORM_LABEL_STYLE) { "Account Type" }

                select
                    id="account_type"
                    name="account_type"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    (account_type_options(&form.account_type))
                }

                (errors.render("account_type"))
            }

            div
            {
                label for="balance" class=(FORM_LABEL_STYLE) { "Balance" }

                div class="input-wrapper"
                {
                    input
                        id="balance"
                        type="number"
                        name="balance"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        value=(form.balance)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                (errors.render("balance"))
            }

            div class="flex gap-4 pt-2"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Account" }

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

/// Render the account editor holding `form`, titled for adding or editing.
pub(crate) fn account_editor_view(
    dialog: &Dialog,
    form: &AccountForm,
    errors: &FieldErrors,
) -> Markup {
    let title = if form.is_edit() { EDIT_TITLE } else { ADD_TITLE };

    dialog.show(title, &account_form_view(form, errors))
}

/// Open the account editor with every field blank.
pub async fn get_new_account_dialog(State(state): State<AppState>) -> Response {
    account_editor_view(
        &state.account_editor,
        &AccountForm::default(),
        &FieldErrors::new(),
    )
    .into_response()
}

/// Open the account editor pre-filled with the cached account `account_id`.
///
/// Does nothing if the account is not in the cache.
pub async fn get_edit_account_dialog(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Response {
    let Some(account) = state.cache.find(account_id) else {
        tracing::debug!("cannot edit account {account_id}, it is not in the cache");
        return no_swap();
    };

    account_editor_view(
        &state.account_editor,
        &AccountForm::from_account(&account),
        &FieldErrors::new(),
    )
    .into_response()
}
