//! The dashboard page that every other route renders fragments into.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    elements::{ACCOUNT_EDITOR, ACCOUNTS_LIST, ALERT_CONTAINER, SUMMARY, TRANSACTION_EDITOR},
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, base, dollar_input_styles},
};

fn dashboard_view() -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-5xl space-y-6"
            {
                header class="flex justify-between flex-wrap items-end gap-4"
                {
                    h1 class="text-2xl font-bold" { "Bank Account Dashboard" }

                    div class="w-40"
                    {
                        button
                            type="button"
                            class=(BUTTON_PRIMARY_STYLE)
                            hx-get=(endpoints::NEW_ACCOUNT_DIALOG)
                            hx-target=(ACCOUNT_EDITOR.selector())
                            data-action="add-account"
                        {
                            "Add Account"
                        }
                    }
                }

                section
                    id=(SUMMARY)
                    hx-get=(endpoints::SUMMARY_FRAGMENT)
                    hx-trigger="load"
                {}

                section class="space-y-4"
                {
                    h2 class="text-xl font-semibold" { "Accounts" }

                    div
                        id=(ACCOUNTS_LIST)
                        hx-get=(endpoints::ACCOUNTS_FRAGMENT)
                        hx-trigger="load"
                        hx-target-error=(ALERT_CONTAINER.selector())
                    {
                        p class="text-gray-500 dark:text-gray-400" { "Loading accounts..." }
                    }
                }
            }
        }

        div id=(ACCOUNT_EDITOR) {}
        div id=(TRANSACTION_EDITOR) {}
    );

    base("Dashboard", &[dollar_input_styles()], &content)
}

/// Display the dashboard. The account list and totals load once the page is shown.
pub async fn get_dashboard_page() -> Response {
    dashboard_view().into_response()
}
