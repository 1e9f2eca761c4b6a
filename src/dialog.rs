//! Modal dialogs rendered into a fixed container on the dashboard page.
//!
//! A dialog is shown by swapping its markup into the container and closed by
//! swapping the container's contents out again.

use axum::response::{IntoResponse, Response};
use axum_htmx::{HxReswap, SwapOption};
use maud::{Markup, html};

use crate::elements::ElementId;

/// A modal dialog bound to a container element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialog {
    container: ElementId,
    title: ElementId,
}

impl Dialog {
    pub const fn new(container: ElementId, title: ElementId) -> Self {
        Self { container, title }
    }

    /// Render the dialog with `title` and `body`, to be swapped into the container.
    pub fn show(&self, title: &str, body: &Markup) -> Markup {
        html!(
            div
                class="fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50 px-4"
                data-dialog=(self.container)
            {
                dialog
                    open
                    aria-labelledby=(self.title)
                    class="relative w-full max-w-md rounded-lg bg-white p-6 shadow dark:bg-gray-800 text-gray-900 dark:text-white"
                {
                    header class="flex items-center justify-between mb-4"
                    {
                        h2 id=(self.title) class="text-xl font-bold" { (title) }

                        button
                            type="button"
                            aria-label="Close"
                            onclick="this.closest('[data-dialog]').remove()"
                        {
                            "×"
                        }
                    }

                    (body)
                }
            }
        )
    }

    /// The contents of the container once the dialog has closed.
    pub fn close(&self) -> Markup {
        html!()
    }
}

/// A response that leaves the page untouched, for when a dialog cannot be opened.
pub fn no_swap() -> Response {
    (HxReswap(SwapOption::None), ()).into_response()
}
