//! Browser command definitions.
//!
//! Fire-and-forget operations the Shell performs against the browsing
//! context. The core expects no output from either of them.

use crux_core::{capability::Operation, Command, Request};
use serde::{Deserialize, Serialize};

/// Operations the Shell performs against the browser window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BrowserOperation {
    /// Open a URL in a separate browsing context (popup window).
    OpenPopup { url: String },
    /// Scroll the viewport back to the top of the page.
    ScrollToTop,
}

impl Operation for BrowserOperation {
    type Output = ();
}

/// Open `url` in a popup window.
pub fn open_popup<Effect, Event>(url: impl Into<String>) -> Command<Effect, Event>
where
    Effect: Send + From<Request<BrowserOperation>> + 'static,
    Event: Send + 'static,
{
    Command::notify_shell(BrowserOperation::OpenPopup { url: url.into() }).into()
}

/// Scroll the viewport to the top.
pub fn scroll_to_top<Effect, Event>() -> Command<Effect, Event>
where
    Effect: Send + From<Request<BrowserOperation>> + 'static,
    Event: Send + 'static,
{
    Command::notify_shell(BrowserOperation::ScrollToTop).into()
}
