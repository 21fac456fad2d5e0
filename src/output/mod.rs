//! Output renderers: HTML cards, styled terminal text, JSON.
//!
//! Everything here is pure formatting. Turning a [`UserListView`] or a
//! [`ResultPanel`] into a string never touches the network or stdout.

pub mod html;
pub mod json;
pub mod result;
pub mod terminal;

use strum::{Display, EnumString};

use crate::config::OutputFormat;
use crate::messages::Messages;
use crate::models::{RequestResult, User};

pub use result::ResultPanel;

/// Trait for rendering console state to an output format.
pub trait OutputRenderer {
    /// Render the user list area.
    fn render_users(&self, view: &UserListView, messages: &Messages) -> String;

    /// Render one result panel.
    fn render_result(&self, panel: &ResultPanel) -> String;
}

/// Renderer for a configured output format.
pub fn renderer_for(format: OutputFormat) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Terminal => Box::new(terminal::TerminalRenderer),
        OutputFormat::Html => Box::new(html::HtmlRenderer),
        OutputFormat::Json => Box::new(json::JsonRenderer),
    }
}

/// What the user list area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserListView {
    /// A load is in flight.
    #[default]
    Loading,
    /// The API returned an empty list.
    Empty,
    Users(Vec<User>),
    /// The load failed. `None` means no server message was available.
    Error(Option<String>),
}

impl UserListView {
    /// Classify the result of `GET /api/users`.
    pub fn from_result(result: &RequestResult) -> Self {
        if let (true, Some(items)) = (result.ok, result.data.as_array()) {
            if items.is_empty() {
                return UserListView::Empty;
            }
            return match serde_json::from_value::<Vec<User>>(result.data.clone()) {
                Ok(users) => UserListView::Users(users),
                Err(e) => {
                    tracing::warn!(error = %e, "user list contains malformed entries");
                    UserListView::Error(None)
                }
            };
        }
        UserListView::Error(result.error_message().map(str::to_string))
    }

    /// Users currently listed, if any.
    pub fn users(&self) -> &[User] {
        match self {
            UserListView::Users(users) => users,
            _ => &[],
        }
    }

    /// Look up a listed user by id.
    pub fn find(&self, id: &str) -> Option<&User> {
        self.users().iter().find(|u| u.id == id)
    }

    /// Error text for display, falling back to the generic message.
    pub fn error_text<'a>(message: &'a Option<String>, messages: &'a Messages) -> &'a str {
        message.as_deref().unwrap_or(messages.load_failed)
    }
}

/// Action bound to a user card, keyed by the user's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Prefill the update form with this user.
    Edit(String),
    /// Delete this user after confirmation.
    Delete(String),
}

/// Value of the `data-action` attribute on a card button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ActionKind {
    Edit,
    Delete,
}

impl CardAction {
    /// Rebuild an action from a card button's `data-action` and
    /// `data-user-id` attributes.
    pub fn parse(action: &str, user_id: &str) -> Option<Self> {
        match action.parse::<ActionKind>().ok()? {
            ActionKind::Edit => Some(CardAction::Edit(user_id.to_string())),
            ActionKind::Delete => Some(CardAction::Delete(user_id.to_string())),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            CardAction::Edit(_) => ActionKind::Edit,
            CardAction::Delete(_) => ActionKind::Delete,
        }
    }

    pub fn user_id(&self) -> &str {
        match self {
            CardAction::Edit(id) | CardAction::Delete(id) => id,
        }
    }
}
