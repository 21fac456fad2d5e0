//! JSON output renderer.
//!
//! Lists render as a bare array of users; failures as `{"error": ...}`.

use serde_json::json;

use crate::messages::Messages;
use crate::output::result::format_result;
use crate::output::{OutputRenderer, ResultPanel, UserListView};

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render_users(&self, view: &UserListView, messages: &Messages) -> String {
        let output = match view {
            UserListView::Loading | UserListView::Empty => json!([]),
            UserListView::Users(users) => json!(users),
            UserListView::Error(message) => {
                json!({ "error": UserListView::error_text(message, messages) })
            }
        };
        format_result(&output)
    }

    fn render_result(&self, panel: &ResultPanel) -> String {
        format_result(&panel.data)
    }
}
