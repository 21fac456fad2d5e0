//! Terminal renderer: styled flowing text, one block per user.

use colored::Colorize;

use crate::messages::Messages;
use crate::output::result::format_result;
use crate::output::{OutputRenderer, ResultPanel, UserListView};

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render_users(&self, view: &UserListView, messages: &Messages) -> String {
        let users = match view {
            UserListView::Loading => return format!("{}\n", "  …".dimmed()),
            UserListView::Empty => return format!("  {}\n", messages.empty_list.dimmed()),
            UserListView::Error(message) => {
                return format!(
                    " {} {}: {}\n",
                    "✖".red().bold(),
                    messages.error_prefix.red().bold(),
                    UserListView::error_text(message, messages),
                );
            }
            UserListView::Users(users) => users,
        };

        let mut output = String::new();
        for user in users {
            output.push_str(&format!(" 👤 {}\n", user.name.bold()));
            output.push_str(&format!("   {} {}\n", format!("{}:", messages.label_id).dimmed(), user.id));
            output.push_str(&format!(
                "   {} {}\n",
                format!("{}:", messages.label_email).dimmed(),
                user.email
            ));
            output.push_str(&format!(
                "   {} {}\n",
                format!("{}:", messages.label_role).dimmed(),
                user.display_role().cyan()
            ));
            output.push('\n');
        }

        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " {} {}\n",
            users.len().to_string().bold(),
            messages.users_noun(users.len()),
        ));
        output
    }

    fn render_result(&self, panel: &ResultPanel) -> String {
        let icon = if panel.is_error {
            "✖".red().bold()
        } else {
            "✔".green().bold()
        };
        let body = format_result(&panel.data);
        let body = if panel.is_error { body.red() } else { body.normal() };
        format!(" {icon}\n{body}\n")
    }
}
