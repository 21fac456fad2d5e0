//! HTML renderer: user cards and result areas as markup fragments.
//!
//! Card buttons carry `data-action` and `data-user-id` attributes
//! instead of inline handlers; a host page binds them by delegation and
//! feeds the pair to [`CardAction::parse`](super::CardAction::parse).

use crate::messages::Messages;
use crate::models::User;
use crate::output::result::format_result;
use crate::output::{ActionKind, OutputRenderer, ResultPanel, UserListView};

/// HTML fragment renderer.
pub struct HtmlRenderer;

impl OutputRenderer for HtmlRenderer {
    fn render_users(&self, view: &UserListView, messages: &Messages) -> String {
        match view {
            UserListView::Loading => r#"<div class="loading"></div>"#.to_string(),
            UserListView::Empty => format!(
                r#"<p class="empty-state">{}</p>"#,
                escape(messages.empty_list)
            ),
            UserListView::Error(message) => format!(
                r#"<p class="error">{}: {}</p>"#,
                escape(messages.error_prefix),
                escape(UserListView::error_text(message, messages)),
            ),
            UserListView::Users(users) => users
                .iter()
                .map(|u| render_card(u, messages))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn render_result(&self, panel: &ResultPanel) -> String {
        format!(
            r#"<div class="result show {}"><pre>{}</pre></div>"#,
            panel.css_class(),
            escape(&format_result(&panel.data)),
        )
    }
}

fn render_card(user: &User, messages: &Messages) -> String {
    let id = escape(&user.id);
    let mut card = String::new();
    card.push_str(&format!("<div class=\"user-card\" data-user-id=\"{id}\">\n"));
    card.push_str(&format!("  <h3>👤 {}</h3>\n", escape(&user.name)));
    card.push_str(&format!(
        "  <p><strong>{}:</strong> {id}</p>\n",
        escape(messages.label_id)
    ));
    card.push_str(&format!(
        "  <p><strong>{}:</strong> {}</p>\n",
        escape(messages.label_email),
        escape(&user.email)
    ));
    card.push_str(&format!(
        "  <p><strong>{}:</strong> {}</p>\n",
        escape(messages.label_role),
        escape(user.display_role())
    ));
    card.push_str("  <div class=\"user-actions\">\n");
    card.push_str(&format!(
        "    <button class=\"btn btn-warning\" data-action=\"{}\" data-user-id=\"{id}\">{}</button>\n",
        ActionKind::Edit,
        escape(messages.edit_button)
    ));
    card.push_str(&format!(
        "    <button class=\"btn btn-danger\" data-action=\"{}\" data-user-id=\"{id}\">{}</button>\n",
        ActionKind::Delete,
        escape(messages.delete_button)
    ));
    card.push_str("  </div>\n");
    card.push_str("</div>");
    card
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Locale;
    use serde_json::json;

    fn user(id: &str, name: &str, email: &str, role: Option<&str>) -> User {
        User {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.map(String::from),
        }
    }

    #[test]
    fn empty_list_renders_message_and_no_cards() {
        let messages = Locale::En.messages();
        let out = HtmlRenderer.render_users(&UserListView::Empty, messages);
        assert!(out.contains(messages.empty_list));
        assert!(!out.contains("user-card"));
    }

    #[test]
    fn single_user_renders_one_card() {
        let view = UserListView::Users(vec![user("1", "A", "a@x.com", None)]);
        let out = HtmlRenderer.render_users(&view, Locale::En.messages());
        assert_eq!(out.matches(r#"class="user-card""#).count(), 1);
        assert!(out.contains("<h3>👤 A</h3>"));
        assert!(out.contains("<strong>ID:</strong> 1</p>"));
        assert!(out.contains("a@x.com"));
        assert!(out.contains("<strong>Role:</strong> N/A</p>"));
    }

    #[test]
    fn buttons_bind_by_data_attributes() {
        let view = UserListView::Users(vec![user("42", "A", "a@x.com", Some("admin"))]);
        let out = HtmlRenderer.render_users(&view, Locale::En.messages());
        assert!(out.contains(r#"data-action="edit" data-user-id="42""#));
        assert!(out.contains(r#"data-action="delete" data-user-id="42""#));
        assert!(!out.contains("onclick"));
    }

    #[test]
    fn user_values_are_escaped() {
        let view = UserListView::Users(vec![user(
            "1\"><x",
            "<script>alert(1)</script>",
            "a@x.com",
            Some("O'Brien & co"),
        )]);
        let out = HtmlRenderer.render_users(&view, Locale::En.messages());
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(out.contains(r#"data-user-id="1&quot;&gt;&lt;x""#));
        assert!(out.contains("O&#39;Brien &amp; co"));
    }

    #[test]
    fn error_uses_server_message_or_fallback() {
        let messages = Locale::En.messages();
        let out = HtmlRenderer.render_users(&UserListView::Error(Some("db down".into())), messages);
        assert_eq!(out, r#"<p class="error">Error: db down</p>"#);

        let out = HtmlRenderer.render_users(&UserListView::Error(None), messages);
        assert!(out.contains(messages.load_failed));
    }

    #[test]
    fn thai_locale_uses_thai_strings() {
        let messages = Locale::Th.messages();
        let out = HtmlRenderer.render_users(&UserListView::Empty, messages);
        assert!(out.contains("ไม่มีผู้ใช้ในระบบ"));
    }

    #[test]
    fn loading_renders_spinner() {
        let out = HtmlRenderer.render_users(&UserListView::Loading, Locale::En.messages());
        assert_eq!(out, r#"<div class="loading"></div>"#);
    }

    #[test]
    fn result_panel_wraps_pretty_json() {
        let panel = ResultPanel::error(json!({"error": "<bad>"}));
        let out = HtmlRenderer.render_result(&panel);
        assert!(out.starts_with(r#"<div class="result show error"><pre>"#));
        assert!(out.contains("&quot;error&quot;: &quot;&lt;bad&gt;&quot;"));
    }
}
