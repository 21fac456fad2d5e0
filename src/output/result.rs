//! Result panels: the raw JSON shown after each action.

use serde_json::Value;

use crate::models::RequestResult;

/// Content of one result area.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub is_error: bool,
    pub data: Value,
}

impl ResultPanel {
    pub fn success(data: Value) -> Self {
        Self { is_error: false, data }
    }

    pub fn error(data: Value) -> Self {
        Self { is_error: true, data }
    }

    /// Panel for a request outcome: the body, flagged by `!ok`.
    pub fn from_result(result: &RequestResult) -> Self {
        Self {
            is_error: !result.ok,
            data: result.data.clone(),
        }
    }

    /// CSS class used by the HTML result area.
    pub fn css_class(&self) -> &'static str {
        if self.is_error { "error" } else { "success" }
    }
}

/// Pretty-print a JSON value with two-space indentation.
pub fn format_result(data: &Value) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn format_uses_two_space_indent() {
        let out = format_result(&json!({"id": "1", "name": "A"}));
        assert_eq!(out, "{\n  \"id\": \"1\",\n  \"name\": \"A\"\n}");
    }

    #[test]
    fn panel_from_failed_result_is_error() {
        let panel = ResultPanel::from_result(&RequestResult::transport_failure("boom"));
        assert!(panel.is_error);
        assert_eq!(panel.css_class(), "error");
        assert_eq!(panel.data["error"], "boom");
    }

    #[test]
    fn panel_from_ok_result_is_success() {
        let panel = ResultPanel::from_result(&RequestResult::from_response(200, json!({"status": "ok"})));
        assert!(!panel.is_error);
        assert_eq!(panel.css_class(), "success");
    }
}
