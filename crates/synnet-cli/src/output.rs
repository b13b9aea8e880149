//! Output formatting utilities

use synnet_protocol::Response;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Render a response on a single line
pub fn format_response(response: &Response, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string()),
        OutputFormat::Text => response.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synnet_protocol::{CommandKind, Payload};

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from("anything"), OutputFormat::Text);
    }

    #[test]
    fn test_format_response() {
        let response = Response::new(CommandKind::Lca, Payload::Ancestors(Some(vec![3])));
        assert_eq!(
            format_response(&response, OutputFormat::Json),
            r#"{"recognized_command":"lca","result":[3]}"#
        );
        assert_eq!(
            format_response(&response, OutputFormat::Text),
            "{recognized_command: lca, result: [3]}"
        );
    }
}
