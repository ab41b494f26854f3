//! Response rendering for the `shellwords` binary.

use serde::Serialize;

use crate::config::OutputFormat;

/// Result of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Split {
        tokens: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        spans: Option<Vec<String>>,
    },
    Escape {
        escaped: String,
    },
    Join {
        line: String,
    },
}

impl Response {
    /// The items written in `lines` and `nul` formats.
    fn items(&self) -> Vec<&str> {
        match self {
            Response::Split { tokens, .. } => tokens.iter().map(String::as_str).collect(),
            Response::Escape { escaped } => vec![escaped.as_str()],
            Response::Join { line } => vec![line.as_str()],
        }
    }
}

/// Format a response for stdout.
pub fn format_response(
    response: &Response,
    format: OutputFormat,
    pretty: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(response)? + "\n"),
        OutputFormat::Json => Ok(serde_json::to_string(response)? + "\n"),
        OutputFormat::Lines => Ok(terminated(response, '\n')),
        OutputFormat::Nul => Ok(terminated(response, '\0')),
    }
}

fn terminated(response: &Response, terminator: char) -> String {
    let mut out = String::new();
    for item in response.items() {
        out.push_str(item);
        out.push(terminator);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_response() -> Response {
        Response::Split {
            tokens: vec!["a".to_string(), "b c".to_string()],
            spans: None,
        }
    }

    #[test]
    fn test_format_json() {
        let out = format_response(&split_response(), OutputFormat::Json, false).unwrap();
        assert_eq!(out, "{\"tokens\":[\"a\",\"b c\"]}\n");
    }

    #[test]
    fn test_format_json_with_spans() {
        let response = Response::Split {
            tokens: vec!["a".to_string()],
            spans: Some(vec!["a ".to_string()]),
        };
        let out = format_response(&response, OutputFormat::Json, false).unwrap();
        assert_eq!(out, "{\"tokens\":[\"a\"],\"spans\":[\"a \"]}\n");
    }

    #[test]
    fn test_format_pretty() {
        let out = format_response(&split_response(), OutputFormat::Json, true).unwrap();
        assert!(out.starts_with("{\n"));
        assert!(out.contains("\"tokens\""));
    }

    #[test]
    fn test_format_lines_and_nul() {
        let lines = format_response(&split_response(), OutputFormat::Lines, false).unwrap();
        assert_eq!(lines, "a\nb c\n");
        let nul = format_response(&split_response(), OutputFormat::Nul, false).unwrap();
        assert_eq!(nul, "a\0b c\0");
    }

    #[test]
    fn test_format_escape_and_join() {
        let escaped = Response::Escape {
            escaped: r"a\ b".to_string(),
        };
        assert_eq!(
            format_response(&escaped, OutputFormat::Json, false).unwrap(),
            "{\"escaped\":\"a\\\\ b\"}\n"
        );
        let joined = Response::Join {
            line: "x y".to_string(),
        };
        assert_eq!(
            format_response(&joined, OutputFormat::Lines, false).unwrap(),
            "x y\n"
        );
    }
}
