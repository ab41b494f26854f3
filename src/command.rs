//! Request dispatch.

use tracing::debug;

use crate::input::Request;
use crate::output::Response;
use crate::shell::{UnmatchedQuote, escape, join, split, split_with};

/// Run a request against the library.
pub fn execute(request: &Request) -> Result<Response, UnmatchedQuote> {
    debug!(op = request.op(), "executing request");
    let response = match request {
        Request::Split { line, raw: false } => Response::Split {
            tokens: split(line)?,
            spans: None,
        },
        Request::Split { line, raw: true } => {
            let mut spans = Vec::new();
            let tokens = split_with(line, |span| spans.push(span.to_string()))?;
            Response::Split {
                tokens,
                spans: Some(spans),
            }
        }
        Request::Escape { value } => Response::Escape {
            escaped: escape(value),
        },
        Request::Join { values } => Response::Join {
            line: join(values),
        },
    };
    Ok(response)
}
