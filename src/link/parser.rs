//! Startup URL parsing.
//!
//! # Responsibilities
//! - Split a raw URL into scheme, path, and decoded query map
//! - Decode query pairs per standard URL query-encoding rules
//! - Surface a ParseFailure for inputs that are not URLs at all

use std::collections::HashMap;

use thiserror::Error;
use url::Url;

/// A startup URL split into the parts the router cares about.
///
/// Immutable once constructed. The query map holds decoded plain-text
/// keys and values; duplicate keys resolve to the last occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLink {
    /// URL scheme, lowercased by the parser (e.g. `rnbench`).
    pub scheme: String,

    /// Path component. Starts with `/` when the URL had one, otherwise
    /// the empty string.
    pub path: String,

    /// Decoded query parameters. Insertion order is irrelevant.
    pub query: HashMap<String, String>,
}

/// The input was not syntactically a URL.
#[derive(Debug, Error)]
#[error("not a parseable URL: {0}")]
pub struct ParseFailure(#[from] url::ParseError);

/// Parse a raw startup URL.
///
/// Pure function, no side effects. Query decoding is best-effort:
/// malformed percent sequences pass through verbatim and undecodable
/// bytes become U+FFFD, so a mangled query never prevents the path from
/// routing. A key without `=` maps to the empty string.
///
/// # Errors
///
/// Returns [`ParseFailure`] when `raw` has no scheme separator or is
/// otherwise not a URL (the empty string included).
pub fn parse(raw: &str) -> Result<ParsedLink, ParseFailure> {
    let url = Url::parse(raw)?;

    // into_owned + collect: later occurrences of a key overwrite earlier
    // ones, which gives last-write-wins for duplicates.
    let query: HashMap<String, String> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    Ok(ParsedLink {
        scheme: url.scheme().to_string(),
        path: url.path().to_string(),
        query,
    })
}
