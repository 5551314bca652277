// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Data: the data source adapter.
//!
//! Everything that touches the outside world on the way into the pipeline
//! lives here, keeping the core crates pure:
//!
//! - [`Document`] is the serde model of the wire format — nested nodes of
//!   `{ name, category?, value?, children? }`. The production funding
//!   document encodes values as JSON strings, so `value` accepts a number
//!   or a numeric string and coerces explicitly; anything else is a decode
//!   error.
//! - [`fetch`] performs the single blocking HTTP GET of the document. One
//!   shot, whole body, no retries; failures propagate to the caller, which
//!   has no recovery path by design.
//! - [`parse_str`] / [`parse_reader`] decode local documents, for offline
//!   rendering and tests.
//! - [`write_selector_flag`] emits the host-shell signal — a single
//!   write-only key/value pair that nothing in this system reads back.
//!
//! The adapter hands the rest of the pipeline a
//! [`canopy_hierarchy::Node`], so nothing downstream depends on serde or
//! the transport.

mod document;
mod selector;

use std::io::Read;

use canopy_hierarchy::Node;
use thiserror::Error;

pub use document::Document;
pub use selector::{SELECTOR_KEY, SELECTOR_VALUE, write_selector_flag};

/// The fixed funding-data endpoint.
pub const DEFAULT_DATA_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/kickstarter-funding-data.json";

/// Errors from fetching or decoding a document.
#[derive(Debug, Error)]
pub enum DataError {
    /// The HTTP request failed or returned a non-success status.
    #[error("fetching document failed")]
    Http(#[from] ureq::Error),
    /// The response body was not a valid document.
    #[error("decoding document failed")]
    Json(#[from] serde_json::Error),
    /// Reading or writing a local file failed.
    #[error("document I/O failed")]
    Io(#[from] std::io::Error),
}

/// Fetches and decodes the funding document at `url`.
///
/// A single blocking GET of the whole body. There is no retry and no
/// recovery: network failures surface as [`DataError::Http`].
pub fn fetch(url: &str) -> Result<Node, DataError> {
    let mut response = ureq::get(url).call()?;
    let body = response.body_mut().read_to_string()?;
    parse_str(&body)
}

/// Decodes a document from a JSON string.
pub fn parse_str(json: &str) -> Result<Node, DataError> {
    let document: Document = serde_json::from_str(json)?;
    Ok(document.into())
}

/// Decodes a document from a reader (for local files).
pub fn parse_reader(mut reader: impl Read) -> Result<Node, DataError> {
    let mut body = String::new();
    reader.read_to_string(&mut body)?;
    parse_str(&body)
}
