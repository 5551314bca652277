// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-shell selector flag.
//!
//! The surrounding application shell watches a tiny state file to learn
//! which visualization a render pass produced. The flag is write-only from
//! this side; nothing here ever reads it back.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::DataError;

/// Key of the selector flag.
pub const SELECTOR_KEY: &str = "project_selector";

/// Value identifying this visualization.
pub const SELECTOR_VALUE: &str = "tree-map";

/// Writes the selector flag as a one-entry JSON object at `path`.
pub fn write_selector_flag(path: &Path) -> Result<(), DataError> {
    let flag = BTreeMap::from([(SELECTOR_KEY, SELECTOR_VALUE)]);
    fs::write(path, serde_json::to_string(&flag)?)?;
    Ok(())
}
