// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types returned by the form relay.

use serde::Deserialize;

/// Error body sent by the relay on rejected submissions.
///
/// Either shape may appear: a list of field errors or a single message.
#[derive(Debug, Default, Deserialize)]
pub struct RelayErrorResponse {
    #[serde(default)]
    pub errors: Vec<RelayErrorDetail>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RelayErrorDetail {
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
}

impl RelayErrorResponse {
    /// Human-readable summary, or `None` if the body carried nothing useful.
    pub fn summary(&self) -> Option<String> {
        let mut parts: Vec<String> = self
            .errors
            .iter()
            .map(|d| match &d.field {
                Some(field) => format!("{field}: {}", d.message),
                None => d.message.clone(),
            })
            .collect();
        if let Some(error) = &self.error {
            parts.insert(0, error.clone());
        }
        (!parts.is_empty()).then(|| parts.join("; "))
    }
}
