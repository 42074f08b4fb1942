// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nxqa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nxqa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Request and response shapes exchanged with the query endpoint.
//!
//! Every field is an opaque display value; nothing is validated or normalized
//! here. `faq_recall` order is relevance-ranked by the backend and must be
//! preserved for display.

use serde::{Deserialize, Serialize};

/// One query submission. Created per activation of the submit affordance,
/// sent as form data, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }
}

/// Response envelope produced by the backend on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub result: QueryResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub answer: String,
    pub faq_recall: Vec<RecallItem>,
}

/// One FAQ candidate returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecallItem {
    pub score: f64,
    pub question: String,
    pub answer: String,
    pub filename: String,
    pub header: String,
    pub product: String,
}

/// Body shape optionally carried by failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
