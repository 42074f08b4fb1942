// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nxqa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nxqa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Query service boundary.
//!
//! The panel talks to the backend through [`QueryService`]; the production
//! implementation is [`HttpQueryService`], and [`DemoQueryService`] provides a
//! canned corpus for offline use.

pub mod demo;
pub mod http;

pub use demo::DemoQueryService;
pub use http::HttpQueryService;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{QueryRequest, QueryResult};

/// Relative path of the query endpoint on the backend.
pub const QUERY_PATH: &str = "NXLinkQA/query";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Body(#[from] serde_json::Error),
    /// The backend reported a failure; `message` is shown to the user verbatim.
    #[error("{message}")]
    Service { status: u16, message: String },
}

#[async_trait]
pub trait QueryService: Send + Sync {
    async fn query(&self, request: QueryRequest) -> Result<QueryResult, QueryError>;
}
