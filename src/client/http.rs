// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nxqa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nxqa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP implementation of the query service.
//!
//! Submits the query as a form-encoded POST and decodes the JSON envelope.
//! No retry, no timeout, no cancellation: a hung backend leaves the panel
//! busy until the transport gives up on its own.

use async_trait::async_trait;

use super::{QueryError, QueryService, QUERY_PATH};
use crate::model::{ErrorBody, QueryRequest, QueryResponse, QueryResult};

#[derive(Debug, Clone)]
pub struct HttpQueryService {
    client: reqwest::Client,
    url: String,
}

impl HttpQueryService {
    /// `endpoint` is the base URL of the backend, e.g. `http://127.0.0.1:12023`.
    pub fn new(endpoint: impl AsRef<str>) -> Self {
        let base = endpoint.as_ref().trim_end_matches('/');
        Self { client: reqwest::Client::new(), url: format!("{base}/{QUERY_PATH}") }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QueryService for HttpQueryService {
    async fn query(&self, request: QueryRequest) -> Result<QueryResult, QueryError> {
        let response = self
            .client
            .post(&self.url)
            .form(&[("query", request.query.as_str())])
            .send()
            .await
            .map_err(|err| {
                tracing::error!(url = %self.url, error = %err, "query transport failed");
                err
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|error_body| error_body.message)
                .unwrap_or_else(|| status.to_string());
            tracing::error!(
                url = %self.url,
                status = status.as_u16(),
                payload = %body,
                "query failed"
            );
            return Err(QueryError::Service { status: status.as_u16(), message });
        }

        let decoded: QueryResponse = serde_json::from_str(&body).map_err(|err| {
            tracing::error!(
                url = %self.url,
                status = status.as_u16(),
                payload = %body,
                "query response did not decode"
            );
            err
        })?;
        tracing::info!(
            url = %self.url,
            status = status.as_u16(),
            payload = %body,
            "query succeeded"
        );
        Ok(decoded.result)
    }
}
