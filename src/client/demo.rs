// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nxqa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nxqa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in offline query service with a canned FAQ corpus.
//!
//! Scoring is a naive token-overlap ratio, just enough to make the panel feel
//! alive without a backend. Zero-score entries are still returned so the
//! recall table always has rows to render.

use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;

use super::{QueryError, QueryService};
use crate::model::{QueryRequest, QueryResult, RecallItem};

const DEMO_PRODUCT: &str = "nxlink";
const DEMO_FALLBACK_ANSWER: &str = "No matching FAQ entry, try rephrasing the question.";

struct DemoEntry {
    question: &'static str,
    answer: &'static str,
    filename: &'static str,
    header: &'static str,
}

const DEMO_CORPUS: &[DemoEntry] = &[
    DemoEntry {
        question: "How do I reset my password?",
        answer: "Open the sign-in page, click \"forgot password\" and follow the mail link.",
        filename: "account.md",
        header: "Account",
    },
    DemoEntry {
        question: "How many accounts can one phone number register?",
        answer: "One phone number can register exactly one account.",
        filename: "account.md",
        header: "Registration",
    },
    DemoEntry {
        question: "Which identity documents are accepted for verification?",
        answer: "Government-issued documents: identity card, passport or driving licence.",
        filename: "verification.md",
        header: "Verification",
    },
    DemoEntry {
        question: "Where do I find the official registration page?",
        answer: "Use the official website only; registration there is free of charge.",
        filename: "registration.md",
        header: "Registration",
    },
    DemoEntry {
        question: "How do I contact customer support?",
        answer: "Use the in-app help center or mail support from your registered address.",
        filename: "support.md",
        header: "Support",
    },
];

pub struct DemoQueryService {
    latency: Duration,
}

impl DemoQueryService {
    pub fn new() -> Self {
        Self { latency: Duration::from_millis(300) }
    }

    /// Overrides the simulated backend latency. Tests use `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for DemoQueryService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryService for DemoQueryService {
    async fn query(&self, request: QueryRequest) -> Result<QueryResult, QueryError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut faq_recall: Vec<RecallItem> = DEMO_CORPUS
            .iter()
            .map(|entry| RecallItem {
                score: overlap_score(&request.query, entry.question),
                question: entry.question.to_owned(),
                answer: entry.answer.to_owned(),
                filename: entry.filename.to_owned(),
                header: entry.header.to_owned(),
                product: DEMO_PRODUCT.to_owned(),
            })
            .collect();
        // Stable sort keeps corpus order for equal scores.
        faq_recall.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        let answer = faq_recall
            .first()
            .filter(|item| item.score > 0.0)
            .map(|item| item.answer.clone())
            .unwrap_or_else(|| DEMO_FALLBACK_ANSWER.to_owned());

        tracing::info!(query = %request.query, rows = faq_recall.len(), "demo query answered");
        Ok(QueryResult { answer, faq_recall })
    }
}

/// Fraction of query tokens that also occur in the candidate question.
fn overlap_score(query: &str, question: &str) -> f64 {
    let query_tokens = tokens(query);
    if query_tokens.is_empty() {
        return 0.0;
    }

    let question_tokens: BTreeSet<String> = tokens(question).into_iter().collect();
    let hits = query_tokens.iter().filter(|token| question_tokens.contains(*token)).count();
    hits as f64 / query_tokens.len() as f64
}

fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
