// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nxqa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nxqa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Nxqa — terminal FAQ query panel for NXLink question-answering backends.
//!
//! The panel submits a query to `POST <endpoint>/NXLinkQA/query` and renders
//! the reply: a relevance-ranked FAQ recall table plus the synthesized answer.

pub mod client;
pub mod model;
pub mod tui;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
