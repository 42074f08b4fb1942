// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nxqa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nxqa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire data model for the NXLink QA query endpoint.

pub mod recall;

pub use recall::{ErrorBody, QueryRequest, QueryResponse, QueryResult, RecallItem};
