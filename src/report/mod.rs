// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Actor/activity reporting over parsed procedure steps.

pub mod actors;

pub use actors::{aggregate, build_actor_report, export_actor_table, split_actors, summarize, ActorReport};
