// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text formats.
//!
//! Markdown procedure and I/O tables are read (and steps written back); flowchart graphs are
//! written as Graphviz DOT.

pub mod dot;
pub mod markdown;

pub use dot::export_dot;
pub use markdown::{export_steps, parse_io_events, parse_steps};
