// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tolerant readers for LLM-generated Markdown tables.
//!
//! Parsing never fails. Unrecognized input degrades to an empty step list or to the default
//! `Début`/`Fin` labels.

mod export;
mod io_events;
mod steps;
pub(crate) mod table;

pub use export::{export_steps, EMPTY_STEPS_MESSAGE};
pub use io_events::parse_io_events;
pub use steps::parse_steps;
