// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Logigram: procedure tables to three-lane flowcharts and actor reports.
//!
//! LLM-generated Markdown procedure tables are parsed tolerantly into [`model::StepRecord`]s,
//! laid out as document / step / actor lanes and rendered to PNG, and aggregated per actor.

pub mod config;
pub mod format;
pub mod layout;
pub mod model;
pub mod render;
pub mod report;

pub use config::{Config, ConfigError};
pub use format::{export_dot, export_steps, parse_io_events, parse_steps};
pub use layout::{build_flowchart_graph, is_decision, layout_flowchart, wrap_words};
pub use render::{
    generate_flowchart, render_flowchart, FlowchartConfig, FlowchartImage, FlowchartRender,
    FlowchartRenderError,
};
pub use report::{aggregate, build_actor_report, summarize, ActorReport};

#[cfg(test)]
mod tests {
    use crate::model::fixtures::TWO_STEP_PROCEDURE;

    #[test]
    fn two_step_procedure_end_to_end() {
        let steps = crate::parse_steps(TWO_STEP_PROCEDURE);
        assert_eq!(steps.len(), 2);
        assert!(!crate::is_decision(steps[0].activity()));
        assert!(crate::is_decision(steps[1].activity()));

        let actors = crate::aggregate(&steps);
        assert_eq!(actors.len(), 2);
        assert!(actors.iter().all(|actor| actor.activity_count() == 1));
    }
}
