// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::{
    generate_flowchart, render_flowchart, render_flowchart_dot, render_flowchart_svg,
    FlowchartConfig, FlowchartImage, FlowchartRender, FlowchartRenderError, RasterBackend,
};
use crate::model::fixtures::{credit_steps, CREDIT_IO_TABLE, CREDIT_PROCEDURE, TWO_STEP_PROCEDURE};
use crate::render::test_utils::decode_png;

fn config_with_title(title: &str) -> FlowchartConfig {
    FlowchartConfig { title: Some(title.to_owned()), ..FlowchartConfig::default() }
}

#[test]
fn empty_steps_report_an_error_and_no_image() {
    let result = render_flowchart(&[], "Début", "Fin", &FlowchartConfig::default());
    assert_eq!(result, Err(FlowchartRenderError::NoSteps));

    let (image, error) = result.into_pair();
    assert!(image.is_none());
    assert_eq!(error.as_deref(), Some("no steps could be extracted from the procedure"));
}

#[test]
fn builtin_backend_produces_a_png() {
    let image = render_flowchart(&credit_steps(), "Dépôt", "Notification", &FlowchartConfig::default())
        .expect("image");
    let (info, _) = decode_png(image.png());
    assert!(info.width > 400);
    assert!(info.height > 400);
}

#[test]
fn base64_round_trips_the_png() {
    let image = render_flowchart(&credit_steps(), "Début", "Fin", &FlowchartConfig::default())
        .expect("image");
    let decoded = STANDARD.decode(image.to_base64()).expect("base64");
    assert_eq!(decoded, image.png());

    let rendered: Result<FlowchartImage, FlowchartRenderError> = Ok(image.clone());
    let (encoded, error) = rendered.into_pair();
    assert_eq!(encoded, Some(image.to_base64()));
    assert!(error.is_none());
}

#[test]
fn missing_graphviz_program_is_a_backend_error() {
    let config = FlowchartConfig {
        backend: RasterBackend::Graphviz { program: "logigram-no-such-graphviz-binary".to_owned() },
        ..FlowchartConfig::default()
    };
    let err = render_flowchart(&credit_steps(), "Début", "Fin", &config).unwrap_err();
    let FlowchartRenderError::Backend(message) = err else {
        panic!("expected a backend error, got {err:?}");
    };
    assert!(message.contains("logigram-no-such-graphviz-binary"));
}

#[test]
fn svg_and_dot_carry_the_title_and_io_labels() {
    let config = config_with_title("Octroi de crédit");
    let svg = render_flowchart_svg(&credit_steps(), "Dépôt de la demande", "Notification", &config)
        .expect("svg");
    assert!(svg.contains(">Octroi de crédit</text>"));
    assert!(svg.contains(">Dépôt de la demande</tspan>"));

    let dot = render_flowchart_dot(&credit_steps(), "Dépôt", "Notification", &config).expect("dot");
    assert!(dot.contains("label=\"Octroi de crédit\""));
    assert!(dot.contains("start [label=\"Dépôt\""));
}

#[test]
fn generate_flowchart_runs_the_whole_pipeline() {
    let image = generate_flowchart(CREDIT_PROCEDURE, Some(CREDIT_IO_TABLE), &FlowchartConfig::default())
        .expect("image");
    assert!(image.png().starts_with(b"\x89PNG\r\n\x1a\n"));

    let image = generate_flowchart(TWO_STEP_PROCEDURE, None, &FlowchartConfig::default()).expect("image");
    assert!(!image.png().is_empty());
}

#[test]
fn generate_flowchart_without_a_table_fails_cleanly() {
    let (image, error) =
        generate_flowchart("Aucune procédure ici.", None, &FlowchartConfig::default()).into_pair();
    assert!(image.is_none());
    assert!(error.is_some());
}
