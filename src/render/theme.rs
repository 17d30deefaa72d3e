// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::model::graph::FlowNodeKind;

/// Flowchart palette. Colours are CSS hex strings (`#rgb`, `#rrggbb`, `#rrggbbaa`) or one of
/// `white`, `black`, `transparent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub font_family: String,
    pub background: String,
    pub steps: String,
    pub steps_text: String,
    pub documents: String,
    pub documents_border: String,
    pub documents_text: String,
    pub actors: String,
    pub actors_border: String,
    pub actors_text: String,
    pub start: String,
    pub end: String,
    pub terminal_text: String,
    pub flow_main: String,
    pub flow_connect: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_owned(),
            background: "#FAFBFC".to_owned(),
            steps: "#2C5282".to_owned(),
            steps_text: "white".to_owned(),
            documents: "#E8F4FD".to_owned(),
            documents_border: "#2C5282".to_owned(),
            documents_text: "#1A202C".to_owned(),
            actors: "#FFF2CC".to_owned(),
            actors_border: "#B7791F".to_owned(),
            actors_text: "#744210".to_owned(),
            start: "#22543D".to_owned(),
            end: "#9B2C2C".to_owned(),
            terminal_text: "white".to_owned(),
            flow_main: "#1A202C".to_owned(),
            flow_connect: "#4A5568".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle<'a> {
    pub fill: &'a str,
    pub stroke: &'a str,
    pub text: &'a str,
}

impl Theme {
    pub fn node_style(&self, kind: FlowNodeKind) -> NodeStyle<'_> {
        match kind {
            FlowNodeKind::Start => NodeStyle {
                fill: &self.start,
                stroke: &self.start,
                text: &self.terminal_text,
            },
            FlowNodeKind::End => NodeStyle {
                fill: &self.end,
                stroke: &self.end,
                text: &self.terminal_text,
            },
            FlowNodeKind::Step { .. } => NodeStyle {
                fill: &self.steps,
                stroke: &self.steps,
                text: &self.steps_text,
            },
            FlowNodeKind::Document => NodeStyle {
                fill: &self.documents,
                stroke: &self.documents_border,
                text: &self.documents_text,
            },
            FlowNodeKind::Actor => NodeStyle {
                fill: &self.actors,
                stroke: &self.actors_border,
                text: &self.actors_text,
            },
            FlowNodeKind::Anchor { .. } => NodeStyle {
                fill: "transparent",
                stroke: "transparent",
                text: "transparent",
            },
        }
    }

    /// Returns the first colour field that does not parse.
    pub fn invalid_color(&self) -> Option<(&'static str, &str)> {
        [
            ("background", &self.background),
            ("steps", &self.steps),
            ("steps_text", &self.steps_text),
            ("documents", &self.documents),
            ("documents_border", &self.documents_border),
            ("documents_text", &self.documents_text),
            ("actors", &self.actors),
            ("actors_border", &self.actors_border),
            ("actors_text", &self.actors_text),
            ("start", &self.start),
            ("end", &self.end),
            ("terminal_text", &self.terminal_text),
            ("flow_main", &self.flow_main),
            ("flow_connect", &self.flow_connect),
        ]
        .into_iter()
        .find(|(_, value)| parse_color(value).is_none())
        .map(|(name, value)| (name, value.as_str()))
    }
}

/// Parses a colour into RGBA components.
pub fn parse_color(text: &str) -> Option<[u8; 4]> {
    let s = text.trim().to_ascii_lowercase();
    match s.as_str() {
        "transparent" => return Some([0, 0, 0, 0]),
        "white" => return Some([255, 255, 255, 255]),
        "black" => return Some([0, 0, 0, 255]),
        _ => {}
    }

    let hex = s.strip_prefix('#')?;
    fn hex2(b: &[u8]) -> Option<u8> {
        let hi = (*b.first()? as char).to_digit(16)? as u8;
        let lo = (*b.get(1)? as char).to_digit(16)? as u8;
        Some((hi << 4) | lo)
    }
    fn hex1(c: u8) -> Option<u8> {
        let v = (c as char).to_digit(16)? as u8;
        Some((v << 4) | v)
    }

    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => Some([hex1(bytes[0])?, hex1(bytes[1])?, hex1(bytes[2])?, 255]),
        6 => Some([hex2(&bytes[0..2])?, hex2(&bytes[2..4])?, hex2(&bytes[4..6])?, 255]),
        8 => Some([
            hex2(&bytes[0..2])?,
            hex2(&bytes[2..4])?,
            hex2(&bytes[4..6])?,
            hex2(&bytes[6..8])?,
        ]),
        _ => None,
    }
}
