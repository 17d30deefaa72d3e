// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::theme::parse_color;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("failed to parse SVG: {0}")]
    SvgParse(String),
    #[error("invalid raster scale {0}")]
    InvalidScale(f32),
    #[error("failed to allocate a {width}x{height} pixmap")]
    PixmapAlloc { width: u32, height: u32 },
    #[error("failed to encode PNG: {0}")]
    PngEncode(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    pub scale: f32,
    /// Fill applied before drawing. `None` keeps the pixmap transparent outside the SVG's own
    /// background.
    pub background: Option<String>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1.5, background: None }
    }
}

/// Rasterizes an SVG document to PNG bytes.
pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>, RasterError> {
    let scale = options.scale;
    if !(scale.is_finite() && scale > 0.0) {
        return Err(RasterError::InvalidScale(scale));
    }

    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Arial".to_string();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|err| RasterError::SvgParse(err.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RasterError::PixmapAlloc { width, height })?;

    if let Some([r, g, b, a]) = options.background.as_deref().and_then(parse_color) {
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    tracing::debug!(width, height, "svg rasterized");
    pixmap.encode_png().map_err(|err| RasterError::PngEncode(err.to_string()))
}
