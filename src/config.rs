// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! TOML configuration.
//!
//! Every section is optional; missing keys take their defaults.
//!
//! ```toml
//! title = "Logigramme de procédure"
//!
//! [wrap]
//! activity = 20
//!
//! [raster]
//! backend = "graphviz"
//! graphviz_program = "/usr/bin/dot"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::layout::flowchart::{LayoutMetrics, WrapWidths};
use crate::render::flowchart::{FlowchartConfig, RasterBackend};
use crate::render::raster::RasterOptions;
use crate::render::theme::{parse_color, Theme};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(String),
    #[error("invalid colour for {field}: {value:?}")]
    InvalidColor { field: String, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Builtin,
    Graphviz,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    pub scale: f32,
    pub background: Option<String>,
    pub backend: BackendKind,
    /// Program invoked by the `graphviz` backend.
    pub graphviz_program: String,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            scale: RasterOptions::default().scale,
            background: None,
            backend: BackendKind::Builtin,
            graphviz_program: "dot".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: Option<String>,
    pub wrap: WrapWidths,
    pub theme: Theme,
    pub layout: LayoutMetrics,
    pub raster: RasterConfig,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((field, value)) = self.theme.invalid_color() {
            return Err(ConfigError::InvalidColor {
                field: format!("theme.{field}"),
                value: value.to_owned(),
            });
        }
        if let Some(background) = &self.raster.background {
            if parse_color(background).is_none() {
                return Err(ConfigError::InvalidColor {
                    field: "raster.background".to_owned(),
                    value: background.clone(),
                });
            }
        }
        if !(self.raster.scale.is_finite() && self.raster.scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "raster.scale must be positive, got {}",
                self.raster.scale
            )));
        }
        let wrap = &self.wrap;
        if [wrap.activity, wrap.document, wrap.actor, wrap.terminal].contains(&0) {
            return Err(ConfigError::Invalid("wrap widths must be at least 1".to_owned()));
        }
        if self.raster.backend == BackendKind::Graphviz && self.raster.graphviz_program.trim().is_empty() {
            return Err(ConfigError::Invalid("raster.graphviz_program must not be empty".to_owned()));
        }
        Ok(())
    }

    pub fn flowchart_config(&self) -> FlowchartConfig {
        let backend = match self.raster.backend {
            BackendKind::Builtin => RasterBackend::Builtin,
            BackendKind::Graphviz => RasterBackend::Graphviz {
                program: self.raster.graphviz_program.clone(),
            },
        };
        FlowchartConfig {
            title: self.title.clone(),
            wrap: self.wrap,
            theme: self.theme.clone(),
            layout: self.layout,
            raster: RasterOptions {
                scale: self.raster.scale,
                background: self.raster.background.clone(),
            },
            backend,
        }
    }
}
