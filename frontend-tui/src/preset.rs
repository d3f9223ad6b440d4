//! Shader presets persisted as JSON.

use std::path::PathBuf;

use menu::{
    FilterMode, PresetError, PresetResult, PresetStore, ShaderPass, ShaderPipeline,
    MAX_SHADER_PASSES, SCALE_STATES,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct PresetFile {
    passes: Vec<PassSpec>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PassSpec {
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    filter: String,
    #[serde(default)]
    scale: u32,
}

fn filter_from(name: &str, path: &str) -> PresetResult<FilterMode> {
    match name {
        "" => Ok(FilterMode::Unspecified),
        "linear" => Ok(FilterMode::Linear),
        "nearest" => Ok(FilterMode::Nearest),
        other => Err(PresetError::Malformed {
            path: path.to_string(),
            reason: format!("unknown filter {:?}", other),
        }),
    }
}

fn filter_name(mode: FilterMode) -> &'static str {
    match mode {
        FilterMode::Unspecified => "",
        FilterMode::Linear => "linear",
        FilterMode::Nearest => "nearest",
    }
}

/// Reads arbitrary preset files and writes the working pipeline to one
/// well-known path handed back for the video driver to activate.
pub struct JsonPresetStore {
    current_path: PathBuf,
}

impl JsonPresetStore {
    pub fn new(current_path: PathBuf) -> Self {
        Self { current_path }
    }
}

impl PresetStore for JsonPresetStore {
    fn load(&self, path: &str) -> PresetResult<ShaderPipeline> {
        let text = std::fs::read_to_string(path).map_err(|source| PresetError::Io {
            path: path.to_string(),
            source,
        })?;
        let parsed: PresetFile = serde_json::from_str(&text).map_err(|e| PresetError::Malformed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.passes.len() > MAX_SHADER_PASSES {
            return Err(PresetError::TooManyPasses {
                count: parsed.passes.len(),
                max: MAX_SHADER_PASSES,
            });
        }

        let mut passes = Vec::with_capacity(parsed.passes.len());
        for spec in parsed.passes {
            if spec.scale >= SCALE_STATES {
                return Err(PresetError::Malformed {
                    path: path.to_string(),
                    reason: format!("pass scale {} out of range", spec.scale),
                });
            }
            passes.push(ShaderPass {
                source: spec.source,
                filter: filter_from(&spec.filter, path)?,
                scale: spec.scale,
            });
        }
        Ok(ShaderPipeline::from_passes(passes))
    }

    fn save_current(&self, pipeline: &ShaderPipeline) -> PresetResult<String> {
        let written = self.current_path.display().to_string();
        let file = PresetFile {
            passes: pipeline
                .visible()
                .iter()
                .map(|pass| PassSpec {
                    source: pass.source.clone(),
                    filter: filter_name(pass.filter).to_string(),
                    scale: pass.scale,
                })
                .collect(),
        };

        if let Some(parent) = self.current_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PresetError::Io {
                path: written.clone(),
                source,
            })?;
        }
        let text = serde_json::to_string_pretty(&file).map_err(|e| PresetError::Malformed {
            path: written.clone(),
            reason: e.to_string(),
        })?;
        std::fs::write(&self.current_path, text).map_err(|source| PresetError::Io {
            path: written.clone(),
            source,
        })?;
        Ok(written)
    }
}
