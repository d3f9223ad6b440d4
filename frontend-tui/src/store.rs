//! JSON-backed configuration store.

use std::path::{Path, PathBuf};

use menu::{ConfigStore, Field, Step, SteppedField, Value};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::binder::DEVICE_KINDS;

/// Aspect ratios the Aspect Ratio row steps through. The last slot is the
/// custom rectangle edited by the capture dialog.
pub const ASPECT_RATIOS: [&str; 8] = [
    "1:1",
    "4:3",
    "5:4",
    "3:2",
    "16:10",
    "16:9",
    "Core provided",
    "Custom",
];

const DEFAULT_ASPECT_INDEX: usize = 1;
const CUSTOM_ASPECT_INDEX: usize = ASPECT_RATIOS.len() - 1;

const ROTATION_LABELS: [&str; 4] = ["Normal", "Vertical", "Flipped", "Flipped Rotated"];

const GAMMA_MAX: i64 = 2;

const AUDIO_RATE_STEP: f64 = 0.001;
const AUDIO_RATE_MIN: f64 = 0.001;
const AUDIO_RATE_MAX: f64 = 0.2;
const AUDIO_RATE_DEFAULT: f64 = 0.005;

const PORTS: usize = 4;

/// Store persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed store file {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Default location of the config file, next to the rest of the frontend
/// state under the user's home directory.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".frontend-tui")
        .join("config.json")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    rewind_enable: bool,
    rewind_granularity: i64,
    save_state_slot: i64,
    video_smooth: bool,
    soft_filter: bool,
    gamma: i64,
    aspect_ratio_index: usize,
    rotation: usize,
    audio_mute: bool,
    audio_control_rate: f64,
    sram_dir_enable: bool,
    state_dir_enable: bool,
    debug_info: bool,
    shader_enable: bool,
    shader_path: String,
    core_path: String,
    core_dir: String,
    shader_dir: String,
    input_device: [usize; PORTS],
    dpad_emulation: [usize; PORTS],
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            rewind_enable: false,
            rewind_granularity: 1,
            save_state_slot: 0,
            video_smooth: true,
            soft_filter: false,
            gamma: 0,
            aspect_ratio_index: DEFAULT_ASPECT_INDEX,
            rotation: 0,
            audio_mute: false,
            audio_control_rate: AUDIO_RATE_DEFAULT,
            sram_dir_enable: false,
            state_dir_enable: false,
            debug_info: false,
            shader_enable: false,
            shader_path: String::new(),
            core_path: String::new(),
            core_dir: ".".to_string(),
            shader_dir: ".".to_string(),
            // DpadMode::LeftStick
            dpad_emulation: [1; PORTS],
            input_device: [0; PORTS],
        }
    }
}

/// Configuration store persisted as pretty-printed JSON. Stepping policies
/// (aspect LUT, rotation wrap, gamma clamp, device cycling) live here so the
/// engine can stay policy-free.
pub struct JsonConfigStore {
    path: PathBuf,
    file: ConfigFile,
}

impl JsonConfigStore {
    /// Open the store at `path`, starting from defaults when no file exists.
    pub fn load_or_default(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self {
                path: path.to_path_buf(),
                file: ConfigFile::default(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file = serde_json::from_str(&text).map_err(|e| StoreError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Write the current values back to the path given at load time.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
        let text = serde_json::to_string_pretty(&self.file).map_err(|e| StoreError::Parse {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(&self.path, text).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonConfigStore {
    fn get(&self, field: Field) -> Value {
        let f = &self.file;
        match field {
            Field::RewindEnable => Value::Bool(f.rewind_enable),
            Field::RewindGranularity => Value::Int(f.rewind_granularity),
            Field::SaveStateSlot => Value::Int(f.save_state_slot),
            Field::VideoSmooth => Value::Bool(f.video_smooth),
            Field::SoftFilter => Value::Bool(f.soft_filter),
            Field::Gamma => Value::Int(f.gamma),
            Field::AspectRatioIndex => Value::Index(f.aspect_ratio_index),
            Field::Rotation => Value::Index(f.rotation),
            Field::AudioMute => Value::Bool(f.audio_mute),
            Field::AudioControlRate => Value::Float(f.audio_control_rate),
            Field::SramDirEnable => Value::Bool(f.sram_dir_enable),
            Field::StateDirEnable => Value::Bool(f.state_dir_enable),
            Field::DebugInfo => Value::Bool(f.debug_info),
            Field::ShaderEnable => Value::Bool(f.shader_enable),
            Field::ShaderPath => Value::Text(f.shader_path.clone()),
            Field::CorePath => Value::Text(f.core_path.clone()),
            Field::CoreDir => Value::Text(f.core_dir.clone()),
            Field::ShaderDir => Value::Text(f.shader_dir.clone()),
            Field::InputDevice(port) => {
                Value::Index(f.input_device.get(port).copied().unwrap_or(0))
            }
            Field::DpadEmulation(port) => {
                Value::Index(f.dpad_emulation.get(port).copied().unwrap_or(1))
            }
        }
    }

    fn set(&mut self, field: Field, value: Value) {
        let f = &mut self.file;
        match (field, value) {
            (Field::RewindEnable, Value::Bool(v)) => f.rewind_enable = v,
            (Field::RewindGranularity, Value::Int(v)) => f.rewind_granularity = v,
            (Field::SaveStateSlot, Value::Int(v)) => f.save_state_slot = v,
            (Field::VideoSmooth, Value::Bool(v)) => f.video_smooth = v,
            (Field::SoftFilter, Value::Bool(v)) => f.soft_filter = v,
            (Field::Gamma, Value::Int(v)) => f.gamma = v,
            (Field::AspectRatioIndex, Value::Index(v)) => f.aspect_ratio_index = v,
            (Field::Rotation, Value::Index(v)) => f.rotation = v,
            (Field::AudioMute, Value::Bool(v)) => f.audio_mute = v,
            (Field::AudioControlRate, Value::Float(v)) => f.audio_control_rate = v,
            (Field::SramDirEnable, Value::Bool(v)) => f.sram_dir_enable = v,
            (Field::StateDirEnable, Value::Bool(v)) => f.state_dir_enable = v,
            (Field::DebugInfo, Value::Bool(v)) => f.debug_info = v,
            (Field::ShaderEnable, Value::Bool(v)) => f.shader_enable = v,
            (Field::ShaderPath, Value::Text(v)) => f.shader_path = v,
            (Field::CorePath, Value::Text(v)) => f.core_path = v,
            (Field::CoreDir, Value::Text(v)) => f.core_dir = v,
            (Field::ShaderDir, Value::Text(v)) => f.shader_dir = v,
            (Field::InputDevice(port), Value::Index(v)) => {
                if let Some(slot) = f.input_device.get_mut(port) {
                    *slot = v;
                }
            }
            (Field::DpadEmulation(port), Value::Index(v)) => {
                if let Some(slot) = f.dpad_emulation.get_mut(port) {
                    *slot = v;
                }
            }
            (field, value) => warn!(?field, ?value, "type-mismatched config write dropped"),
        }
    }

    fn adjust(&mut self, field: SteppedField, step: Step) {
        let f = &mut self.file;
        match field {
            SteppedField::AspectRatio => {
                f.aspect_ratio_index = match step {
                    Step::Increase => (f.aspect_ratio_index + 1).min(ASPECT_RATIOS.len() - 1),
                    Step::Decrease => f.aspect_ratio_index.saturating_sub(1),
                    Step::Default => DEFAULT_ASPECT_INDEX,
                };
            }
            SteppedField::Rotation => {
                f.rotation = match step {
                    Step::Increase => (f.rotation + 1) % 4,
                    Step::Decrease => (f.rotation + 3) % 4,
                    Step::Default => 0,
                };
            }
            SteppedField::Gamma => {
                f.gamma = match step {
                    Step::Increase => (f.gamma + 1).min(GAMMA_MAX),
                    Step::Decrease => (f.gamma - 1).max(0),
                    Step::Default => 0,
                };
            }
            SteppedField::AudioControlRate => {
                f.audio_control_rate = match step {
                    Step::Increase => (f.audio_control_rate + AUDIO_RATE_STEP).min(AUDIO_RATE_MAX),
                    Step::Decrease => (f.audio_control_rate - AUDIO_RATE_STEP).max(AUDIO_RATE_MIN),
                    Step::Default => AUDIO_RATE_DEFAULT,
                };
            }
            SteppedField::SaveStateSlot => {
                f.save_state_slot = match step {
                    Step::Increase => f.save_state_slot + 1,
                    Step::Decrease => (f.save_state_slot - 1).max(0),
                    Step::Default => 0,
                };
            }
            SteppedField::InputDevice(port) => {
                if let Some(slot) = f.input_device.get_mut(port) {
                    *slot = match step {
                        Step::Increase => (*slot + 1) % DEVICE_KINDS,
                        Step::Decrease => (*slot + DEVICE_KINDS - 1) % DEVICE_KINDS,
                        Step::Default => 0,
                    };
                }
            }
        }
    }

    fn display(&self, field: Field) -> String {
        let f = &self.file;
        match field {
            Field::RewindGranularity => f.rewind_granularity.to_string(),
            Field::SaveStateSlot => f.save_state_slot.to_string(),
            Field::Gamma => f.gamma.to_string(),
            Field::AspectRatioIndex => {
                let index = f.aspect_ratio_index.min(ASPECT_RATIOS.len() - 1);
                ASPECT_RATIOS[index].to_string()
            }
            Field::Rotation => ROTATION_LABELS[f.rotation % 4].to_string(),
            Field::AudioControlRate => format!("{:.3}", f.audio_control_rate),
            Field::ShaderPath => f.shader_path.clone(),
            Field::CorePath => {
                if f.core_path.is_empty() {
                    "No core".to_string()
                } else {
                    f.core_path.clone()
                }
            }
            Field::CoreDir => f.core_dir.clone(),
            Field::ShaderDir => f.shader_dir.clone(),
            other => match self.get(other) {
                Value::Bool(v) => if v { "ON" } else { "OFF" }.to_string(),
                Value::Int(v) => v.to_string(),
                Value::Index(v) => v.to_string(),
                Value::Float(v) => format!("{:.2}", v),
                Value::Text(v) => v,
            },
        }
    }

    fn force_custom_aspect(&mut self) -> usize {
        self.file.aspect_ratio_index = CUSTOM_ASPECT_INDEX;
        CUSTOM_ASPECT_INDEX
    }
}
