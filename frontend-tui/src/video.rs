//! Video driver stand-in for the reference host.
//!
//! There is no emulation core behind this binary, so the driver records what
//! the engine asked for and reports it through the tracing log. Shader
//! activation still validates the preset path so the engine's rejection
//! handling is exercised for real.

use std::path::Path;

use menu::{PresetError, PresetResult, VideoControl, ViewportRect};
use tracing::info;

#[derive(Default)]
#[allow(dead_code)] // recorded state is read back by the tests
pub struct LoggingVideo {
    viewport: Option<ViewportRect>,
    aspect_index: usize,
    rotation: usize,
    smooth: bool,
    shader: Option<String>,
}

impl LoggingVideo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VideoControl for LoggingVideo {
    fn apply_viewport(&mut self, rect: ViewportRect) {
        info!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "viewport applied"
        );
        self.viewport = Some(rect);
    }

    fn set_aspect_ratio(&mut self, index: usize) {
        info!(index, "aspect ratio applied");
        self.aspect_index = index;
    }

    fn set_rotation(&mut self, rotation: usize) {
        info!(rotation, "rotation applied");
        self.rotation = rotation;
    }

    fn set_filtering(&mut self, smooth: bool) {
        info!(smooth, "texture filtering applied");
        self.smooth = smooth;
    }

    fn apply_state_changes(&mut self) {
        info!("video state re-read from config");
    }

    fn set_shader(&mut self, preset_path: Option<&str>) -> PresetResult<()> {
        match preset_path {
            Some(path) => {
                if !Path::new(path).exists() {
                    return Err(PresetError::Rejected {
                        path: path.to_string(),
                    });
                }
                info!(path, "shader activated");
                self.shader = Some(path.to_string());
            }
            None => {
                info!("shader disabled");
                self.shader = None;
            }
        }
        Ok(())
    }
}
