//! Collaborator interfaces the host implements for the engine

use std::path::Path;

use crate::config::{ConfigStore, Step};
use crate::entry::{DpadMode, PadButton};
use crate::error::{ListResult, PresetResult};
use crate::session::{Session, ViewportRect};
use crate::shader::ShaderPipeline;

/// One name from a directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub is_directory: bool,
}

impl FileEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
        }
    }
}

/// Filesystem enumeration. Sorting policy (directories first, then
/// alphabetical) is the implementor's job.
pub trait DirectoryLister {
    /// List `path` keeping directories and files whose extension is in the
    /// pipe-separated `ext_filter`. An empty filter keeps every file.
    fn list(&self, path: &str, ext_filter: &str) -> ListResult<Vec<FileEntry>>;
}

/// Video-side effects of settings changes.
pub trait VideoControl {
    fn apply_viewport(&mut self, rect: ViewportRect);

    fn set_aspect_ratio(&mut self, index: usize);

    fn set_rotation(&mut self, rotation: usize);

    fn set_filtering(&mut self, smooth: bool);

    /// Re-read whatever video state the store changed (gamma, soft filter).
    fn apply_state_changes(&mut self);

    /// Activate a preset file, or the plain framebuffer when None.
    fn set_shader(&mut self, preset_path: Option<&str>) -> PresetResult<()>;
}

/// Keybinding storage and per-port input plumbing. The engine routes actions
/// here and never owns a binding itself.
pub trait InputBinder {
    fn adjust_bind(&mut self, port: usize, button: PadButton, step: Step);

    fn bind_label(&self, port: usize, button: PadButton) -> String;

    fn device_count(&self) -> usize;

    fn device_label(&self, device_index: usize) -> String;

    fn apply_device(&mut self, port: usize, device_index: usize);

    fn apply_dpad_mode(&mut self, port: usize, mode: DpadMode);
}

/// Options published by the loaded core. Value storage and wrap policy live
/// behind this trait.
pub trait CoreOptionSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn description(&self, index: usize) -> String;

    fn value(&self, index: usize) -> String;

    fn next_value(&mut self, index: usize);

    fn prev_value(&mut self, index: usize);

    fn reset_value(&mut self, index: usize);
}

/// Reads and writes the persisted preset format.
pub trait PresetStore {
    fn load(&self, path: &str) -> PresetResult<ShaderPipeline>;

    /// Write the pipeline to the store's well-known location and return the
    /// path written, ready to hand to the video driver.
    fn save_current(&self, pipeline: &ShaderPipeline) -> PresetResult<String>;
}

/// Everything platform-conditional, gathered behind one interface.
pub trait PlatformCapabilities {
    /// Fixed browser roots for platforms with mountable devices. Empty means
    /// "scan the filesystem root instead".
    fn device_roots(&self) -> Vec<FileEntry>;

    fn default_viewport(&self) -> ViewportRect;

    /// True when the platform exposes a display-mode list.
    fn has_display_modes(&self) -> bool;

    /// Step the active display mode; clamping and mode-compatibility guards
    /// live behind this call.
    fn step_display_mode(&mut self, step: Step);

    fn display_mode_label(&self) -> String;

    fn has_filter_controls(&self) -> bool;

    fn has_gamma_control(&self) -> bool;

    fn has_dir_overrides(&self) -> bool;

    /// False on platforms where picking a core means relaunching the app.
    fn can_load_cores(&self) -> bool;

    /// Pipe-separated extension set for loadable cores.
    fn core_extensions(&self) -> String;

    fn shader_extensions(&self) -> String;

    fn preset_extensions(&self) -> String;
}

/// Borrowed bundle of every collaborator, rebuilt by the host each tick.
pub struct Host<'a> {
    pub config: &'a mut dyn ConfigStore,
    pub session: &'a mut Session,
    pub fs: &'a dyn DirectoryLister,
    pub video: &'a mut dyn VideoControl,
    pub input: &'a mut dyn InputBinder,
    pub options: &'a mut dyn CoreOptionSource,
    pub presets: &'a dyn PresetStore,
    pub platform: &'a mut dyn PlatformCapabilities,
}

/// True when `path`'s extension appears in the pipe-separated `filter`
/// (case-insensitive). An empty filter matches everything.
pub fn extension_matches(path: &str, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let ext = match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return false,
    };
    filter
        .split('|')
        .any(|candidate| candidate.eq_ignore_ascii_case(&ext))
}
