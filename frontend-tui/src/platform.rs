//! Capability surface of the desktop build.

use menu::{FileEntry, PlatformCapabilities, Step, ViewportRect};

/// Desktop capabilities: no mountable device roots, no display-mode list and
/// no hardware gamma, but dynamic core loading and filter toggles work.
pub struct DesktopPlatform {
    viewport: ViewportRect,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        Self {
            viewport: ViewportRect::new(0, 0, 640, 480),
        }
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformCapabilities for DesktopPlatform {
    fn device_roots(&self) -> Vec<FileEntry> {
        // Empty: the browser falls back to scanning the filesystem root.
        Vec::new()
    }

    fn default_viewport(&self) -> ViewportRect {
        self.viewport
    }

    fn has_display_modes(&self) -> bool {
        false
    }

    fn step_display_mode(&mut self, _step: Step) {}

    fn display_mode_label(&self) -> String {
        String::new()
    }

    fn has_filter_controls(&self) -> bool {
        true
    }

    fn has_gamma_control(&self) -> bool {
        false
    }

    fn has_dir_overrides(&self) -> bool {
        true
    }

    fn can_load_cores(&self) -> bool {
        true
    }

    fn core_extensions(&self) -> String {
        "so|dll|dylib".to_string()
    }

    fn shader_extensions(&self) -> String {
        "glsl|slang|cg".to_string()
    }

    fn preset_extensions(&self) -> String {
        "json".to_string()
    }
}
