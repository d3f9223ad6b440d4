use std::path::Path;

use crate::config::Field;
use crate::entry::{BindControl, DpadMode, Entry, EntryKind, EntryList, PassField, SettingKind};
use crate::host::Host;
use crate::shader::ShaderPipeline;
use crate::stack::{Context, Frame, ViewportStage};

/// One drawable row: label plus the value column.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub label: String,
    pub value: String,
}

/// Everything the render collaborator needs for one frame.
#[derive(Debug, Clone)]
pub struct FrameView {
    pub title: String,
    pub context: Context,
    /// The visible window of entries, already clipped to the row budget.
    pub rows: Vec<RowView>,
    /// Cursor offset inside `rows`.
    pub selected: usize,
    /// Dialog message drawn over the list, if any.
    pub overlay: Option<String>,
}

/// Visible `[begin, end)` window of a list, centered on the cursor when there
/// is room.
pub fn visible_window(cursor: usize, len: usize, rows: usize) -> (usize, usize) {
    if rows == 0 || len == 0 {
        return (0, 0);
    }
    let begin = if cursor >= rows / 2 {
        cursor - rows / 2
    } else {
        0
    };
    let mut end = (cursor + rows).min(len);
    if end - begin > rows {
        end = begin + rows;
    }
    (begin, end)
}

pub(crate) fn build_frame(
    top: &Frame,
    entries: &EntryList,
    cursor: usize,
    rows: usize,
    shader: &ShaderPipeline,
    host: &Host<'_>,
) -> FrameView {
    let (begin, end) = visible_window(cursor, entries.len(), rows);
    let window = &entries.as_slice()[begin..end];
    let view_rows = window
        .iter()
        .map(|entry| RowView {
            label: entry.label.clone(),
            value: value_label(entry, shader, host),
        })
        .collect();

    FrameView {
        title: title_for(top),
        context: top.context,
        rows: view_rows,
        selected: cursor.saturating_sub(begin),
        overlay: overlay_for(top.context),
    }
}

fn title_for(top: &Frame) -> String {
    match top.context {
        Context::CoreBrowser => "CORE SELECTION".to_string(),
        Context::ShaderManager => "SHADER MANAGER".to_string(),
        Context::CoreOptions => "CORE OPTIONS".to_string(),
        Context::ShaderSourceBrowser { .. } | Context::PresetBrowser => {
            format!("SHADER {}", top.label)
        }
        Context::Settings | Context::Controller { .. } | Context::Viewport(_) => {
            if top.label.is_empty() {
                "SETTINGS".to_string()
            } else {
                format!("SETTINGS {}", top.label)
            }
        }
        Context::ContentBrowser | Context::DeviceBrowser => {
            format!("FILE BROWSER {}", top.label)
        }
    }
}

fn overlay_for(context: Context) -> Option<String> {
    match context {
        Context::Viewport(ViewportStage::UpperLeft) => {
            Some("Set Upper-Left Corner".to_string())
        }
        Context::Viewport(ViewportStage::LowerRight) => {
            Some("Set Bottom-Right Corner".to_string())
        }
        _ => None,
    }
}

fn bool_label(value: bool) -> String {
    if value { "ON" } else { "OFF" }.to_string()
}

fn value_label(entry: &Entry, shader: &ShaderPipeline, host: &Host<'_>) -> String {
    match entry.kind {
        EntryKind::File => "(FILE)".to_string(),
        EntryKind::Directory => "(DIR)".to_string(),
        EntryKind::Device => "(DEV)".to_string(),
        EntryKind::Placeholder => String::new(),
        EntryKind::Setting(kind) => setting_value(kind, shader, host),
        EntryKind::CoreOption(index) => host.options.value(index),
        EntryKind::ShaderPass { pass, field } => shader_pass_value(pass, field, shader),
        EntryKind::Bind { port, control } => bind_value(port, control, host),
    }
}

fn setting_value(kind: SettingKind, shader: &ShaderPipeline, host: &Host<'_>) -> String {
    let config = &host.config;
    match kind {
        SettingKind::CoreSelect => {
            if host.session.core_name.is_empty() {
                config.display(Field::CorePath)
            } else {
                host.session.core_name.clone()
            }
        }
        SettingKind::CoreOptions
        | SettingKind::ShaderManager
        | SettingKind::ControllerConfig(_)
        | SettingKind::CustomRatio
        | SettingKind::ChangeContent
        | SettingKind::ShaderLoadPreset => "...".to_string(),
        SettingKind::SaveState | SettingKind::LoadState => config.display(Field::SaveStateSlot),
        SettingKind::Screenshot
        | SettingKind::ResumeContent
        | SettingKind::RestartContent
        | SettingKind::RestartApp
        | SettingKind::Quit
        | SettingKind::ShaderApply => String::new(),
        SettingKind::RewindEnable => bool_label(config.get_bool(Field::RewindEnable)),
        SettingKind::RewindGranularity => config.display(Field::RewindGranularity),
        SettingKind::VideoFilter => {
            if config.get_bool(Field::VideoSmooth) {
                "Bilinear filtering".to_string()
            } else {
                "Point filtering".to_string()
            }
        }
        SettingKind::SoftFilter => bool_label(config.get_bool(Field::SoftFilter)),
        SettingKind::DisplayMode => host.platform.display_mode_label(),
        SettingKind::Gamma => config.display(Field::Gamma),
        SettingKind::AspectRatio => config.display(Field::AspectRatioIndex),
        SettingKind::Rotation => config.display(Field::Rotation),
        SettingKind::AudioMute => bool_label(config.get_bool(Field::AudioMute)),
        SettingKind::AudioControlRate => config.display(Field::AudioControlRate),
        SettingKind::SramDirEnable => bool_label(config.get_bool(Field::SramDirEnable)),
        SettingKind::StateDirEnable => bool_label(config.get_bool(Field::StateDirEnable)),
        SettingKind::DebugInfo => bool_label(config.get_bool(Field::DebugInfo)),
        SettingKind::ShaderDefaultFilter => {
            if config.get_bool(Field::VideoSmooth) {
                "Linear".to_string()
            } else {
                "Nearest".to_string()
            }
        }
        SettingKind::ShaderPassCount => shader.active_passes().to_string(),
    }
}

fn shader_pass_value(index: usize, field: PassField, shader: &ShaderPipeline) -> String {
    let Some(pass) = shader.pass(index) else {
        return String::new();
    };
    match field {
        PassField::Source => match &pass.source {
            Some(source) => Path::new(source)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| source.clone()),
            None => "N/A".to_string(),
        },
        PassField::Filter => pass.filter.label().to_string(),
        PassField::Scale => {
            if pass.is_upscaling() {
                format!("{}x", pass.scale)
            } else {
                "Don't care".to_string()
            }
        }
    }
}

fn bind_value(port: usize, control: BindControl, host: &Host<'_>) -> String {
    match control {
        BindControl::Device => {
            let index = host.config.get_index(Field::InputDevice(port));
            host.input.device_label(index)
        }
        BindControl::DpadMode => {
            let index = host.config.get_index(Field::DpadEmulation(port));
            DpadMode::from_index(index).label().to_string()
        }
        BindControl::Button(button) => host.input.bind_label(port, button),
    }
}
