//! Entry-list generators, one per page kind.

use tracing::warn;

use crate::entry::{BindControl, Entry, EntryKind, PadButton, PassField, SettingKind};
use crate::host::Host;
use crate::shader::ShaderPipeline;
use crate::stack::Context;

const CONTROLLER_PORTS: usize = 4;

pub(crate) fn settings_entries(host: &Host<'_>) -> Vec<Entry> {
    let mut entries = vec![
        Entry::new("Core", EntryKind::Setting(SettingKind::CoreSelect)),
        Entry::new("Core Options", EntryKind::Setting(SettingKind::CoreOptions)),
        Entry::new("Shader Manager", EntryKind::Setting(SettingKind::ShaderManager)),
        Entry::new("Rewind", EntryKind::Setting(SettingKind::RewindEnable)),
        Entry::new(
            "Rewind granularity",
            EntryKind::Setting(SettingKind::RewindGranularity),
        ),
    ];

    if host.session.content_loaded {
        entries.push(Entry::new("Save State", EntryKind::Setting(SettingKind::SaveState)));
        entries.push(Entry::new("Load State", EntryKind::Setting(SettingKind::LoadState)));
        entries.push(Entry::new(
            "Take Screenshot",
            EntryKind::Setting(SettingKind::Screenshot),
        ));
        entries.push(Entry::new(
            "Resume Content",
            EntryKind::Setting(SettingKind::ResumeContent),
        ));
        entries.push(Entry::new(
            "Change Content",
            EntryKind::Setting(SettingKind::ChangeContent),
        ));
        entries.push(Entry::new(
            "Restart Content",
            EntryKind::Setting(SettingKind::RestartContent),
        ));
    }

    if host.platform.has_filter_controls() {
        entries.push(Entry::new("Soft Filter", EntryKind::Setting(SettingKind::SoftFilter)));
        entries.push(Entry::new(
            "Hardware Filter",
            EntryKind::Setting(SettingKind::VideoFilter),
        ));
    }
    if host.platform.has_display_modes() {
        entries.push(Entry::new("Display Mode", EntryKind::Setting(SettingKind::DisplayMode)));
    }
    if host.platform.has_gamma_control() {
        entries.push(Entry::new("Gamma", EntryKind::Setting(SettingKind::Gamma)));
    }

    entries.push(Entry::new("Aspect Ratio", EntryKind::Setting(SettingKind::AspectRatio)));
    entries.push(Entry::new("Custom Ratio", EntryKind::Setting(SettingKind::CustomRatio)));
    entries.push(Entry::new("Rotation", EntryKind::Setting(SettingKind::Rotation)));
    entries.push(Entry::new("Mute Audio", EntryKind::Setting(SettingKind::AudioMute)));
    entries.push(Entry::new(
        "Audio Control Rate",
        EntryKind::Setting(SettingKind::AudioControlRate),
    ));

    if host.platform.has_dir_overrides() {
        entries.push(Entry::new(
            "Use SRAM Directory",
            EntryKind::Setting(SettingKind::SramDirEnable),
        ));
        entries.push(Entry::new(
            "Use State Directory",
            EntryKind::Setting(SettingKind::StateDirEnable),
        ));
    }

    for port in 0..CONTROLLER_PORTS {
        entries.push(Entry::new(
            format!("Controller #{} Config", port + 1),
            EntryKind::Setting(SettingKind::ControllerConfig(port)),
        ));
    }

    entries.push(Entry::new("Show Debug Info", EntryKind::Setting(SettingKind::DebugInfo)));
    if !host.platform.can_load_cores() {
        entries.push(Entry::new(
            "Restart Frontend",
            EntryKind::Setting(SettingKind::RestartApp),
        ));
    }
    entries.push(Entry::new("Quit", EntryKind::Setting(SettingKind::Quit)));

    entries
}

pub(crate) fn core_option_entries(host: &Host<'_>) -> Vec<Entry> {
    if host.options.is_empty() {
        return vec![Entry::new("No options available.", EntryKind::Placeholder)];
    }
    (0..host.options.len())
        .map(|i| Entry::new(host.options.description(i), EntryKind::CoreOption(i)))
        .collect()
}

/// Four fixed rows, then source/filter/scale per active pass.
pub(crate) fn shader_manager_entries(shader: &ShaderPipeline) -> Vec<Entry> {
    let mut entries = vec![
        Entry::new("Apply Changes", EntryKind::Setting(SettingKind::ShaderApply)),
        Entry::new(
            "Default Filter",
            EntryKind::Setting(SettingKind::ShaderDefaultFilter),
        ),
        Entry::new("Load Preset", EntryKind::Setting(SettingKind::ShaderLoadPreset)),
        Entry::new("Shader Passes", EntryKind::Setting(SettingKind::ShaderPassCount)),
    ];

    for pass in 0..shader.active_passes() {
        entries.push(Entry::new(
            format!("Shader #{}", pass),
            EntryKind::ShaderPass {
                pass,
                field: PassField::Source,
            },
        ));
        entries.push(Entry::new(
            format!("Shader #{} Filter", pass),
            EntryKind::ShaderPass {
                pass,
                field: PassField::Filter,
            },
        ));
        entries.push(Entry::new(
            format!("Shader #{} Scale", pass),
            EntryKind::ShaderPass {
                pass,
                field: PassField::Scale,
            },
        ));
    }

    entries
}

pub(crate) fn controller_entries(port: usize) -> Vec<Entry> {
    let mut entries = vec![
        Entry::new(
            "Device",
            EntryKind::Bind {
                port,
                control: BindControl::Device,
            },
        ),
        Entry::new(
            "DPad Emulation",
            EntryKind::Bind {
                port,
                control: BindControl::DpadMode,
            },
        ),
    ];
    for button in PadButton::ALL {
        entries.push(Entry::new(
            button.label(),
            EntryKind::Bind {
                port,
                control: BindControl::Button(button),
            },
        ));
    }
    entries
}

/// An empty path is the device-root sentinel: list the platform's fixed
/// roots, or walk the filesystem root when there are none. Root entries keep
/// absolute names so joins against the empty frame label stay rooted.
pub(crate) fn browser_entries(path: &str, context: Context, host: &Host<'_>) -> Vec<Entry> {
    if path.is_empty() {
        let roots = host.platform.device_roots();
        if !roots.is_empty() {
            return roots
                .into_iter()
                .map(|root| Entry::new(root.name, EntryKind::Device))
                .collect();
        }
        let mut entries = scan_directory("/", context, host);
        for entry in &mut entries {
            entry.label = format!("/{}", entry.label);
        }
        return entries;
    }
    scan_directory(path, context, host)
}

fn scan_directory(path: &str, context: Context, host: &Host<'_>) -> Vec<Entry> {
    let filter = match context {
        Context::CoreBrowser => host.platform.core_extensions(),
        Context::PresetBrowser => host.platform.preset_extensions(),
        Context::ShaderSourceBrowser { .. } => host.platform.shader_extensions(),
        _ => host.session.content_extensions.clone(),
    };

    let listing = match host.fs.list(path, &filter) {
        Ok(listing) => listing,
        Err(err) => {
            warn!("failed to list {}: {}", path, err);
            return Vec::new();
        }
    };

    // The core directory is browsed flat.
    let skip_directories = context == Context::CoreBrowser;
    let mut entries = Vec::with_capacity(listing.len());
    for file in listing {
        if file.is_directory {
            if !skip_directories {
                entries.push(Entry::new(file.name, EntryKind::Directory));
            }
        } else {
            entries.push(Entry::new(file.name, EntryKind::File));
        }
    }
    entries
}
