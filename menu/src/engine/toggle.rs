use tracing::warn;

use crate::action::{Action, ControlSignal};
use crate::config::{Field, Step, SteppedField, Value};
use crate::entry::{BindControl, DpadMode, EntryKind, PassField, SettingKind};
use crate::host::Host;
use crate::session::HostRequest;
use crate::shader::{FilterMode, MAX_SHADER_PASSES};
use crate::stack::Context;

use super::MenuEngine;

impl MenuEngine {
    /// Per-entry-kind policy for Ok/Left/Right/Start. Returns EndWithEffect
    /// when the host must act on a posted request before the next tick.
    pub(crate) fn toggle_entry(
        &mut self,
        kind: EntryKind,
        action: Action,
        host: &mut Host<'_>,
    ) -> ControlSignal {
        match kind {
            EntryKind::Setting(setting) => self.toggle_setting(setting, action, host),
            EntryKind::CoreOption(index) => {
                match action {
                    Action::Ok | Action::Right => host.options.next_value(index),
                    Action::Left => host.options.prev_value(index),
                    Action::Start => host.options.reset_value(index),
                    _ => {}
                }
                ControlSignal::Continue
            }
            EntryKind::ShaderPass { pass, field } => {
                self.toggle_shader_pass(pass, field, action, host);
                ControlSignal::Continue
            }
            EntryKind::Bind { port, control } => {
                toggle_bind(port, control, action, host);
                ControlSignal::Continue
            }
            EntryKind::File | EntryKind::Directory | EntryKind::Device | EntryKind::Placeholder => {
                ControlSignal::Continue
            }
        }
    }

    fn toggle_setting(
        &mut self,
        setting: SettingKind,
        action: Action,
        host: &mut Host<'_>,
    ) -> ControlSignal {
        match setting {
            SettingKind::RewindEnable => {
                flip_bool(host, Field::RewindEnable, action, false);
                ControlSignal::Continue
            }
            SettingKind::RewindGranularity => {
                let granularity = host.config.get_int(Field::RewindGranularity);
                match action {
                    Action::Ok | Action::Right => {
                        host.config
                            .set(Field::RewindGranularity, Value::Int(granularity + 1));
                    }
                    Action::Left if granularity > 1 => {
                        host.config
                            .set(Field::RewindGranularity, Value::Int(granularity - 1));
                    }
                    Action::Start => host.config.set(Field::RewindGranularity, Value::Int(1)),
                    _ => {}
                }
                ControlSignal::Continue
            }
            SettingKind::SaveState | SettingKind::LoadState => {
                match action {
                    Action::Left => host.config.adjust(SteppedField::SaveStateSlot, Step::Decrease),
                    Action::Right => host.config.adjust(SteppedField::SaveStateSlot, Step::Increase),
                    Action::Start => host.config.adjust(SteppedField::SaveStateSlot, Step::Default),
                    Action::Ok => {
                        let request = if setting == SettingKind::SaveState {
                            HostRequest::SaveState
                        } else {
                            HostRequest::LoadState
                        };
                        host.session.post(request);
                        return ControlSignal::EndWithEffect;
                    }
                    _ => {}
                }
                ControlSignal::Continue
            }
            SettingKind::Screenshot => {
                // The host snaps the frame and the menu stays up.
                if action == Action::Ok {
                    host.session.post(HostRequest::Screenshot);
                }
                ControlSignal::Continue
            }
            SettingKind::ResumeContent => end_with(host, action, HostRequest::Resume),
            SettingKind::RestartContent => end_with(host, action, HostRequest::ResetContent),
            SettingKind::RestartApp => end_with(host, action, HostRequest::RestartApp),
            SettingKind::Quit => end_with(host, action, HostRequest::Quit),
            SettingKind::VideoFilter => {
                if flip_bool(host, Field::VideoSmooth, action, true) {
                    let smooth = host.config.get_bool(Field::VideoSmooth);
                    host.video.set_filtering(smooth);
                }
                ControlSignal::Continue
            }
            SettingKind::SoftFilter => {
                if flip_bool(host, Field::SoftFilter, action, false) {
                    host.video.apply_state_changes();
                }
                ControlSignal::Continue
            }
            SettingKind::DisplayMode => {
                match action {
                    Action::Left => host.platform.step_display_mode(Step::Decrease),
                    Action::Ok | Action::Right => host.platform.step_display_mode(Step::Increase),
                    Action::Start => host.platform.step_display_mode(Step::Default),
                    _ => {}
                }
                ControlSignal::Continue
            }
            SettingKind::Gamma => {
                if adjust_field(host, SteppedField::Gamma, action) {
                    host.video.apply_state_changes();
                }
                ControlSignal::Continue
            }
            SettingKind::AspectRatio => {
                if adjust_field(host, SteppedField::AspectRatio, action) {
                    let index = host.config.get_index(Field::AspectRatioIndex);
                    host.video.set_aspect_ratio(index);
                }
                ControlSignal::Continue
            }
            SettingKind::Rotation => {
                if adjust_field(host, SteppedField::Rotation, action) {
                    let rotation = host.config.get_index(Field::Rotation);
                    host.video.set_rotation(rotation);
                }
                ControlSignal::Continue
            }
            SettingKind::AudioMute => {
                flip_bool(host, Field::AudioMute, action, false);
                ControlSignal::Continue
            }
            SettingKind::AudioControlRate => {
                adjust_field(host, SteppedField::AudioControlRate, action);
                ControlSignal::Continue
            }
            SettingKind::SramDirEnable => {
                flip_bool(host, Field::SramDirEnable, action, true);
                ControlSignal::Continue
            }
            SettingKind::StateDirEnable => {
                flip_bool(host, Field::StateDirEnable, action, true);
                ControlSignal::Continue
            }
            SettingKind::DebugInfo => {
                flip_bool(host, Field::DebugInfo, action, false);
                ControlSignal::Continue
            }
            SettingKind::ShaderApply => {
                if action == Action::Ok {
                    self.apply_pipeline(host);
                }
                ControlSignal::Continue
            }
            SettingKind::ShaderDefaultFilter => {
                // Same smoothness flag the video filter row edits; it is read
                // the next time a shader is set up, so no video call here.
                flip_bool(host, Field::VideoSmooth, action, true);
                ControlSignal::Continue
            }
            SettingKind::ShaderLoadPreset => {
                if matches!(action, Action::Ok | Action::Left | Action::Right) {
                    let dir = host.config.get_text(Field::ShaderDir);
                    self.enter(dir, Context::PresetBrowser);
                }
                ControlSignal::Continue
            }
            SettingKind::ShaderPassCount => {
                let active = self.shader.active_passes();
                match action {
                    Action::Left if active > 0 => {
                        self.shader.set_active_passes(active - 1);
                        self.need_refresh = true;
                    }
                    Action::Ok | Action::Right if active < MAX_SHADER_PASSES => {
                        self.shader.set_active_passes(active + 1);
                        self.need_refresh = true;
                    }
                    Action::Start if active > 0 => {
                        self.shader.set_active_passes(0);
                        self.need_refresh = true;
                    }
                    _ => {}
                }
                ControlSignal::Continue
            }
            // Page openers have nothing to step.
            SettingKind::CoreSelect
            | SettingKind::CoreOptions
            | SettingKind::ShaderManager
            | SettingKind::ControllerConfig(_)
            | SettingKind::CustomRatio
            | SettingKind::ChangeContent => ControlSignal::Continue,
        }
    }

    fn toggle_shader_pass(
        &mut self,
        pass: usize,
        field: PassField,
        action: Action,
        host: &mut Host<'_>,
    ) {
        match field {
            PassField::Source => match action {
                Action::Ok | Action::Left | Action::Right => {
                    let dir = host.config.get_text(Field::ShaderDir);
                    self.enter(dir, Context::ShaderSourceBrowser { pass });
                }
                Action::Start => {
                    if let Some(slot) = self.shader.pass_mut(pass) {
                        slot.source = None;
                    }
                }
                _ => {}
            },
            PassField::Filter => {
                if let Some(slot) = self.shader.pass_mut(pass) {
                    match action {
                        Action::Ok | Action::Right => slot.filter = slot.filter.next(),
                        Action::Left => slot.filter = slot.filter.prev(),
                        Action::Start => slot.filter = FilterMode::Unspecified,
                        _ => {}
                    }
                }
            }
            PassField::Scale => {
                if let Some(slot) = self.shader.pass_mut(pass) {
                    match action {
                        Action::Ok | Action::Right => slot.step_scale_up(),
                        Action::Left => slot.step_scale_down(),
                        Action::Start => slot.scale = 0,
                        _ => {}
                    }
                }
            }
        }
    }

    /// Write the edited pipeline out and activate it. Zero active passes
    /// means "no shader"; any failure logs and disables the shader instead
    /// of propagating.
    fn apply_pipeline(&mut self, host: &mut Host<'_>) {
        if self.shader.active_passes() == 0 {
            match host.video.set_shader(None) {
                Ok(()) => host.config.set(Field::ShaderEnable, Value::Bool(false)),
                Err(err) => warn!("failed to clear shader: {}", err),
            }
            return;
        }

        let path = match host.presets.save_current(&self.shader) {
            Ok(path) => path,
            Err(err) => {
                warn!("failed to write shader preset: {}", err);
                host.config.set(Field::ShaderEnable, Value::Bool(false));
                return;
            }
        };
        match host.video.set_shader(Some(&path)) {
            Ok(()) => {
                host.config.set(Field::ShaderEnable, Value::Bool(true));
                host.config.set(Field::ShaderPath, Value::Text(path));
            }
            Err(err) => {
                warn!("video driver rejected shader preset {}: {}", path, err);
                host.config.set(Field::ShaderEnable, Value::Bool(false));
            }
        }
    }
}

/// Ok/Left/Right flip, Start resets to `default`. True when the field moved.
fn flip_bool(host: &mut Host<'_>, field: Field, action: Action, default: bool) -> bool {
    match action {
        Action::Ok | Action::Left | Action::Right => {
            host.config.toggle_bool(field);
            true
        }
        Action::Start => {
            host.config.set(field, Value::Bool(default));
            true
        }
        _ => false,
    }
}

/// Route a stepped field through the store's policy. True when stepped.
fn adjust_field(host: &mut Host<'_>, field: SteppedField, action: Action) -> bool {
    let step = match action {
        Action::Left => Step::Decrease,
        Action::Ok | Action::Right => Step::Increase,
        Action::Start => Step::Default,
        _ => return false,
    };
    host.config.adjust(field, step);
    true
}

/// Post `request` on Ok and yield the tick to the host.
fn end_with(host: &mut Host<'_>, action: Action, request: HostRequest) -> ControlSignal {
    if action == Action::Ok {
        host.session.post(request);
        ControlSignal::EndWithEffect
    } else {
        ControlSignal::Continue
    }
}

fn toggle_bind(port: usize, control: BindControl, action: Action, host: &mut Host<'_>) {
    match control {
        BindControl::Device => {
            if adjust_field(host, SteppedField::InputDevice(port), action) {
                let device = host.config.get_index(Field::InputDevice(port));
                host.input.apply_device(port, device);
            }
        }
        BindControl::DpadMode => {
            let current = DpadMode::from_index(host.config.get_index(Field::DpadEmulation(port)));
            let next = match action {
                Action::Ok | Action::Right => Some(current.next()),
                Action::Left => Some(current.prev()),
                Action::Start => Some(DpadMode::LeftStick),
                _ => None,
            };
            if let Some(mode) = next {
                host.config
                    .set(Field::DpadEmulation(port), Value::Index(mode.index()));
                host.input.apply_dpad_mode(port, mode);
            }
        }
        BindControl::Button(button) => {
            let step = match action {
                Action::Start => Some(Step::Default),
                Action::Left => Some(Step::Decrease),
                Action::Ok | Action::Right => Some(Step::Increase),
                _ => None,
            };
            if let Some(step) = step {
                host.input.adjust_bind(port, button, step);
            }
        }
    }
}
