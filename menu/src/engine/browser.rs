use std::path::Path;

use tracing::{debug, error, warn};

use crate::action::{Action, ControlSignal};
use crate::config::{Field, Value};
use crate::entry::EntryKind;
use crate::host::Host;
use crate::session::HostRequest;
use crate::stack::{Context, Family};

use super::{MenuEngine, Tick};

/// Left/Right page stride; clamps at the ends, never wraps.
const PAGE_STRIDE: usize = 8;

pub(crate) fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        Path::new(dir).join(name).to_string_lossy().into_owned()
    }
}

impl MenuEngine {
    /// Browser-family transition: content, device, core, shader-source and
    /// preset browsing.
    pub(crate) fn browser_tick(&mut self, mut action: Action, host: &mut Host<'_>) -> Tick {
        if self.need_refresh {
            action = Action::Noop;
        }

        let mut signal = ControlSignal::Continue;
        match action {
            Action::Up => self.cursor_up(),
            Action::Down => self.cursor_down(),
            Action::Left => {
                self.cursor = if self.cursor > PAGE_STRIDE {
                    self.cursor - PAGE_STRIDE
                } else {
                    0
                };
            }
            Action::Right => {
                let len = self.entries.len();
                if len > 0 {
                    self.cursor = (self.cursor + PAGE_STRIDE).min(len - 1);
                }
            }
            Action::Cancel => {
                if self.pop_level() {
                    self.need_refresh = true;
                }
            }
            Action::Menu => {
                // The menu button jumps to the settings root from anywhere in
                // a browser; the outer loop runs the settings pass this tick.
                // Unwinding restores the root browser's own cursor, which the
                // settings frame then saves for its eventual pop.
                let cursor = self.stack.unwind_to_root().unwrap_or(self.cursor);
                self.stack.push("", Context::Settings, cursor);
                self.cursor = 0;
                self.need_refresh = true;
                return Tick::Redispatch(Action::Refresh);
            }
            Action::Ok => signal = self.browser_open(host),
            Action::Refresh => {
                // Forced rescan, e.g. after the host unpacked an archive.
                self.cursor = 0;
                self.need_refresh = true;
            }
            Action::Start | Action::Noop => {}
        }

        self.populate_if_needed(host, Family::Browser);
        Tick::Done(signal)
    }

    fn browser_open(&mut self, host: &mut Host<'_>) -> ControlSignal {
        let Some(entry) = self.entries.get(self.cursor) else {
            return ControlSignal::Continue;
        };
        let name = entry.label.clone();
        let kind = entry.kind;
        let top = self.stack.top();
        let context = top.context;
        let dir = top.label.clone();

        match kind {
            EntryKind::Directory => {
                let path = join_path(&dir, &name);
                self.enter(path, context);
                ControlSignal::Continue
            }
            EntryKind::Device => {
                // Device paths are roots already; no join.
                self.enter(name, Context::DeviceBrowser);
                ControlSignal::Continue
            }
            EntryKind::File => self.open_file(context, &dir, &name, host),
            _ => ControlSignal::Continue,
        }
    }

    fn open_file(
        &mut self,
        context: Context,
        dir: &str,
        name: &str,
        host: &mut Host<'_>,
    ) -> ControlSignal {
        let path = join_path(dir, name);
        match context {
            Context::ShaderSourceBrowser { pass } => {
                if let Some(slot) = self.shader.pass_mut(pass) {
                    slot.source = Some(path);
                }
                self.pop_to_shader_manager();
                self.need_refresh = true;
                ControlSignal::Continue
            }
            Context::PresetBrowser => {
                self.apply_preset_file(&path, host);
                self.pop_to_shader_manager();
                self.need_refresh = true;
                ControlSignal::Continue
            }
            Context::CoreBrowser => {
                host.config.set(Field::CorePath, Value::Text(path));
                if host.platform.can_load_cores() {
                    self.pop_level();
                    self.need_refresh = true;
                    host.session.post(HostRequest::CoreSelected);
                    ControlSignal::Continue
                } else {
                    host.session.post(HostRequest::RestartApp);
                    ControlSignal::EndWithEffect
                }
            }
            Context::ContentBrowser | Context::DeviceBrowser => {
                debug!("content picked: {}", path);
                host.session.content_path = path;
                host.session.post(HostRequest::LoadContent);
                self.need_refresh = true;
                ControlSignal::EndWithEffect
            }
            _ => ControlSignal::Continue,
        }
    }

    /// Applying a preset file hands it straight to the video driver; the
    /// in-menu pass editor keeps whatever it was showing.
    fn apply_preset_file(&mut self, path: &str, host: &mut Host<'_>) {
        match host.video.set_shader(Some(path)) {
            Ok(()) => {
                host.config.set(Field::ShaderEnable, Value::Bool(true));
                host.config
                    .set(Field::ShaderPath, Value::Text(path.to_string()));
                debug!("shader preset applied: {}", path);
            }
            Err(err) => {
                host.config.set(Field::ShaderEnable, Value::Bool(false));
                warn!("failed to apply shader preset {}: {}", path, err);
            }
        }
    }

    /// Unwind shader browsing back to the shader-manager frame. A stack with
    /// no such frame is malformed; debug builds assert, release builds stop
    /// at the root.
    pub(crate) fn pop_to_shader_manager(&mut self) {
        while self.stack.top().context != Context::ShaderManager {
            match self.stack.pop() {
                Some(saved) => self.cursor = saved,
                None => {
                    debug_assert!(false, "no shader manager frame below a shader browser");
                    error!("shader manager frame missing; stopped at the menu root");
                    break;
                }
            }
        }
    }
}
