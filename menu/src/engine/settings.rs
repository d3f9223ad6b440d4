use crate::action::{Action, ControlSignal};
use crate::config::Field;
use crate::entry::{EntryKind, SettingKind};
use crate::host::Host;
use crate::stack::{Context, Family, ViewportStage};

use super::{MenuEngine, Tick};

impl MenuEngine {
    /// Settings-family transition: the root settings page, core options,
    /// shader manager and controller pages.
    pub(crate) fn settings_tick(&mut self, mut action: Action, host: &mut Host<'_>) -> Tick {
        if self.need_refresh {
            // Entries are stale; swallow the input and repopulate below.
            action = Action::Noop;
        }

        let mut signal = ControlSignal::Continue;
        match action {
            Action::Up => self.cursor_up(),
            Action::Down => self.cursor_down(),
            Action::Cancel | Action::Menu => {
                if self.pop_level() {
                    self.need_refresh = true;
                }
            }
            Action::Ok | Action::Left | Action::Right | Action::Start => {
                signal = self.settings_activate(action, host);
            }
            Action::Refresh | Action::Noop => {}
        }

        self.populate_if_needed(host, Family::Settings);
        Tick::Done(signal)
    }

    fn settings_activate(&mut self, action: Action, host: &mut Host<'_>) -> ControlSignal {
        let Some(entry) = self.entries.get(self.cursor) else {
            return ControlSignal::Continue;
        };
        let kind = entry.kind;
        let label = entry.label.clone();

        match kind {
            EntryKind::Setting(setting) if setting.opens_page() && action == Action::Ok => {
                self.open_page(setting, label, host);
                ControlSignal::Continue
            }
            _ => self.toggle_entry(kind, action, host),
        }
    }

    fn open_page(&mut self, setting: SettingKind, label: String, host: &mut Host<'_>) {
        match setting {
            SettingKind::CoreSelect => {
                let core_dir = host.config.get_text(Field::CoreDir);
                self.enter(core_dir, Context::CoreBrowser);
            }
            SettingKind::CoreOptions => self.enter(label, Context::CoreOptions),
            SettingKind::ShaderManager => self.enter(label, Context::ShaderManager),
            SettingKind::ControllerConfig(port) => {
                self.enter(label, Context::Controller { port });
            }
            SettingKind::ChangeContent => {
                let base = self.base_path.clone();
                self.enter(base, Context::ContentBrowser);
            }
            SettingKind::CustomRatio => {
                // The dialog edits live over the current list: push without a
                // refresh so the page behind it stays drawable.
                let index = host.config.force_custom_aspect();
                host.video.set_aspect_ratio(index);
                let cursor = self.cursor;
                self.stack
                    .push("", Context::Viewport(ViewportStage::UpperLeft), cursor);
                host.video.apply_viewport(host.session.viewport);
            }
            _ => {}
        }
    }
}
