mod browser;
mod populate;
mod settings;
mod toggle;
mod viewport;

use tracing::{debug, warn};

use crate::action::{Action, ControlSignal};
use crate::config::Field;
use crate::entry::EntryList;
use crate::host::{extension_matches, Host};
use crate::shader::ShaderPipeline;
use crate::stack::{Context, Family, MenuStack};
use crate::view::{self, FrameView};

/// Result of one family handler pass. `Redispatch` asks the outer loop to run
/// one more pass against the new stack top; it is bounded to a single extra
/// pass per tick.
pub(crate) enum Tick {
    Done(ControlSignal),
    Redispatch(Action),
}

/// The navigation/dispatch/settings-toggle core. One instance per menu
/// session; the host calls `iterate` once per frame tick.
pub struct MenuEngine {
    stack: MenuStack,
    entries: EntryList,
    cursor: usize,
    need_refresh: bool,
    shader: ShaderPipeline,
    base_path: String,
}

impl MenuEngine {
    /// Seed the stack with the content browser root and the settings page on
    /// top of it, and pick up any persisted shader pipeline.
    pub fn new(base_path: impl Into<String>, host: &mut Host<'_>) -> Self {
        let base_path = base_path.into();
        let mut stack = MenuStack::new(base_path.clone(), Context::ContentBrowser);
        stack.push("", Context::Settings, 0);
        let shader = initial_pipeline(host);
        debug!("menu engine ready, content root {}", base_path);

        Self {
            stack,
            entries: EntryList::new(),
            cursor: 0,
            need_refresh: true,
            shader,
            base_path,
        }
    }

    /// The sole entry point: interpret one action against the stack top.
    pub fn iterate(&mut self, action: Action, host: &mut Host<'_>) -> ControlSignal {
        let mut action = action;
        for _ in 0..2 {
            let tick = match self.stack.top().context.family() {
                Family::Settings => self.settings_tick(action, host),
                Family::Browser => self.browser_tick(action, host),
                Family::Viewport => self.viewport_tick(action, host),
            };
            match tick {
                Tick::Done(signal) => return signal,
                Tick::Redispatch(next) => action = next,
            }
        }
        ControlSignal::Continue
    }

    /// Visible window for the render collaborator, or None while a refresh is
    /// pending and the entries are stale.
    pub fn frame_view(&self, host: &Host<'_>, rows: usize) -> Option<FrameView> {
        if self.need_refresh {
            return None;
        }
        Some(view::build_frame(
            self.stack.top(),
            &self.entries,
            self.cursor,
            rows,
            &self.shader,
            host,
        ))
    }

    pub fn context(&self) -> Context {
        self.stack.top().context
    }

    pub fn context_label(&self) -> &str {
        &self.stack.top().label
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    pub fn refresh_pending(&self) -> bool {
        self.need_refresh
    }

    pub fn shader_pipeline(&self) -> &ShaderPipeline {
        &self.shader
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    // --- shared transition helpers ---

    pub(crate) fn cursor_up(&mut self) {
        let len = self.entries.len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    pub(crate) fn cursor_down(&mut self) {
        let len = self.entries.len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Pop one level and restore the cursor it saved. False at the root.
    pub(crate) fn pop_level(&mut self) -> bool {
        match self.stack.pop() {
            Some(saved) => {
                self.cursor = saved;
                true
            }
            None => false,
        }
    }

    pub(crate) fn enter(&mut self, label: impl Into<String>, context: Context) {
        self.stack.push(label, context, self.cursor);
        self.cursor = 0;
        self.need_refresh = true;
    }

    /// Rebuild the entry list when a refresh is due and the stack top falls
    /// inside the handling family's population scope. Browser tops repopulate
    /// through the directory lister, settings-family tops through the static
    /// and dynamic generators.
    pub(crate) fn populate_if_needed(&mut self, host: &mut Host<'_>, family: Family) {
        if !self.need_refresh {
            return;
        }
        let top_family = self.stack.top().context.family();
        let eligible = match family {
            Family::Browser => top_family == Family::Browser,
            // The viewport dialog is a settings sub-dialog; both repopulate
            // the settings pages they sit over.
            Family::Settings | Family::Viewport => top_family == Family::Settings,
        };
        if eligible {
            self.populate(host);
        }
    }

    fn populate(&mut self, host: &mut Host<'_>) {
        let top = self.stack.top().clone();
        let entries = match top.context {
            Context::Settings => populate::settings_entries(host),
            Context::CoreOptions => populate::core_option_entries(host),
            Context::ShaderManager => populate::shader_manager_entries(&self.shader),
            Context::Controller { port } => populate::controller_entries(port),
            Context::Viewport(_) => return,
            Context::ContentBrowser
            | Context::DeviceBrowser
            | Context::CoreBrowser
            | Context::ShaderSourceBrowser { .. }
            | Context::PresetBrowser => populate::browser_entries(&top.label, top.context, host),
        };
        self.entries.replace(entries);
        if self.cursor >= self.entries.len() {
            self.cursor = self.entries.len().saturating_sub(1);
        }
        self.need_refresh = false;
    }
}

/// Extension-driven pipeline bootstrap: preset files parse fully, bare shader
/// sources become a single pass, anything else probes the default preset in
/// the shader directory.
fn initial_pipeline(host: &mut Host<'_>) -> ShaderPipeline {
    let path = host.config.get_text(Field::ShaderPath);
    if !path.is_empty() {
        if extension_matches(&path, &host.platform.preset_extensions()) {
            return match host.presets.load(&path) {
                Ok(pipeline) => pipeline,
                Err(err) => {
                    warn!("ignoring unreadable shader preset {}: {}", path, err);
                    ShaderPipeline::new()
                }
            };
        }
        if extension_matches(&path, &host.platform.shader_extensions()) {
            return ShaderPipeline::single_pass(path);
        }
    }

    let extensions = host.platform.preset_extensions();
    let Some(extension) = extensions.split('|').find(|e| !e.is_empty()) else {
        return ShaderPipeline::new();
    };
    let default_path = browser::join_path(
        &host.config.get_text(Field::ShaderDir),
        &format!("default.{}", extension),
    );
    match host.presets.load(&default_path) {
        Ok(pipeline) => {
            debug!("default shader preset loaded from {}", default_path);
            pipeline
        }
        // Missing on a fresh install; nothing to report above debug.
        Err(err) => {
            debug!("no default shader preset at {}: {}", default_path, err);
            ShaderPipeline::new()
        }
    }
}
