//! Terminal host driving the menu engine.

use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use menu::{Action, ConfigStore, Field, Host, HostRequest, MenuEngine, Session};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info, warn};

use crate::binder::TableBinder;
use crate::listing::FsLister;
use crate::options::FileCoreOptions;
use crate::platform::DesktopPlatform;
use crate::preset::JsonPresetStore;
use crate::render::{MenuFrame, Theme};
use crate::store::JsonConfigStore;
use crate::video::LoggingVideo;

enum Command {
    Engine(Action),
    Quit,
}

fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    let action = match key.code {
        KeyCode::Char('q') => return Some(Command::Quit),
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Left | KeyCode::Char('h') => Action::Left,
        KeyCode::Right | KeyCode::Char('l') => Action::Right,
        KeyCode::Enter => Action::Ok,
        KeyCode::Esc | KeyCode::Backspace => Action::Cancel,
        KeyCode::Char(' ') => Action::Start,
        KeyCode::Tab | KeyCode::F(1) => Action::Menu,
        KeyCode::Char('r') => Action::Refresh,
        _ => return None,
    };
    Some(Command::Engine(action))
}

fn core_display_name(path: &str) -> String {
    let stem = Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    stem.trim_end_matches("_libretro").to_string()
}

fn row_budget(height: u16, rows_override: Option<usize>) -> usize {
    if let Some(rows) = rows_override {
        return rows.max(1);
    }
    // Two border rows plus the status line.
    usize::from(height.saturating_sub(3)).max(1)
}

/// Owns every engine collaborator plus the terminal loop.
pub struct App {
    config: JsonConfigStore,
    session: Session,
    fs: FsLister,
    video: LoggingVideo,
    input: TableBinder,
    options: FileCoreOptions,
    presets: JsonPresetStore,
    platform: DesktopPlatform,
    theme: Theme,
    status: Option<String>,
    rows_override: Option<usize>,
}

impl App {
    pub fn new(
        config: JsonConfigStore,
        options: FileCoreOptions,
        presets: JsonPresetStore,
        rows_override: Option<usize>,
    ) -> Self {
        let mut session = Session::new();
        let core_path = config.get_text(Field::CorePath);
        if !core_path.is_empty() {
            session.core_name = core_display_name(&core_path);
        }

        Self {
            config,
            session,
            fs: FsLister,
            video: LoggingVideo::new(),
            input: TableBinder::new(),
            options,
            presets,
            platform: DesktopPlatform::new(),
            theme: Theme::dark(),
            status: None,
            rows_override,
        }
    }

    fn host(&mut self) -> Host<'_> {
        Host {
            config: &mut self.config,
            session: &mut self.session,
            fs: &self.fs,
            video: &mut self.video,
            input: &mut self.input,
            options: &mut self.options,
            presets: &self.presets,
            platform: &mut self.platform,
        }
    }

    /// Bring up the terminal, run the menu until quit and restore the
    /// terminal. The config is written back whichever way the loop ends.
    pub fn run(&mut self, base_path: &str) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.menu_loop(&mut terminal, base_path);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        if let Err(e) = self.config.save() {
            warn!(error = %e, "config save failed");
        }
        result
    }

    fn menu_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        base_path: &str,
    ) -> anyhow::Result<()> {
        let mut engine = {
            let mut host = self.host();
            MenuEngine::new(base_path, &mut host)
        };
        info!(base_path, "menu engine started");

        loop {
            // A context switch leaves the next list pending; drive one no-op
            // tick so the screen never sits on a stale page.
            if engine.refresh_pending() {
                let mut host = self.host();
                let signal = engine.iterate(Action::Noop, &mut host);
                debug!(ends_tick = signal.ends_tick(), "pending refresh settled");
            }

            let budget = row_budget(terminal.size()?.height, self.rows_override);
            let view = {
                let host = self.host();
                engine.frame_view(&host, budget)
            };
            terminal.draw(|frame| {
                if let Some(view) = &view {
                    let widget = MenuFrame {
                        view,
                        theme: &self.theme,
                        status: self.status.as_deref(),
                    };
                    frame.render_widget(widget, frame.area());
                }
            })?;

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(command) = command_for(key) else {
                continue;
            };
            let action = match command {
                Command::Quit => {
                    info!("quit key pressed");
                    return Ok(());
                }
                Command::Engine(action) => action,
            };

            let signal = {
                let mut host = self.host();
                engine.iterate(action, &mut host)
            };
            if signal.ends_tick() {
                debug!(?action, "tick ended with effect");
            }
            if !self.handle_request() {
                return Ok(());
            }
        }
    }

    /// Act on the request the engine posted this tick, if any. Returns false
    /// when the menu loop should end.
    fn handle_request(&mut self) -> bool {
        let Some(request) = self.session.take_request() else {
            return true;
        };
        info!(?request, "host request");

        match request {
            HostRequest::LoadContent => {
                self.session.content_loaded = true;
                self.status = Some(format!("Loaded {}", self.session.content_path));
            }
            HostRequest::Resume => {
                self.status = Some("Content resumed".to_string());
            }
            HostRequest::ResetContent => {
                self.status = Some("Content reset".to_string());
            }
            HostRequest::SaveState => {
                let slot = self.config.get_int(Field::SaveStateSlot);
                self.status = Some(format!("State saved to slot {}", slot));
            }
            HostRequest::LoadState => {
                let slot = self.config.get_int(Field::SaveStateSlot);
                self.status = Some(format!("State loaded from slot {}", slot));
            }
            HostRequest::Screenshot => {
                self.status = Some("Screenshot captured".to_string());
            }
            HostRequest::CoreSelected => {
                let core_path = self.config.get_text(Field::CorePath);
                self.session.core_name = core_display_name(&core_path);
                self.status = Some(format!("Core: {}", self.session.core_name));
            }
            HostRequest::RestartApp => {
                info!("restart requested, leaving the menu");
                return false;
            }
            HostRequest::Quit => {
                return false;
            }
        }
        true
    }
}
