pub mod action;
pub mod config;
pub mod engine;
pub mod entry;
pub mod error;
pub mod host;
pub mod session;
pub mod shader;
pub mod stack;
pub mod view;

pub use action::{Action, ControlSignal};
pub use config::{ConfigStore, Field, Step, SteppedField, Value};
pub use engine::MenuEngine;
pub use entry::{
    BindControl, DpadMode, Entry, EntryKind, EntryList, PadButton, PassField, SettingKind,
};
pub use error::{ListError, ListResult, PresetError, PresetResult};
pub use host::{
    extension_matches, CoreOptionSource, DirectoryLister, FileEntry, Host, InputBinder,
    PlatformCapabilities, PresetStore, VideoControl,
};
pub use session::{HostRequest, Session, ViewportRect};
pub use shader::{FilterMode, ShaderPass, ShaderPipeline, MAX_SHADER_PASSES, SCALE_STATES};
pub use stack::{Context, Family, Frame, MenuStack, ViewportStage};
pub use view::{visible_window, FrameView, RowView};
