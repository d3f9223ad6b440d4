/// Physical pad controls a controller page exposes for rebinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadButton {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    Y,
    Start,
    Select,
    L,
    R,
    L2,
    R2,
    L3,
    R3,
}

impl PadButton {
    pub const ALL: [PadButton; 16] = [
        PadButton::Up,
        PadButton::Down,
        PadButton::Left,
        PadButton::Right,
        PadButton::A,
        PadButton::B,
        PadButton::X,
        PadButton::Y,
        PadButton::Start,
        PadButton::Select,
        PadButton::L,
        PadButton::R,
        PadButton::L2,
        PadButton::R2,
        PadButton::L3,
        PadButton::R3,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PadButton::Up => "Up",
            PadButton::Down => "Down",
            PadButton::Left => "Left",
            PadButton::Right => "Right",
            PadButton::A => "A",
            PadButton::B => "B",
            PadButton::X => "X",
            PadButton::Y => "Y",
            PadButton::Start => "Start",
            PadButton::Select => "Select",
            PadButton::L => "L",
            PadButton::R => "R",
            PadButton::L2 => "L2",
            PadButton::R2 => "R2",
            PadButton::L3 => "L3",
            PadButton::R3 => "R3",
        }
    }
}

/// Which row of a controller page an entry controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindControl {
    Device,
    DpadMode,
    Button(PadButton),
}

/// Analog-to-dpad emulation mode for one controller port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DpadMode {
    Disabled,
    #[default]
    LeftStick,
    RightStick,
}

impl DpadMode {
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => DpadMode::Disabled,
            1 => DpadMode::LeftStick,
            _ => DpadMode::RightStick,
        }
    }

    pub fn index(self) -> usize {
        match self {
            DpadMode::Disabled => 0,
            DpadMode::LeftStick => 1,
            DpadMode::RightStick => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    pub fn label(self) -> &'static str {
        match self {
            DpadMode::Disabled => "None",
            DpadMode::LeftStick => "Left Stick",
            DpadMode::RightStick => "Right Stick",
        }
    }
}

/// Which field of a shader pass an entry edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassField {
    Source,
    Filter,
    Scale,
}

/// Rows of the settings-family pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    // Sub-page openers
    CoreSelect,
    CoreOptions,
    ShaderManager,
    ControllerConfig(usize),
    CustomRatio,
    ChangeContent,

    // Action leaves
    SaveState,
    LoadState,
    Screenshot,
    ResumeContent,
    RestartContent,
    RestartApp,
    Quit,

    // Toggles
    RewindEnable,
    RewindGranularity,
    VideoFilter,
    SoftFilter,
    DisplayMode,
    Gamma,
    AspectRatio,
    Rotation,
    AudioMute,
    AudioControlRate,
    SramDirEnable,
    StateDirEnable,
    DebugInfo,

    // Shader-manager fixed rows
    ShaderApply,
    ShaderDefaultFilter,
    ShaderLoadPreset,
    ShaderPassCount,
}

impl SettingKind {
    /// Rows that open another page instead of toggling a value.
    pub fn opens_page(self) -> bool {
        matches!(
            self,
            SettingKind::CoreSelect
                | SettingKind::CoreOptions
                | SettingKind::ShaderManager
                | SettingKind::ControllerConfig(_)
                | SettingKind::CustomRatio
                | SettingKind::ChangeContent
        )
    }
}

/// Tagged discriminant of a selectable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Device,
    Setting(SettingKind),
    CoreOption(usize),
    ShaderPass { pass: usize, field: PassField },
    Bind { port: usize, control: BindControl },
    Placeholder,
}

impl EntryKind {
    /// True for rows the toggle engine can act on.
    pub fn is_settable(self) -> bool {
        !matches!(
            self,
            EntryKind::File | EntryKind::Directory | EntryKind::Device | EntryKind::Placeholder
        )
    }
}

/// One selectable row of the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub label: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(label: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }
}

/// The rows of the current page. Rebuilt wholesale on refresh, never patched.
#[derive(Debug, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn as_slice(&self) -> &[Entry] {
        self.entries.as_slice()
    }
}
