use smallvec::SmallVec;

/// Which corner of the rectangle the viewport dialog is placing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportStage {
    UpperLeft,
    LowerRight,
}

/// Discriminant of one menu level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    ContentBrowser,
    DeviceBrowser,
    CoreBrowser,
    ShaderSourceBrowser { pass: usize },
    PresetBrowser,
    Settings,
    CoreOptions,
    ShaderManager,
    Controller { port: usize },
    Viewport(ViewportStage),
}

/// The three disjoint transition families of the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Settings,
    Browser,
    Viewport,
}

impl Context {
    pub fn family(self) -> Family {
        match self {
            Context::ContentBrowser
            | Context::DeviceBrowser
            | Context::CoreBrowser
            | Context::ShaderSourceBrowser { .. }
            | Context::PresetBrowser => Family::Browser,
            Context::Settings
            | Context::CoreOptions
            | Context::ShaderManager
            | Context::Controller { .. } => Family::Settings,
            Context::Viewport(_) => Family::Viewport,
        }
    }

    pub fn is_browser(self) -> bool {
        self.family() == Family::Browser
    }
}

/// One level of the menu: a path-like label plus its context.
///
/// `saved_cursor` holds the parent list's cursor at push time; the matching
/// pop restores it.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub label: String,
    pub context: Context,
    saved_cursor: usize,
}

impl Frame {
    fn new(label: impl Into<String>, context: Context, saved_cursor: usize) -> Self {
        Self {
            label: label.into(),
            context,
            saved_cursor,
        }
    }
}

const STACK_INLINE_DEPTH: usize = 8;

/// Where-we-are stack. The root frame is part of the structure itself, so
/// depth can never fall below 1.
#[derive(Debug)]
pub struct MenuStack {
    root: Frame,
    tail: SmallVec<[Frame; STACK_INLINE_DEPTH]>,
}

impl MenuStack {
    pub fn new(root_label: impl Into<String>, root_context: Context) -> Self {
        Self {
            root: Frame::new(root_label, root_context, 0),
            tail: SmallVec::new(),
        }
    }

    /// Push a new level, remembering the cursor to restore when it pops.
    pub fn push(&mut self, label: impl Into<String>, context: Context, cursor_to_restore: usize) {
        self.tail.push(Frame::new(label, context, cursor_to_restore));
    }

    /// Pop the top level and hand back the cursor it saved. Popping the root
    /// is refused and returns None.
    pub fn pop(&mut self) -> Option<usize> {
        self.tail.pop().map(|frame| frame.saved_cursor)
    }

    pub fn top(&self) -> &Frame {
        self.tail.last().unwrap_or(&self.root)
    }

    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Drop every level above the root, popping one frame at a time, and hand
    /// back the cursor restored by the final pop. None if already at root.
    pub fn unwind_to_root(&mut self) -> Option<usize> {
        let mut restored = None;
        while let Some(cursor) = self.pop() {
            restored = Some(cursor);
        }
        restored
    }
}
