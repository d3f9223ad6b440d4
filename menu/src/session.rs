/// Live viewport rectangle edited by the capture dialog.
///
/// Fields are signed on purpose: single-unit nudges may push an edge past
/// zero, and clamping is the video collaborator's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ViewportRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Mode change the engine asks the host to perform after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    LoadContent,
    Resume,
    ResetContent,
    SaveState,
    LoadState,
    Screenshot,
    /// A different core was picked; the host should reload core metadata
    /// (name, supported extensions) without leaving the menu.
    CoreSelected,
    RestartApp,
    Quit,
}

/// Per-run state shared between the engine and its host.
#[derive(Debug, Default)]
pub struct Session {
    pub content_loaded: bool,
    pub content_path: String,
    /// Pipe-separated extension filter for content browsing, e.g. "rom|bin".
    pub content_extensions: String,
    pub core_name: String,
    pub viewport: ViewportRect,
    request: Option<HostRequest>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a request for the host. A later request in the same tick wins.
    pub fn post(&mut self, request: HostRequest) {
        self.request = Some(request);
    }

    pub fn request(&self) -> Option<HostRequest> {
        self.request
    }

    /// Hand the pending request to the host, clearing it.
    pub fn take_request(&mut self) -> Option<HostRequest> {
        self.request.take()
    }
}
