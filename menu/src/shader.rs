/// Upper bound on shader passes, matching the preset format's limit.
pub const MAX_SHADER_PASSES: usize = 8;

/// Number of states the per-pass scale field cycles through (0 plus 1x..5x).
pub const SCALE_STATES: u32 = 6;

/// Texture filtering requested for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Unspecified,
    Linear,
    Nearest,
}

impl FilterMode {
    pub fn next(self) -> Self {
        match self {
            FilterMode::Unspecified => FilterMode::Linear,
            FilterMode::Linear => FilterMode::Nearest,
            FilterMode::Nearest => FilterMode::Unspecified,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FilterMode::Unspecified => FilterMode::Nearest,
            FilterMode::Linear => FilterMode::Unspecified,
            FilterMode::Nearest => FilterMode::Linear,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::Unspecified => "Don't care",
            FilterMode::Linear => "Linear",
            FilterMode::Nearest => "Nearest",
        }
    }
}

/// One pass of the pipeline. `scale` 0 means "let the driver decide"; any
/// nonzero value is an equal x/y multiplier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShaderPass {
    pub source: Option<String>,
    pub filter: FilterMode,
    pub scale: u32,
}

impl ShaderPass {
    pub fn is_upscaling(&self) -> bool {
        self.scale != 0
    }

    pub fn step_scale_up(&mut self) {
        self.scale = (self.scale + 1) % SCALE_STATES;
    }

    pub fn step_scale_down(&mut self) {
        self.scale = (self.scale + SCALE_STATES - 1) % SCALE_STATES;
    }
}

/// The editable pass sequence.
///
/// Storage is a fixed array so that lowering the active count and raising it
/// again brings back the previously edited passes.
#[derive(Debug, Clone, Default)]
pub struct ShaderPipeline {
    passes: [ShaderPass; MAX_SHADER_PASSES],
    active: usize,
}

impl ShaderPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline of exactly one pass over a bare shader source.
    pub fn single_pass(source: impl Into<String>) -> Self {
        let mut pipeline = Self::default();
        pipeline.passes[0].source = Some(source.into());
        pipeline.active = 1;
        pipeline
    }

    pub fn from_passes(passes: Vec<ShaderPass>) -> Self {
        let mut pipeline = Self::default();
        pipeline.active = passes.len().min(MAX_SHADER_PASSES);
        for (slot, pass) in pipeline.passes.iter_mut().zip(passes) {
            *slot = pass;
        }
        pipeline
    }

    pub fn active_passes(&self) -> usize {
        self.active
    }

    pub fn set_active_passes(&mut self, count: usize) {
        self.active = count.min(MAX_SHADER_PASSES);
    }

    pub fn pass(&self, index: usize) -> Option<&ShaderPass> {
        self.passes[..self.active].get(index)
    }

    pub fn pass_mut(&mut self, index: usize) -> Option<&mut ShaderPass> {
        self.passes[..self.active].get_mut(index)
    }

    pub fn visible(&self) -> &[ShaderPass] {
        &self.passes[..self.active]
    }
}
