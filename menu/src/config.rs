/// Named configuration fields the engine reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RewindEnable,
    RewindGranularity,
    SaveStateSlot,
    VideoSmooth,
    SoftFilter,
    Gamma,
    AspectRatioIndex,
    Rotation,
    AudioMute,
    AudioControlRate,
    SramDirEnable,
    StateDirEnable,
    DebugInfo,
    ShaderEnable,
    ShaderPath,
    CorePath,
    CoreDir,
    ShaderDir,
    InputDevice(usize),
    DpadEmulation(usize),
}

/// Typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Index(usize),
    Text(String),
}

/// Fields whose step/clamp/wrap policy lives in the store, not the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteppedField {
    AspectRatio,
    Rotation,
    Gamma,
    AudioControlRate,
    SaveStateSlot,
    InputDevice(usize),
}

/// Direction of an injected step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increase,
    Decrease,
    Default,
}

/// Shared configuration store, passed by reference into every tick.
///
/// The engine performs no schema validation; it trusts the store to hand back
/// a sensible value for every field it owns.
pub trait ConfigStore {
    fn get(&self, field: Field) -> Value;

    fn set(&mut self, field: Field, value: Value);

    /// Apply one step of a store-owned policy (clamping, wrapping, lookup
    /// tables) to a field.
    fn adjust(&mut self, field: SteppedField, step: Step);

    /// Human-readable rendering of a field's current value.
    fn display(&self, field: Field) -> String;

    /// Switch the aspect-ratio field to the store's "custom" slot and return
    /// that slot's index.
    fn force_custom_aspect(&mut self) -> usize;

    fn get_bool(&self, field: Field) -> bool {
        matches!(self.get(field), Value::Bool(true))
    }

    fn get_int(&self, field: Field) -> i64 {
        match self.get(field) {
            Value::Int(v) => v,
            Value::Index(v) => v as i64,
            _ => 0,
        }
    }

    fn get_index(&self, field: Field) -> usize {
        match self.get(field) {
            Value::Index(v) => v,
            Value::Int(v) if v >= 0 => v as usize,
            _ => 0,
        }
    }

    fn get_text(&self, field: Field) -> String {
        match self.get(field) {
            Value::Text(v) => v,
            _ => String::new(),
        }
    }

    /// Flip a boolean field and return the new value.
    fn toggle_bool(&mut self, field: Field) -> bool {
        let flipped = !self.get_bool(field);
        self.set(field, Value::Bool(flipped));
        flipped
    }
}
