/*!
 * Rendering hooks.
 * Points and vectors can forward their coordinates to a rendering pipeline
 * through a `RenderHook`, without this crate depending on any graphics library.
 *
 * New built-in hooks need:
 * - A struct implementing `RenderHook`
 * - An enum variant containing that struct in `HookChoice`
 *
 * Embedding applications can also implement `RenderHook` on their own types.
 */

use enum_dispatch::enum_dispatch;

/// Rendering hook trait.
/// Receives vertex and normal data, in the order it is emitted.
#[enum_dispatch] // enum dispatch allows us to use the enum as a kind of trait object
pub trait RenderHook {
    /// Receive the coordinates of a vertex.
    fn emit_vertex(&mut self, x: f64, y: f64, z: f64);

    /// Receive the components of a normal.
    fn emit_normal(&mut self, dx: f64, dy: f64, dz: f64);
}

/// Built-in hooks enum.
#[derive(Debug)]
#[enum_dispatch(RenderHook)]
pub enum HookChoice {
    /// Discards everything.
    Noop(NoopHook),
    /// Keeps every emission in memory.
    Recording(RecordingHook),
    /// Logs every emission at trace level.
    Log(LogHook),
    /// Writes OBJ-style `v` / `vn` lines.
    Text(TextHook),
}
impl Default for HookChoice {
    fn default() -> Self {
        HookChoice::Noop(NoopHook)
    }
}

/// Hook that ignores all emissions.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;
impl RenderHook for NoopHook {
    fn emit_vertex(&mut self, _x: f64, _y: f64, _z: f64) {}
    fn emit_normal(&mut self, _dx: f64, _dy: f64, _dz: f64) {}
}

/// A single recorded emission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HookEvent {
    Vertex([f64; 3]),
    Normal([f64; 3]),
}

/// Hook that records every emission in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingHook {
    pub events: Vec<HookEvent>,
}
impl RecordingHook {
    /// Create a new, empty recording.
    pub fn new() -> Self {
        RecordingHook{events: Vec::new()}
    }
}
impl RenderHook for RecordingHook {
    fn emit_vertex(&mut self, x: f64, y: f64, z: f64) {
        self.events.push(HookEvent::Vertex([x, y, z]));
    }
    fn emit_normal(&mut self, dx: f64, dy: f64, dz: f64) {
        self.events.push(HookEvent::Normal([dx, dy, dz]));
    }
}

/// Hook that forwards every emission to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHook;
impl RenderHook for LogHook {
    fn emit_vertex(&mut self, x: f64, y: f64, z: f64) {
        log::trace!("vertex ({}, {}, {})", x, y, z);
    }
    fn emit_normal(&mut self, dx: f64, dy: f64, dz: f64) {
        log::trace!("normal ({}, {}, {})", dx, dy, dz);
    }
}

/// Hook that accumulates Wavefront OBJ style lines.
#[derive(Debug, Default, Clone)]
pub struct TextHook {
    buffer: String,
}
impl TextHook {
    /// Create a new, empty text buffer.
    pub fn new() -> Self {
        TextHook{buffer: String::new()}
    }

    /// Get the accumulated text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the hook, returning the accumulated text.
    pub fn into_string(self) -> String {
        self.buffer
    }
}
impl RenderHook for TextHook {
    fn emit_vertex(&mut self, x: f64, y: f64, z: f64) {
        self.buffer.push_str(&format!("v {} {} {}\n", x, y, z));
    }
    fn emit_normal(&mut self, dx: f64, dy: f64, dz: f64) {
        self.buffer.push_str(&format!("vn {} {} {}\n", dx, dy, dz));
    }
}
