//! Session lifecycle: counters, timer, controller and the render boundary.
//!
//! ## Key Types
//!
//! - `SessionState`: Attempts, matched pairs and elapsed seconds
//! - `Timer`: The single repeating tick task
//! - `Renderer`: Callbacks into the presentation layer
//! - `SessionController`: Start, play, win, reset

pub mod controller;
pub mod render;
pub mod state;
pub mod timer;

pub use controller::{SessionController, SessionPhase, SessionSnapshot};
pub use render::{NullRenderer, RecordingRenderer, RenderEvent, Renderer, WinSummary};
pub use state::SessionState;
pub use timer::Timer;
