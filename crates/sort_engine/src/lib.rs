//! Animated sorting engine: eight instrumented sorting routines that suspend
//! at every visualized comparison or swap so a host can render and pace them.

mod algorithms;
pub mod config;
pub mod controller;
pub mod error;
pub mod generate;
pub mod reporter;
pub mod sequence;
pub mod session;

pub use config::SortConfig;
pub use controller::SortController;
pub use error::EngineError;
pub use generate::generate_values;
pub use reporter::{
    ChannelReporter, Frame, PacedReporter, PendingFrame, RecordedStep, RecordingReporter,
    Renderer, StepReporter,
};
pub use sequence::{Highlight, SequenceState, SettledSet};
pub use session::Session;
