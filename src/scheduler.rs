//! Fixed-interval tick taxonomy.
//!
//! All repetition in the app is one of three cadences firing on the single
//! event-loop thread. Naming them here keeps the pipeline drivable from tests
//! without a running UI loop: the model consumes [`TickKind`] values through a
//! plain method and never owns a timer itself.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickKind {
    /// Phase advance + regeneration of all three streams.
    Generate,
    /// Cosmetic noise-overlay resample.
    Noise,
    /// Repaint/overlay refresh.
    Repaint,
}

impl TickKind {
    pub const ALL: [TickKind; 3] = [TickKind::Generate, TickKind::Noise, TickKind::Repaint];

    pub fn period(self) -> Duration {
        match self {
            TickKind::Generate => Duration::from_millis(8),
            TickKind::Noise => Duration::from_millis(40),
            TickKind::Repaint => Duration::from_millis(33),
        }
    }
}
