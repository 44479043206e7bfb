//! Oscilloscope display state machine.
//!
//! Each display is bound to one sample stream and runs in exactly one of two
//! render modes: a time-domain trace with phosphor-style afterglow, or an XY
//! "dot" rendering with a fading trail. The two modes keep separate history
//! and are never composited together.

use super::SampleBuffer;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::warn;

/// Depth of the wave-mode afterglow ring: beam + two glow layers.
pub const HISTORY_DEPTH: usize = 3;
/// Maximum dot-mode trail length in points.
pub const DOT_TRAIL_LEN: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Wave,
    Dot,
}

impl RenderMode {
    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Wave => "wave",
            RenderMode::Dot => "dot",
        }
    }

    /// Parses a mode name; anything unrecognized is `None` so callers can
    /// treat bad requests as a no-op.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "wave" => Some(RenderMode::Wave),
            "dot" => Some(RenderMode::Dot),
            _ => None,
        }
    }

    /// Fixed view rectangle re-applied on every transition into this mode.
    pub fn bounds(self) -> AxisBounds {
        match self {
            RenderMode::Wave => AxisBounds {
                x_min: 0.0,
                x_max: 0.002,
                y_min: -2.0,
                y_max: 2.0,
            },
            RenderMode::Dot => AxisBounds {
                x_min: -2.0,
                x_max: 2.0,
                y_min: -2.0,
                y_max: 2.0,
            },
        }
    }
}

/// Visible axis rectangle in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Recency rank of a wave-mode trace layer, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlowLevel {
    /// Bright beam, newest buffer.
    Beam,
    /// First afterglow layer.
    Glow,
    /// Second, fainter afterglow layer.
    Halo,
}

impl GlowLevel {
    const BY_RANK: [GlowLevel; HISTORY_DEPTH] = [GlowLevel::Beam, GlowLevel::Glow, GlowLevel::Halo];
}

/// Per-tick input for a display; the variant must match the active mode.
#[derive(Debug, Clone)]
pub enum ScopeInput {
    Trace(SampleBuffer),
    Point { x: f64, y: f64 },
}

#[derive(Debug, Clone)]
pub struct ScopeDisplay {
    mode: RenderMode,
    bounds: AxisBounds,
    /// Wave-mode afterglow ring, newest first.
    history: VecDeque<SampleBuffer>,
    /// Dot-mode trail, oldest first.
    trail: VecDeque<(f64, f64)>,
}

impl Default for ScopeDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeDisplay {
    pub fn new() -> Self {
        Self::with_mode(RenderMode::default())
    }

    pub fn with_mode(mode: RenderMode) -> Self {
        Self {
            mode,
            bounds: mode.bounds(),
            history: VecDeque::with_capacity(HISTORY_DEPTH + 1),
            trail: VecDeque::with_capacity(DOT_TRAIL_LEN + 1),
        }
    }

    #[inline]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    #[inline]
    pub fn bounds(&self) -> AxisBounds {
        self.bounds
    }

    /// Switches render mode. Re-applies the target mode's axis bounds even
    /// when the mode is unchanged; history is only touched on a real
    /// transition, and only the dot trail is discarded (wave history survives
    /// a dot excursion).
    pub fn set_mode(&mut self, mode: RenderMode) {
        if mode != self.mode {
            self.mode = mode;
            if mode == RenderMode::Wave {
                self.trail.clear();
            }
        }
        self.bounds = mode.bounds();
    }

    /// Feeds one tick's worth of data. Input of the wrong kind for the active
    /// mode is reported and dropped.
    pub fn update(&mut self, input: ScopeInput) {
        match (self.mode, input) {
            (RenderMode::Wave, ScopeInput::Trace(buffer)) => {
                self.history.push_front(buffer);
                self.history.truncate(HISTORY_DEPTH);
            }
            (RenderMode::Dot, ScopeInput::Point { x, y }) => {
                self.trail.push_back((x, y));
                while self.trail.len() > DOT_TRAIL_LEN {
                    self.trail.pop_front();
                }
            }
            (mode, input) => {
                warn!(mode = mode.name(), ?input, "scope input does not match render mode");
            }
        }
    }

    /// Wave-mode layers to draw, newest first. Empty while in dot mode so a
    /// disabled renderer never shows stale traces.
    pub fn trace_layers(&self) -> impl Iterator<Item = (GlowLevel, &SampleBuffer)> {
        let visible = match self.mode {
            RenderMode::Wave => self.history.len().min(HISTORY_DEPTH),
            RenderMode::Dot => 0,
        };
        self.history
            .iter()
            .take(visible)
            .enumerate()
            .map(|(rank, buffer)| (GlowLevel::BY_RANK[rank], buffer))
    }

    /// Dot-mode trail in chronological order; empty while in wave mode.
    pub fn trail(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let visible = match self.mode {
            RenderMode::Dot => self.trail.len(),
            RenderMode::Wave => 0,
        };
        self.trail.iter().take(visible).copied()
    }

    /// Latest dot-mode point, where the marker is drawn.
    pub fn latest_point(&self) -> Option<(f64, f64)> {
        match self.mode {
            RenderMode::Dot => self.trail.back().copied(),
            RenderMode::Wave => None,
        }
    }

    #[cfg(test)]
    fn history_len(&self) -> usize {
        self.history.len()
    }

    #[cfg(test)]
    fn trail_len(&self) -> usize {
        self.trail.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(tag: f64) -> ScopeInput {
        ScopeInput::Trace(SampleBuffer::new(vec![0.0, 0.001], vec![tag, tag]))
    }

    #[test]
    fn history_ring_keeps_three_newest_first() {
        let mut scope = ScopeDisplay::new();
        for i in 0..5 {
            scope.update(trace(i as f64));
        }
        assert_eq!(scope.history_len(), HISTORY_DEPTH);

        let tags: Vec<f64> = scope
            .trace_layers()
            .map(|(_, buffer)| buffer.values[0])
            .collect();
        assert_eq!(tags, vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn glow_levels_follow_recency_rank() {
        let mut scope = ScopeDisplay::new();
        scope.update(trace(0.0));
        scope.update(trace(1.0));
        let levels: Vec<GlowLevel> = scope.trace_layers().map(|(level, _)| level).collect();
        assert_eq!(levels, vec![GlowLevel::Beam, GlowLevel::Glow]);
    }

    #[test]
    fn partial_history_renders_no_stale_layers() {
        let mut scope = ScopeDisplay::new();
        scope.update(trace(7.0));
        assert_eq!(scope.trace_layers().count(), 1);
    }

    #[test]
    fn dot_trail_keeps_latest_sixty_in_order() {
        let mut scope = ScopeDisplay::with_mode(RenderMode::Dot);
        for i in 0..100 {
            scope.update(ScopeInput::Point {
                x: i as f64,
                y: -(i as f64),
            });
        }
        assert_eq!(scope.trail_len(), DOT_TRAIL_LEN);

        let xs: Vec<f64> = scope.trail().map(|(x, _)| x).collect();
        let expected: Vec<f64> = (40..100).map(|i| i as f64).collect();
        assert_eq!(xs, expected);
        assert_eq!(scope.latest_point(), Some((99.0, -99.0)));
    }

    #[test]
    fn entering_wave_mode_clears_the_trail_but_not_wave_history() {
        let mut scope = ScopeDisplay::new();
        scope.update(trace(1.0));
        scope.update(trace(2.0));

        scope.set_mode(RenderMode::Dot);
        scope.update(ScopeInput::Point { x: 0.5, y: 0.5 });
        assert_eq!(scope.trace_layers().count(), 0, "wave layers hidden in dot mode");

        scope.set_mode(RenderMode::Wave);
        assert_eq!(scope.trail_len(), 0);
        assert_eq!(scope.history_len(), 2, "wave history survives the excursion");

        // A second round trip with no dot updates leaves the trail empty.
        scope.set_mode(RenderMode::Dot);
        assert_eq!(scope.trail().count(), 0);
        scope.set_mode(RenderMode::Wave);
        assert_eq!(scope.trail_len(), 0);
    }

    #[test]
    fn set_mode_is_idempotent_on_history() {
        let mut scope = ScopeDisplay::with_mode(RenderMode::Dot);
        scope.update(ScopeInput::Point { x: 1.0, y: 1.0 });
        scope.set_mode(RenderMode::Dot);
        assert_eq!(scope.trail_len(), 1);
        assert_eq!(scope.bounds(), RenderMode::Dot.bounds());
    }

    #[test]
    fn mode_transitions_reset_axis_bounds() {
        let mut scope = ScopeDisplay::new();
        assert_eq!(scope.bounds(), RenderMode::Wave.bounds());
        scope.set_mode(RenderMode::Dot);
        assert_eq!(scope.bounds(), RenderMode::Dot.bounds());
    }

    #[test]
    fn mismatched_input_is_dropped() {
        let mut scope = ScopeDisplay::new();
        scope.update(ScopeInput::Point { x: 1.0, y: 2.0 });
        assert_eq!(scope.trail_len(), 0);
        assert_eq!(scope.history_len(), 0);

        scope.set_mode(RenderMode::Dot);
        scope.update(trace(1.0));
        assert_eq!(scope.history_len(), 0);
    }

    #[test]
    fn unknown_mode_names_do_not_parse() {
        assert_eq!(RenderMode::from_name("wave"), Some(RenderMode::Wave));
        assert_eq!(RenderMode::from_name("dot"), Some(RenderMode::Dot));
        assert_eq!(RenderMode::from_name("xy"), None);
        assert_eq!(RenderMode::from_name(""), None);
    }
}
