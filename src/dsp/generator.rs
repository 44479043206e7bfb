//! Tick-driven waveform sampling for both channels and their sum.

use super::signal::WaveShape;
use super::{ChannelId, SampleBuffer};

/// Samples per generated window.
pub const SAMPLE_COUNT: usize = 2000;
/// Visible time window in seconds.
pub const WINDOW_SECONDS: f64 = 0.002;
/// Phase advance per generation tick, fixed after construction.
pub const PHASE_STEP: f64 = 5e-6;

pub const DEFAULT_AMPLITUDE: f64 = 1.0;
pub const DEFAULT_FREQUENCIES: [f64; 2] = [3000.0, 3400.0];

/// Per-channel signal parameters. `phase` accumulates monotonically across
/// ticks and is advanced only by [`WaveformGenerator::tick`]; preset loads and
/// control writes touch everything but the phase, so the animation never
/// jumps when the configuration changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelParams {
    pub amplitude: f64,
    pub frequency: f64,
    pub shape: WaveShape,
    phase: f64,
    phase_step: f64,
}

impl ChannelParams {
    fn new(frequency: f64) -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            frequency,
            shape: WaveShape::Sine,
            phase: 0.0,
            phase_step: PHASE_STEP,
        }
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

#[derive(Debug, Clone)]
pub struct WaveformGenerator {
    channels: [ChannelParams; 2],
    sample_count: usize,
    window: f64,
}

impl Default for WaveformGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveformGenerator {
    pub fn new() -> Self {
        Self {
            channels: [
                ChannelParams::new(DEFAULT_FREQUENCIES[0]),
                ChannelParams::new(DEFAULT_FREQUENCIES[1]),
            ],
            sample_count: SAMPLE_COUNT,
            window: WINDOW_SECONDS,
        }
    }

    /// Advances both channel phases by one step. The sole phase mutator;
    /// generation itself is side-effect free.
    pub fn tick(&mut self) {
        for ch in &mut self.channels {
            ch.phase += ch.phase_step;
        }
    }

    #[inline]
    pub fn channel(&self, id: ChannelId) -> &ChannelParams {
        &self.channels[id.index()]
    }

    pub fn set_amplitude(&mut self, id: ChannelId, amplitude: f64) {
        self.channels[id.index()].amplitude = amplitude;
    }

    pub fn set_frequency(&mut self, id: ChannelId, frequency: f64) {
        self.channels[id.index()].frequency = frequency;
    }

    pub fn set_shape(&mut self, id: ChannelId, shape: WaveShape) {
        self.channels[id.index()].shape = shape;
    }

    /// Endpoint-inclusive time axis over the visible window.
    fn time_axis(&self) -> Vec<f64> {
        let n = self.sample_count.max(2);
        let step = self.window / (n - 1) as f64;
        (0..n).map(|i| i as f64 * step).collect()
    }

    /// Freshly samples one channel at its current phase. Idempotent: calling
    /// any number of times between ticks yields identical buffers.
    pub fn generate(&self, id: ChannelId) -> SampleBuffer {
        let time = self.time_axis();
        let ch = self.channel(id);
        let values = ch
            .shape
            .evaluate(ch.amplitude, ch.frequency, &time, ch.phase);
        SampleBuffer::new(time, values)
    }

    /// Elementwise superposition of both channels, each at its own phase.
    pub fn generate_sum(&self) -> SampleBuffer {
        let time = self.time_axis();
        let [c1, c2] = &self.channels;
        let y1 = c1.shape.evaluate(c1.amplitude, c1.frequency, &time, c1.phase);
        let y2 = c2.shape.evaluate(c2.amplitude, c2.frequency, &time, c2.phase);
        let values = y1.iter().zip(&y2).map(|(a, b)| a + b).collect();
        SampleBuffer::new(time, values)
    }

    /// The channel's value at the window start, i.e. the scalar sample used
    /// for the XY dot rendering.
    pub fn instantaneous(&self, id: ChannelId) -> f64 {
        let ch = self.channel(id);
        ch.shape.sample(ch.amplitude, ch.frequency, ch.phase)
    }
}
