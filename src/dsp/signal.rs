//! Pure periodic waveform functions.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Closed set of supported waveform shapes. The serde tokens double as the
/// persisted preset vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WaveShape {
    #[default]
    #[serde(rename = "sin")]
    Sine,
    #[serde(rename = "sq")]
    Square,
    #[serde(rename = "tr")]
    Triangle,
}

impl WaveShape {
    pub const ALL: [WaveShape; 3] = [WaveShape::Sine, WaveShape::Square, WaveShape::Triangle];

    pub fn label(self) -> &'static str {
        match self {
            WaveShape::Sine => "sin",
            WaveShape::Square => "sq",
            WaveShape::Triangle => "tr",
        }
    }

    /// Evaluates the shape at a single time point.
    ///
    /// Square is tri-valued: at an exact zero crossing of the underlying sine
    /// the output is exactly 0, not ±A.
    #[inline]
    pub fn sample(self, amplitude: f64, frequency: f64, t: f64) -> f64 {
        let carrier = (TAU * frequency * t).sin();
        match self {
            WaveShape::Sine => amplitude * carrier,
            WaveShape::Square => amplitude * tri_sign(carrier),
            WaveShape::Triangle => amplitude * (2.0 / PI) * carrier.asin(),
        }
    }

    /// Evaluates the shape elementwise over `times`, each offset by `phase`.
    pub fn evaluate(self, amplitude: f64, frequency: f64, times: &[f64], phase: f64) -> Vec<f64> {
        times
            .iter()
            .map(|&t| self.sample(amplitude, frequency, t + phase))
            .collect()
    }
}

impl std::fmt::Display for WaveShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// f64::signum maps ±0.0 to ±1.0; the square wave needs the three-valued form.
#[inline]
fn tri_sign(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x.signum() }
}
