//! Owned application model and the control-surface command seam.
//!
//! The generator, the three scope displays and the preset store live here;
//! every mutation the UI can cause arrives as a [`ControlEvent`], so the whole
//! pipeline runs (and is tested) without any widget code.

use crate::dsp::generator::WaveformGenerator;
use crate::dsp::scope::{RenderMode, ScopeDisplay, ScopeInput};
use crate::dsp::signal::WaveShape;
use crate::dsp::ChannelId;
use crate::presets::{PresetRecord, PresetStore};
use crate::scheduler::TickKind;
use tracing::{info, warn};

/// The three oscilloscope screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeTarget {
    Wave1,
    Wave2,
    Sum,
}

impl ScopeTarget {
    pub const ALL: [ScopeTarget; 3] = [ScopeTarget::Wave1, ScopeTarget::Wave2, ScopeTarget::Sum];

    fn index(self) -> usize {
        match self {
            ScopeTarget::Wave1 => 0,
            ScopeTarget::Wave2 => 1,
            ScopeTarget::Sum => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ScopeTarget::Wave1 => "Wave 1",
            ScopeTarget::Wave2 => "Wave 2",
            ScopeTarget::Sum => "Sum",
        }
    }
}

/// Typed parameter-change commands emitted by the control surface. Writes
/// take effect on the next generation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    SetAmplitude(ChannelId, f64),
    SetFrequency(ChannelId, f64),
    SetWaveShape(ChannelId, WaveShape),
    SetRenderMode(ScopeTarget, RenderMode),
    SavePreset(u8),
    LoadPreset(u8),
}

#[derive(Debug, Clone)]
pub struct Model {
    generator: WaveformGenerator,
    scopes: [ScopeDisplay; 3],
    presets: PresetStore,
}

impl Model {
    pub fn new(presets: PresetStore) -> Self {
        Self {
            generator: WaveformGenerator::new(),
            scopes: [ScopeDisplay::new(), ScopeDisplay::new(), ScopeDisplay::new()],
            presets,
        }
    }

    #[inline]
    pub fn generator(&self) -> &WaveformGenerator {
        &self.generator
    }

    #[inline]
    pub fn scope(&self, target: ScopeTarget) -> &ScopeDisplay {
        &self.scopes[target.index()]
    }

    /// The sum display's current render mode, as snapshotted into presets.
    pub fn sum_mode(&self) -> RenderMode {
        self.scope(ScopeTarget::Sum).mode()
    }

    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::SetAmplitude(channel, value) => {
                self.generator.set_amplitude(channel, value);
            }
            ControlEvent::SetFrequency(channel, value) => {
                self.generator.set_frequency(channel, value);
            }
            ControlEvent::SetWaveShape(channel, shape) => {
                self.generator.set_shape(channel, shape);
            }
            ControlEvent::SetRenderMode(target, mode) => {
                self.scopes[target.index()].set_mode(mode);
            }
            ControlEvent::SavePreset(slot) => self.save_preset(slot),
            ControlEvent::LoadPreset(slot) => self.load_preset(slot),
        }
    }

    /// String-keyed render-mode request per the external control contract:
    /// an unrecognized mode name is a silent no-op.
    pub fn set_render_mode(&mut self, target: ScopeTarget, name: &str) {
        if let Some(mode) = RenderMode::from_name(name) {
            self.apply(ControlEvent::SetRenderMode(target, mode));
        }
    }

    /// Consumes one scheduler tick. Only `Generate` touches the pipeline;
    /// `Noise` and `Repaint` are cosmetic and handled by the view layer.
    pub fn advance(&mut self, tick: TickKind) {
        if tick == TickKind::Generate {
            self.generate_and_update();
        }
    }

    // Fixed update order: channel 1, channel 2, sum.
    fn generate_and_update(&mut self) {
        self.generator.tick();

        let trace1 = self.generator.generate(ChannelId::One);
        self.scopes[ScopeTarget::Wave1.index()].update(ScopeInput::Trace(trace1));

        let trace2 = self.generator.generate(ChannelId::Two);
        self.scopes[ScopeTarget::Wave2.index()].update(ScopeInput::Trace(trace2));

        let sum_input = match self.sum_mode() {
            RenderMode::Wave => ScopeInput::Trace(self.generator.generate_sum()),
            RenderMode::Dot => ScopeInput::Point {
                x: self.generator.instantaneous(ChannelId::One),
                y: self.generator.instantaneous(ChannelId::Two),
            },
        };
        self.scopes[ScopeTarget::Sum.index()].update(sum_input);
    }

    fn save_preset(&mut self, slot: u8) {
        let record = PresetRecord::capture(&self.generator, self.sum_mode());
        match self.presets.save(slot, record) {
            Ok(()) => info!("[presets] saved slot {slot}"),
            Err(err) => warn!("[presets] save failed for slot {slot}: {err:#}"),
        }
    }

    fn load_preset(&mut self, slot: u8) {
        let record = self.presets.load(slot);
        record.apply(&mut self.generator);
        self.scopes[ScopeTarget::Sum.index()].set_mode(record.mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn model_in(dir: &TempDir) -> Model {
        Model::new(PresetStore::open(dir.path().join("presets.json")))
    }

    #[test]
    fn control_events_reach_the_next_generate() {
        let dir = TempDir::new().unwrap();
        let mut model = model_in(&dir);
        model.apply(ControlEvent::SetAmplitude(ChannelId::One, 0.0));
        model.apply(ControlEvent::SetAmplitude(ChannelId::Two, 0.0));
        model.advance(TickKind::Generate);

        let (_, beam) = model
            .scope(ScopeTarget::Sum)
            .trace_layers()
            .next()
            .expect("sum trace after one tick");
        assert!(beam.values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn generate_tick_feeds_all_three_scopes() {
        let dir = TempDir::new().unwrap();
        let mut model = model_in(&dir);
        for _ in 0..5 {
            model.advance(TickKind::Generate);
        }
        for target in ScopeTarget::ALL {
            assert_eq!(model.scope(target).trace_layers().count(), 3);
        }
    }

    #[test]
    fn cosmetic_ticks_do_not_touch_the_pipeline() {
        let dir = TempDir::new().unwrap();
        let mut model = model_in(&dir);
        model.advance(TickKind::Noise);
        model.advance(TickKind::Repaint);
        assert_eq!(model.scope(ScopeTarget::Wave1).trace_layers().count(), 0);
        assert_eq!(model.generator().channel(ChannelId::One).phase(), 0.0);
    }

    #[test]
    fn dot_mode_sum_receives_instantaneous_points() {
        let dir = TempDir::new().unwrap();
        let mut model = model_in(&dir);
        model.apply(ControlEvent::SetRenderMode(ScopeTarget::Sum, RenderMode::Dot));
        model.advance(TickKind::Generate);

        let expected = (
            model.generator().instantaneous(ChannelId::One),
            model.generator().instantaneous(ChannelId::Two),
        );
        assert_eq!(model.scope(ScopeTarget::Sum).latest_point(), Some(expected));
    }

    #[test]
    fn invalid_mode_name_is_a_silent_no_op() {
        let dir = TempDir::new().unwrap();
        let mut model = model_in(&dir);
        model.set_render_mode(ScopeTarget::Sum, "dot");
        assert_eq!(model.sum_mode(), RenderMode::Dot);
        model.set_render_mode(ScopeTarget::Sum, "spiral");
        assert_eq!(model.sum_mode(), RenderMode::Dot);
    }

    #[test]
    fn preset_round_trip_restores_the_saved_snapshot() {
        let dir = TempDir::new().unwrap();
        let mut model = model_in(&dir);
        model.apply(ControlEvent::SetFrequency(ChannelId::One, 777.0));
        model.apply(ControlEvent::SetWaveShape(ChannelId::Two, WaveShape::Triangle));
        model.apply(ControlEvent::SetRenderMode(ScopeTarget::Sum, RenderMode::Dot));
        model.apply(ControlEvent::SavePreset(2));

        // Drift everything, then restore.
        model.apply(ControlEvent::SetFrequency(ChannelId::One, 1.0));
        model.apply(ControlEvent::SetWaveShape(ChannelId::Two, WaveShape::Sine));
        model.apply(ControlEvent::SetRenderMode(ScopeTarget::Sum, RenderMode::Wave));
        model.apply(ControlEvent::LoadPreset(2));

        assert_eq!(model.generator().channel(ChannelId::One).frequency, 777.0);
        assert_eq!(
            model.generator().channel(ChannelId::Two).shape,
            WaveShape::Triangle
        );
        assert_eq!(model.sum_mode(), RenderMode::Dot);
    }

    #[test]
    fn loading_an_unsaved_slot_applies_defaults() {
        let dir = TempDir::new().unwrap();
        let mut model = model_in(&dir);
        model.apply(ControlEvent::SetAmplitude(ChannelId::One, 1.9));
        model.apply(ControlEvent::SetFrequency(ChannelId::Two, 19_000.0));
        model.apply(ControlEvent::LoadPreset(3));

        let c1 = model.generator().channel(ChannelId::One);
        let c2 = model.generator().channel(ChannelId::Two);
        assert_eq!(c1.amplitude, 1.0);
        assert_eq!(c1.frequency, 3000.0);
        assert_eq!(c2.frequency, 3400.0);
        assert_eq!(model.sum_mode(), RenderMode::Wave);
    }

    #[test]
    fn preset_load_preserves_phase_continuity() {
        let dir = TempDir::new().unwrap();
        let mut model = model_in(&dir);
        for _ in 0..4 {
            model.advance(TickKind::Generate);
        }
        let phase = model.generator().channel(ChannelId::Two).phase();
        model.apply(ControlEvent::LoadPreset(1));
        assert_eq!(model.generator().channel(ChannelId::Two).phase(), phase);
    }
}
