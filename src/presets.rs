//! Preset slot persistence.
//!
//! Four numbered slots, each holding a value-copy snapshot of both channels'
//! parameters plus the sum display's render mode. The whole mapping lives in
//! one JSON document; every save rewrites the file before returning.

use crate::dsp::generator::{DEFAULT_AMPLITUDE, DEFAULT_FREQUENCIES, WaveformGenerator};
use crate::dsp::scope::RenderMode;
use crate::dsp::signal::WaveShape;
use crate::dsp::ChannelId;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const SLOTS: std::ops::RangeInclusive<u8> = 1..=4;

fn config_dir() -> PathBuf {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wavescope")
}

/// Snapshot of everything a preset restores. `mode` was added after the
/// original file format shipped, so it stays optional on disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresetRecord {
    #[serde(rename = "A1")]
    pub amplitude_1: f64,
    #[serde(rename = "F1")]
    pub frequency_1: f64,
    #[serde(rename = "W1")]
    pub shape_1: WaveShape,
    #[serde(rename = "A2")]
    pub amplitude_2: f64,
    #[serde(rename = "F2")]
    pub frequency_2: f64,
    #[serde(rename = "W2")]
    pub shape_2: WaveShape,
    #[serde(default)]
    pub mode: RenderMode,
}

impl Default for PresetRecord {
    /// The hard-coded fallback applied when a slot has never been saved.
    fn default() -> Self {
        Self {
            amplitude_1: DEFAULT_AMPLITUDE,
            frequency_1: DEFAULT_FREQUENCIES[0],
            shape_1: WaveShape::Sine,
            amplitude_2: DEFAULT_AMPLITUDE,
            frequency_2: DEFAULT_FREQUENCIES[1],
            shape_2: WaveShape::Sine,
            mode: RenderMode::Wave,
        }
    }
}

impl PresetRecord {
    /// Value-copies the generator's current parameters and the given mode.
    pub fn capture(generator: &WaveformGenerator, mode: RenderMode) -> Self {
        let c1 = generator.channel(ChannelId::One);
        let c2 = generator.channel(ChannelId::Two);
        Self {
            amplitude_1: c1.amplitude,
            frequency_1: c1.frequency,
            shape_1: c1.shape,
            amplitude_2: c2.amplitude,
            frequency_2: c2.frequency,
            shape_2: c2.shape,
            mode,
        }
    }

    /// Writes the snapshot back into the generator. Phase is deliberately
    /// untouched so the animation stays continuous across preset switches.
    pub fn apply(&self, generator: &mut WaveformGenerator) {
        generator.set_amplitude(ChannelId::One, self.amplitude_1);
        generator.set_frequency(ChannelId::One, self.frequency_1);
        generator.set_shape(ChannelId::One, self.shape_1);
        generator.set_amplitude(ChannelId::Two, self.amplitude_2);
        generator.set_frequency(ChannelId::Two, self.frequency_2);
        generator.set_shape(ChannelId::Two, self.shape_2);
    }
}

#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
    slots: BTreeMap<String, PresetRecord>,
}

impl PresetStore {
    /// Opens the default per-user store.
    pub fn load_or_default() -> Self {
        Self::open(config_dir().join("presets.json"))
    }

    /// Opens a store at an explicit path. A missing file is created as an
    /// empty document; an unreadable or corrupt one degrades to an empty
    /// mapping without failing.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                warn!("[presets] parse error in {path:?}: {err}");
                BTreeMap::new()
            }),
            Err(_) => {
                if let Err(err) = write_document(&path, &BTreeMap::new()) {
                    warn!("[presets] could not initialise {path:?}: {err}");
                }
                BTreeMap::new()
            }
        };
        Self { path, slots }
    }

    /// Returns the slot's snapshot, or the hard-coded defaults when the slot
    /// has never been saved. Never an error.
    pub fn load(&self, slot: u8) -> PresetRecord {
        self.slots
            .get(&slot.to_string())
            .copied()
            .unwrap_or_default()
    }

    /// Inserts or overwrites a slot and flushes the whole mapping to disk
    /// before returning.
    pub fn save(&mut self, slot: u8, record: PresetRecord) -> Result<()> {
        self.slots.insert(slot.to_string(), record);
        write_document(&self.path, &self.slots)
            .with_context(|| format!("persisting presets to {:?}", self.path))
    }

    pub fn contains(&self, slot: u8) -> bool {
        self.slots.contains_key(&slot.to_string())
    }
}

fn write_document(path: &Path, slots: &BTreeMap<String, PresetRecord>) -> Result<()> {
    let json = serde_json::to_string_pretty(slots)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &json)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> PresetStore {
        PresetStore::open(dir.path().join("presets.json"))
    }

    #[test]
    fn missing_file_is_created_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("presets.json");
        let _store = PresetStore::open(&path);
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "{}");
    }

    #[test]
    fn load_on_empty_store_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let record = store_in(&dir).load(3);
        assert_eq!(record.amplitude_1, 1.0);
        assert_eq!(record.frequency_1, 3000.0);
        assert_eq!(record.shape_1, WaveShape::Sine);
        assert_eq!(record.amplitude_2, 1.0);
        assert_eq!(record.frequency_2, 3400.0);
        assert_eq!(record.shape_2, WaveShape::Sine);
        assert_eq!(record.mode, RenderMode::Wave);
    }

    #[test]
    fn save_then_load_reproduces_the_snapshot() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let mut generator = WaveformGenerator::new();
        generator.set_amplitude(ChannelId::One, 1.6);
        generator.set_frequency(ChannelId::Two, 440.0);
        generator.set_shape(ChannelId::Two, WaveShape::Square);
        let snapshot = PresetRecord::capture(&generator, RenderMode::Dot);
        store.save(2, snapshot).unwrap();

        // Mutating the live parameters afterwards must not affect the slot.
        generator.set_amplitude(ChannelId::One, 0.1);
        assert_eq!(store.load(2), snapshot);
    }

    #[test]
    fn saved_slots_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let record = PresetRecord {
            frequency_1: 12_000.0,
            shape_1: WaveShape::Triangle,
            mode: RenderMode::Dot,
            ..PresetRecord::default()
        };
        store_in(&dir).save(4, record).unwrap();

        let reopened = store_in(&dir);
        assert!(reopened.contains(4));
        assert_eq!(reopened.load(4), record);
        assert!(!reopened.contains(1));
    }

    #[test]
    fn corrupt_file_degrades_to_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("presets.json");
        fs::write(&path, "not json at all {").unwrap();
        let store = PresetStore::open(&path);
        assert_eq!(store.load(1), PresetRecord::default());
    }

    #[test]
    fn record_without_mode_field_defaults_to_wave() {
        let json = r#"{"A1": 0.5, "F1": 100, "W1": "sq", "A2": 1.5, "F2": 200, "W2": "tr"}"#;
        let record: PresetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.mode, RenderMode::Wave);
        assert_eq!(record.shape_1, WaveShape::Square);
        assert_eq!(record.frequency_2, 200.0);
    }

    #[test]
    fn apply_leaves_phase_untouched() {
        let mut generator = WaveformGenerator::new();
        for _ in 0..10 {
            generator.tick();
        }
        let phase_before = generator.channel(ChannelId::One).phase();

        PresetRecord::default().apply(&mut generator);
        assert_eq!(generator.channel(ChannelId::One).phase(), phase_before);
    }
}
