//! Band levels and energy-based beat detection over byte frequency spectra.
//!
//! The analyzer does not own an audio source: callers feed it one spectrum per display frame
//! (values 0..=255 per bin, low frequencies first) together with a millisecond timestamp.

use std::collections::VecDeque;

use crate::scene::project::AudioSettings;

/// Energy samples averaged for the beat baseline, about one second at 60 Hz.
pub const HISTORY_LEN: usize = 43;
const DEFAULT_THRESHOLD: f64 = 0.6;
const DEFAULT_COOLDOWN_MS: f64 = 100.0;

/// Levels for one spectrum, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioAnalysis {
    pub volume: f64,
    pub bass: f64,
    pub mid: f64,
    pub high: f64,
    pub beat: bool,
    pub beat_intensity: f64,
}

#[derive(Clone, Debug)]
pub struct AudioAnalyzer {
    threshold: f64,
    cooldown_ms: f64,
    history: VecDeque<f64>,
    last_beat_ms: Option<f64>,
}

impl Default for AudioAnalyzer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            history: VecDeque::with_capacity(HISTORY_LEN + 1),
            last_beat_ms: None,
        }
    }
}

fn mean(bins: &[u8]) -> f64 {
    if bins.is_empty() {
        return 0.0;
    }
    bins.iter().map(|&b| f64::from(b) / 255.0).sum::<f64>() / bins.len() as f64
}

impl AudioAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer tuned by a project's audio settings.
    pub fn from_settings(settings: &AudioSettings) -> Self {
        let mut a = Self::default();
        a.set_beat_sensitivity(settings.beat_sensitivity);
        a
    }

    /// `sensitivity` in `[0, 1]`; higher fires on smaller energy spikes and allows faster beats.
    pub fn set_beat_sensitivity(&mut self, sensitivity: f64) {
        let s = if sensitivity.is_finite() {
            sensitivity.clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.threshold = 1.0 - s * 0.5;
        self.cooldown_ms = 50.0 + (1.0 - s) * 150.0;
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn cooldown_ms(&self) -> f64 {
        self.cooldown_ms
    }

    /// Band split is 10% bass, 40% mid, the rest high.
    pub fn analyze(&mut self, spectrum: &[u8], now_ms: f64) -> AudioAnalysis {
        if spectrum.is_empty() {
            return AudioAnalysis::default();
        }
        let bass_end = spectrum.len() / 10;
        let mid_end = spectrum.len() / 2;
        let bass = mean(&spectrum[..bass_end]);
        let mid = mean(&spectrum[bass_end..mid_end]);
        let high = mean(&spectrum[mid_end..]);
        let volume = mean(spectrum);

        let energy = bass * 2.0 + mid;
        self.history.push_back(energy);
        if self.history.len() > HISTORY_LEN {
            self.history.pop_front();
        }
        let average = self.history.iter().sum::<f64>() / self.history.len() as f64;

        let cooled = self
            .last_beat_ms
            .is_none_or(|last| now_ms - last > self.cooldown_ms);
        let beat = energy > average * (1.0 + self.threshold) && cooled;
        if beat {
            self.last_beat_ms = Some(now_ms);
        }

        let beat_intensity = if average > 0.0 {
            ((energy / average - 1.0) / self.threshold).clamp(0.0, 1.0)
        } else {
            0.0
        };

        AudioAnalysis {
            volume,
            bass,
            mid,
            high,
            beat,
            beat_intensity,
        }
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.last_beat_ms = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/analyzer.rs"]
mod tests;
