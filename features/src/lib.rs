pub mod config;
mod delta;
mod extract;
mod mel;
mod mfcc;
mod record;
mod segment;
mod stft;
mod temporal;

pub use extract::extract_segments;
pub use record::FeatureRecord;

use ndarray::Array2;

use crate::config::{FRAME_HOP, N_FFT, N_MELS, N_MFCC};

/// What to do with a clip shorter than one segment window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortClip {
    /// Zero-pad the clip up to one window and keep it.
    Pad,
    /// Skip the clip entirely.
    Drop,
}

/// Segmentation parameters. Lengths are in seconds of audio at
/// `sample_rate`; sources at other rates are resampled before windowing.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub sample_rate: u32,
    pub segment_length: f64,
    pub hop_length: f64,
    pub short_clip: ShortClip,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            segment_length: 10.0,
            hop_length: 10.0,
            short_clip: ShortClip::Pad,
        }
    }
}

impl Config {
    #[must_use]
    pub fn window_samples(&self) -> usize {
        (self.segment_length * f64::from(self.sample_rate)).round() as usize
    }

    #[must_use]
    pub fn hop_samples(&self) -> usize {
        (self.hop_length * f64::from(self.sample_rate)).round() as usize
    }
}

/// Per-segment spectral and temporal features, all shaped
/// `(coefficients, frames)` over the same frame grid.
#[derive(Debug, Clone)]
pub struct FeatureBundle {
    /// Log-mel spectrogram in dB, referenced to the segment peak.
    pub mel: Array2<f32>,
    /// Mel-frequency cepstral coefficients of the log-mel spectrogram.
    pub mfcc: Array2<f32>,
    /// First-order MFCC deltas.
    pub mfcc_delta: Array2<f32>,
    /// Second-order MFCC deltas.
    pub mfcc_delta2: Array2<f32>,
    /// Root-mean-square energy per frame.
    pub rms: Array2<f32>,
    /// Zero-crossing rate per frame.
    pub zcr: Array2<f32>,
}

impl FeatureBundle {
    #[must_use]
    pub fn compute(samples: &[f32], sample_rate: u32) -> Self {
        let spectrogram = stft::power_spectrogram(samples, N_FFT, FRAME_HOP);
        let mel = mel::power_to_db(mel::filterbank(sample_rate, N_FFT, N_MELS).dot(&spectrogram));
        let mfcc = mfcc::dct_2(&mel, N_MFCC);
        let mfcc_delta = delta::delta(&mfcc);
        let mfcc_delta2 = delta::delta(&mfcc_delta);

        Self {
            mel,
            mfcc,
            mfcc_delta,
            mfcc_delta2,
            rms: temporal::rms(samples, N_FFT, FRAME_HOP),
            zcr: temporal::zero_crossing_rate(samples, N_FFT, FRAME_HOP),
        }
    }
}
