use ndarray::Array2;

use crate::config::{AMIN, TOP_DB};

// Slaney-style scale: linear below 1 kHz, logarithmic above.
const F_SP: f32 = 200.0 / 3.0;
const MIN_LOG_HZ: f32 = 1000.0;
const MIN_LOG_MEL: f32 = MIN_LOG_HZ / F_SP;

fn log_step() -> f32 {
    6.4f32.ln() / 27.0
}

pub(crate) fn hz_to_mel(hz: f32) -> f32 {
    if hz < MIN_LOG_HZ {
        hz / F_SP
    } else {
        MIN_LOG_MEL + (hz / MIN_LOG_HZ).ln() / log_step()
    }
}

pub(crate) fn mel_to_hz(mel: f32) -> f32 {
    if mel < MIN_LOG_MEL {
        mel * F_SP
    } else {
        MIN_LOG_HZ * (log_step() * (mel - MIN_LOG_MEL)).exp()
    }
}

/// Triangular mel filterbank, `(n_mels, n_fft / 2 + 1)`, area-normalized so
/// each filter integrates to roughly the same energy.
pub(crate) fn filterbank(sample_rate: u32, n_fft: usize, n_mels: usize) -> Array2<f32> {
    let bins = n_fft / 2 + 1;
    let mel_max = hz_to_mel(sample_rate as f32 / 2.0);

    // n_mels + 2 band edges, evenly spaced on the mel scale from 0 Hz.
    let edges: Vec<f32> = (0..n_mels + 2)
        .map(|i| mel_to_hz(mel_max * i as f32 / (n_mels + 1) as f32))
        .collect();

    let mut weights = Array2::<f32>::zeros((n_mels, bins));
    for m in 0..n_mels {
        let (low, center, high) = (edges[m], edges[m + 1], edges[m + 2]);
        let norm = 2.0 / (high - low);
        for k in 0..bins {
            let hz = k as f32 * sample_rate as f32 / n_fft as f32;
            let rising = (hz - low) / (center - low);
            let falling = (high - hz) / (high - center);
            weights[[m, k]] = rising.min(falling).max(0.0) * norm;
        }
    }

    weights
}

/// Converts a power matrix to decibels relative to its own peak, floored at
/// `TOP_DB` below that peak.
pub(crate) fn power_to_db(mut power: Array2<f32>) -> Array2<f32> {
    let reference = power.fold(0.0f32, |acc, &v| acc.max(v)).max(AMIN);
    let offset = 10.0 * reference.log10();
    power.mapv_inplace(|v| 10.0 * v.max(AMIN).log10() - offset);

    let peak = power.fold(f32::MIN, |acc, &v| acc.max(v));
    let floor = peak - TOP_DB;
    power.mapv_inplace(|v| v.max(floor));

    power
}
