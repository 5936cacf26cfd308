use ndarray::Array2;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Magnitude-squared spectrogram of centered, Hann-windowed frames.
///
/// The signal is zero-padded by `n_fft / 2` on both ends so frame `t` is
/// centered on sample `t * hop`; the frame count is `1 + len / hop`.
pub(crate) fn power_spectrogram(samples: &[f32], n_fft: usize, hop: usize) -> Array2<f32> {
    let pad = n_fft / 2;
    let mut padded = vec![0.0f32; samples.len() + n_fft];
    padded[pad..pad + samples.len()].copy_from_slice(samples);

    let frames = 1 + samples.len() / hop;
    let bins = n_fft / 2 + 1;

    let window = hann_window(n_fft);
    let fft = FftPlanner::new().plan_fft_forward(n_fft);

    let mut spectrogram = Array2::<f32>::zeros((bins, frames));
    let mut buffer = vec![Complex::new(0.0f32, 0.0); n_fft];

    for t in 0..frames {
        let start = t * hop;
        for (i, value) in buffer.iter_mut().enumerate() {
            *value = Complex::new(padded[start + i] * window[i], 0.0);
        }
        fft.process(&mut buffer);
        for k in 0..bins {
            spectrogram[[k, t]] = buffer[k].norm_sqr();
        }
    }

    spectrogram
}

fn hann_window(n: usize) -> Vec<f32> {
    use std::f32::consts::TAU;

    (0..n)
        .map(|i| 0.5 - 0.5 * (TAU * i as f32 / n as f32).cos())
        .collect()
}
