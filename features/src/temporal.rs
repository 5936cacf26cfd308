use ndarray::Array2;

/// Root-mean-square energy per centered frame, `(1, 1 + len / hop)`. The
/// signal is zero-padded by half a frame on both ends.
pub(crate) fn rms(samples: &[f32], frame_length: usize, hop: usize) -> Array2<f32> {
    let pad = frame_length / 2;
    let mut padded = vec![0.0f32; samples.len() + 2 * pad];
    padded[pad..pad + samples.len()].copy_from_slice(samples);

    let frames = 1 + samples.len() / hop;
    let mut output = Array2::<f32>::zeros((1, frames));

    for t in 0..frames {
        let frame = &padded[t * hop..t * hop + frame_length];
        let mean_square = frame.iter().map(|&x| x * x).sum::<f32>() / frame_length as f32;
        output[[0, t]] = mean_square.sqrt();
    }

    output
}

/// Fraction of adjacent sample pairs changing sign per centered frame,
/// `(1, 1 + len / hop)`. The signal is edge-padded so silence around a clip
/// does not register as crossings.
pub(crate) fn zero_crossing_rate(samples: &[f32], frame_length: usize, hop: usize) -> Array2<f32> {
    let pad = frame_length / 2;
    let first = samples.first().copied().unwrap_or_default();
    let last = samples.last().copied().unwrap_or_default();

    let mut padded = Vec::with_capacity(samples.len() + 2 * pad);
    padded.extend(std::iter::repeat(first).take(pad));
    padded.extend_from_slice(samples);
    padded.extend(std::iter::repeat(last).take(pad));

    let frames = 1 + samples.len() / hop;
    let mut output = Array2::<f32>::zeros((1, frames));

    for t in 0..frames {
        let frame = &padded[t * hop..t * hop + frame_length];
        let crossings = frame
            .windows(2)
            .filter(|pair| is_negative(pair[0]) != is_negative(pair[1]))
            .count();
        output[[0, t]] = crossings as f32 / frame_length as f32;
    }

    output
}

// Magnitudes at or below the threshold count as positive zero.
fn is_negative(x: f32) -> bool {
    x < -1e-10
}
