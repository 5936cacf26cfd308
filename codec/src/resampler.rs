use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use crate::DecodeError;

const CHUNK_SIZE: usize = 1024;

/// Resamples a mono buffer with a windowed-sinc filter. The output is trimmed
/// by the filter delay and cut to `round(len * target / source)` samples.
pub fn resample(
    samples: &[f32],
    source_rate: u32,
    target_rate: u32,
) -> Result<Vec<f32>, DecodeError> {
    if source_rate == target_rate {
        return Ok(samples.to_vec());
    }

    let ratio = f64::from(target_rate) / f64::from(source_rate);
    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };
    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, CHUNK_SIZE, 1)?;

    let target_len = (samples.len() as f64 * ratio).round() as usize;
    let delay = resampler.output_delay();

    let mut output = Vec::with_capacity(target_len + delay);
    let mut chunks = samples.chunks(CHUNK_SIZE).peekable();
    while let Some(chunk) = chunks.next() {
        let input = [chunk];
        let processed = if chunks.peek().is_some() {
            resampler.process(&input, None)?
        } else {
            // The tail chunk is usually shorter than CHUNK_SIZE.
            resampler.process_partial(Some(&input), None)?
        };
        output.extend_from_slice(&processed[0]);
    }

    // One zero-fed chunk drains the filter delay line.
    let processed = resampler.process_partial::<&[f32]>(None, None)?;
    output.extend_from_slice(&processed[0]);

    Ok(output.into_iter().skip(delay).take(target_len).collect())
}
