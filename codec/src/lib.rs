use std::path::Path;

mod codec_params;
pub use codec_params::CodecParams;

mod decoder;
pub use decoder::{AudioFrame, Decoder};

mod error;
pub use error::DecodeError;

mod resampler;
pub use resampler::resample;

/// Averages interleaved channels into a single plane.
#[must_use]
pub fn downmix_mono(samples: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }

    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Decodes a media file into mono `f32` samples at `sample_rate`.
pub fn decode_mono_f32(path: &Path, sample_rate: u32) -> Result<Vec<f32>, DecodeError> {
    let decoder = Decoder::open(path)?;
    let params = decoder.codec_params();

    let mut mono = Vec::new();
    for frame in decoder {
        let frame = frame?;
        mono.extend(downmix_mono(&frame.samples, frame.channels));
    }

    resample(&mono, params.sample_rate(), sample_rate)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;
    use std::path::PathBuf;

    use super::*;

    fn sine(length: usize, frequency: f32, sample_rate: u32) -> Vec<f32> {
        (0..length)
            .map(|i| (TAU * frequency * i as f32 / sample_rate as f32).sin() * 0.5)
            .collect()
    }

    fn write_wav(path: &PathBuf, channels: &[Vec<f32>], sample_rate: u32) {
        let spec = hound::WavSpec {
            channels: channels.len() as u16,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for i in 0..channels[0].len() {
            for channel in channels {
                writer
                    .write_sample((channel[i] * f32::from(i16::MAX)) as i16)
                    .unwrap();
            }
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_downmix_mono_passthrough() {
        assert_eq!(downmix_mono(&[1.0, 2.0, 3.0], 1), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_downmix_mono_stereo() {
        assert_eq!(downmix_mono(&[1.0, 2.0, 3.0, 4.0], 2), vec![1.5, 3.5]);
    }

    #[test]
    fn test_decode_mono_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let samples = sine(8000, 440.0, 8000);
        write_wav(&path, &[samples.clone()], 8000);

        let decoded = decode_mono_f32(&path, 8000).unwrap();

        assert_eq!(decoded.len(), 8000);
        // 16-bit quantization bounds the roundtrip error.
        for (a, b) in decoded.iter().zip(&samples) {
            assert!((a - b).abs() < 1e-3);
        }
    }

    #[test]
    fn test_decode_downmixes_stereo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        let left = vec![0.5f32; 4000];
        let right = vec![-0.5f32; 4000];
        write_wav(&path, &[left, right], 8000);

        let decoded = decode_mono_f32(&path, 8000).unwrap();

        assert_eq!(decoded.len(), 4000);
        assert!(decoded.iter().all(|v| v.abs() < 1e-3));
    }
}
