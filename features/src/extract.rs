use std::fs;
use std::path::Path;

use anyhow::Context;
use model::MetadataRow;

use crate::segment::stepped_window_ranges;
use crate::{Config, FeatureBundle, FeatureRecord, ShortClip};

/// Splits one audio file into fixed-length windows, computes a feature
/// bundle per window, stores each bundle as `{stem}_{index:03}.npz` under
/// `out_dir`, and returns one metadata row per stored record.
///
/// Clips shorter than one window are zero-padded into a single segment or
/// dropped, per `config.short_clip`. A trailing remainder shorter than one
/// window is always dropped.
pub fn extract_segments(
    source: &Path,
    out_dir: &Path,
    label: &str,
    class_id: u32,
    config: &Config,
) -> anyhow::Result<Vec<MetadataRow>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("no usable file stem in {}", source.display()))?
        .to_owned();

    let mut samples = codec::decode_mono_f32(source, config.sample_rate)
        .with_context(|| format!("decoding {}", source.display()))?;

    let full_duration = samples.len() as f64 / f64::from(config.sample_rate);
    let window = config.window_samples();
    let hop = config.hop_samples();

    if samples.len() < window {
        match config.short_clip {
            ShortClip::Drop => {
                log::debug!(
                    "{}: {:.3}s is shorter than one window, dropped",
                    source.display(),
                    full_duration
                );
                return Ok(Vec::new());
            }
            ShortClip::Pad => samples.resize(window, 0.0),
        }
    }

    let mut rows = Vec::new();
    for (index, range) in stepped_window_ranges(samples.len(), window, hop)
        .into_iter()
        .enumerate()
    {
        let segment_start = range.start as f64 / f64::from(config.sample_rate);
        let features = FeatureBundle::compute(&samples[range], config.sample_rate);

        let feature_path = out_dir.join(format!("{stem}_{index:03}.npz"));
        let record = FeatureRecord {
            features,
            label: label.to_owned(),
            class_id,
            original_path: source.to_path_buf(),
            segment_start,
            segment_dur: config.segment_length,
            full_duration,
        };
        record
            .write(&feature_path)
            .with_context(|| format!("storing segment {index} of {}", source.display()))?;

        rows.push(MetadataRow {
            feature_path,
            class_id,
            class_name: label.to_owned(),
            original_path: source.to_path_buf(),
            duration: full_duration,
            segment_start,
            segment_dur: config.segment_length,
        });
    }

    log::info!("{}: {} segments", source.display(), rows.len());
    Ok(rows)
}
