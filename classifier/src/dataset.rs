use anyhow::Context;
use candle_core::{Device, Tensor};
use features::FeatureRecord;
use model::MetadataRow;

/// Indexed access to training samples as `(input, class index)` pairs.
pub trait Dataset {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> anyhow::Result<(Tensor, i64)>;
}

/// Lazily loads stored feature records listed in a metadata table.
///
/// Every `get` reads the record's log-mel spectrogram from disk; nothing
/// is cached between calls. Targets are zero-based, so class id `n` in the
/// metadata becomes label `n - 1`.
pub struct SegmentDataset {
    rows: Vec<MetadataRow>,
    device: Device,
}

impl SegmentDataset {
    #[must_use]
    pub fn new(rows: Vec<MetadataRow>, device: Device) -> Self {
        Self { rows, device }
    }

    #[must_use]
    pub fn rows(&self) -> &[MetadataRow] {
        &self.rows
    }
}

impl Dataset for SegmentDataset {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn get(&self, index: usize) -> anyhow::Result<(Tensor, i64)> {
        let row = self
            .rows
            .get(index)
            .with_context(|| format!("index {index} is out of range"))?;

        let mel = FeatureRecord::read_mel(&row.feature_path)?;
        let (bands, frames) = mel.dim();
        let (data, _) = mel.into_raw_vec_and_offset();
        let input = Tensor::from_vec(data, (1, bands, frames), &self.device)?;

        Ok((input, i64::from(row.class_id) - 1))
    }
}
