use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use ndarray::{arr0, Array0, Array1, Array2};
use ndarray_npy::{NpzReader, NpzWriter};

use crate::FeatureBundle;

/// One segment's feature bundle plus its provenance, persisted as a
/// compressed npz archive. Strings are stored as UTF-8 byte arrays and
/// numeric scalars as 0-dimensional arrays, so the archive stays readable
/// by any npz consumer.
#[derive(Debug, Clone)]
pub struct FeatureRecord {
    pub features: FeatureBundle,
    pub label: String,
    pub class_id: u32,
    pub original_path: PathBuf,
    pub segment_start: f64,
    pub segment_dur: f64,
    pub full_duration: f64,
}

impl FeatureRecord {
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut npz = NpzWriter::new_compressed(file);

        npz.add_array("mel", &self.features.mel)?;
        npz.add_array("mfcc", &self.features.mfcc)?;
        npz.add_array("mfcc_delta", &self.features.mfcc_delta)?;
        npz.add_array("mfcc_delta2", &self.features.mfcc_delta2)?;
        npz.add_array("rms", &self.features.rms)?;
        npz.add_array("zcr", &self.features.zcr)?;

        npz.add_array("label", &bytes(&self.label))?;
        npz.add_array("class_id", &arr0(i64::from(self.class_id)))?;
        let original = self
            .original_path
            .to_str()
            .context("original path is not valid UTF-8")?;
        npz.add_array("original_path", &bytes(original))?;
        npz.add_array("segment_start", &arr0(self.segment_start))?;
        npz.add_array("segment_dur", &arr0(self.segment_dur))?;
        npz.add_array("full_duration", &arr0(self.full_duration))?;

        npz.finish()
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let mut npz = open(path)?;

        let features = FeatureBundle {
            mel: field(&mut npz, path, "mel")?,
            mfcc: field(&mut npz, path, "mfcc")?,
            mfcc_delta: field(&mut npz, path, "mfcc_delta")?,
            mfcc_delta2: field(&mut npz, path, "mfcc_delta2")?,
            rms: field(&mut npz, path, "rms")?,
            zcr: field(&mut npz, path, "zcr")?,
        };

        let label: Array1<u8> = field(&mut npz, path, "label")?;
        let label = String::from_utf8(label.to_vec()).context("label is not valid UTF-8")?;

        let class_id: Array0<i64> = field(&mut npz, path, "class_id")?;
        let class_id = u32::try_from(class_id.into_scalar()).context("class_id out of range")?;

        let original_path: Array1<u8> = field(&mut npz, path, "original_path")?;
        let original_path = PathBuf::from(
            String::from_utf8(original_path.to_vec())
                .context("original path is not valid UTF-8")?,
        );

        let segment_start: Array0<f64> = field(&mut npz, path, "segment_start")?;
        let segment_dur: Array0<f64> = field(&mut npz, path, "segment_dur")?;
        let full_duration: Array0<f64> = field(&mut npz, path, "full_duration")?;

        Ok(Self {
            features,
            label,
            class_id,
            original_path,
            segment_start: segment_start.into_scalar(),
            segment_dur: segment_dur.into_scalar(),
            full_duration: full_duration.into_scalar(),
        })
    }

    /// Loads only the `mel` entry. The retrieval-time hot path does not pay
    /// for decompressing the rest of the archive.
    pub fn read_mel(path: &Path) -> anyhow::Result<Array2<f32>> {
        field(&mut open(path)?, path, "mel")
    }
}

fn open(path: &Path) -> anyhow::Result<NpzReader<File>> {
    let file =
        File::open(path).with_context(|| format!("opening feature record {}", path.display()))?;
    NpzReader::new(file).with_context(|| format!("reading feature record {}", path.display()))
}

fn field<T, D>(
    npz: &mut NpzReader<File>,
    path: &Path,
    name: &str,
) -> anyhow::Result<ndarray::Array<T, D>>
where
    T: ndarray_npy::ReadableElement,
    D: ndarray::Dimension,
{
    npz.by_name(name)
        .with_context(|| format!("field `{name}` in {}", path.display()))
}

fn bytes(text: &str) -> Array1<u8> {
    Array1::from(text.as_bytes().to_vec())
}
