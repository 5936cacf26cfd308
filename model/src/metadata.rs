use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One row per stored feature record. Field order is the on-disk column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRow {
    pub feature_path: PathBuf,
    pub class_id: u32,
    pub class_name: String,
    pub original_path: PathBuf,
    pub duration: f64,
    pub segment_start: f64,
    pub segment_dur: f64,
}

pub fn write_csv(rows: &[MetadataRow], path: &Path) -> anyhow::Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn read_csv(path: &Path) -> anyhow::Result<Vec<MetadataRow>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;

    reader
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("parsing {}", path.display()))
}
