mod dataset;
mod network;

pub use self::dataset::{Dataset, SegmentDataset};
pub use self::network::{CnnWithGap, DEFAULT_CLASSES};
