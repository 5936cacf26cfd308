mod metadata;

pub use metadata::{read_csv, write_csv, MetadataRow};
