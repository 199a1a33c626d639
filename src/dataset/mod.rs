pub mod builtin;
pub mod dataset;
pub mod sample;

pub use builtin::{get_dataset, list_datasets};
pub use dataset::Dataset;
pub use sample::Sample;
