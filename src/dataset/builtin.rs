use crate::dataset::dataset::Dataset;
use crate::error::{Error, Result};

const AND: [(f64, f64, u8); 4] = [(0.0, 0.0, 0), (0.0, 1.0, 0), (1.0, 0.0, 0), (1.0, 1.0, 1)];
const OR: [(f64, f64, u8); 4] = [(0.0, 0.0, 0), (0.0, 1.0, 1), (1.0, 0.0, 1), (1.0, 1.0, 1)];
// Class 1 sits above x2 ≈ 0.5.
const CUSTOM: [(f64, f64, u8); 4] = [(0.2, 0.3, 0), (0.4, 0.9, 1), (0.8, 0.2, 0), (0.6, 0.8, 1)];

const NAMES: [&str; 3] = ["and", "or", "custom"];

/// Names of the built-in datasets, in display order.
pub fn list_datasets() -> &'static [&'static str] {
    &NAMES
}

/// Looks up a built-in dataset by name. Every call returns a fresh,
/// unevaluated copy.
pub fn get_dataset(name: &str) -> Result<Dataset> {
    let points: &[(f64, f64, u8)] = match name {
        "and" => &AND,
        "or" => &OR,
        "custom" => &CUSTOM,
        _ => return Err(Error::UnknownDataset { name: name.to_owned() }),
    };
    Dataset::new(name, points)
}
