pub mod threshold;

pub use threshold::{step, weighted_sum};
