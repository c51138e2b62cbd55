//! Industry classifier adapters.

mod fixed;

pub use fixed::FixedIndustryClassifier;
