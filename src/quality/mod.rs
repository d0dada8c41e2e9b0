pub mod accuracy;
pub mod duplicates;
pub mod similarity;

pub use accuracy::accuracy;
pub use duplicates::{DuplicateDetector, DuplicatePair, PairwiseDetector};
