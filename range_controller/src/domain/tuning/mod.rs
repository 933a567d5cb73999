pub mod firing;

pub use firing::FiringTuning;
