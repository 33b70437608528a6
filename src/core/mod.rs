//! Core processing building blocks: input normalization, resampling, colour
//! space conversion, contrast enhancement, sharpening, and circular masking.
//! These are internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
