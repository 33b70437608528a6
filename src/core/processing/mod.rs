//! Image-processing stages of the icon pipeline, in the order they run:
//! `normalize`, `enhance` (built on `resize`, `lab`, `clahe`, `sharpen`),
//! `mask`, then `resize` again for every output size.
pub mod clahe;
pub mod enhance;
pub mod lab;
pub mod mask;
pub mod normalize;
pub mod resize;
pub mod sharpen;
