//! I/O layer: decoding the source image, writing PNG outputs, and driving the
//! external multiplexer that packs PNGs into `.ico` containers.
pub mod package;
pub use package::Packager;

pub mod reader;
pub use reader::{load_normalized, load_source};

pub mod writers;
