//! Shared types used across the icon pipeline.
//! Includes the output `Variant`, the ordered `IconSizes` set, and
//! `SquareImage`, the square RGBA buffer every stage after loading works on.
use image::RgbaImage;

use crate::error::{Error, Result};

/// Sizes produced on every run, before the requested master size is merged in.
pub const DEFAULT_SIZES: [u32; 18] = [
    16, 24, 32, 48, 64, 72, 96, 128, 144, 152, 180, 192, 256, 384, 512, 1024, 2048, 4096,
];

/// Sizes bundled into each `.ico` container.
pub const CONTAINER_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

pub const MIN_TARGET: u32 = 512;
pub const DEFAULT_TARGET: u32 = 4096;

/// Base name shared by every generated file.
pub const ICON_STEM: &str = "underpar";

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Variant {
    Square,
    Round,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Square, Variant::Round];

    pub fn png_file_name(self, size: u32) -> String {
        match self {
            Variant::Square => format!("{ICON_STEM}-{size}.png"),
            Variant::Round => format!("{ICON_STEM}-round-{size}.png"),
        }
    }

    pub fn container_file_name(self) -> String {
        match self {
            Variant::Square => format!("{ICON_STEM}.ico"),
            Variant::Round => format!("{ICON_STEM}-round.ico"),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Square => write!(f, "square"),
            Variant::Round => write!(f, "round"),
        }
    }
}

/// Ascending, duplicate-free list of output side lengths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconSizes(Vec<u32>);

impl IconSizes {
    pub fn new(sizes: impl IntoIterator<Item = u32>) -> Self {
        let mut sizes: Vec<u32> = sizes.into_iter().filter(|&s| s > 0).collect();
        sizes.sort_unstable();
        sizes.dedup();
        Self(sizes)
    }

    /// Union of `defaults` and the master `target`.
    pub fn with_target(defaults: &[u32], target: u32) -> Self {
        Self::new(defaults.iter().copied().chain(std::iter::once(target)))
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn contains(&self, size: u32) -> bool {
        self.0.binary_search(&size).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl std::fmt::Display for IconSizes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", joined.join(", "))
    }
}

/// Square, 4-channel, 8-bit image.
///
/// Channel order is an internal detail; callers read and write colour and
/// transparency separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareImage {
    inner: RgbaImage,
}

impl SquareImage {
    /// Wraps an RGBA buffer, rejecting anything that is not square.
    pub fn from_rgba(inner: RgbaImage) -> Result<Self> {
        if inner.width() != inner.height() {
            return Err(Error::Processing(format!(
                "expected a square buffer, got {}x{}",
                inner.width(),
                inner.height()
            )));
        }
        Ok(Self { inner })
    }

    pub fn from_raw(side: u32, data: Vec<u8>) -> Result<Self> {
        let inner = RgbaImage::from_raw(side, side, data).ok_or_else(|| {
            Error::Processing(format!("buffer too small for a {side}x{side} RGBA image"))
        })?;
        Ok(Self { inner })
    }

    pub fn side(&self) -> u32 {
        self.inner.width()
    }

    pub fn color(&self, x: u32, y: u32) -> [u8; 3] {
        let p = self.inner.get_pixel(x, y).0;
        [p[0], p[1], p[2]]
    }

    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.inner.get_pixel(x, y).0[3]
    }

    pub fn set_color(&mut self, x: u32, y: u32, color: [u8; 3]) {
        let p = self.inner.get_pixel_mut(x, y);
        p.0[..3].copy_from_slice(&color);
    }

    pub fn set_alpha(&mut self, x: u32, y: u32, alpha: u8) {
        self.inner.get_pixel_mut(x, y).0[3] = alpha;
    }

    pub fn as_raw(&self) -> &[u8] {
        self.inner.as_raw()
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.inner
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.inner.into_raw()
    }
}
