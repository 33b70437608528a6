#![doc = r#"
ICONSET — turn one source image into a complete icon set.

From a single raster image this crate produces square PNG icons at every
conventional size, circularly masked ("round") variants of each, and two
multi-resolution `.ico` containers. The pipeline is linear:

1. load and normalize the source to a square RGBA buffer (centre crop,
   synthesized opacity for colour-only inputs);
2. upscale to the master size with Lanczos3, equalize Lab lightness with CLAHE,
   and apply a mild unsharp mask;
3. derive the round master by multiplying transparency with an anti-aliased
   disc;
4. area-average every requested size from the two masters and write PNGs;
5. pack a fixed subset of sizes into `underpar.ico` and `underpar-round.ico`
   with `ffmpeg`.

Requirements
------------
- `ffmpeg` on `PATH` for the container step. Everything before it runs
  without it.

Quick start
-----------
```rust,no_run
use iconset::{IconSetParams, generate_icon_set};

fn main() -> iconset::Result<()> {
    let params = IconSetParams {
        input: "icons/underpar-512.png".into(),
        output_dir: "icons".into(),
        target: 4096,
        ..Default::default()
    };
    let report = generate_icon_set(&params)?;
    println!("generated sizes: {}", report.sizes);
    Ok(())
}
```

Error handling
--------------
All public functions return `iconset::Result<T>`. Every [`Error`] variant is
fatal to the run; files already written stay on disk.

```rust,no_run
use iconset::{Error, IconSetParams, generate_icon_set};

match generate_icon_set(&IconSetParams::default()) {
    Ok(_) => {}
    Err(Error::ToolMissing { program }) => eprintln!("install {program} to build .ico files"),
    Err(e) if e.is_input_error() => eprintln!("bad source image: {e}"),
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — the whole pipeline and its stages as library calls.
- [`core`] — image-processing primitives (resize, Lab, CLAHE, sharpen, mask).
- [`io`] — source decoding, PNG writing, container packaging.
- [`types`] — `Variant`, `IconSizes`, `SquareImage`, size constants.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::params::IconSetParams;
pub use error::{Error, Result};
pub use types::{
    CONTAINER_SIZES, DEFAULT_SIZES, DEFAULT_TARGET, IconSizes, MIN_TARGET, SquareImage, Variant,
};

pub use api::{IconSetReport, Masters, VariantOutputs, build_masters, export_sizes, generate_icon_set};
pub use io::{Packager, load_normalized, load_source};
