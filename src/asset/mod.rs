//! Asset processing: classification, minification, compression.

mod compress;
mod kind;
pub mod minify;
mod process;

// Types
pub use kind::{AssetKind, is_gzipped};

// Processing (side effects)
pub use process::{RunStats, run};
