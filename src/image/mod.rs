//! Image processing utilities.
//!
//! # Modules
//!
//! - [`background`]: Corner-seeded flood fill background removal
//! - [`derive`]: Source artwork to asset catalog PNG (erase, rotate, write)

pub mod background;
pub mod derive;

pub use background::FloodOptions;
pub use derive::{Rotation, derive_asset};
