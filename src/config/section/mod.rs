//! Configuration section definitions.
//!
//! Each module corresponds to a section in `xcmaint.toml`:
//!
//! | Module         | TOML Section       | Purpose                              |
//! |----------------|--------------------|--------------------------------------|
//! | `strings`      | `[strings]`        | Resource files for `dedup`           |
//! | `icons`        | `[icons]`          | Artwork to asset catalog mappings    |
//! | `translations` | `[translations]`   | Per-language blocks for `translate`  |

mod icons;
mod strings;
mod translations;

pub use icons::{AssetMapping, IconsConfig, is_valid_tolerance};
pub use strings::StringsConfig;
pub use translations::TranslationsConfig;
