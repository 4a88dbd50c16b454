//! Color-theory generators for Tincture.
//!
//! This crate builds on [`tincture_core::Color`] and provides:
//!
//! - **Geometry**: a total order on colors and circular hue distances
//! - **Schemes**: monochromatic, analogous, complementary, split
//!   complementary, triadic and both tetradic color schemes
//! - **Toner**: tonal ramps of shades and tints around one base color
//! - **Mixer**: per-channel cluster statistics and synthesis of new colors
//!   within a sample's spread
//! - **Expansion**: growing a few seed colors into a full accent palette
//! - **Lookup**: nearest-name search behind the [`NameLookup`] trait
//! - **Configuration**: TOML-loadable bounds and thresholds
//!
//! All randomized operations take a [`RandomSource`](tincture_core::RandomSource)
//! so results can be reproduced.
//!
//! # Example
//!
//! ```
//! use tincture_core::{Color, SeededRandom};
//! use tincture_harmony::{Mixer, Toner};
//!
//! let base = Color::parse("#2980B9")?;
//! let ramp = Toner::new(base.clone()).generate_set(5);
//! assert_eq!(ramp.len(), 5);
//!
//! let mixer = Mixer::new(ramp.into_colors());
//! let mixed = mixer.generate_color(&mut SeededRandom::new(1))?;
//! assert!(mixed.value() <= 100.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod expand;
pub mod geometry;
pub mod lookup;
pub mod mixer;
pub mod scheme;
pub mod toner;

mod error;

pub use config::{ExpansionConfig, HarmonyConfig, LookupConfig, ToneConfig};
pub use error::{ConfigError, HarmonyError, Result};
pub use expand::{ExpandedPalette, PaletteExpander, accent_shade, accent_tint, accent_triple};
pub use geometry::{angular_delta, compare_colors, compare_numeric, relative_hue_list, sort_colors};
pub use lookup::{NameLookup, NamedColor, ReferenceTable, lazy_distance};
pub use mixer::{Channel, ClusterSummary, Mixer};
pub use scheme::{
    ColorScheme, SchemeKind, UnknownScheme, generate_analogous, generate_complementary,
    generate_monochromatic, generate_rectangular_tetradic, generate_split_complementary,
    generate_square_tetradic, generate_triadic,
};
pub use toner::{Tone, ToneRamp, Toner};
