//! Tincture - color representation and color-theory palette generation.
//!
//! This is the umbrella crate that re-exports the public APIs of
//! `tincture-core` and `tincture-harmony`.
//!
//! # Example
//!
//! ```
//! use tincture::prelude::*;
//!
//! let seed = Color::parse("hsv(200, 60%, 70%)")?;
//! let mut rng = SeededRandom::new(42);
//!
//! let scheme = generate_triadic(seed.hue(), &mut rng);
//! for color in &scheme {
//!     println!("{} {}", color.hex_string(), color.hsv_string());
//! }
//!
//! let ramp = Toner::new(seed).generate_set(7);
//! assert_eq!(ramp.len(), 7);
//! # Ok::<(), tincture::Error>(())
//! ```

pub use tincture_core::*;

/// Scheme, ramp, mixing, expansion and lookup generators.
pub mod harmony {
    pub use tincture_harmony::*;
}

pub use tincture_harmony::{
    Channel, ClusterSummary, ColorScheme, ExpandedPalette, HarmonyConfig, HarmonyError,
    Mixer, NameLookup, NamedColor, PaletteExpander, ReferenceTable, SchemeKind, ToneRamp, Toner,
    generate_analogous, generate_complementary, generate_monochromatic,
    generate_rectangular_tetradic, generate_split_complementary, generate_square_tetradic,
    generate_triadic,
};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use tincture_core::{
        Color, Error, Hsv, RandomSource, Rgb, SeededRandom, SequenceRandom, ThreadRandom,
        normalize_hue,
    };
    pub use tincture_harmony::{
        Channel, ClusterSummary, ColorScheme, ExpandedPalette, ExpansionConfig, HarmonyConfig,
        HarmonyError, LookupConfig, Mixer, NameLookup, NamedColor, PaletteExpander,
        ReferenceTable, SchemeKind, Tone, ToneConfig, ToneRamp, Toner, compare_colors,
        generate_analogous, generate_complementary, generate_monochromatic,
        generate_rectangular_tetradic, generate_split_complementary, generate_square_tetradic,
        generate_triadic,
    };
}
