//! Color scheme generators.
//!
//! Each scheme places its hues at fixed angular offsets from a seed hue and
//! draws saturation and value uniformly from per-scheme bands. Hues are never
//! randomized, so every scheme has a characteristic [`relative_hue_list`].
//!
//! # Example
//!
//! ```
//! use tincture_core::SeededRandom;
//! use tincture_harmony::{ColorScheme, SchemeKind};
//!
//! let mut rng = SeededRandom::new(7);
//! let scheme = ColorScheme::generate(SchemeKind::Triadic, 40.0, &mut rng);
//! assert_eq!(scheme.len(), 3);
//! assert_eq!(scheme.relative_hue_list(), vec![120.0, 120.0, 120.0]);
//! ```
//!
//! [`relative_hue_list`]: ColorScheme::relative_hue_list

use std::fmt;
use std::str::FromStr;

use tincture_core::logging::{span_names, targets};
use tincture_core::{Color, PerfSpan, RandomSource, normalize_hue, shuffle};

use crate::geometry::{self, sort_colors};

/// Saturation bands shared by the three-color schemes.
const THREE_BANDS: &[(i64, i64)] = &[(50, 100), (30, 70), (30, 70)];

/// Saturation bands shared by the four-color schemes.
const FOUR_BANDS: &[(i64, i64)] = &[(50, 100), (50, 70), (30, 70), (30, 60)];

/// Value band for schemes of three or more colors.
const MID_VALUES: (i64, i64) = (40, 60);

/// The geometric patterns a scheme can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    Monochromatic,
    Analogous,
    Complementary,
    SplitComplementary,
    Triadic,
    SquareTetradic,
    RectangularTetradic,
}

impl SchemeKind {
    /// Every scheme, in the order they are usually presented.
    pub const ALL: [SchemeKind; 7] = [
        SchemeKind::Monochromatic,
        SchemeKind::Analogous,
        SchemeKind::Complementary,
        SchemeKind::SplitComplementary,
        SchemeKind::Triadic,
        SchemeKind::SquareTetradic,
        SchemeKind::RectangularTetradic,
    ];

    /// The scheme's display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split complementary",
            Self::Triadic => "triadic",
            Self::SquareTetradic => "square tetradic",
            Self::RectangularTetradic => "rectangular tetradic",
        }
    }

    /// Number of colors the scheme produces.
    pub fn color_count(self) -> usize {
        self.hue_offsets().len()
    }

    /// Hue offsets from the seed, in generation order.
    pub fn hue_offsets(self) -> &'static [f64] {
        self.recipe().offsets
    }

    fn recipe(self) -> Recipe {
        match self {
            Self::Monochromatic => Recipe {
                offsets: &[0.0],
                saturations: &[(60, 100)],
                values: (60, 85),
                shuffle: false,
            },
            Self::Analogous => Recipe {
                offsets: &[0.0, 30.0, 60.0],
                saturations: THREE_BANDS,
                values: MID_VALUES,
                shuffle: true,
            },
            Self::Complementary => Recipe {
                offsets: &[0.0, 180.0],
                saturations: &[(50, 100), (20, 70)],
                values: (30, 70),
                shuffle: false,
            },
            Self::SplitComplementary => Recipe {
                offsets: &[0.0, 210.0, 150.0],
                saturations: THREE_BANDS,
                values: MID_VALUES,
                shuffle: true,
            },
            Self::Triadic => Recipe {
                offsets: &[0.0, 120.0, -120.0],
                saturations: THREE_BANDS,
                values: MID_VALUES,
                shuffle: true,
            },
            Self::SquareTetradic => Recipe {
                offsets: &[0.0, 90.0, -90.0, 180.0],
                saturations: FOUR_BANDS,
                values: MID_VALUES,
                shuffle: true,
            },
            Self::RectangularTetradic => Recipe {
                offsets: &[0.0, 180.0, 60.0, 240.0],
                saturations: FOUR_BANDS,
                values: MID_VALUES,
                shuffle: true,
            },
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a scheme name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color scheme: {0}")]
pub struct UnknownScheme(pub String);

impl FromStr for SchemeKind {
    type Err = UnknownScheme;

    /// Accepts `"splitComplementary"`, `"split-complementary"`,
    /// `"SPLIT_COMPLEMENTARY"` and `"split complementary"` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().replace(' ', "") == key)
            .ok_or_else(|| UnknownScheme(s.to_string()))
    }
}

struct Recipe {
    offsets: &'static [f64],
    saturations: &'static [(i64, i64)],
    values: (i64, i64),
    shuffle: bool,
}

/// A grouping of colors produced together, kept sorted by
/// [`compare_colors`](crate::compare_colors).
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    kind: Option<SchemeKind>,
    colors: Vec<Color>,
}

impl ColorScheme {
    /// Group arbitrary colors. The grouping has no scheme kind.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self::build(None, colors.into_iter().collect())
    }

    fn build(kind: Option<SchemeKind>, mut colors: Vec<Color>) -> Self {
        sort_colors(&mut colors);
        Self { kind, colors }
    }

    /// Generate a scheme around `seed_hue`.
    ///
    /// Saturations are drawn first (one per color, shuffled across the hues
    /// for multi-band schemes), then one value per color.
    pub fn generate<R: RandomSource + ?Sized>(kind: SchemeKind, seed_hue: f64, rng: &mut R) -> Self {
        let _perf = PerfSpan::new(span_names::SCHEME);
        let recipe = kind.recipe();

        let mut saturations: Vec<f64> = recipe
            .saturations
            .iter()
            .map(|&(lo, hi)| rng.next_in_range(lo, hi) as f64)
            .collect();
        if recipe.shuffle {
            shuffle(&mut saturations, rng);
        }

        let (lo, hi) = recipe.values;
        let colors = recipe
            .offsets
            .iter()
            .zip(saturations)
            .map(|(offset, saturation)| {
                let value = rng.next_in_range(lo, hi) as f64;
                Color::hsv(normalize_hue(seed_hue + offset), saturation, value)
            })
            .collect();

        let scheme = Self::build(Some(kind), colors);
        tracing::debug!(
            target: targets::SCHEME,
            scheme = kind.name(),
            seed_hue,
            colors = ?scheme.hex_strings(),
            "generated color scheme"
        );
        scheme
    }

    /// The scheme kind, if this grouping was generated.
    pub fn kind(&self) -> Option<SchemeKind> {
        self.kind
    }

    /// The scheme name, or `"custom"` for ungenerated groupings.
    pub fn name(&self) -> &'static str {
        self.kind.map_or("custom", SchemeKind::name)
    }

    /// The colors, sorted.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Consume the scheme and return its colors.
    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// `#RRGGBB` strings of every color, in order.
    pub fn hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(Color::hex_string).collect()
    }

    /// Sorted pairwise hue distances.
    pub fn relative_hue_list(&self) -> Vec<f64> {
        geometry::relative_hue_list(&self.colors)
    }
}

impl<'a> IntoIterator for &'a ColorScheme {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// One color at the seed hue.
pub fn generate_monochromatic<R: RandomSource + ?Sized>(seed_hue: f64, rng: &mut R) -> ColorScheme {
    ColorScheme::generate(SchemeKind::Monochromatic, seed_hue, rng)
}

/// Three neighbouring hues, 30° apart.
pub fn generate_analogous<R: RandomSource + ?Sized>(seed_hue: f64, rng: &mut R) -> ColorScheme {
    ColorScheme::generate(SchemeKind::Analogous, seed_hue, rng)
}

/// The seed hue and its opposite.
pub fn generate_complementary<R: RandomSource + ?Sized>(seed_hue: f64, rng: &mut R) -> ColorScheme {
    ColorScheme::generate(SchemeKind::Complementary, seed_hue, rng)
}

/// The seed hue and the two neighbours of its opposite.
pub fn generate_split_complementary<R: RandomSource + ?Sized>(
    seed_hue: f64,
    rng: &mut R,
) -> ColorScheme {
    ColorScheme::generate(SchemeKind::SplitComplementary, seed_hue, rng)
}

/// Three hues evenly spaced around the wheel.
pub fn generate_triadic<R: RandomSource + ?Sized>(seed_hue: f64, rng: &mut R) -> ColorScheme {
    ColorScheme::generate(SchemeKind::Triadic, seed_hue, rng)
}

/// Four hues evenly spaced around the wheel.
pub fn generate_square_tetradic<R: RandomSource + ?Sized>(seed_hue: f64, rng: &mut R) -> ColorScheme {
    ColorScheme::generate(SchemeKind::SquareTetradic, seed_hue, rng)
}

/// Two complementary pairs, 60° apart.
pub fn generate_rectangular_tetradic<R: RandomSource + ?Sized>(
    seed_hue: f64,
    rng: &mut R,
) -> ColorScheme {
    ColorScheme::generate(SchemeKind::RectangularTetradic, seed_hue, rng)
}
