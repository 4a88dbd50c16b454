//! Growing a handful of seed colors into a full palette.
//!
//! The expander builds a *main set* from the seeds plus colors synthesized by
//! a [`Mixer`] over them, mutes one member when none of them is grey, then
//! turns every member into a triple of accent shades and tints.

use tincture_core::logging::{span_names, targets};
use tincture_core::{Color, DomainError, PerfSpan, RandomSource, clamp, shuffle};

use crate::config::ExpansionConfig;
use crate::geometry::{angular_delta, compare_numeric};
use crate::mixer::Mixer;

/// Result of a palette expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedPalette {
    main_set: Vec<Color>,
    swatches: Vec<Color>,
}

impl ExpandedPalette {
    /// The main set, sorted by hue.
    pub fn main_set(&self) -> &[Color] {
        &self.main_set
    }

    /// Three swatches per main set member, in main set order.
    pub fn swatches(&self) -> &[Color] {
        &self.swatches
    }

    /// Swatches grouped per main set member.
    pub fn triples(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.swatches.chunks(3)
    }

    pub fn hex_strings(&self) -> Vec<String> {
        self.swatches.iter().map(Color::hex_string).collect()
    }

    /// Consume the palette and return its swatches.
    pub fn into_swatches(self) -> Vec<Color> {
        self.swatches
    }
}

/// Expands seed colors into a palette.
#[derive(Debug, Clone, Default)]
pub struct PaletteExpander {
    config: ExpansionConfig,
}

impl PaletteExpander {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExpansionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Expand `seeds` into a palette.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCluster`] when `seeds` is empty.
    pub fn expand<R: RandomSource + ?Sized>(
        &self,
        seeds: &[Color],
        rng: &mut R,
    ) -> Result<ExpandedPalette, DomainError> {
        let _perf = PerfSpan::new(span_names::EXPAND);
        if seeds.is_empty() {
            return Err(DomainError::EmptyCluster);
        }

        let mut main_set = self.main_set(seeds, rng)?;
        self.ensure_grey(&mut main_set, rng);
        main_set.sort_by(|a, b| compare_numeric(a.hue(), b.hue()));

        let swatches: Vec<Color> = main_set.iter().flat_map(accent_triple).collect();
        let palette = ExpandedPalette { main_set, swatches };
        tracing::debug!(
            target: targets::EXPAND,
            seeds = seeds.len(),
            main_set = palette.main_set.len(),
            swatches = ?palette.hex_strings(),
            "expanded palette"
        );
        Ok(palette)
    }

    fn main_set<R: RandomSource + ?Sized>(
        &self,
        seeds: &[Color],
        rng: &mut R,
    ) -> Result<Vec<Color>, DomainError> {
        let maximum = self.config.main_set_maximum;
        let mut main_set = seeds.to_vec();
        shuffle(&mut main_set, rng);
        main_set.truncate((maximum / 2).max(1));

        let target = (seeds.len() * 2).min(maximum);
        let mixer = Mixer::new(seeds.iter().cloned());
        let mut attempts = 0;
        while main_set.len() < target {
            if attempts >= self.config.max_attempts {
                tracing::warn!(
                    target: targets::EXPAND,
                    attempts,
                    main_set = main_set.len(),
                    target,
                    "gave up filling the main set"
                );
                break;
            }
            attempts += 1;

            let candidate = mixer.generate_color(rng)?;
            if self.accepts(&candidate, &main_set) {
                main_set.push(candidate);
            }
        }
        Ok(main_set)
    }

    /// Whether `candidate` is distinct enough from every member.
    pub fn accepts(&self, candidate: &Color, main_set: &[Color]) -> bool {
        let hex = candidate.hex_string();
        !main_set.iter().any(|member| {
            member.hex_string() == hex
                || (angular_delta(member.hue(), candidate.hue()) <= self.config.hue_separation
                    && (member.saturation() - candidate.saturation()).abs()
                        <= self.config.saturation_separation)
        })
    }

    fn ensure_grey<R: RandomSource + ?Sized>(&self, main_set: &mut [Color], rng: &mut R) {
        let threshold = self.config.grey_saturation_threshold;
        if main_set.is_empty() || main_set.iter().any(|c| c.saturation() < threshold) {
            return;
        }
        let last = i64::try_from(main_set.len() - 1).unwrap_or(i64::MAX);
        let index = usize::try_from(rng.next_in_range(0, last)).unwrap_or(0);
        if let Some(member) = main_set.get_mut(index) {
            *member = Color::hsv(
                member.hue(),
                clamp(member.saturation() - 50.0, 0.0, 100.0),
                clamp(member.value(), 0.0, 50.0),
            );
        }
    }
}

/// A darker, usually more saturated accent of `color`.
pub fn accent_shade(color: &Color) -> Color {
    let (saturation, value) = (color.saturation(), color.value());
    let (saturation, value) = if value > 25.0 {
        (saturation + 5.0, value - 20.0)
    } else {
        (saturation - 20.0, value - 20.0)
    };
    Color::hsv(color.hue(), clamp(saturation, 0.0, 100.0), clamp(value, 0.0, 100.0))
}

/// A lighter, usually less saturated accent of `color`.
pub fn accent_tint(color: &Color) -> Color {
    let (saturation, value) = (color.saturation(), color.value());
    let (saturation, value) = if value < 75.0 {
        (saturation - 5.0, value + 20.0)
    } else {
        (saturation + 20.0, value + 20.0)
    };
    Color::hsv(color.hue(), clamp(saturation, 0.0, 100.0), clamp(value, 0.0, 100.0))
}

/// Three swatches for one main set member.
///
/// Normally shade, main, tint. A tint that caps out at full value and
/// saturation is replaced by a second shade; a shade that bottoms out is
/// replaced by a second tint.
pub fn accent_triple(main: &Color) -> [Color; 3] {
    let shade = accent_shade(main);
    let tint = accent_tint(main);

    if tint.value() >= 98.0 && tint.saturation() >= 98.0 {
        [accent_shade(&shade), shade, main.clone()]
    } else if shade.value() <= 2.0 && shade.saturation() <= 2.0 {
        let lighter = accent_tint(&tint);
        [main.clone(), tint, lighter]
    } else {
        [shade, main.clone(), tint]
    }
}
