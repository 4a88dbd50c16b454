//! Tonal ramps: shades and tints of a single base color.
//!
//! Every tone keeps the base's hue and saturation; only the value moves. The
//! ramp grows outward from the base one step at a time, a shade below and a
//! tint above, until it holds the requested number of colors or both ends
//! have hit the configured value bounds.

use tincture_core::logging::{span_names, targets};
use tincture_core::{Color, PerfSpan};

use crate::config::ToneConfig;
use crate::geometry::compare_colors;

/// One member of a tonal ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct Tone {
    pub color: Color,
    /// Set only on the unmodified base color.
    pub is_base: bool,
}

/// An ordered tonal ramp, darkest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneRamp {
    tones: Vec<Tone>,
}

impl ToneRamp {
    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    /// Colors of the ramp in order.
    pub fn colors(&self) -> impl Iterator<Item = &Color> + '_ {
        self.tones.iter().map(|tone| &tone.color)
    }

    /// The base color's position in the ramp.
    pub fn base_index(&self) -> Option<usize> {
        self.tones.iter().position(|tone| tone.is_base)
    }

    /// The base color.
    pub fn base(&self) -> Option<&Color> {
        self.tones.iter().find(|tone| tone.is_base).map(|tone| &tone.color)
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    /// `#RRGGBB` strings of the ramp in order.
    pub fn hex_strings(&self) -> Vec<String> {
        self.colors().map(Color::hex_string).collect()
    }

    /// Consume the ramp and return its colors.
    pub fn into_colors(self) -> Vec<Color> {
        self.tones.into_iter().map(|tone| tone.color).collect()
    }
}

/// Expands a base color into a tonal ramp.
#[derive(Debug, Clone)]
pub struct Toner {
    base: Color,
    config: ToneConfig,
}

impl Toner {
    /// Create a toner with the default value bounds `(10, 95)` and step cap 20.
    pub fn new(base: Color) -> Self {
        Self::with_config(base, ToneConfig::default())
    }

    /// Create a toner with custom bounds.
    ///
    /// The configuration is used as given; a degenerate range simply yields a
    /// shorter ramp.
    pub fn with_config(base: Color, config: ToneConfig) -> Self {
        Self { base, config }
    }

    pub fn base(&self) -> &Color {
        &self.base
    }

    pub fn config(&self) -> &ToneConfig {
        &self.config
    }

    /// Value distance between neighbouring tones for a ramp of `count`.
    ///
    /// `min(floor((max - min) / (count + 2)), max_step)`
    pub fn step_for(&self, count: usize) -> f64 {
        let range = self.config.max_value - self.config.min_value;
        (range / (count as f64 + 2.0)).floor().min(self.config.max_step)
    }

    /// A darker copy of `from`, `delta` value points lower.
    pub fn generate_shade(&self, from: &Color, delta: f64) -> Color {
        Color::hsv(from.hue(), from.saturation(), from.value() - delta)
    }

    /// A lighter copy of `from`, `delta` value points higher.
    pub fn generate_tint(&self, from: &Color, delta: f64) -> Color {
        Color::hsv(from.hue(), from.saturation(), from.value() + delta)
    }

    /// Build a ramp of up to `count` tones, sorted darkest to lightest.
    ///
    /// The base is always a member. Fewer than `count` tones come back when
    /// the value bounds run out first.
    pub fn generate_set(&self, count: usize) -> ToneRamp {
        let _perf = PerfSpan::new(span_names::TONER);
        let step = self.step_for(count);
        let ToneConfig {
            min_value,
            max_value,
            ..
        } = self.config;

        let mut tones = vec![Tone {
            color: self.base.clone(),
            is_base: true,
        }];
        let mut shade = self.base.clone();
        let mut tint = self.base.clone();

        while tones.len() < count {
            let before = tones.len();

            shade = self.generate_shade(&shade, step);
            if shade.value() > min_value {
                tones.push(Tone {
                    color: shade.clone(),
                    is_base: false,
                });
            }
            if tones.len() >= count {
                break;
            }

            tint = self.generate_tint(&tint, step);
            if tint.value() < max_value {
                tones.push(Tone {
                    color: tint.clone(),
                    is_base: false,
                });
            }

            if tones.len() == before {
                tracing::debug!(
                    target: targets::TONER,
                    base = %self.base,
                    requested = count,
                    produced = tones.len(),
                    "value bounds exhausted before the ramp was full"
                );
                break;
            }
        }

        tones.sort_by(|a, b| compare_colors(&a.color, &b.color));
        let ramp = ToneRamp { tones };
        tracing::trace!(target: targets::TONER, step, tones = ?ramp.hex_strings(), "generated tonal ramp");
        ramp
    }
}
