//! Nearest-name lookup against a table of named reference colors.
//!
//! Generators never depend on a particular dataset. They only see the
//! [`NameLookup`] trait; [`ReferenceTable`] is an in-memory implementation
//! loaded from a JSON array such as:
//!
//! ```json
//! [
//!   { "name": "Tomato", "red": 255, "green": 99, "blue": 71 },
//!   { "name": "Teal", "red": 0, "green": 128, "blue": 128, "family": "blue" }
//! ]
//! ```
//!
//! Keys other than the name and the three channels are preserved in
//! [`NamedColor::extra`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tincture_core::Color;
use tincture_core::logging::targets;

use crate::config::LookupConfig;
use crate::error::Result;

/// A named reference color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    /// Any additional keys carried by the reference row.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, red: f64, green: f64, blue: f64) -> Self {
        Self {
            name: name.into(),
            red,
            green,
            blue,
            extra: Map::new(),
        }
    }

    /// The reference row as a [`Color`].
    pub fn to_color(&self) -> Color {
        Color::rgb(self.red, self.green, self.blue)
    }

    /// Squared RGB distance to `color`.
    pub fn distance_to(&self, color: &Color) -> f64 {
        (self.red - color.red()).powi(2)
            + (self.green - color.green()).powi(2)
            + (self.blue - color.blue()).powi(2)
    }

    fn within_cube(&self, color: &Color, radius: f64) -> bool {
        (self.red - color.red()).abs() <= radius
            && (self.green - color.green()).abs() <= radius
            && (self.blue - color.blue()).abs() <= radius
    }
}

/// Squared Euclidean distance between two colors in RGB space.
///
/// Monotonic in the true distance, which is all a nearest-match search needs.
pub fn lazy_distance(a: &Color, b: &Color) -> f64 {
    (a.red() - b.red()).powi(2) + (a.green() - b.green()).powi(2) + (a.blue() - b.blue()).powi(2)
}

/// A service that names colors.
pub trait NameLookup {
    /// The reference color nearest to `color`, or `None` when there are no
    /// references at all.
    fn closest_match(&self, color: &Color) -> Option<&NamedColor>;
}

/// An in-memory reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    entries: Vec<NamedColor>,
    radius: f64,
}

impl ReferenceTable {
    /// Create a table with the default neighbourhood radius.
    pub fn new(entries: Vec<NamedColor>) -> Self {
        Self::with_config(entries, &LookupConfig::default())
    }

    pub fn with_config(entries: Vec<NamedColor>, config: &LookupConfig) -> Self {
        Self {
            entries,
            radius: config.radius,
        }
    }

    /// Decode a table from a JSON array of reference rows.
    ///
    /// # Errors
    ///
    /// Returns [`HarmonyError::ReferenceData`](crate::HarmonyError::ReferenceData)
    /// when the text is not an array of rows with a name and three channels.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<NamedColor> = serde_json::from_str(json)?;
        tracing::debug!(target: targets::LOOKUP, entries = entries.len(), "loaded reference colors");
        Ok(Self::new(entries))
    }

    /// Replace the neighbourhood radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries inside the cube of half-width `radius` around `color`.
    pub fn close_colors(&self, color: &Color) -> Vec<&NamedColor> {
        self.entries
            .iter()
            .filter(|entry| entry.within_cube(color, self.radius))
            .collect()
    }
}

impl NameLookup for ReferenceTable {
    fn closest_match(&self, color: &Color) -> Option<&NamedColor> {
        let mut candidates = self.close_colors(color);
        if candidates.is_empty() {
            tracing::trace!(target: targets::LOOKUP, color = %color, "no close colors, searching all");
            candidates = self.entries.iter().collect();
        }

        let mut best: Option<(&NamedColor, f64)> = None;
        for entry in candidates {
            let distance = entry.distance_to(color);
            match best {
                Some((_, nearest)) if distance >= nearest => {}
                _ => best = Some((entry, distance)),
            }
        }
        best.map(|(entry, _)| entry)
    }
}

impl FromIterator<NamedColor> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = NamedColor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
