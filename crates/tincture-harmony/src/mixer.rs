//! Cluster statistics and synthesis.
//!
//! A [`Mixer`] treats a list of colors as a statistical sample. Each of the
//! six channels becomes a sorted cluster of numbers with a
//! [`ClusterSummary`], and new colors are synthesized by sampling every
//! channel within one standard deviation of its mean.

use serde::{Deserialize, Serialize};
use tincture_core::logging::{span_names, targets};
use tincture_core::{Color, DomainError, PerfSpan, RandomSource, normalize_hue};

pub use tincture_core::clamp;

/// A color channel a cluster can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Value,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Hue,
        Channel::Saturation,
        Channel::Value,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Value => "value",
        }
    }

    /// Legal range of the channel. Hue is half-open and wraps.
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Red | Self::Green | Self::Blue => (0.0, 255.0),
            Self::Hue => (0.0, 360.0),
            Self::Saturation | Self::Value => (0.0, 100.0),
        }
    }

    /// Read this channel from a color.
    pub fn read(self, color: &Color) -> f64 {
        match self {
            Self::Red => color.red(),
            Self::Green => color.green(),
            Self::Blue => color.blue(),
            Self::Hue => color.hue(),
            Self::Saturation => color.saturation(),
            Self::Value => color.value(),
        }
    }

    /// Bring a sampled value back into the legal range.
    fn settle(self, sample: f64) -> f64 {
        match self {
            Self::Hue => normalize_hue(sample),
            _ => {
                let (min, max) = self.range();
                clamp(sample, min, max)
            }
        }
    }
}

/// Summary statistics of one cluster.
///
/// Variance is the sample variance (divisor `n - 1`), so a single-sample
/// cluster has a NaN variance and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub variance: f64,
    pub standard_deviation: f64,
    pub minimum: f64,
    pub maximum: f64,
}

impl ClusterSummary {
    /// Draw `mean + k` for a uniform integer `k` within one standard
    /// deviation, rounded.
    fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        let spread = self.standard_deviation;
        let offset = if spread.is_finite() {
            rng.next_in_range((-spread).round() as i64, spread.round() as i64)
        } else {
            0
        };
        (self.mean + offset as f64).round()
    }
}

/// Statistics and synthesis over a list of colors.
#[derive(Debug, Clone, Default)]
pub struct Mixer {
    colors: Vec<Color>,
}

impl Mixer {
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Values of one channel across all colors, sorted ascending.
    pub fn cluster(&self, channel: Channel) -> Vec<f64> {
        let mut values: Vec<f64> = self.colors.iter().map(|c| channel.read(c)).collect();
        values.sort_by(f64::total_cmp);
        values
    }

    pub fn red_cluster(&self) -> Vec<f64> {
        self.cluster(Channel::Red)
    }

    pub fn green_cluster(&self) -> Vec<f64> {
        self.cluster(Channel::Green)
    }

    pub fn blue_cluster(&self) -> Vec<f64> {
        self.cluster(Channel::Blue)
    }

    pub fn hue_cluster(&self) -> Vec<f64> {
        self.cluster(Channel::Hue)
    }

    pub fn saturation_cluster(&self) -> Vec<f64> {
        self.cluster(Channel::Saturation)
    }

    pub fn value_cluster(&self) -> Vec<f64> {
        self.cluster(Channel::Value)
    }

    /// Summarize a cluster of numbers.
    ///
    /// # Errors
    ///
    /// [`DomainError::EmptyCluster`] for an empty slice and
    /// [`DomainError::NonNumeric`] naming the first NaN.
    pub fn evaluate_cluster(cluster: &[f64]) -> Result<ClusterSummary, DomainError> {
        if cluster.is_empty() {
            return Err(DomainError::EmptyCluster);
        }
        if let Some(index) = cluster.iter().position(|x| x.is_nan()) {
            return Err(DomainError::NonNumeric { index });
        }

        let count = cluster.len();
        let sum: f64 = cluster.iter().sum();
        let mean = sum / count as f64;
        let squares: f64 = cluster.iter().map(|x| (x - mean).powi(2)).sum();
        let variance = squares / (count as f64 - 1.0);
        let minimum = cluster.iter().copied().fold(f64::INFINITY, f64::min);
        let maximum = cluster.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(ClusterSummary {
            count,
            sum,
            mean,
            variance,
            standard_deviation: variance.sqrt(),
            minimum,
            maximum,
        })
    }

    /// Summarize one channel.
    pub fn summarize(&self, channel: Channel) -> Result<ClusterSummary, DomainError> {
        Self::evaluate_cluster(&self.cluster(channel))
    }

    /// Hue summary with every sample lifted by a full turn.
    fn lifted_hue_summary(&self) -> Result<ClusterSummary, DomainError> {
        let lifted: Vec<f64> = self.hue_cluster().into_iter().map(|h| h + 360.0).collect();
        Self::evaluate_cluster(&lifted)
    }

    fn synthesize<R: RandomSource + ?Sized>(
        summaries: [(Channel, ClusterSummary); 3],
        rng: &mut R,
    ) -> [f64; 3] {
        summaries.map(|(channel, summary)| channel.settle(summary.sample(rng)))
    }

    /// Synthesize a color channel by channel in RGB.
    ///
    /// # Errors
    ///
    /// Fails when the mixer holds no colors.
    pub fn generate_rgb_color<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Color, DomainError> {
        let _perf = PerfSpan::new(span_names::MIXER);
        let [red, green, blue] = Self::synthesize(
            [
                (Channel::Red, self.summarize(Channel::Red)?),
                (Channel::Green, self.summarize(Channel::Green)?),
                (Channel::Blue, self.summarize(Channel::Blue)?),
            ],
            rng,
        );
        let color = Color::rgb(red, green, blue);
        tracing::trace!(target: targets::MIXER, color = %color, "synthesized RGB color");
        Ok(color)
    }

    /// Synthesize a color component by component in HSV.
    ///
    /// # Errors
    ///
    /// Fails when the mixer holds no colors.
    pub fn generate_hsv_color<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Color, DomainError> {
        let _perf = PerfSpan::new(span_names::MIXER);
        let [hue, saturation, value] = Self::synthesize(
            [
                (Channel::Hue, self.lifted_hue_summary()?),
                (Channel::Saturation, self.summarize(Channel::Saturation)?),
                (Channel::Value, self.summarize(Channel::Value)?),
            ],
            rng,
        );
        let color = Color::hsv(hue, saturation, value);
        tracing::trace!(target: targets::MIXER, color = %color, "synthesized HSV color");
        Ok(color)
    }

    /// Synthesize a color, picking RGB or HSV with a fair coin.
    pub fn generate_color<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Color, DomainError> {
        if rng.next_in_range(0, 1) == 1 {
            self.generate_hsv_color(rng)
        } else {
            self.generate_rgb_color(rng)
        }
    }
}

impl FromIterator<Color> for Mixer {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_core::{SeededRandom, SequenceRandom};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_evaluate_cluster() {
        let summary = Mixer::evaluate_cluster(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.count, 8);
        assert_eq!(summary.sum, 40.0);
        assert_eq!(summary.mean, 5.0);
        assert!(approx(summary.variance, 32.0 / 7.0));
        assert!(approx(summary.standard_deviation, (32.0f64 / 7.0).sqrt()));
        assert_eq!(summary.minimum, 2.0);
        assert_eq!(summary.maximum, 9.0);
    }

    #[test]
    fn test_evaluate_cluster_errors() {
        assert_eq!(Mixer::evaluate_cluster(&[]), Err(DomainError::EmptyCluster));
        assert_eq!(
            Mixer::evaluate_cluster(&[1.0, f64::NAN, 3.0]),
            Err(DomainError::NonNumeric { index: 1 })
        );
    }

    #[test]
    fn test_single_sample_variance_is_nan() {
        let summary = Mixer::evaluate_cluster(&[42.0]).unwrap();
        assert_eq!(summary.mean, 42.0);
        assert!(summary.variance.is_nan());
        assert!(summary.standard_deviation.is_nan());
    }

    #[test]
    fn test_clusters_are_sorted() {
        let mixer = Mixer::new([
            Color::rgb(200.0, 10.0, 0.0),
            Color::rgb(20.0, 100.0, 0.0),
            Color::rgb(100.0, 5.0, 0.0),
        ]);
        assert_eq!(mixer.red_cluster(), vec![20.0, 100.0, 200.0]);
        assert_eq!(mixer.green_cluster(), vec![5.0, 10.0, 100.0]);
        assert_eq!(mixer.blue_cluster(), vec![0.0, 0.0, 0.0]);
        assert_eq!(mixer.value_cluster(), vec![39.0, 39.0, 78.0]);
    }

    #[test]
    fn test_identical_colors_reproduce_themselves() {
        let color = Color::rgb(120.0, 60.0, 30.0);
        let mixer: Mixer = std::iter::repeat_n(color.clone(), 4).collect();
        let mut rng = SeededRandom::new(5);
        for _ in 0..10 {
            assert_eq!(mixer.generate_rgb_color(&mut rng).unwrap().hex_string(), color.hex_string());
            let hsv = mixer.generate_hsv_color(&mut rng).unwrap();
            assert_eq!(hsv.hue(), color.hue());
            assert_eq!(hsv.saturation(), color.saturation());
            assert_eq!(hsv.value(), color.value());
        }
    }

    #[test]
    fn test_single_color_mixer_uses_zero_offset() {
        let mixer = Mixer::new([Color::hsv(350.0, 40.0, 60.0)]);
        let mut rng = SequenceRandom::new(vec![7]);
        let color = mixer.generate_hsv_color(&mut rng).unwrap();
        assert_eq!(color.hue(), 350.0);
        assert_eq!(color.saturation(), 40.0);
        assert_eq!(color.value(), 60.0);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_generated_colors_stay_in_range() {
        let mixer = Mixer::new([
            Color::rgb(0.0, 0.0, 0.0),
            Color::rgb(255.0, 255.0, 255.0),
            Color::hsv(355.0, 100.0, 100.0),
            Color::hsv(5.0, 0.0, 0.0),
        ]);
        let mut rng = SeededRandom::new(17);
        for _ in 0..200 {
            let color = mixer.generate_color(&mut rng).unwrap();
            for channel in [Channel::Red, Channel::Green, Channel::Blue] {
                let (min, max) = channel.range();
                assert!((min..=max).contains(&channel.read(&color)));
            }
            assert!((0.0..360.0).contains(&color.hue()));
            assert!((0.0..=100.0).contains(&color.saturation()));
            assert!((0.0..=100.0).contains(&color.value()));
        }
    }

    #[test]
    fn test_extreme_draws_are_clamped() {
        let mixer = Mixer::new([Color::rgb(250.0, 5.0, 0.0), Color::rgb(254.0, 1.0, 0.0)]);
        // sd is about 2.83, so offsets span [-3, 3]
        let mut rng = SequenceRandom::new(vec![3, -3, -3]);
        let color = mixer.generate_rgb_color(&mut rng).unwrap();
        assert_eq!(color.red(), 255.0);
        assert_eq!(color.green(), 0.0);
        assert_eq!(color.blue(), 0.0);
    }

    #[test]
    fn test_empty_mixer_fails() {
        let mixer = Mixer::default();
        let mut rng = SeededRandom::new(0);
        assert_eq!(mixer.generate_rgb_color(&mut rng), Err(DomainError::EmptyCluster));
        assert_eq!(mixer.generate_hsv_color(&mut rng), Err(DomainError::EmptyCluster));
        assert_eq!(mixer.summarize(Channel::Hue), Err(DomainError::EmptyCluster));
    }

    #[test]
    fn test_channel_settle() {
        assert_eq!(Channel::Hue.settle(725.0), 5.0);
        assert_eq!(Channel::Saturation.settle(130.0), 100.0);
        assert_eq!(Channel::Red.settle(-4.0), 0.0);
        assert_eq!(Channel::Value.settle(55.0), 55.0);
    }
}
