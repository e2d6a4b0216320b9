//! Color model: uniform sampling in the RGB cube and plain Euclidean
//! distance between colors.
//!
//! No gamma handling or perceptual transform is applied; scores depend on
//! exactly this metric.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chroma_engine::paint::Color;

/// `sqrt(3)`, the diagonal of the unit RGB cube.
pub const MAX_DISTANCE: f64 = 1.732_050_807_568_877_2;

/// An opaque color with components in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// True when every component lies in the closed unit interval.
    pub fn in_unit_cube(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    pub fn distance(&self, other: &Rgb) -> f64 {
        distance(*self, *other)
    }

    pub fn normalized_distance(&self, other: &Rgb) -> f64 {
        normalized_distance(*self, *other)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::opaque(c.r as f32, c.g as f32, c.b as f32)
    }
}

/// Color with each component drawn independently and uniformly from `[0, 1]`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(
        rng.gen_range(0.0..=1.0),
        rng.gen_range(0.0..=1.0),
        rng.gen_range(0.0..=1.0),
    )
}

/// Euclidean distance in RGB space, in `[0, sqrt(3)]`.
pub fn distance(a: Rgb, b: Rgb) -> f64 {
    let dr = a.r - b.r;
    let dg = a.g - b.g;
    let db = a.b - b.b;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// `distance(a, b) / sqrt(3)`, in `[0, 1]`.
pub fn normalized_distance(a: Rgb, b: Rgb) -> f64 {
    distance(a, b) / MAX_DISTANCE
}

/// Supplies cell colors when a board is (re)generated.
pub trait ColorSource {
    fn next_color(&mut self) -> Rgb;
}

/// Uniform random colors from a seedable generator.
#[derive(Debug, Clone)]
pub struct RandomColors<R = StdRng> {
    rng: R,
}

impl RandomColors<StdRng> {
    /// Deterministic sequence: the same seed yields the same boards.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> RandomColors<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> Rgb {
        random_color(&mut self.rng)
    }
}

/// Replays a fixed list of colors, wrapping around at the end.
///
/// Boards are filled column by column (all rows of column 0 first), so a
/// script of `columns * rows` colors lays out the board exactly.
#[derive(Debug, Clone, Default)]
pub struct ScriptedColors {
    colors: Vec<Rgb>,
    next: usize,
}

impl ScriptedColors {
    pub fn new(colors: impl IntoIterator<Item = Rgb>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            next: 0,
        }
    }

    /// A script that yields `color` forever.
    pub fn uniform(color: Rgb) -> Self {
        Self::new([color])
    }
}

impl ColorSource for ScriptedColors {
    fn next_color(&mut self) -> Rgb {
        if self.colors.is_empty() {
            return Rgb::BLACK;
        }
        let c = self.colors[self.next % self.colors.len()];
        self.next = self.next.wrapping_add(1);
        c
    }
}
