use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapter over any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Always yields the same value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedSource(pub f64);

impl RandomSource for FixedSource {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// An empty script behaves like `FixedSource(0.0)`.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let Some(&v) = self.values.get(self.cursor) else {
            return 0.0;
        };
        self.cursor = (self.cursor + 1) % self.values.len();
        v
    }
}

/// Picks region extents bounded by the free runs at an anchor.
///
/// Each axis is `round(unit * max)` clamped to `[1, max]`. Scaling the draw by the bound
/// and rounding skews small bounds toward 1; that distribution is intentional.
#[derive(Clone, Debug)]
pub struct RandomRegionSizer<S> {
    source: S,
}

impl<S: RandomSource> RandomRegionSizer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns `(width, height)`. The height draw is taken before the width draw.
    pub fn pick(&mut self, max_width: u32, max_height: u32) -> (u32, u32) {
        let height = self.draw(max_height);
        let width = self.draw(max_width);
        (width, height)
    }

    fn draw(&mut self, max: u32) -> u32 {
        let max = max.max(1);
        let scaled = (self.source.next_unit() * f64::from(max)).round();
        // NaN saturates to 0 and is lifted by the clamp.
        (scaled as u32).clamp(1, max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/partition/sizer.rs"]
mod tests;
