//! The boundary to whatever produces pixels: a [`Sampler`] hands over one
//! averaged color per tick and a [`Driver`] names it at a fixed cadence.

use tracing::{debug, warn};

use crate::{
    color::{Component, Components},
    error::Result,
    models::Srgb,
    namer::{ColorNamer, Reading},
};

/// Run on every third tick unless told otherwise.
pub const DEFAULT_SAMPLE_EVERY: u32 = 3;

/// A source of color samples, typically reading the center of a camera frame.
pub trait Sampler {
    /// Produce the current sample, or `None` when no frame is available.
    fn sample(&mut self) -> Option<Srgb>;
}

impl<F> Sampler for F
where
    F: FnMut() -> Option<Srgb>,
{
    fn sample(&mut self) -> Option<Srgb> {
        self()
    }
}

/// Average a block of pixels component-wise. Returns `None` for an empty
/// block.
pub fn average(pixels: impl IntoIterator<Item = Srgb>) -> Option<Srgb> {
    let (sum, count) = pixels
        .into_iter()
        .fold((Components(0.0, 0.0, 0.0), 0usize), |(sum, count), pixel| {
            (sum + pixel.to_components(), count + 1)
        });

    if count == 0 {
        return None;
    }

    let count = count as Component;
    Some(sum.map(|total| total / count).into())
}

/// Let one tick in every `every` through.
#[derive(Clone, Debug)]
pub struct Throttle {
    every: u32,
    counter: u32,
}

impl Throttle {
    /// Create a throttle passing every `every`th tick. Zero is treated as one.
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
            counter: 0,
        }
    }

    /// The tick interval.
    pub fn every(&self) -> u32 {
        self.every
    }

    /// Count a tick and report whether work should run on it.
    pub fn tick(&mut self) -> bool {
        self.counter = (self.counter + 1) % self.every;
        self.counter == 0
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_EVERY)
    }
}

/// Pulls samples from a [`Sampler`] and names them.
pub struct Driver<S> {
    sampler: S,
    namer: ColorNamer,
    throttle: Throttle,
    fallback: Srgb,
}

impl<S: Sampler> Driver<S> {
    /// Drive `sampler` with `namer` on every third tick, falling back to white
    /// when no frame is available.
    pub fn new(sampler: S, namer: ColorNamer) -> Self {
        Self {
            sampler,
            namer,
            throttle: Throttle::default(),
            fallback: Srgb::WHITE,
        }
    }

    /// Replace the tick cadence.
    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    /// Replace the color used when the sampler has nothing.
    pub fn with_fallback(mut self, fallback: Srgb) -> Self {
        self.fallback = fallback;
        self
    }

    /// The namer in use.
    pub fn namer(&self) -> &ColorNamer {
        &self.namer
    }

    /// Advance one tick. Returns a reading on the ticks the throttle lets
    /// through and `None` on the others.
    pub fn tick(&mut self) -> Option<Result<Reading<'_>>> {
        if !self.throttle.tick() {
            return None;
        }

        Some(self.sample_now())
    }

    /// Sample and name immediately, ignoring the cadence.
    pub fn sample_now(&mut self) -> Result<Reading<'_>> {
        let sample = match self.sampler.sample() {
            Some(sample) => sample,
            None => {
                warn!(fallback = %self.fallback, "no frame available, using fallback color");
                self.fallback
            }
        };

        let reading = self.namer.read(&sample)?;
        debug!(color_name = reading.name, "tick");
        Ok(reading)
    }
}
