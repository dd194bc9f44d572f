use std::{cell::RefCell, rc::Rc};

use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use super::{Result, WeightGen};

/// A weight generator that follows a certain probabilistic distribution.
///
/// The random number generator is shared, so several generators (or several clones of the same
/// configuration) draw from one sequence.
pub struct RandWeightGen<R: Rng, D: Distribution<f32>> {
    rng: Rc<RefCell<R>>,
    distribution: D,
}

impl<R: Rng, D: Distribution<f32>> RandWeightGen<R, D> {
    /// Creates a new `RandWeightGen` weight generator.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `distribution` - The distribution to sample the random numbers from.
    pub fn new(rng: Rc<RefCell<R>>, distribution: D) -> Self {
        Self { rng, distribution }
    }
}

impl<R: Rng> RandWeightGen<R, Uniform<f32>> {
    /// Creates a new `RandWeightGen` weight generator with a uniform distribution.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `low` - The inclusive lower limit.
    /// * `high` - The exclusive upper limit.
    ///
    /// # Returns
    /// An error if the range is invalid (low >= high).
    pub fn uniform(rng: Rc<RefCell<R>>, low: f32, high: f32) -> Result<Self> {
        Ok(Self::new(rng, Uniform::new(low, high)?))
    }

    /// Creates a new `RandWeightGen` weight generator with a uniform distribution of the given
    /// width centered at `mean`, that is, sampling from `[mean - spread / 2, mean + spread / 2)`.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `spread` - The width of the interval.
    /// * `mean` - The center of the interval.
    ///
    /// # Returns
    /// An error if `spread` is not strictly positive.
    pub fn spread(rng: Rc<RefCell<R>>, spread: f32, mean: f32) -> Result<Self> {
        let half = spread / 2.;
        Self::uniform(rng, mean - half, mean + half)
    }

    /// Creates a new `RandWeightGen` weight generator using Xavier uniform initialization, meant
    /// to be handed to `Config::with_weight`.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `fan_in` - The number of input units of a layer.
    /// * `fan_out` - The number of output units of a layer.
    ///
    /// # Returns
    /// An error if the calculated range is invalid.
    pub fn xavier_uniform(rng: Rc<RefCell<R>>, fan_in: usize, fan_out: usize) -> Result<Self> {
        let range = (6. / (fan_in + fan_out) as f32).sqrt();
        Self::uniform(rng, -range, range)
    }
}

impl<R: Rng> RandWeightGen<R, Normal<f32>> {
    /// Creates a new `RandWeightGen` weight generator with a normal distribution.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `mean` - The mean of the distribution.
    /// * `std_dev` - The standard deviation of the distribution.
    ///
    /// # Returns
    /// An error if `std_dev` is not finite.
    pub fn normal(rng: Rc<RefCell<R>>, mean: f32, std_dev: f32) -> Result<Self> {
        Ok(Self::new(rng, Normal::new(mean, std_dev)?))
    }
}

impl<R: Rng, D: Distribution<f32>> WeightGen for RandWeightGen<R, D> {
    fn sample(&mut self) -> f32 {
        let mut rng = self.rng.borrow_mut();
        self.distribution.sample(&mut *rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded_rng() -> Rc<RefCell<StdRng>> {
        Rc::new(RefCell::new(StdRng::seed_from_u64(42)))
    }

    #[test]
    fn spread_stays_in_range() {
        let rng = seeded_rng();

        let mut weight_gen = RandWeightGen::spread(rng, 0.5, 0.).unwrap();
        for _ in 0..1000 {
            let w = weight_gen.sample();
            assert!((-0.25..0.25).contains(&w), "{w} out of range");
        }
    }

    #[test]
    fn spread_with_mean() {
        let rng = seeded_rng();

        let mut weight_gen = RandWeightGen::spread(rng, 1., 3.).unwrap();
        for _ in 0..1000 {
            let w = weight_gen.sample();
            assert!((2.5..3.5).contains(&w), "{w} out of range");
        }
    }

    #[test]
    fn xavier_uniform_range() {
        let rng = seeded_rng();

        // sqrt(6 / (4 + 2)) = 1
        let mut weight_gen = RandWeightGen::xavier_uniform(rng, 4, 2).unwrap();
        for _ in 0..1000 {
            assert!((-1. ..1.).contains(&weight_gen.sample()));
        }
    }

    #[test]
    fn empty_range() {
        let rng = seeded_rng();
        let err = RandWeightGen::spread(rng, 0., 0.).err().unwrap();
        assert_eq!(err.distribution(), "uniform");
    }

    #[test]
    fn non_finite_std_dev() {
        let rng = seeded_rng();
        let err = RandWeightGen::normal(rng, 0., f32::NAN).err().unwrap();
        assert_eq!(err.distribution(), "normal");
    }

    #[test]
    fn same_seed_same_weights() {
        let mut a = RandWeightGen::normal(seeded_rng(), 0., 1.).unwrap();
        let mut b = RandWeightGen::normal(seeded_rng(), 0., 1.).unwrap();

        for _ in 0..10 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn shared_rng_advances() {
        let rng = seeded_rng();
        let mut a = RandWeightGen::uniform(rng.clone(), -1., 1.).unwrap();
        let mut b = RandWeightGen::uniform(seeded_rng(), -1., 1.).unwrap();

        let first = b.sample();
        assert_eq!(a.sample(), first);

        let mut c = RandWeightGen::uniform(rng, -1., 1.).unwrap();
        assert_eq!(c.sample(), b.sample());
    }
}
