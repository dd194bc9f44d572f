use super::WeightGen;

/// A weight generator that always generates the same value.
#[derive(Debug, Clone, Copy)]
pub struct ConstWeightGen {
    value: f32,
}

impl ConstWeightGen {
    /// Creates a new `ConstWeightGen` weight generator.
    ///
    /// # Arguments
    /// * `value` - The value to always generate.
    ///
    /// # Returns
    /// A new `ConstWeightGen` instance.
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl WeightGen for ConstWeightGen {
    fn sample(&mut self) -> f32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_the_same() {
        let mut weight_gen = ConstWeightGen::new(1.5);

        for _ in 0..10 {
            assert_eq!(weight_gen.sample(), 1.5);
        }
    }
}
