/// A `WeightGen` generates the initial value of every synapse weight in the network.
///
/// It is called once per synapse while the network is being wired, the core imposes no other
/// contract on it. Any `FnMut() -> f32` closure is a weight generator.
pub trait WeightGen {
    /// Samples a single weight.
    fn sample(&mut self) -> f32;
}

impl<F: FnMut() -> f32> WeightGen for F {
    fn sample(&mut self) -> f32 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure() {
        let mut next = 0.;
        let mut weight_gen = move || {
            next += 1.;
            next
        };

        assert_eq!(weight_gen.sample(), 1.);
        assert_eq!(weight_gen.sample(), 2.);
    }
}
