/// Logistic function scaled to the `(0, amp)` range.
#[derive(Clone, Debug)]
pub struct Sigmoid {
    amp: f32,
}

impl Default for Sigmoid {
    fn default() -> Self {
        Self::new(1.)
    }
}

impl Sigmoid {
    pub fn new(amp: f32) -> Self {
        Self { amp }
    }

    pub fn f(&self, z: f32) -> f32 {
        self.amp / (1. + (-z).exp())
    }

    /// Derivative with respect to `z`, written in terms of the unit sigmoid `s`.
    pub fn df(&self, z: f32) -> f32 {
        let s = 1. / (1. + (-z).exp());
        self.amp * s * (1. - s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_at_half_amp() {
        let sigmoid = Sigmoid::new(2.);
        assert_eq!(sigmoid.f(0.), 1.);
        assert_eq!(sigmoid.df(0.), 0.5);
    }

    #[test]
    fn saturates() {
        let sigmoid = Sigmoid::default();
        assert!(sigmoid.f(50.) > 0.999);
        assert!(sigmoid.f(-50.) < 0.001);
    }
}
