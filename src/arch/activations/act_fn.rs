use super::{Relu, Sigmoid, Softmax, Tanh};
use crate::config::Activation;

/// The activation function shared by every neuron of a layer.
#[derive(Clone, Debug)]
pub enum ActFn {
    Sigmoid(Sigmoid),
    Tanh(Tanh),
    Relu(Relu),
    Linear,
    Softmax(Softmax),
}

impl ActFn {
    /// A sigmoid scaled to `(0, amp)`.
    pub fn sigmoid(amp: f32) -> Self {
        Self::Sigmoid(Sigmoid::new(amp))
    }

    pub fn f(&self, x: f32) -> f32 {
        match self {
            Self::Sigmoid(a) => a.f(x),
            Self::Tanh(a) => a.f(x),
            Self::Relu(a) => a.f(x),
            Self::Linear => x,
            Self::Softmax(a) => a.f(x),
        }
    }

    /// The derivative at the pre activation sum `x`, used when backpropagating.
    pub fn df(&self, x: f32) -> f32 {
        match self {
            Self::Sigmoid(a) => a.df(x),
            Self::Tanh(a) => a.df(x),
            Self::Relu(a) => a.df(x),
            Self::Linear => 1.,
            Self::Softmax(a) => a.df(x),
        }
    }

    /// The configuration value this function was built from.
    pub fn kind(&self) -> Activation {
        match self {
            Self::Sigmoid(_) => Activation::Sigmoid,
            Self::Tanh(_) => Activation::Tanh,
            Self::Relu(_) => Activation::Relu,
            Self::Linear => Activation::Linear,
            Self::Softmax(_) => Activation::Softmax,
        }
    }
}

impl From<Activation> for ActFn {
    fn from(value: Activation) -> Self {
        match value {
            Activation::Sigmoid => Self::sigmoid(1.),
            Activation::Tanh => Self::Tanh(Tanh),
            Activation::Relu => Self::Relu(Relu),
            Activation::Linear => Self::Linear,
            Activation::Softmax => Self::Softmax(Softmax),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_kind() {
        for kind in [
            Activation::Sigmoid,
            Activation::Tanh,
            Activation::Relu,
            Activation::Linear,
            Activation::Softmax,
        ] {
            assert_eq!(ActFn::from(kind).kind(), kind);
        }
    }

    #[test]
    fn linear_is_identity() {
        let act_fn = ActFn::from(Activation::Linear);
        assert_eq!(act_fn.f(-3.5), -3.5);
        assert_eq!(act_fn.df(-3.5), 1.);
    }

    #[test]
    fn relu_clamps_negatives() {
        let act_fn = ActFn::from(Activation::Relu);
        assert_eq!(act_fn.f(-2.), 0.);
        assert_eq!(act_fn.f(2.), 2.);
    }
}
