use std::{cell::Cell, rc::Rc};

/// A weighted directed edge towards a neuron.
pub trait WeightedEdge {
    /// Stores `weight * signal` as this edge's contribution to its destination neuron, replacing
    /// whatever was left by a previous firing.
    fn fire(&self, signal: f32);

    fn weight(&self) -> f32;

    /// The contribution left by the last firing.
    fn output(&self) -> f32;
}

/// A synapse between two neurons, or between an external input (or a bias) and a neuron.
///
/// Both endpoints hold a handle to the same synapse, so its state lives in cells.
#[derive(Debug, Default)]
pub struct Synapse {
    weight: Cell<f32>,
    input: Cell<f32>,
    output: Cell<f32>,
    is_bias: bool,
}

impl Synapse {
    pub fn new(weight: f32) -> Self {
        Self {
            weight: Cell::new(weight),
            ..Default::default()
        }
    }

    /// Creates a synapse with no upstream neuron.
    pub fn bias(weight: f32) -> Self {
        Self {
            is_bias: true,
            ..Self::new(weight)
        }
    }

    /// Overwrites the weight, the hook a trainer updates the network through.
    pub fn set_weight(&self, weight: f32) {
        self.weight.set(weight);
    }

    /// The signal received on the last firing, which a trainer needs for the weight gradient.
    pub fn input(&self) -> f32 {
        self.input.get()
    }

    pub fn is_bias(&self) -> bool {
        self.is_bias
    }
}

impl WeightedEdge for Synapse {
    fn fire(&self, signal: f32) {
        self.input.set(signal);
        self.output.set(signal * self.weight.get());
    }

    fn weight(&self) -> f32 {
        self.weight.get()
    }

    fn output(&self) -> f32 {
        self.output.get()
    }
}

impl<E: WeightedEdge + ?Sized> WeightedEdge for Rc<E> {
    fn fire(&self, signal: f32) {
        (**self).fire(signal)
    }

    fn weight(&self) -> f32 {
        (**self).weight()
    }

    fn output(&self) -> f32 {
        (**self).output()
    }
}
