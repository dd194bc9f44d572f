use std::{
    fmt::{self, Display},
    rc::Rc,
};

use super::{Connectable, Neuron, Synapse, WeightedEdge};
use crate::{arch::activations::ActFn, initialization::WeightGen};

/// An ordered group of neurons sharing one activation function.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    act_fn: ActFn,
}

impl Layer {
    pub fn new(size: usize, act_fn: ActFn) -> Self {
        Self {
            neurons: (0..size).map(|_| Neuron::new()).collect(),
            act_fn,
        }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn act_fn(&self) -> &ActFn {
        &self.act_fn
    }
}

impl Connectable for Layer {
    type Edge = Rc<Synapse>;

    fn with_size(size: usize, act_fn: ActFn) -> Self {
        Self::new(size, act_fn)
    }

    fn len(&self) -> usize {
        self.neurons.len()
    }

    fn connect(&mut self, next: &mut Self, weight: &mut dyn WeightGen) {
        for neuron in &mut self.neurons {
            for next_neuron in &mut next.neurons {
                neuron.link(next_neuron, weight.sample());
            }
        }
    }

    fn tap_inputs(&mut self, inputs: usize, weight: &mut dyn WeightGen) {
        for neuron in &mut self.neurons {
            neuron.tap((0..inputs).map(|_| weight.sample()));
        }
    }

    fn feed(&self, input: &[f32]) {
        for neuron in &self.neurons {
            for (i, tap) in neuron.incoming().iter().enumerate() {
                tap.fire(input.get(i).copied().unwrap_or_default());
            }
        }
    }

    fn apply_bias(&mut self, weight: &mut dyn WeightGen) -> Vec<Self::Edge> {
        self.neurons
            .iter_mut()
            .map(|neuron| neuron.attach_bias(weight.sample()))
            .collect()
    }

    fn fire(&mut self) {
        for neuron in &mut self.neurons {
            let z = neuron.accumulate();
            neuron.set_value(self.act_fn.f(z));
        }

        if let ActFn::Softmax(softmax) = &self.act_fn {
            let mut values = self.values();
            softmax.normalize(&mut values);

            for (neuron, value) in self.neurons.iter_mut().zip(values) {
                neuron.set_value(value);
            }
        }

        for neuron in &self.neurons {
            neuron.propagate();
        }
    }

    fn values(&self) -> Vec<f32> {
        self.neurons.iter().map(Neuron::value).collect()
    }

    fn fan_in(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::fan_in)
    }
}

/// Renders the incoming weights of every neuron, bias last.
impl Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weights: Vec<Vec<f32>> = self
            .neurons
            .iter()
            .map(|neuron| {
                neuron
                    .incoming()
                    .iter()
                    .chain(neuron.bias())
                    .map(|s| s.weight())
                    .collect()
            })
            .collect();

        write!(f, "{weights:?}")
    }
}
