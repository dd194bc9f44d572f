use std::rc::Rc;

use super::{Synapse, WeightedEdge};

/// A single neuron: it owns the list of its incoming synapses and its current value.
#[derive(Debug, Default)]
pub struct Neuron {
    incoming: Vec<Rc<Synapse>>,
    outgoing: Vec<Rc<Synapse>>,
    bias: Option<Rc<Synapse>>,
    sum: f32,
    value: f32,
}

impl Neuron {
    pub fn new() -> Self {
        Self::default()
    }

    /// The activation computed on the last firing.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The weighted sum computed on the last firing, before the activation. A trainer feeds it
    /// to `ActFn::df`.
    pub fn sum(&self) -> f32 {
        self.sum
    }

    /// The non bias incoming synapses, either external input taps or synapses from the previous
    /// layer.
    pub fn incoming(&self) -> &[Rc<Synapse>] {
        &self.incoming
    }

    pub fn outgoing(&self) -> &[Rc<Synapse>] {
        &self.outgoing
    }

    pub fn bias(&self) -> Option<&Rc<Synapse>> {
        self.bias.as_ref()
    }

    /// The amount of synapses feeding this neuron, bias included.
    pub fn fan_in(&self) -> usize {
        self.incoming.len() + usize::from(self.bias.is_some())
    }

    /// Adds a fresh synapse from this neuron to `next`.
    pub(super) fn link(&mut self, next: &mut Neuron, weight: f32) {
        let synapse = Rc::new(Synapse::new(weight));
        self.outgoing.push(Rc::clone(&synapse));
        next.incoming.push(synapse);
    }

    /// Replaces the incoming synapses with dedicated external input taps.
    pub(super) fn tap<I>(&mut self, weights: I)
    where
        I: IntoIterator<Item = f32>,
    {
        self.incoming = weights
            .into_iter()
            .map(|w| Rc::new(Synapse::new(w)))
            .collect();
    }

    pub(super) fn attach_bias(&mut self, weight: f32) -> Rc<Synapse> {
        let synapse = Rc::new(Synapse::bias(weight));
        self.bias = Some(Rc::clone(&synapse));
        synapse
    }

    /// Sums the contributions currently held by the incoming synapses and the bias.
    pub(super) fn accumulate(&mut self) -> f32 {
        let bias = self.bias.as_ref().map_or(0., |b| b.output());
        self.sum = self.incoming.iter().map(|s| s.output()).sum::<f32>() + bias;
        self.sum
    }

    pub(super) fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    /// Pushes the current value through every outgoing synapse.
    pub(super) fn propagate(&self) {
        for synapse in &self.outgoing {
            synapse.fire(self.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_shares_the_synapse() {
        let mut a = Neuron::new();
        let mut b = Neuron::new();

        a.link(&mut b, 2.);
        a.set_value(3.);
        a.propagate();

        assert_eq!(b.incoming().len(), 1);
        assert_eq!(b.accumulate(), 6.);
        assert!(Rc::ptr_eq(&a.outgoing()[0], &b.incoming()[0]));
    }

    #[test]
    fn bias_counts_in_fan_in() {
        let mut neuron = Neuron::new();
        neuron.tap([1., 1., 1.]);
        assert_eq!(neuron.fan_in(), 3);

        let bias = neuron.attach_bias(0.5);
        assert_eq!(neuron.fan_in(), 4);
        assert_eq!(neuron.incoming().len(), 3);

        bias.fire(2.);
        assert_eq!(neuron.accumulate(), 1.);
    }
}
