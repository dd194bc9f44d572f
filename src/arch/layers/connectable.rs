use std::fmt::Display;

use super::WeightedEdge;
use crate::{arch::activations::ActFn, initialization::WeightGen};

/// The capabilities a layer must provide to be assembled into a network and fired.
///
/// The network only talks to its layers through this trait, so alternative neuron and synapse
/// representations can be plugged into it.
pub trait Connectable: Display + Sized {
    /// The handle to the edges created by `apply_bias`.
    type Edge: WeightedEdge;

    /// Creates a layer of `size` unconnected neurons.
    fn with_size(size: usize, act_fn: ActFn) -> Self;

    /// The amount of neurons in this layer.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fully connects this layer to `next`: each neuron here gets an outgoing edge to each
    /// neuron there, every edge with a freshly sampled weight.
    fn connect(&mut self, next: &mut Self, weight: &mut dyn WeightGen);

    /// Gives every neuron `inputs` dedicated incoming edges, one per input dimension.
    fn tap_inputs(&mut self, inputs: usize, weight: &mut dyn WeightGen);

    /// Fires the input taps with `input`, index by index.
    ///
    /// Values beyond the amount of taps are ignored and taps without a value are fired with
    /// zero.
    fn feed(&self, input: &[f32]);

    /// Creates one bias edge per neuron.
    ///
    /// # Returns
    /// The created edges, in neuron order.
    fn apply_bias(&mut self, weight: &mut dyn WeightGen) -> Vec<Self::Edge>;

    /// Computes the value of every neuron from its accumulated input and pushes it downstream.
    fn fire(&mut self);

    /// The neuron values of the last firing, in neuron order.
    fn values(&self) -> Vec<f32>;

    /// The amount of incoming edges per neuron, bias included.
    fn fan_in(&self) -> usize;
}
