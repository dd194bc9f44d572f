use ndarray::Array1;

use crate::arch::layers::Connectable;

/// Delta storage for a gradient descent with momentum trainer, sized after the network topology.
///
/// The network only allocates it, nothing in the forward pass reads or writes it.
#[derive(Debug, Clone)]
pub struct Training {
    deltas: Vec<Array1<f32>>,
    old_deltas: Vec<Array1<f32>>,
}

impl Training {
    /// Creates a new zeroed `Training`.
    ///
    /// # Arguments
    /// * `layers` - The already wired layers of the network.
    ///
    /// # Returns
    /// A `Training` with one delta per neuron and one old delta per incoming edge of each layer.
    pub fn new<L: Connectable>(layers: &[L]) -> Self {
        let deltas = layers.iter().map(|l| Array1::zeros(l.len())).collect();
        let old_deltas = layers
            .iter()
            .map(|l| Array1::zeros(l.len() * l.fan_in()))
            .collect();

        Self { deltas, old_deltas }
    }

    /// One delta per neuron, indexed by layer.
    pub fn deltas(&self) -> &[Array1<f32>] {
        &self.deltas
    }

    /// One delta per (neuron, incoming edge) pair, indexed by layer.
    pub fn old_deltas(&self) -> &[Array1<f32>] {
        &self.old_deltas
    }
}
