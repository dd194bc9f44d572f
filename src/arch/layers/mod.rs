mod connectable;
mod layer;
mod neuron;
mod synapse;

pub use connectable::Connectable;
pub use layer::Layer;
pub use neuron::Neuron;
pub use synapse::{Synapse, WeightedEdge};
