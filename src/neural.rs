use std::fmt::{self, Display};

use log::{debug, error};

use crate::{
    Result,
    arch::layers::{Connectable, Layer, WeightedEdge},
    config::{Config, Mode},
    training::Training,
};

/// A fully wired feedforward network.
///
/// Every call to `forward` mutates the neurons and synapses in place, a `Neural` is therefore
/// neither `Send` nor `Sync`.
pub struct Neural<L: Connectable = Layer> {
    layers: Vec<L>,
    biases: Option<Vec<Vec<L::Edge>>>,
    config: Config,
    training: Training,
}

impl<L: Connectable> Neural<L> {
    /// Assembles a new network.
    ///
    /// Every weight is drawn from the config's weight generator: first the synapses between
    /// layers, then the input taps of the first layer and last the biases.
    ///
    /// # Arguments
    /// * `config` - The description of the network, it is not modified.
    ///
    /// # Returns
    /// The network, ready to be fired, or an error if the config is malformed.
    pub fn new(config: &Config) -> Result<Self> {
        let (config, weight, activation) = config.resolve()?;
        let nlayers = config.layout.len();
        let output = config.mode.output_activation();

        let mut layers: Vec<L> = config
            .layout
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let act = match output {
                    Some(act) if i == nlayers - 1 => act,
                    _ => activation,
                };
                L::with_size(size, act.into())
            })
            .collect();

        let mut weight = weight.borrow_mut();

        for i in 1..nlayers {
            let (prev, next) = layers.split_at_mut(i);
            prev[i - 1].connect(&mut next[0], &mut *weight);
        }

        layers[0].tap_inputs(config.inputs, &mut *weight);

        let biases: Option<Vec<Vec<L::Edge>>> = (config.bias > 0.).then(|| {
            layers
                .iter_mut()
                .enumerate()
                .map(|(i, layer)| {
                    if config.mode == Mode::Regression && i == nlayers - 1 {
                        return Vec::new();
                    }
                    layer.apply_bias(&mut *weight)
                })
                .collect()
        });

        drop(weight);

        debug!(
            "assembled network: inputs={} layout={:?} mode={:?} bias={}",
            config.inputs, config.layout, config.mode, config.bias
        );

        Ok(Self {
            training: Training::new(&layers),
            layers,
            biases,
            config,
        })
    }

    /// Fires the whole network: all the biases first, then every layer from input to output.
    pub fn fire(&mut self) {
        let bias = self.config.bias;
        for edge in self.biases.iter().flatten().flatten() {
            edge.fire(bias);
        }

        for layer in &mut self.layers {
            layer.fire();
        }
    }

    /// Loads `input` into the input taps of the first layer.
    ///
    /// A wrong sized input is logged and fed anyway, see `Connectable::feed`.
    fn set(&self, input: &[f32]) {
        if input.len() != self.config.inputs {
            error!(
                "invalid input dimension - expected: {} got: {}",
                self.config.inputs,
                input.len()
            );
        }

        self.layers[0].feed(input);
    }

    /// Propagates `input` through the network.
    pub fn forward(&mut self, input: &[f32]) {
        self.set(input);
        self.fire();
    }

    /// Propagates `input` through the network.
    ///
    /// # Returns
    /// The values of the output layer.
    pub fn predict(&mut self, input: &[f32]) -> Vec<f32> {
        self.forward(input);
        self.layers.last().map(L::values).unwrap_or_default()
    }

    pub fn layers(&self) -> &[L] {
        &self.layers
    }

    /// The bias edges indexed by layer, `None` if biases are disabled.
    pub fn biases(&self) -> Option<&[Vec<L::Edge>]> {
        self.biases.as_deref()
    }

    /// The total amount of bias edges.
    pub fn bias_count(&self) -> usize {
        self.biases.iter().flatten().map(Vec::len).sum()
    }

    /// The effective config, with every default applied.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn training(&self) -> &Training {
        &self.training
    }
}

impl<L: Connectable> Display for Neural<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for layer in &self.layers {
            write!(f, "\n{layer}")?;
        }

        Ok(())
    }
}
