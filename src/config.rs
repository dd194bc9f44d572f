use std::{cell::RefCell, fmt, rc::Rc};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    NetErr, Result,
    arch::loss::LossFn,
    initialization::{RandWeightGen, WeightGen},
};

/// Width of the default uniform weight distribution.
const DEFAULT_SPREAD: f32 = 0.5;
/// Center of the default uniform weight distribution.
const DEFAULT_MEAN: f32 = 0.;

/// A shared, stateful weight generator.
pub type WeightInitializer = Rc<RefCell<dyn WeightGen>>;

/// The error measure a trainer should minimize.
pub type ErrorMeasure = Rc<dyn LossFn>;

/// The nonlinearity applied by the neurons of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    #[default]
    Sigmoid,
    Tanh,
    Relu,
    Linear,
    Softmax,
}

/// Selects the behavior of the output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// The output layer uses the same activation as the rest.
    #[default]
    Default,
    MultiClass,
    Regression,
    Binary,
    MultiLabel,
}

impl Mode {
    /// The activation the output layer uses in this mode, `None` for `Mode::Default`.
    pub fn output_activation(self) -> Option<Activation> {
        match self {
            Mode::Default => None,
            Mode::MultiClass => Some(Activation::Softmax),
            Mode::Regression => Some(Activation::Linear),
            Mode::Binary | Mode::MultiLabel => Some(Activation::Sigmoid),
        }
    }
}

/// Declarative description of a network.
///
/// `weight` and `error` are behavior rather than data, they are never (de)serialized. Cloning a
/// config shares its weight generator.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Amount of input dimensions.
    pub inputs: usize,
    /// Amount of neurons per layer, the last one being the output layer.
    pub layout: Vec<usize>,
    /// Hidden layers activation, sigmoid when unset.
    #[serde(default)]
    pub activation: Option<Activation>,
    #[serde(default)]
    pub mode: Mode,
    /// Uniform in `[-0.25, 0.25)` when unset.
    #[serde(skip)]
    pub weight: Option<WeightInitializer>,
    #[serde(skip)]
    pub error: Option<ErrorMeasure>,
    /// Magnitude of the bias input, zero or less disables biases.
    #[serde(default)]
    pub bias: f32,
    /// Seed for the default weight generator, taken from the OS when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    /// Creates a new `Config` with every optional field unset and no bias.
    ///
    /// # Arguments
    /// * `inputs` - The amount of input dimensions.
    /// * `layout` - The amount of neurons of each layer.
    pub fn new<I>(inputs: usize, layout: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            inputs,
            layout: layout.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Parses a `Config` from its JSON representation.
    ///
    /// # Errors
    /// Returns `NetErr::Json` if the string is not a valid config.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = Some(activation);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_bias(mut self, bias: f32) -> Self {
        self.bias = bias;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_weight<W: WeightGen + 'static>(mut self, weight: W) -> Self {
        self.weight = Some(Rc::new(RefCell::new(weight)));
        self
    }

    pub fn with_error<E: LossFn + 'static>(mut self, error: E) -> Self {
        self.error = Some(Rc::new(error));
        self
    }

    /// Checks that the config describes a buildable network.
    ///
    /// # Errors
    /// Returns an error if there are no inputs, no layers, a layer without neurons or a
    /// non finite bias.
    pub fn validate(&self) -> Result<()> {
        if self.inputs == 0 {
            return Err(NetErr::NoInputs);
        }

        if self.layout.is_empty() {
            return Err(NetErr::EmptyLayout);
        }

        if let Some(layer) = self.layout.iter().position(|&size| size == 0) {
            return Err(NetErr::EmptyLayer { layer });
        }

        if !self.bias.is_finite() {
            return Err(NetErr::NonFiniteBias(self.bias));
        }

        Ok(())
    }

    /// Validates this config and returns a snapshot of it with every default applied, along with
    /// the weight generator to wire the network with. `self` is left untouched.
    pub(crate) fn resolve(&self) -> Result<(Self, WeightInitializer, Activation)> {
        self.validate()?;

        let weight = match &self.weight {
            Some(weight) => Rc::clone(weight),
            None => self.default_weight()?,
        };
        let activation = self.activation.unwrap_or_default();

        let resolved = Self {
            activation: Some(activation),
            weight: Some(Rc::clone(&weight)),
            ..self.clone()
        };

        Ok((resolved, weight, activation))
    }

    fn default_weight(&self) -> Result<WeightInitializer> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let rng = Rc::new(RefCell::new(rng));
        let weight = RandWeightGen::spread(rng, DEFAULT_SPREAD, DEFAULT_MEAN)?;
        Ok(Rc::new(RefCell::new(weight)))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("inputs", &self.inputs)
            .field("layout", &self.layout)
            .field("activation", &self.activation)
            .field("mode", &self.mode)
            .field("weight", &self.weight.as_ref().map(|_| ".."))
            .field("error", &self.error.as_ref().map(|_| ".."))
            .field("bias", &self.bias)
            .field("seed", &self.seed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arch::loss::Mse, initialization::ConstWeightGen};

    #[test]
    fn output_activation() {
        assert_eq!(Mode::Default.output_activation(), None);
        assert_eq!(
            Mode::MultiClass.output_activation(),
            Some(Activation::Softmax)
        );
        assert_eq!(
            Mode::Regression.output_activation(),
            Some(Activation::Linear)
        );
        assert_eq!(Mode::Binary.output_activation(), Some(Activation::Sigmoid));
        assert_eq!(
            Mode::MultiLabel.output_activation(),
            Some(Activation::Sigmoid)
        );
    }

    #[test]
    fn from_json() {
        let config = Config::from_json(
            r#"{
                "inputs": 2,
                "layout": [3, 1],
                "activation": "tanh",
                "mode": "regression",
                "bias": 1.0,
                "seed": 7
            }"#,
        )
        .unwrap();

        assert_eq!(config.inputs, 2);
        assert_eq!(config.layout, vec![3, 1]);
        assert_eq!(config.activation, Some(Activation::Tanh));
        assert_eq!(config.mode, Mode::Regression);
        assert_eq!(config.bias, 1.);
        assert_eq!(config.seed, Some(7));
        assert!(config.weight.is_none());
        assert!(config.error.is_none());
    }

    #[test]
    fn from_json_defaults() {
        let config = Config::from_json(r#"{ "inputs": 1, "layout": [1] }"#).unwrap();

        assert_eq!(config.activation, None);
        assert_eq!(config.mode, Mode::Default);
        assert_eq!(config.bias, 0.);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn from_json_invalid() {
        let err = Config::from_json(r#"{ "inputs": 1, "layout": [1], "mode": "foo" }"#);
        assert!(matches!(err, Err(NetErr::Json(_))));
    }

    #[test]
    fn behavior_is_not_serialized() {
        let config = Config::new(2, [2, 1])
            .with_weight(ConstWeightGen::new(1.))
            .with_error(Mse)
            .with_bias(0.5);

        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("weight").is_none());
        assert!(json.get("error").is_none());
        assert_eq!(json["inputs"].as_u64(), Some(2));
        assert_eq!(json["bias"].as_f64(), Some(0.5));
    }

    #[test]
    fn validate() {
        assert!(Config::new(2, [2, 1]).validate().is_ok());
        assert!(matches!(
            Config::new(0, [2, 1]).validate(),
            Err(NetErr::NoInputs)
        ));
        assert!(matches!(
            Config::new(2, []).validate(),
            Err(NetErr::EmptyLayout)
        ));
        assert!(matches!(
            Config::new(2, [2, 0, 1]).validate(),
            Err(NetErr::EmptyLayer { layer: 1 })
        ));
        assert!(matches!(
            Config::new(2, [1]).with_bias(f32::NAN).validate(),
            Err(NetErr::NonFiniteBias(_))
        ));
    }

    #[test]
    fn resolve_leaves_the_original_untouched() {
        let config = Config::new(2, [1]);
        let (resolved, _, activation) = config.resolve().unwrap();

        assert_eq!(activation, Activation::Sigmoid);
        assert_eq!(resolved.activation, Some(Activation::Sigmoid));
        assert!(resolved.weight.is_some());

        assert_eq!(config.activation, None);
        assert!(config.weight.is_none());
    }

    #[test]
    fn resolve_keeps_explicit_choices() {
        let config = Config::new(2, [1])
            .with_activation(Activation::Relu)
            .with_weight(ConstWeightGen::new(3.));

        let (_, weight, activation) = config.resolve().unwrap();
        assert_eq!(activation, Activation::Relu);
        assert_eq!(weight.borrow_mut().sample(), 3.);
    }

    #[test]
    fn seeded_default_weight_is_reproducible() {
        let config = Config::new(1, [1]).with_seed(42);

        let (_, a, _) = config.resolve().unwrap();
        let (_, b, _) = config.resolve().unwrap();

        for _ in 0..10 {
            let w = a.borrow_mut().sample();
            assert_eq!(w, b.borrow_mut().sample());
            assert!((-0.25..0.25).contains(&w));
        }
    }
}
