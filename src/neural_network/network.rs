use crate::error::ModelError;
use crate::neural_network::computation;
use crate::neural_network::input_validation_function::validate_epsilon;
use crate::neural_network::{Activation, Layer, Matrix, Vector, WeightStore, layer_sizes};
use crate::{Deserialize, Serialize};
use log::{debug, info};
use ndarray::ArrayView1;

/// Declarative description of a network, suitable for reading from JSON.
///
/// # Fields
///
/// - `layer_sizes` - Neuron count of every layer, input layer first (at least two entries)
/// - `activation` - Activation shared by every layer
/// - `seed` - Seed for weight initialization; a fresh one is drawn when absent
///
/// # Example
/// ```rust
/// use feedforward_net::prelude::*;
///
/// let config: NetworkConfig = serde_json::from_str(
///     r#"{ "layer_sizes": [2, 4, 1], "activation": { "type": "Sigmoid" }, "seed": 3 }"#,
/// )
/// .unwrap();
/// let net = Network::from_config(&config).unwrap();
/// assert_eq!(net.layers().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub layer_sizes: Vec<usize>,
    pub activation: Activation,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// A feed-forward network with one activation shared by all layers.
///
/// The network owns its layer descriptors, its activation and its `WeightStore`. The
/// topology and activation are fixed at construction; the weights change through `correct`
/// or explicit replacement.
///
/// # Example
/// ```rust
/// use feedforward_net::prelude::*;
/// use ndarray::array;
///
/// let mut net = Network::with_seed(
///     Activation::Sigmoid,
///     &[Layer::new(2), Layer::new(4), Layer::new(1)],
///     1,
/// )
/// .unwrap();
///
/// let rows: [([f32; 2], f32); 4] = [([0.0, 0.0], 0.0), ([0.0, 1.0], 1.0), ([1.0, 0.0], 1.0), ([1.0, 1.0], 0.0)];
/// for _ in 0..10 {
///     for (input, target) in rows.iter() {
///         net.correct(0.9, array![input[0], input[1]].view(), array![*target].view())
///             .unwrap();
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    activation: Activation,
    weights: WeightStore,
}

impl Network {
    /// Creates a network with randomly initialized weights.
    ///
    /// # Parameters
    ///
    /// - `activation` - Activation shared by every layer
    /// - `layers` - Layer descriptors, input layer first
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - A network whose weights were filled from a fresh seed
    /// - `Err(ModelError::ConfigurationError)` - If there are fewer than two layers, a layer is empty, or the activation is invalid
    pub fn new(activation: Activation, layers: &[Layer]) -> Result<Self, ModelError> {
        Self::with_seed(activation, layers, rand::random())
    }

    /// Creates a network whose weights are initialized deterministically from `seed`.
    ///
    /// # Parameters
    ///
    /// - `activation` - Activation shared by every layer
    /// - `layers` - Layer descriptors, input layer first
    /// - `seed` - Seed for weight initialization
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - The initialized network
    /// - `Err(ModelError::ConfigurationError)` - If there are fewer than two layers, a layer is empty, or the activation is invalid
    pub fn with_seed(activation: Activation, layers: &[Layer], seed: u64) -> Result<Self, ModelError> {
        activation.validate()?;
        let mut weights = WeightStore::new(&layer_sizes(layers))?;
        weights.fill_random(seed);

        debug!(
            "created {} network with layers {:?}",
            activation.name(),
            layer_sizes(layers)
        );

        Ok(Self {
            layers: layers.to_vec(),
            activation,
            weights,
        })
    }

    /// Builds a network from a `NetworkConfig`.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, ModelError> {
        let layers: Vec<Layer> = config.layer_sizes.iter().map(|&n| Layer::new(n)).collect();
        match config.seed {
            Some(seed) => Self::with_seed(config.activation, &layers, seed),
            None => Self::new(config.activation, &layers),
        }
    }

    /// Evaluates the network on `input`.
    ///
    /// # Parameters
    ///
    /// * `input` - Vector of length equal to the first layer size
    ///
    /// # Returns
    ///
    /// - `Ok(Vector)` - Output of length equal to the last layer size
    /// - `Err(ModelError::DimensionMismatchError)` - If `input` has the wrong length
    pub fn evaluate(&self, input: ArrayView1<f32>) -> Result<Vector, ModelError> {
        computation::evaluate(input, self.weights.get_all(), self.activation)
    }

    /// Runs one error-correction iteration and updates the weights in place.
    ///
    /// `ideal` is passed through the activation before the backward pass.
    ///
    /// # Parameters
    ///
    /// - `epsilon` - Learning coefficient, positive and finite
    /// - `input` - Vector of length equal to the first layer size
    /// - `ideal` - Expected output, length equal to the last layer size
    ///
    /// # Returns
    ///
    /// - `Ok(Vector)` - Squared error per output neuron, measured before the update
    /// - `Err(ModelError::ConfigurationError)` - If `epsilon` is not positive and finite
    /// - `Err(ModelError::DimensionMismatchError)` - If `input` or `ideal` has the wrong length; the weights are left untouched
    pub fn correct(
        &mut self,
        epsilon: f32,
        input: ArrayView1<f32>,
        ideal: ArrayView1<f32>,
    ) -> Result<Vector, ModelError> {
        validate_epsilon(epsilon)?;
        let ideal = computation::apply_function(ideal, self.activation);
        computation::correct_weights(
            epsilon,
            input,
            self.weights.get_all_mut(),
            ideal.view(),
            self.activation,
        )
    }

    /// Replaces the matrix of one transition; see `WeightStore::replace`
    pub fn replace_weights(&mut self, index: usize, matrix: Matrix) -> Result<(), ModelError> {
        self.weights.replace(index, matrix)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Read access to the weight store
    pub fn weights(&self) -> &WeightStore {
        &self.weights
    }

    /// Logs the topology and the number of coefficients at `info` level
    pub fn summary(&self) {
        info!("Network ({} activation)", self.activation.name());
        for (i, matrix) in self.weights.get_all().iter().enumerate() {
            info!(
                "  transition {:<3} shape {:?} params {}",
                i,
                matrix.dim(),
                matrix.len()
            );
        }
        info!("  total params: {}", self.weights.param_count());
    }
}
