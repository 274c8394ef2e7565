/// Module `error` contains the error types returned by every fallible operation in the crate.
///
/// - `ModelError` - configuration, dimension and range errors raised by the network core
/// - `IoError` - errors raised while saving or loading weights
pub mod error;

pub use error::{IoError, ModelError};
pub use serde::{Deserialize, Serialize};

/// Module `neural_network` implements a minimal feed-forward neural network.
///
/// A network is an ordered list of dense layers sharing one activation function. The layers
/// are connected by transitions, each a dense weight matrix owned by a `WeightStore`.
/// Evaluation multiplies the input through every transition in order, and correction runs a
/// forward sweep followed by a backward pass that updates the weights in place.
///
/// # Components
///
/// - `Activation` - Linear, Sigmoid and Threshold functions with apply, derivative and antiderivative
/// - `WeightStore` - per-transition weight matrices with seeded random initialization and shape-checked replacement
/// - `computation` - vector/matrix multiplication, elementwise application, squared error and backward correction
/// - `Network` - the façade exposing `evaluate` and `correct`
///
/// # Example
/// ```rust
/// use feedforward_net::prelude::*;
/// use ndarray::array;
///
/// let mut net = Network::with_seed(
///     Activation::Sigmoid,
///     &[Layer::new(2), Layer::new(4), Layer::new(1)],
///     42,
/// )
/// .unwrap();
///
/// // One correction step on a single XOR row
/// let errors = net.correct(0.9, array![0.0, 1.0].view(), array![1.0].view()).unwrap();
/// assert_eq!(errors.len(), 1);
///
/// let output = net.evaluate(array![0.0, 1.0].view()).unwrap();
/// assert_eq!(output.len(), 1);
/// ```
pub mod neural_network;

/// Prelude module re-exporting the types most callers need.
pub mod prelude;
