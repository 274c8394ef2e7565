/// Module that contains the activation function implementations
pub mod activation;
/// Module that contains the forward and backward numeric routines
pub mod computation;
/// Module that contains validators shared by the network and its configuration
pub mod input_validation_function;
/// Module that contains the layer descriptor
pub mod layer;
/// Module that contains the network façade and its configuration
pub mod network;
/// Module that contains the JSON representation of network weights
pub mod serialize_weight;
/// Module that contains the per-transition weight storage
pub mod weight_store;

pub use activation::*;
pub use layer::*;
pub use network::*;
pub use serialize_weight::*;
pub use weight_store::*;

use ndarray::{Array1, Array2};

/// Type alias for the flat vectors flowing between layers
pub type Vector = Array1<f32>;

/// Type alias for a transition's weight matrix with shape (input_dim, output_dim)
pub type Matrix = Array2<f32>;
