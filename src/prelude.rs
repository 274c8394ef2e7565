pub use crate::error::{IoError, ModelError};
pub use crate::neural_network::computation;
pub use crate::neural_network::{
    Activation, Layer, Matrix, Network, NetworkConfig, Vector, WeightStore,
};
