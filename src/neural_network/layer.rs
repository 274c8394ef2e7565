use crate::{Deserialize, Serialize};

/// Describes one layer of a network by its neuron count.
///
/// Layers carry no behavior; the transitions between them live in the `WeightStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    neurons: usize,
}

impl Layer {
    /// Creates a layer descriptor with `neurons` neurons
    pub fn new(neurons: usize) -> Self {
        Self { neurons }
    }

    /// Number of neurons in the layer
    pub fn neurons(&self) -> usize {
        self.neurons
    }
}

impl From<usize> for Layer {
    fn from(neurons: usize) -> Self {
        Self::new(neurons)
    }
}

/// Converts a slice of layer descriptors to plain sizes.
pub fn layer_sizes(layers: &[Layer]) -> Vec<usize> {
    layers.iter().map(Layer::neurons).collect()
}
