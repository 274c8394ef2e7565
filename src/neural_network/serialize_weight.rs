use crate::error::{IoError, ModelError};
use crate::neural_network::{Activation, Matrix, Network, WeightStore};
use crate::{Deserialize, Serialize};
use log::{debug, warn};
use ndarray::Array2;
use serde_json::{from_reader, to_writer_pretty};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Serializable representation of a network's weights.
///
/// # Fields
///
/// - `layer_sizes` - Topology the weights belong to
/// - `activation` - Activation of the network that produced the weights
/// - `transitions` - Every transition matrix in index order, stored row by row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableWeightStore {
    pub layer_sizes: Vec<usize>,
    pub activation: Activation,
    pub transitions: Vec<Vec<Vec<f32>>>,
}

impl SerializableWeightStore {
    /// Copies the weights of `store` into an owned serializable form.
    pub fn from_weight_store(store: &WeightStore, activation: Activation) -> Self {
        Self {
            layer_sizes: store.layer_sizes(),
            activation,
            transitions: store
                .get_all()
                .iter()
                .map(|m| m.outer_iter().map(|row| row.to_vec()).collect())
                .collect(),
        }
    }

    /// Rebuilds the transition matrices, failing on ragged rows.
    pub fn to_matrices(&self) -> Result<Vec<Matrix>, IoError> {
        self.transitions.iter().map(|t| vec2_to_array2(t)).collect()
    }
}

fn vec2_to_array2(vec: &[Vec<f32>]) -> Result<Array2<f32>, IoError> {
    let rows = vec.len();
    let cols = if rows > 0 { vec[0].len() } else { 0 };
    if vec.iter().any(|row| row.len() != cols) {
        return Err(IoError::StdIoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "matrix rows have different lengths",
        )));
    }
    let flat: Vec<f32> = vec.iter().flat_map(|row| row.iter().cloned()).collect();
    Array2::from_shape_vec((rows, cols), flat).map_err(|e| {
        IoError::StdIoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

impl Network {
    /// Saves the network's weights to a JSON file at the specified path.
    ///
    /// # Parameters
    ///
    /// * `path` - File path where the weights will be saved (e.g., "weights.json")
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Weights successfully saved to file
    /// - `Err(IoError::StdIoError)` - File creation or write operation failed
    /// - `Err(IoError::JsonError)` - Serialization to JSON failed
    pub fn save_to_path(&self, path: &str) -> Result<(), IoError> {
        let serializable = SerializableWeightStore::from_weight_store(self.weights(), self.activation());

        let file = File::create(path).map_err(IoError::StdIoError)?;
        let mut writer = BufWriter::new(file);
        to_writer_pretty(&mut writer, &serializable).map_err(IoError::JsonError)?;
        writer.flush().map_err(IoError::StdIoError)?;

        debug!("saved {} transitions to {}", serializable.transitions.len(), path);
        Ok(())
    }

    /// Loads weights from a JSON file previously written by `save_to_path`.
    ///
    /// The file must describe the same topology as this network. Every matrix is checked
    /// before any is replaced, so on error the network keeps its current weights.
    ///
    /// # Parameters
    ///
    /// * `path` - File path from which to load the weights
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Weights loaded
    /// - `Err(IoError::StdIoError)` - File not found, read failed, or a matrix has ragged rows
    /// - `Err(IoError::JsonError)` - Deserialization from JSON failed
    /// - `Err(IoError::WeightError)` - Topology, transition count or a matrix shape does not match this network
    pub fn load_from_path(&mut self, path: &str) -> Result<(), IoError> {
        let reader = IoError::load_in_buf_reader(path)?;
        let serializable: SerializableWeightStore =
            from_reader(reader).map_err(IoError::JsonError)?;

        let expected_sizes = self.weights().layer_sizes();
        if serializable.layer_sizes != expected_sizes {
            return Err(IoError::WeightError(ModelError::DimensionMismatchError(format!(
                "layer sizes {:?} in file don't correspond to network layer sizes {:?}",
                serializable.layer_sizes, expected_sizes
            ))));
        }
        if serializable.activation != self.activation() {
            warn!(
                "weights in {} were trained with {} activation, network uses {}",
                path,
                serializable.activation.name(),
                self.activation().name()
            );
        }

        let matrices = serializable.to_matrices()?;
        if matrices.len() != self.weights().len() {
            return Err(IoError::WeightError(ModelError::DimensionMismatchError(format!(
                "transition count mismatch: network has {} transitions, file has {}",
                self.weights().len(),
                matrices.len()
            ))));
        }
        for (i, matrix) in matrices.iter().enumerate() {
            self.weights().check_replacement(i, matrix)?;
        }

        for (i, matrix) in matrices.into_iter().enumerate() {
            self.replace_weights(i, matrix)?;
        }

        debug!("loaded {} transitions from {}", self.weights().len(), path);
        Ok(())
    }
}
