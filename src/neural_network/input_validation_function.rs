use crate::error::ModelError;
use ndarray::ArrayView1;

/// Validates a network topology.
///
/// # Parameters
///
/// * `layer_sizes` - Neuron count of every layer, input layer first
///
/// # Returns
///
/// - `Ok(())` if there are at least two layers and none of them is empty
/// - `Err(ModelError::ConfigurationError)` otherwise
pub(crate) fn validate_layer_sizes(layer_sizes: &[usize]) -> Result<(), ModelError> {
    if layer_sizes.len() < 2 {
        return Err(ModelError::ConfigurationError(format!(
            "count of layers should be not less than two, got {}",
            layer_sizes.len()
        )));
    }
    if let Some(index) = layer_sizes.iter().position(|&size| size == 0) {
        return Err(ModelError::ConfigurationError(format!(
            "layer {} has no neurons",
            index
        )));
    }
    Ok(())
}

/// Validates that the learning coefficient is positive and finite.
///
/// # Parameters
///
/// * `epsilon` - The learning coefficient to validate
///
/// # Returns
///
/// - `Ok(())` if epsilon is positive and finite
/// - `Err(ModelError::ConfigurationError)` if epsilon is not positive or not finite
pub(crate) fn validate_epsilon(epsilon: f32) -> Result<(), ModelError> {
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(ModelError::ConfigurationError(format!(
            "epsilon must be positive and finite, got {}",
            epsilon
        )));
    }
    Ok(())
}

/// Validates that a vector has the length an operation expects.
///
/// # Parameters
///
/// - `vector` - The vector to check
/// - `expected` - Required length
/// - `operand` - Name of the vector, used in the error message
/// - `context` - Description of what the length is expected to match
///
/// # Returns
///
/// - `Ok(())` if the length matches
/// - `Err(ModelError::DimensionMismatchError)` naming the operand and both sizes
pub(crate) fn validate_vector_length(
    vector: ArrayView1<f32>,
    expected: usize,
    operand: &str,
    context: &str,
) -> Result<(), ModelError> {
    if vector.len() != expected {
        return Err(ModelError::DimensionMismatchError(format!(
            "{} length {} doesn't correspond to {} ({})",
            operand,
            vector.len(),
            context,
            expected
        )));
    }
    Ok(())
}
