//! Numeric routines of the network: forward multiplication, elementwise activation,
//! squared error and the backward weight correction (see `backward`).
//!
//! Every routine works on flat `f32` vectors and `(input_dim, output_dim)` matrices and fans
//! out over the global rayon pool. The calling thread blocks until each stage completes.

/// Backward pass: output/hidden deltas and in-place weight update
pub mod backward;

pub use backward::*;

use crate::error::ModelError;
use crate::neural_network::input_validation_function::validate_vector_length;
use crate::neural_network::{Activation, Matrix, Vector};
use ndarray::{ArrayView1, Zip};

/// Multiplies a vector by one transition matrix and applies the activation to every sum.
///
/// For each output index `y`, computes `apply(sum over x of vector[x] * matrix[x, y])`.
/// Output indices are computed in parallel; the reduction over `x` is sequential.
///
/// # Parameters
///
/// - `vector` - Input vector of length `matrix.nrows()`
/// - `matrix` - Transition matrix with shape (input_dim, output_dim)
/// - `activation` - Activation applied to each weighted sum
///
/// # Returns
///
/// - `Ok(Vector)` - Vector of length `matrix.ncols()`
/// - `Err(ModelError::DimensionMismatchError)` - If the vector length differs from the matrix input dimension
pub fn multiply(
    vector: ArrayView1<f32>,
    matrix: &Matrix,
    activation: Activation,
) -> Result<Vector, ModelError> {
    let (x_len, y_len) = matrix.dim();
    validate_vector_length(
        vector,
        x_len,
        "vector",
        &format!("input dimension of matrix [{}, {}]", x_len, y_len),
    )?;

    let mut result = Vector::zeros(y_len);
    Zip::indexed(&mut result).par_for_each(|y, out| {
        let mut sum = 0.0;
        for x in 0..x_len {
            sum += vector[x] * matrix[[x, y]];
        }
        *out = activation.apply(sum);
    });

    Ok(result)
}

/// Runs `multiply` through every transition in index order, feeding each output into the
/// next transition.
///
/// # Parameters
///
/// - `vector` - Input vector of length `matrices[0].nrows()`
/// - `matrices` - Transitions in forward order
/// - `activation` - Activation applied inside each multiplication
///
/// # Returns
///
/// - `Ok(Vector)` - Output of the last transition
/// - `Err(ModelError::DimensionMismatchError)` - If any transition rejects its input
pub fn multiply_chain(
    vector: ArrayView1<f32>,
    matrices: &[Matrix],
    activation: Activation,
) -> Result<Vector, ModelError> {
    let mut current = vector.to_owned();
    for matrix in matrices {
        current = multiply(current.view(), matrix, activation)?;
    }
    Ok(current)
}

/// Applies the activation to every element of `vector` in parallel
pub fn apply_function(vector: ArrayView1<f32>, activation: Activation) -> Vector {
    let mut result = vector.to_owned();
    result.par_mapv_inplace(|x| activation.apply(x));
    result
}

/// Applies the activation's derivative to every element of `vector` in parallel
pub fn apply_derivative(vector: ArrayView1<f32>, activation: Activation) -> Vector {
    let mut result = vector.to_owned();
    result.par_mapv_inplace(|x| activation.derivative(x));
    result
}

/// Applies the activation's antiderivative to every element of `vector` in parallel
pub fn apply_antiderivative(vector: ArrayView1<f32>, activation: Activation) -> Vector {
    let mut result = vector.to_owned();
    result.par_mapv_inplace(|x| activation.antiderivative(x));
    result
}

/// Elementwise squared differences `(a[i] - b[i])^2`.
///
/// The result is not reduced; summing or averaging is left to the caller.
///
/// # Returns
///
/// - `Ok(Vector)` - Squared differences, same length as the inputs
/// - `Err(ModelError::DimensionMismatchError)` - If the vectors differ in length
pub fn squared_errors(a: ArrayView1<f32>, b: ArrayView1<f32>) -> Result<Vector, ModelError> {
    validate_vector_length(b, a.len(), "vector 2", "vector 1 length")?;

    let mut result = Vector::zeros(a.len());
    Zip::from(&mut result)
        .and(a)
        .and(b)
        .par_for_each(|out, &a, &b| {
            let diff = a - b;
            *out = diff * diff;
        });

    Ok(result)
}

/// Network evaluation: the full forward chain followed by the elementwise antiderivative
/// of the last transition's output.
///
/// # Parameters
///
/// - `vector` - Input vector of length `matrices[0].nrows()`
/// - `matrices` - Transitions in forward order
/// - `activation` - Activation shared by every layer
///
/// # Returns
///
/// - `Ok(Vector)` - Network output, length `matrices.last().ncols()`
/// - `Err(ModelError::DimensionMismatchError)` - If the input length is wrong
pub fn evaluate(
    vector: ArrayView1<f32>,
    matrices: &[Matrix],
    activation: Activation,
) -> Result<Vector, ModelError> {
    let output = multiply_chain(vector, matrices, activation)?;
    Ok(apply_antiderivative(output.view(), activation))
}
