use super::{apply_function, multiply, squared_errors};
use crate::error::ModelError;
use crate::neural_network::input_validation_function::{validate_epsilon, validate_vector_length};
use crate::neural_network::{Activation, Matrix, Vector};
use log::trace;
use ndarray::{ArrayView1, Axis, Zip};
use rayon::prelude::*;

/// One error-correction iteration over all transitions.
///
/// Runs a forward sweep that keeps every pre-activation vector `z[i]`, reports the squared
/// error between `ideal` and `apply(z[last])`, then walks the transitions from last down to 1:
/// each transition's weights are updated in place with `update_weights`, and the delta is
/// propagated to the previous layer with `hidden_sigma` using the freshly updated matrix.
/// Transition 0 is never updated.
///
/// # Parameters
///
/// - `epsilon` - Learning coefficient, positive and finite
/// - `vector` - Input vector of length `matrices[0].nrows()`
/// - `matrices` - Transitions in forward order; mutated in place
/// - `ideal` - Target vector, already passed through `activation.apply`
/// - `activation` - Activation shared by every layer
///
/// # Returns
///
/// - `Ok(Vector)` - Squared error per output neuron, measured before the update
/// - `Err(ModelError::ConfigurationError)` - If `epsilon` is not positive and finite, or there are no transitions
/// - `Err(ModelError::DimensionMismatchError)` - If `vector` or `ideal` has the wrong length; no weight is modified
pub fn correct_weights(
    epsilon: f32,
    vector: ArrayView1<f32>,
    matrices: &mut [Matrix],
    ideal: ArrayView1<f32>,
    activation: Activation,
) -> Result<Vector, ModelError> {
    validate_epsilon(epsilon)?;
    let last = match matrices.len() {
        0 => {
            return Err(ModelError::ConfigurationError(String::from(
                "no transitions to correct",
            )));
        }
        n => n - 1,
    };
    validate_vector_length(
        ideal,
        matrices[last].ncols(),
        "ideal",
        "output layer size",
    )?;

    // forward pass
    let mut pre_activations: Vec<Vector> = Vec::with_capacity(matrices.len());
    let mut current = vector.to_owned();
    for matrix in matrices.iter() {
        let z = multiply(current.view(), matrix, Activation::Linear)?;
        current = apply_function(z.view(), activation);
        pre_activations.push(z);
    }

    let errors = squared_errors(ideal, current.view())?;
    let mut sigma = output_sigma(ideal, pre_activations[last].view(), activation)?;

    for i in (1..=last).rev() {
        update_weights(
            &mut matrices[i],
            pre_activations[i].view(),
            sigma.view(),
            activation,
            epsilon,
        )?;
        sigma = hidden_sigma(
            pre_activations[i - 1].view(),
            &matrices[i],
            sigma.view(),
            activation,
        )?;
    }

    trace!("correction step done, errors={:?}", errors.as_slice());
    Ok(errors)
}

/// Output-layer delta `(ideal[y] - apply(z[y])) * derivative(z[y])`.
///
/// # Returns
///
/// - `Ok(Vector)` - Delta of the output layer
/// - `Err(ModelError::DimensionMismatchError)` - If `ideal` and `z_last` differ in length
pub fn output_sigma(
    ideal: ArrayView1<f32>,
    z_last: ArrayView1<f32>,
    activation: Activation,
) -> Result<Vector, ModelError> {
    validate_vector_length(z_last, ideal.len(), "pre-activation output", "ideal length")?;

    let mut sigma = Vector::zeros(z_last.len());
    Zip::from(&mut sigma)
        .and(ideal)
        .and(z_last)
        .par_for_each(|out, &ideal, &z| {
            *out = (ideal - activation.apply(z)) * activation.derivative(z);
        });

    Ok(sigma)
}

/// Adds `(apply(z[y]) * sigma[y]) * epsilon` to every cell of column `y`.
///
/// Work is split over output indices `y` only: each unit owns one column and walks its
/// input indices `x` sequentially, so no two units ever write the same cell.
///
/// # Parameters
///
/// - `matrix` - Transition matrix with shape (input_dim, output_dim); updated in place
/// - `z` - Pre-activation vector of the transition's output layer, length `output_dim`
/// - `sigma` - Delta of the transition's output layer, length `output_dim`
/// - `activation` - Activation shared by every layer
/// - `epsilon` - Learning coefficient
///
/// # Returns
///
/// - `Ok(())` - The matrix was updated
/// - `Err(ModelError::DimensionMismatchError)` - If `z` or `sigma` does not match `output_dim`; the matrix is untouched
pub fn update_weights(
    matrix: &mut Matrix,
    z: ArrayView1<f32>,
    sigma: ArrayView1<f32>,
    activation: Activation,
    epsilon: f32,
) -> Result<(), ModelError> {
    let y_len = matrix.ncols();
    validate_vector_length(z, y_len, "pre-activation", "matrix output dimension")?;
    validate_vector_length(sigma, y_len, "sigma", "matrix output dimension")?;

    matrix
        .axis_iter_mut(Axis(1))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut column)| {
            let grad = activation.apply(z[y]) * sigma[y];
            for weight in column.iter_mut() {
                *weight += grad * epsilon;
            }
        });

    Ok(())
}

/// Propagates a delta back through one transition.
///
/// For each input index `x`: `(sum over y of matrix[x, y] * sigma[y]) * derivative(z_prev[x])`.
/// Input indices are independent and computed in parallel; the sum over `y` is sequential.
///
/// # Parameters
///
/// - `z_prev` - Pre-activation vector of the transition's input layer, length `input_dim`
/// - `matrix` - Transition matrix with shape (input_dim, output_dim)
/// - `sigma` - Delta of the transition's output layer, length `output_dim`
/// - `activation` - Activation shared by every layer
///
/// # Returns
///
/// - `Ok(Vector)` - Delta of the transition's input layer
/// - `Err(ModelError::DimensionMismatchError)` - If `z_prev` or `sigma` does not match the matrix
pub fn hidden_sigma(
    z_prev: ArrayView1<f32>,
    matrix: &Matrix,
    sigma: ArrayView1<f32>,
    activation: Activation,
) -> Result<Vector, ModelError> {
    let (x_len, y_len) = matrix.dim();
    validate_vector_length(z_prev, x_len, "pre-activation", "matrix input dimension")?;
    validate_vector_length(sigma, y_len, "sigma", "matrix output dimension")?;

    let mut result = Vector::zeros(x_len);
    Zip::indexed(&mut result).par_for_each(|x, out| {
        let mut sigma_sum = 0.0;
        for y in 0..y_len {
            sigma_sum += matrix[[x, y]] * sigma[y];
        }
        *out = sigma_sum * activation.derivative(z_prev[x]);
    });

    Ok(result)
}
