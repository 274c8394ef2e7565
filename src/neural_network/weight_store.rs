use crate::error::ModelError;
use crate::neural_network::Matrix;
use crate::neural_network::input_validation_function::validate_layer_sizes;
use log::debug;
use ndarray::Array2;
use ndarray_rand::RandomExt;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::{Rng, SeedableRng};
use ndarray_rand::rand_distr::Uniform;
use rayon::prelude::*;

/// Lower bound of the initial weights of transitions 1..N-1
pub const INIT_WEIGHT_LOW: f32 = -3.0;
/// Upper bound of the initial weights of transitions 1..N-1
pub const INIT_WEIGHT_HIGH: f32 = 3.0;

/// Owner of every transition matrix of one network.
///
/// Transition `0` maps the raw input onto the input layer and is a square matrix of size
/// `layer_sizes[0]` whose cells are all 1.0. Transition `i >= 1` maps the output of layer
/// `i - 1` to layer `i` and has shape `(layer_sizes[i - 1], layer_sizes[i])`.
///
/// Matrices are kept in a vector indexed by transition, so `get_all` yields them in forward
/// order.
///
/// # Example
/// ```rust
/// use feedforward_net::neural_network::WeightStore;
///
/// let mut store = WeightStore::new(&[2, 4, 1]).unwrap();
/// store.fill_random(7);
///
/// assert_eq!(store.get(0).unwrap().dim(), (2, 2));
/// assert_eq!(store.get(1).unwrap().dim(), (2, 4));
/// assert_eq!(store.get(2).unwrap().dim(), (4, 1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightStore {
    transitions: Vec<Matrix>,
}

impl WeightStore {
    /// Allocates zero-filled transitions for the given topology.
    ///
    /// # Parameters
    ///
    /// * `layer_sizes` - Neuron count of every layer, input layer first
    ///
    /// # Returns
    ///
    /// - `Ok(WeightStore)` - Store with `layer_sizes.len()` transitions
    /// - `Err(ModelError::ConfigurationError)` - If fewer than two sizes are given or a size is zero
    pub fn new(layer_sizes: &[usize]) -> Result<Self, ModelError> {
        validate_layer_sizes(layer_sizes)?;

        let mut transitions = Vec::with_capacity(layer_sizes.len());
        // input for the first layer map is its own output
        transitions.push(Array2::zeros((layer_sizes[0], layer_sizes[0])));
        for pair in layer_sizes.windows(2) {
            transitions.push(Array2::zeros((pair[0], pair[1])));
        }

        Ok(Self { transitions })
    }

    /// Populates every transition from `seed`.
    ///
    /// Transition 0 is set to 1.0 in every cell. Every other transition receives independent
    /// uniform samples in `[INIT_WEIGHT_LOW, INIT_WEIGHT_HIGH]`. Transitions are filled in
    /// parallel; each one uses its own generator, seeded from a per-transition seed drawn in
    /// order from a master generator, so the result depends only on `seed`.
    ///
    /// # Parameters
    ///
    /// * `seed` - Master seed
    pub fn fill_random(&mut self, seed: u64) {
        let mut master = StdRng::seed_from_u64(seed);
        let seeds: Vec<u64> = (0..self.transitions.len()).map(|_| master.r#gen()).collect();
        let distribution = Uniform::new_inclusive(INIT_WEIGHT_LOW, INIT_WEIGHT_HIGH);

        self.transitions
            .par_iter_mut()
            .zip(seeds.par_iter())
            .enumerate()
            .for_each(|(i, (matrix, &transition_seed))| {
                if i == 0 {
                    matrix.fill(1.0);
                } else {
                    let mut rng = StdRng::seed_from_u64(transition_seed);
                    *matrix = Array2::random_using(matrix.dim(), distribution, &mut rng);
                }
            });

        debug!(
            "filled {} transitions from seed {}",
            self.transitions.len(),
            seed
        );
    }

    /// Replaces the matrix of one transition.
    ///
    /// # Parameters
    ///
    /// - `index` - Transition index
    /// - `matrix` - New matrix; must have exactly the shape of the current one
    ///
    /// # Returns
    ///
    /// - `Ok(())` - The matrix was swapped in
    /// - `Err(ModelError::RangeError)` - If there is no transition `index`
    /// - `Err(ModelError::DimensionMismatchError)` - If the shapes differ; the stored matrix is left as it was
    pub fn replace(&mut self, index: usize, matrix: Matrix) -> Result<(), ModelError> {
        self.check_replacement(index, &matrix)?;
        self.transitions[index] = matrix;
        Ok(())
    }

    /// Checks that `matrix` could replace transition `index` without modifying the store.
    pub fn check_replacement(&self, index: usize, matrix: &Matrix) -> Result<(), ModelError> {
        let current = self.get(index)?;
        if current.dim() != matrix.dim() {
            return Err(ModelError::DimensionMismatchError(format!(
                "new matrix for transition {} has shape {:?}, doesn't correspond to existing one {:?}",
                index,
                matrix.dim(),
                current.dim()
            )));
        }
        Ok(())
    }

    /// Returns the matrix of transition `index`, or `ModelError::RangeError` if it does not exist
    pub fn get(&self, index: usize) -> Result<&Matrix, ModelError> {
        self.transitions.get(index).ok_or_else(|| {
            ModelError::RangeError(format!(
                "there is no transition {} in the store (it holds {})",
                index,
                self.transitions.len()
            ))
        })
    }

    /// All transitions in forward order 0..N-1
    pub fn get_all(&self) -> &[Matrix] {
        &self.transitions
    }

    pub(crate) fn get_all_mut(&mut self) -> &mut [Matrix] {
        &mut self.transitions
    }

    /// Number of transitions (equal to the number of layers)
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Recovers the layer sizes the store was built for
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.transitions.iter().map(|m| m.ncols()).collect()
    }

    /// Total number of coefficients across all transitions
    pub fn param_count(&self) -> usize {
        self.transitions.iter().map(|m| m.len()).sum()
    }
}
