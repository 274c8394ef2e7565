use super::*;

#[test]
fn new_requires_two_layers_test() {
    assert!(matches!(
        WeightStore::new(&[]),
        Err(ModelError::ConfigurationError(_))
    ));
    assert!(matches!(
        WeightStore::new(&[3]),
        Err(ModelError::ConfigurationError(_))
    ));
    assert!(matches!(
        WeightStore::new(&[3, 0, 1]),
        Err(ModelError::ConfigurationError(_))
    ));
}

#[test]
fn transition_shapes_test() {
    let store = WeightStore::new(&[3, 5, 2, 1]).unwrap();

    assert_eq!(store.len(), 4);
    assert_eq!(store.get(0).unwrap().dim(), (3, 3));
    assert_eq!(store.get(1).unwrap().dim(), (3, 5));
    assert_eq!(store.get(2).unwrap().dim(), (5, 2));
    assert_eq!(store.get(3).unwrap().dim(), (2, 1));

    assert_eq!(store.layer_sizes(), vec![3, 5, 2, 1]);
    assert_eq!(store.param_count(), 9 + 15 + 10 + 2);
}

#[test]
fn get_all_is_in_index_order_test() {
    let store = seeded_store(&[2, 4, 3, 1], 5);
    let all = store.get_all();

    assert_eq!(all.len(), 4);
    for (i, matrix) in all.iter().enumerate() {
        assert_eq!(matrix, store.get(i).unwrap());
    }
}

#[test]
fn fill_random_first_transition_is_ones_test() {
    for sizes in [vec![1, 1], vec![2, 4, 1], vec![7, 3], vec![16, 8, 8, 2]] {
        let store = seeded_store(&sizes, 11);
        let first = store.get(0).unwrap();

        assert_eq!(first.nrows(), first.ncols());
        assert_eq!(first.nrows(), sizes[0]);
        assert!(first.iter().all(|&w| w == 1.0));
    }
}

#[test]
fn fill_random_bounds_test() {
    for seed in 0..20 {
        let store = seeded_store(&[6, 10, 8, 3], seed);

        for matrix in store.get_all().iter().skip(1) {
            assert!(
                matrix
                    .iter()
                    .all(|&w| (INIT_WEIGHT_LOW..=INIT_WEIGHT_HIGH).contains(&w))
            );
        }
    }
}

#[test]
fn fill_random_is_reproducible_test() {
    let a = seeded_store(&[4, 6, 2], 42);
    let b = seeded_store(&[4, 6, 2], 42);
    let c = seeded_store(&[4, 6, 2], 43);

    assert_eq!(a, b);
    assert_ne!(a.get(1).unwrap(), c.get(1).unwrap());
}

#[test]
fn fill_random_transitions_are_not_correlated_test() {
    // equally shaped transitions must not receive the same sequence
    let store = seeded_store(&[5, 5, 5, 5], 9);

    assert_ne!(store.get(1).unwrap(), store.get(2).unwrap());
    assert_ne!(store.get(2).unwrap(), store.get(3).unwrap());
}

#[test]
fn replace_test() {
    let mut store = seeded_store(&[2, 3, 1], 1);
    let matrix = array![[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]];

    store.replace(1, matrix.clone()).unwrap();

    assert_eq!(store.get(1).unwrap(), &matrix);
}

#[test]
fn replace_shape_mismatch_leaves_matrix_unchanged_test() {
    let mut store = seeded_store(&[2, 3, 1], 1);
    let before = store.get(1).unwrap().clone();

    let result = store.replace(1, Array2::zeros((3, 2)));
    assert!(matches!(result, Err(ModelError::DimensionMismatchError(_))));
    assert_eq!(store.get(1).unwrap(), &before);

    let result = store.replace(1, Array2::zeros((2, 4)));
    assert!(matches!(result, Err(ModelError::DimensionMismatchError(_))));
    assert_eq!(store.get(1).unwrap(), &before);
}

#[test]
fn unknown_transition_test() {
    let mut store = seeded_store(&[2, 3, 1], 1);

    assert!(matches!(store.get(3), Err(ModelError::RangeError(_))));
    assert!(matches!(
        store.replace(3, Array2::zeros((3, 1))),
        Err(ModelError::RangeError(_))
    ));
}
