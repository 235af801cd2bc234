use dimx_matrix::{natural_order, DimensionalMatrix, ErrorKind, MatrixConfig, MatrixError};

fn two_by_two() -> DimensionalMatrix<&'static str, i32> {
    let mut m = DimensionalMatrix::new(2).unwrap();
    m.set_value(Some(10), &["a", "x"]).unwrap();
    m.set_value(Some(20), &["a", "y"]).unwrap();
    m.set_value(Some(30), &["b", "x"]).unwrap();
    m
}

#[test]
fn unsorted_two_dimensional_scenario() {
    let m = two_by_two();
    assert_eq!(m.get_by_key(&["a", "x"]).unwrap(), Some(&10));
    assert_eq!(m.get_by_key(&["b", "y"]).unwrap(), None);
    assert_eq!(m.keys_of(0).unwrap().to_vec(), vec!["a", "b"]);
    assert_eq!(m.keys_of(1).unwrap().to_vec(), vec!["x", "y"]);

    let rendered: Vec<String> = m.combinations().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["[a, x] 10", "[a, y] 20", "[b, x] 30", "[b, y] -"]
    );
}

#[test]
fn removal_leaves_registry_stale() {
    let mut m = two_by_two();
    m.remove_value(&["a", "x"]).unwrap();
    assert_eq!(m.get_by_key(&["a", "x"]).unwrap(), None);
    assert_eq!(m.key_count(0).unwrap(), 2);
    assert!(m.keys_of(0).unwrap().iter().any(|k| *k == "a"));

    // The emptied tuple is still enumerated, now without a value.
    let combos = m.combinations();
    assert_eq!(combos.len(), 4);
    assert_eq!(combos[0].keys(), &["a", "x"]);
    assert_eq!(combos[0].value(), None);
}

#[test]
fn removing_every_value_keeps_all_keys() {
    let mut m = two_by_two();
    for keys in [["a", "x"], ["a", "y"], ["b", "x"]] {
        assert!(m.remove_value(&keys).unwrap().is_some());
    }
    assert!(m.is_empty());
    assert_eq!(m.key_count(0).unwrap(), 2);
    assert_eq!(m.key_count(1).unwrap(), 2);
    assert!(m.combinations().iter().all(|c| !c.is_populated()));
}

#[test]
fn clear_then_reuse() {
    let mut m = two_by_two();
    m.clear();
    assert_eq!(m.dimension_count(), 2);
    assert!(!m.is_sorted());
    assert!(m.combinations().is_empty());

    m.set_value(Some(5), &["z", "w"]).unwrap();
    assert_eq!(m.keys_of(0).unwrap().to_vec(), vec!["z"]);
    assert_eq!(m.get_by_index(&[0, 0]).unwrap(), Some(&5));
}

#[test]
fn sorted_three_dimensional_matrix() {
    let mut m: DimensionalMatrix<u32, String> =
        DimensionalMatrix::with_comparator(3, natural_order()).unwrap();
    m.set_value(Some("far".into()), &[9, 9, 9]).unwrap();
    m.set_value(Some("origin".into()), &[0, 0, 0]).unwrap();
    m.set_value(Some("mid".into()), &[4, 0, 9]).unwrap();

    assert_eq!(m.keys_of(0).unwrap().to_vec(), vec![0, 4, 9]);
    assert_eq!(m.keys_of(2).unwrap().to_vec(), vec![0, 9]);
    assert_eq!(m.combination_count(), 3 * 2 * 2);

    let combos = m.combinations();
    let first = &combos[0];
    assert_eq!(first.keys(), &[0, 0, 0]);
    assert_eq!(first.value().map(String::as_str), Some("origin"));

    let idx: Vec<usize> = [4u32, 0, 9]
        .iter()
        .enumerate()
        .map(|(d, k)| m.index_of(d, k).unwrap().unwrap())
        .collect();
    assert_eq!(idx, vec![1, 0, 1]);
    assert_eq!(m.get_by_index(&idx).unwrap().map(String::as_str), Some("mid"));
}

#[test]
fn combinations_iterate_row_major() {
    let mut m: DimensionalMatrix<char, usize> = DimensionalMatrix::new(3).unwrap();
    m.set_value(Some(1), &['a', 'p', 'x']).unwrap();
    m.set_value(Some(2), &['b', 'q', 'y']).unwrap();

    let tuples: Vec<String> = m
        .combinations()
        .iter()
        .map(|c| c.keys().iter().collect())
        .collect();
    assert_eq!(
        tuples,
        vec!["apx", "apy", "aqx", "aqy", "bpx", "bpy", "bqx", "bqy"]
    );
}

#[test]
fn wide_matrix_spills_key_tuples() {
    let dims = 12;
    let mut m: DimensionalMatrix<usize, usize> = DimensionalMatrix::new(dims).unwrap();
    let keys: Vec<usize> = (0..dims).collect();
    m.set_value(Some(42), &keys).unwrap();

    let combos = m.combinations();
    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0].keys(), keys.as_slice());
    assert_eq!(combos[0].value(), Some(&42));
}

#[test]
fn config_sizing_is_honoured() {
    let config = MatrixConfig::new(2).with_key_capacity(16);
    let mut m: DimensionalMatrix<u16, u16> = DimensionalMatrix::from_config(config, None).unwrap();
    m.set_value(Some(1), &[1, 1]).unwrap();
    assert_eq!(m.len(), 1);

    let err = DimensionalMatrix::<u16, u16>::from_config(MatrixConfig::new(0), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn errors_surface_before_mutation() {
    let mut m = two_by_two();
    let err = m.set_value(Some(1), &["only-one"]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::KeyCountMismatch {
            expected: 2,
            actual: 1
        }
    );
    assert_eq!(m.index_of(0, &"only-one").unwrap(), None);

    let err = m.get_by_index(&[0, 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}
