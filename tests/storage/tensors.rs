//! Integration tests for SparseTensor
//!
//! Tests growth of dimension bounds, default materialization, and reset.

use parensor_foundation::{Cell, Coordinates};
use parensor_storage::SparseTensor;

// =============================================================================
// Fresh Tensors
// =============================================================================

#[test]
fn starts_with_one_origin_element() {
    let tensor: SparseTensor<Cell> = SparseTensor::new();
    assert_eq!(tensor.len(), 1);
    assert_eq!(tensor.dimensions(), &[1]);
    assert_eq!(tensor.peek(&Coordinates::origin()), Some(&Cell::Integer(0)));
}

#[test]
fn default_matches_new() {
    assert_eq!(SparseTensor::<Cell>::default(), SparseTensor::new());
}

// =============================================================================
// Growth
// =============================================================================

#[test]
fn write_grows_bounds_without_filling_gaps() {
    let mut tensor = SparseTensor::new();
    tensor.set(&Coordinates::from([5, 2]), Cell::Integer(9));

    assert!(tensor.dimensions()[0] >= 6);
    assert!(tensor.dimensions()[1] >= 3);
    assert_eq!(tensor.len(), 2);
    assert_eq!(tensor.peek(&Coordinates::from([2, 1])), None);
}

#[test]
fn probe_grows_bounds_but_adds_nothing() {
    let mut tensor = SparseTensor::<Cell>::new();
    let handle = tensor.handle_at(&Coordinates::from([0, 0, 4]));

    assert!(handle.is_pending());
    assert_eq!(tensor.dimensions(), &[1, 1, 5]);
    assert_eq!(tensor.len(), 1);
}

#[test]
fn bounds_never_shrink_on_smaller_writes() {
    let mut tensor = SparseTensor::new();
    tensor.set(&Coordinates::from(7), Cell::OpenGroup);
    tensor.set(&Coordinates::from(2), Cell::CloseGroup);
    assert_eq!(tensor.dimensions(), &[8]);
}

#[test]
fn negative_coordinates_keep_bound_at_least_one() {
    let mut tensor = SparseTensor::new();
    tensor.set(&Coordinates::from([-4, -1]), Cell::Integer(1));
    assert_eq!(tensor.dimensions(), &[1, 1]);
    assert_eq!(tensor.peek(&Coordinates::from([-4, -1])), Some(&Cell::Integer(1)));
}

#[test]
fn padded_lookup_finds_same_element() {
    let mut tensor = SparseTensor::new();
    tensor.set(&Coordinates::from(3), Cell::Integer(8));
    assert_eq!(*tensor.get_mut(&Coordinates::from([3, 0, 0])), Cell::Integer(8));
    assert_eq!(tensor.len(), 2);
}

#[test]
fn iter_yields_coordinates_and_values() {
    let mut tensor = SparseTensor::new();
    tensor.set(&Coordinates::from(1), Cell::OpenGroup);

    let found: Vec<_> = tensor.iter().map(|(c, v)| (c.clone(), *v)).collect();
    assert!(found.contains(&(Coordinates::origin(), Cell::Integer(0))));
    assert!(found.contains(&(Coordinates::from(1), Cell::OpenGroup)));
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn reset_restores_fresh_state() {
    let mut tensor = SparseTensor::new();
    tensor.set(&Coordinates::from([5, 5]), Cell::Integer(1));
    tensor.set(&Coordinates::origin(), Cell::Integer(2));
    tensor.reset();

    assert_eq!(tensor.len(), 1);
    assert_eq!(tensor.dimensions(), &[1]);
    assert_eq!(tensor.peek(&Coordinates::origin()), Some(&Cell::Integer(0)));
}

#[test]
fn reset_is_idempotent() {
    let mut tensor = SparseTensor::new();
    tensor.set(&Coordinates::from(4), Cell::Integer(1));
    tensor.reset();
    let once = (tensor.len(), tensor.dimensions().to_vec());
    tensor.reset();

    assert_eq!((tensor.len(), tensor.dimensions().to_vec()), once);
}
