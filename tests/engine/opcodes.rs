//! Integration tests for individual opcodes

use parensor_engine::{BufferedIo, Cursor, Direction};
use parensor_foundation::{Cell, Coordinates};

use crate::{engine, set_data};

#[test]
fn output_under_neutral_direction_halts_after_one_step() {
    let mut e = engine("0");
    set_data(&mut e, Cell::Integer(5));
    e.set_direction(vec![Direction::Neutral]);

    let mut io = BufferedIo::new();
    let summary = e.run(&mut io).unwrap();

    assert_eq!(io.rendered(), "5 ");
    assert_eq!(summary.steps, 1);
    assert_eq!(e.instruction_cursor(), &Cursor::instruction_start());
}

#[test]
fn increment_of_open_marker_is_zero_not_one() {
    let mut e = engine("3");
    set_data(&mut e, Cell::OpenGroup);
    e.run(&mut BufferedIo::new()).unwrap();
    assert_eq!(e.data_cell(), Cell::Integer(0));
}

#[test]
fn increment_wraps_at_integer_limit() {
    let mut e = engine("3");
    set_data(&mut e, Cell::Integer(i64::MAX));
    e.run(&mut BufferedIo::new()).unwrap();
    assert_eq!(e.data_cell(), Cell::Integer(i64::MIN));
}

#[test]
fn opcode_values_reduce_modulo_twelve() {
    // 15 is IncrementDataCell and -9 is too.
    let mut e = engine("15 -9 17 ( 0 )");
    e.run(&mut BufferedIo::new()).unwrap();
    assert_eq!(e.data_cell(), Cell::Integer(2));
}

#[test]
fn marker_writes() {
    let mut e = engine("8 0 9 0 5 ( 0 )");
    let mut io = BufferedIo::new();
    e.run(&mut io).unwrap();
    assert_eq!(io.outputs(), &[Cell::OpenGroup, Cell::CloseGroup]);
}

#[test]
fn read_input_into_data_cell() {
    let mut e = engine("6 3 0 5 ( 0 )");
    let mut io = BufferedIo::with_inputs([-8]);
    e.run(&mut io).unwrap();
    assert_eq!(io.rendered(), "-7 ");
    assert_eq!(io.remaining_inputs(), 0);
}

#[test]
fn exhausted_input_reads_zero() {
    let mut e = engine("3 6 0 5 ( 0 )");
    let mut io = BufferedIo::new();
    e.run(&mut io).unwrap();
    assert_eq!(io.rendered(), "0 ");
}

#[test]
fn data_layer_switch_and_move() {
    let mut e = engine("2 ( 0 ) 1 ( 9 ) 0 5 ( 0 )");
    let mut io = BufferedIo::new();
    e.run(&mut io).unwrap();

    assert_eq!(e.data_cursor(), &Cursor::new(9, 0));
    assert_eq!(io.outputs(), &[Cell::Integer(5)]);
}

#[test]
fn data_cursor_move_wraps_against_data_layer() {
    // Layer {0} is 12 cells wide; moving by 13 from {0} lands on {1}.
    let mut e = engine("2 ( 0 ) 1 ( 13 ) 5 ( 0 )");
    e.run(&mut BufferedIo::new()).unwrap();
    assert_eq!(e.data_cursor().cell_index, Coordinates::from(1));
}

#[test]
fn multi_axis_layer_index() {
    let mut e = engine("2 ( 1 1 ) 3 3 3 5 ( 0 )");
    e.run(&mut BufferedIo::new()).unwrap();

    assert_eq!(e.data_cursor().layer_index, Coordinates::from([1, 1]));
    assert_eq!(e.data_cell(), Cell::Integer(3));
    assert!(e.layers().peek(&Coordinates::from(1)).is_none());
}

#[test]
fn direction_operands_reduce_modulo_three() {
    let mut e = engine("5 ( 4 -1 3 )");
    e.step(&mut BufferedIo::new()).unwrap();
    assert_eq!(
        e.direction(),
        &[Direction::Incremental, Direction::Decremental, Direction::Neutral]
    );
}

#[test]
fn empty_direction_group_halts() {
    let mut e = engine("5 ( )");
    let summary = e.run(&mut BufferedIo::new()).unwrap();
    assert!(e.direction().is_empty());
    assert_eq!(summary.steps, 1);
}

#[test]
fn shrink_resets_selected_layer_only() {
    let mut e = engine("3 3 11 ( 1 ) 0 5 ( 0 )");
    let mut io = BufferedIo::new();
    e.run(&mut io).unwrap();

    assert_eq!(io.rendered(), "0 ");
    let layer = e.layers().peek(&Coordinates::from(1)).unwrap();
    assert_eq!(layer.len(), 1);
    assert_eq!(layer.dimensions(), &[1]);
    assert_eq!(e.layers().peek(&Coordinates::origin()).unwrap().dimensions(), &[11]);
}
