//! Integration tests for the step loop and conditional jumps

use parensor_engine::{BufferedIo, Cursor, Direction, Engine, EngineConfig, StepOutcome};
use parensor_foundation::{Cell, Coordinates, ErrorKind, ExecutionLimit};
use parensor_language::parse_program;

use crate::{engine, set_data};

// =============================================================================
// Fixed Points
// =============================================================================

#[test]
fn step_reports_continue_then_halted() {
    let mut e = engine("3 5 ( 0 )");
    let mut io = BufferedIo::new();
    assert_eq!(e.step(&mut io).unwrap(), StepOutcome::Continue);
    assert_eq!(e.step(&mut io).unwrap(), StepOutcome::Halted);
    assert_eq!(e.steps(), 2);
}

#[test]
fn close_marker_under_cursor_is_a_no_op() {
    let mut e = engine(") 5 ( 0 )");
    let summary = e.run(&mut BufferedIo::new()).unwrap();
    assert_eq!(summary.steps, 2);
    assert_eq!(e.instruction_cursor().cell_index, Coordinates::from(1));
}

#[test]
fn open_marker_under_cursor_skips_its_group() {
    let mut e = engine("( 0 3 ( 0 ) ) 5 ( 0 )");
    let mut io = BufferedIo::new();
    e.run(&mut io).unwrap();

    assert!(io.outputs().is_empty());
    assert_eq!(e.data_cell(), Cell::Integer(0));
    assert_eq!(e.instruction_cursor().cell_index, Coordinates::from(7));
}

#[test]
fn operand_group_may_wrap_around_the_row() {
    let mut e = engine("0 ) 5 (");
    let mut io = BufferedIo::new();
    e.run(&mut io).unwrap();

    assert_eq!(io.rendered(), "0 ");
    assert_eq!(e.direction(), &[Direction::Neutral]);
}

#[test]
fn decremental_direction_walks_backwards() {
    let mut e = engine("0 3 3");
    e.set_direction(vec![Direction::Decremental]);
    let mut io = BufferedIo::new();

    e.step(&mut io).unwrap();
    assert_eq!(e.instruction_cursor().cell_index, Coordinates::from(2));
    e.step(&mut io).unwrap();
    e.step(&mut io).unwrap();
    assert_eq!(e.instruction_cursor().cell_index, Coordinates::from(0));
    e.step(&mut io).unwrap();
    assert_eq!(io.rendered(), "0 2 ");
}

#[test]
fn vertical_walk_down_a_column() {
    let program = "5 ( 0 1 )\n3\n3\n0\n5\n(\n0\n)";
    let mut e = engine(program);
    let mut io = BufferedIo::new();
    let summary = e.run(&mut io).unwrap();

    assert_eq!(io.rendered(), "2 ");
    assert_eq!(summary.steps, 5);
    assert_eq!(e.instruction_cursor().cell_index, Coordinates::from([0, 4]));
}

// =============================================================================
// Conditional Jumps
// =============================================================================

#[test]
fn taken_jump_runs_target_before_advancing() {
    let mut e = engine("7 ( 4 ) 3 5 ( 0 )");
    let mut io = BufferedIo::new();

    e.step(&mut io).unwrap();
    assert_eq!(e.data_cell(), Cell::Integer(1));
    assert_eq!(e.instruction_cursor().cell_index, Coordinates::from(5));
}

#[test]
fn jump_not_taken_on_marker() {
    let mut e = engine("8 7 ( 4 ) 5 ( 0 )");
    e.run(&mut BufferedIo::new()).unwrap();
    assert_eq!(e.data_cell(), Cell::OpenGroup);
    assert_eq!(e.instruction_cursor().cell_index, Coordinates::from(5));
}

#[test]
fn countdown_loop() {
    let mut e = engine("0 4 7 ( 0 1 )\n5 ( 0 )");
    set_data(&mut e, Cell::Integer(3));
    let mut io = BufferedIo::new();
    e.run(&mut io).unwrap();

    assert_eq!(io.rendered(), "3 2 1 ");
    assert_eq!(e.instruction_cursor().cell_index, Coordinates::from([0, 1]));
}

#[test]
fn long_jump_chain_runs_in_one_step() {
    const ROWS: usize = 1000;
    let mut program: String = (1..=ROWS).map(|next| format!("7 ( 0 {next} )\n")).collect();
    program.push_str("5 ( 0 )");

    let mut e = engine(&program);
    let mut io = BufferedIo::new();

    assert_eq!(e.step(&mut io).unwrap(), StepOutcome::Continue);
    assert_eq!(e.instructions(), ROWS as u64 + 1);
    assert_eq!(e.direction(), &[Direction::Neutral]);
    assert_eq!(e.step(&mut io).unwrap(), StepOutcome::Halted);
}

#[test]
fn self_jump_is_stopped_by_limit() {
    let mut e = Engine::new(parse_program("7 ( 0 )").unwrap())
        .with_config(EngineConfig::new().with_max_steps(100_000));
    let err = e.run(&mut BufferedIo::new()).unwrap_err();

    assert!(matches!(
        err.kind,
        ErrorKind::LimitExceeded(ExecutionLimit::MaxSteps { limit: 100_000 })
    ));
    assert_eq!(e.instructions(), 100_000);
}

#[test]
fn endless_walk_is_stopped_by_limit() {
    let mut e = Engine::new(parse_program("3 3 3").unwrap())
        .with_config(EngineConfig::new().with_max_steps(30));
    assert!(e.run(&mut BufferedIo::new()).is_err());
    assert_eq!(e.steps(), 30);
    assert_eq!(e.data_cell(), Cell::Integer(30));
}

// =============================================================================
// Layers
// =============================================================================

#[test]
fn switching_to_an_empty_layer_runs_its_zero_cell() {
    let mut e = engine("10 ( 1 )");
    let mut io = BufferedIo::new();
    let summary = e.run(&mut io).unwrap();

    assert_eq!(io.rendered(), "0 ");
    assert_eq!(summary.steps, 2);
    assert_eq!(e.instruction_cursor(), &Cursor::new(0, 1));
}

#[test]
fn program_writes_then_runs_another_layer() {
    let mut e = engine("2 ( 2 ) 3 3 3 10 ( 2 )");
    e.run(&mut BufferedIo::new()).unwrap();

    assert_eq!(e.instruction_cursor(), &Cursor::new(0, 2));
    assert_eq!(e.data_cell(), Cell::Integer(4));
}

#[test]
fn program_rewrites_an_upcoming_instruction() {
    let mut e = engine("2 ( 0 ) 1 ( 10 ) 3 0 4 ( 0 )");
    let mut io = BufferedIo::new();
    e.run(&mut io).unwrap();

    assert_eq!(io.rendered(), "5 ");
    assert_eq!(e.direction(), &[Direction::Neutral]);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn structured_opcode_needs_following_group() {
    let mut e = engine("1 2");
    let err = e.run(&mut BufferedIo::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingOpenGroup { ref at } if *at == Coordinates::from(1)));
    assert!(err.context.is_some());
}

#[test]
fn unbalanced_group_fails_execution() {
    let mut e = engine("1 ( 2");
    let err = e.run(&mut BufferedIo::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnmatchedGroup { ref opening } if *opening == Coordinates::from(1)));
}

#[test]
fn unbalanced_group_under_cursor_fails() {
    let mut e = engine("( 3");
    assert!(e.run(&mut BufferedIo::new()).is_err());
}

#[test]
fn effects_before_failure_are_kept() {
    let mut e = engine("3 3 0 1 2");
    let mut io = BufferedIo::new();
    assert!(e.run(&mut io).is_err());

    assert_eq!(e.data_cell(), Cell::Integer(2));
    assert_eq!(io.rendered(), "2 ");
    assert_eq!(e.steps(), 3);
}
