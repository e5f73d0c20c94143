//! The execution engine.
//!
//! An [`Engine`] owns an [`EngineState`] (every layer, both cursors, and the
//! direction vector) and drives it one step at a time. Each step executes
//! the cell under the instruction cursor and then advances that cursor by
//! the direction vector, wrapped against the instruction layer's bounds.
//! A step that leaves the instruction cursor where it was is a fixed point,
//! and the program halts.
//!
//! A taken conditional jump executes its target within the same step. The
//! chain is driven by a loop rather than recursion, so a program that jumps
//! to itself forever runs until the step limit instead of exhausting the
//! call stack.

#![allow(clippy::module_name_repetitions)]

use parensor_foundation::{Cell, Coordinates, Error, ErrorContext, ExecutionLimit, Result};
use parensor_language::Opcode;
use parensor_storage::{Layer, LayerSpace};
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::cursor::Cursor;
use crate::direction::{Direction, movement};
use crate::io::EngineIo;
use crate::matcher::{GroupMatch, match_group};

/// Bounds of a layer that has never been touched.
const UNTOUCHED_DIMENSIONS: &[i64] = &[1];

// =============================================================================
// Engine State
// =============================================================================

/// Everything a running program can observe or change.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineState {
    /// All layers, addressed by layer index.
    pub layers: LayerSpace,
    /// Selects the cell to execute.
    pub instruction: Cursor,
    /// Selects the cell that data opcodes read and write.
    pub data: Cursor,
    /// Per-axis movement of the instruction cursor.
    pub direction: Vec<Direction>,
}

impl EngineState {
    /// Creates the initial state with `program` as layer `{0}`.
    #[must_use]
    pub fn new(program: Layer) -> Self {
        let instruction = Cursor::instruction_start();
        let mut layers = LayerSpace::new();
        layers.set(&instruction.layer_index, program);

        Self {
            layers,
            instruction,
            data: Cursor::data_start(),
            direction: vec![Direction::Incremental],
        }
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// What a single step led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction cursor moved; there is more to run.
    Continue,
    /// The instruction cursor did not move; the program is done.
    Halted,
}

/// Totals for a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps taken, including the final one that reached the fixed point.
    pub steps: u64,
    /// Instructions executed, chained jump targets included.
    pub instructions: u64,
}

/// Whether the instruction just executed handed control to another cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Done,
    Chain,
}

// =============================================================================
// Engine
// =============================================================================

/// Runs a program.
#[derive(Clone, Debug)]
pub struct Engine {
    state: EngineState,
    config: EngineConfig,
    /// Completed steps.
    steps: u64,
    /// Executed instructions (counted against `config.max_steps`).
    instructions: u64,
}

impl Engine {
    /// Creates an engine for `program` with the default configuration.
    #[must_use]
    pub fn new(program: Layer) -> Self {
        Self::from_state(EngineState::new(program))
    }

    /// Creates an engine that resumes from `state`.
    #[must_use]
    pub fn from_state(state: EngineState) -> Self {
        Self {
            state,
            config: EngineConfig::default(),
            steps: 0,
            instructions: 0,
        }
    }

    /// Builder method to set the configuration.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the full state.
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns mutable access to the full state.
    pub fn state_mut(&mut self) -> &mut EngineState {
        &mut self.state
    }

    /// Consumes the engine, returning its state.
    #[must_use]
    pub fn into_state(self) -> EngineState {
        self.state
    }

    /// Returns the instruction cursor.
    #[must_use]
    pub fn instruction_cursor(&self) -> &Cursor {
        &self.state.instruction
    }

    /// Returns the data cursor.
    #[must_use]
    pub fn data_cursor(&self) -> &Cursor {
        &self.state.data
    }

    /// Returns the direction vector.
    #[must_use]
    pub fn direction(&self) -> &[Direction] {
        &self.state.direction
    }

    /// Replaces the direction vector.
    pub fn set_direction(&mut self, direction: Vec<Direction>) {
        self.state.direction = direction;
    }

    /// Returns all layers.
    #[must_use]
    pub fn layers(&self) -> &LayerSpace {
        &self.state.layers
    }

    /// Returns mutable access to all layers.
    pub fn layers_mut(&mut self) -> &mut LayerSpace {
        &mut self.state.layers
    }

    /// Returns the number of completed steps.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns the number of executed instructions.
    #[must_use]
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Reads the cell under the data cursor, materializing it if needed.
    pub fn data_cell(&mut self) -> Cell {
        *self.data_cell_mut()
    }

    /// Runs until the program reaches a fixed point.
    ///
    /// # Errors
    /// Returns the first instruction failure or I/O error, or a limit error
    /// if `max_steps` instructions run without halting. Effects applied
    /// before the failure are kept.
    pub fn run<I: EngineIo + ?Sized>(&mut self, io: &mut I) -> Result<RunSummary> {
        while self.step(io)? == StepOutcome::Continue {}

        debug!(
            steps = self.steps,
            instructions = self.instructions,
            "program halted"
        );

        Ok(RunSummary {
            steps: self.steps,
            instructions: self.instructions,
        })
    }

    /// Executes the current instruction and advances the instruction cursor.
    ///
    /// # Errors
    /// Returns an error if the instruction fails. The error carries the
    /// step number and the cursor it started at.
    pub fn step<I: EngineIo + ?Sized>(&mut self, io: &mut I) -> Result<StepOutcome> {
        let before = self.state.instruction.clone();

        if let Err(error) = self.execute_current(io) {
            return Err(error.with_context(
                ErrorContext::new().with_frame(format!("step {} at {before}", self.steps + 1)),
            ));
        }

        let current = self.state.instruction.cell_index.clone();
        self.state.instruction.cell_index = self.next_index(&current);
        self.steps += 1;

        trace!(step = self.steps, cursor = %self.state.instruction, "advanced");

        if before == self.state.instruction {
            Ok(StepOutcome::Halted)
        } else {
            Ok(StepOutcome::Continue)
        }
    }

    /// Executes the cell under the instruction cursor, following any chain
    /// of taken conditional jumps.
    fn execute_current<I: EngineIo + ?Sized>(&mut self, io: &mut I) -> Result<()> {
        loop {
            self.count_instruction()?;

            let cell = *self.instruction_cell_mut();
            let flow = match cell {
                Cell::Integer(value) => self.execute(Opcode::from_value(value), io)?,
                Cell::OpenGroup => {
                    self.skip_group()?;
                    Flow::Done
                }
                Cell::CloseGroup => Flow::Done,
            };

            if flow == Flow::Done {
                return Ok(());
            }
        }
    }

    fn count_instruction(&mut self) -> Result<()> {
        if let Some(limit) = self.config.max_steps {
            if self.instructions >= limit {
                return Err(Error::limit_exceeded(ExecutionLimit::MaxSteps { limit }));
            }
        }
        self.instructions += 1;
        Ok(())
    }

    fn execute<I: EngineIo + ?Sized>(&mut self, opcode: Opcode, io: &mut I) -> Result<Flow> {
        trace!(%opcode, cursor = %self.state.instruction, "execute");

        match opcode {
            Opcode::OutputCurrentData => {
                let cell = *self.data_cell_mut();
                io.write_cell(cell)?;
            }
            Opcode::IncrementDataCursorCellIndex => {
                let by = self.operand_group()?.operand_coordinates();
                let bounds = self.layer_dimensions(&self.state.data.layer_index).to_vec();
                self.state.data.cell_index.increment(&by, &bounds);
            }
            Opcode::SetDataCursorTensorIndex => {
                let group = self.operand_group()?;
                self.state.data.layer_index = Coordinates::from(group.operands);
                debug!(layer = %self.state.data.layer_index, "data cursor switched layer");
            }
            Opcode::IncrementDataCell => {
                let cell = self.data_cell_mut();
                *cell = match *cell {
                    Cell::Integer(n) => Cell::Integer(n.wrapping_add(1)),
                    Cell::OpenGroup | Cell::CloseGroup => Cell::Integer(0),
                };
            }
            Opcode::DecrementDataCell => {
                let cell = self.data_cell_mut();
                *cell = match *cell {
                    Cell::Integer(n) => Cell::Integer(n.wrapping_sub(1)),
                    Cell::OpenGroup | Cell::CloseGroup => Cell::Integer(0),
                };
            }
            Opcode::SetInstructionCursorDirection => {
                let group = self.operand_group()?;
                self.state.direction = group
                    .operands
                    .iter()
                    .map(|&operand| Direction::from_operand(operand))
                    .collect();
                debug!(direction = ?self.state.direction, "direction changed");
            }
            Opcode::SetDataCellUserInput => {
                let value = io.read_integer()?;
                *self.data_cell_mut() = Cell::Integer(value);
            }
            Opcode::ConditionalSetInstructionCursorCellIndex => {
                let group = self.operand_group()?;
                if self.data_cell_mut().is_zero() {
                    self.state.instruction.cell_index = Coordinates::from(group.operands);
                    trace!(to = %self.state.instruction.cell_index, "jump taken");
                    return Ok(Flow::Chain);
                }
            }
            Opcode::SetDataCellOpeningParens => {
                *self.data_cell_mut() = Cell::OpenGroup;
            }
            Opcode::SetDataCellClosingParens => {
                *self.data_cell_mut() = Cell::CloseGroup;
            }
            Opcode::SetInstructionCursorTensorIndex => {
                let group = self.operand_group()?;
                self.state.instruction.layer_index = Coordinates::from(group.operands);
                debug!(layer = %self.state.instruction.layer_index, "instruction cursor switched layer");
            }
            Opcode::ShrinkTensor => {
                let target = self.operand_group()?.operand_coordinates();
                self.state.layers.get_mut(&target).reset();
                debug!(layer = %target, "layer reset");
            }
        }

        Ok(Flow::Done)
    }

    /// Matches the group that must start one step past the instruction
    /// cursor.
    fn operand_group(&mut self) -> Result<GroupMatch> {
        let opening = self.next_index(&self.state.instruction.cell_index);
        let movement = movement(&self.state.direction);
        let layer = self.instruction_layer_mut();

        if !layer.peek(&opening).copied().unwrap_or_default().is_open_group() {
            return Err(Error::missing_open_group(opening));
        }

        match_group(layer, &opening, &movement)
    }

    /// Jumps from the `(` under the instruction cursor to its `)`.
    fn skip_group(&mut self) -> Result<()> {
        let opening = self.state.instruction.cell_index.clone();
        let movement = movement(&self.state.direction);
        let group = match_group(self.instruction_layer_mut(), &opening, &movement)?;

        trace!(from = %opening, to = %group.closing, "skipped group");
        self.state.instruction.cell_index = group.closing;
        Ok(())
    }

    /// Where the instruction cursor moves from `index` in one step.
    fn next_index(&self, index: &Coordinates) -> Coordinates {
        let movement = movement(&self.state.direction);
        index.incremented(
            &movement,
            self.layer_dimensions(&self.state.instruction.layer_index),
        )
    }

    fn layer_dimensions(&self, layer_index: &Coordinates) -> &[i64] {
        self.state
            .layers
            .peek(layer_index)
            .map_or(UNTOUCHED_DIMENSIONS, |layer| layer.dimensions())
    }

    fn instruction_layer_mut(&mut self) -> &mut Layer {
        let state = &mut self.state;
        state.layers.get_mut(&state.instruction.layer_index)
    }

    fn instruction_cell_mut(&mut self) -> &mut Cell {
        let state = &mut self.state;
        state
            .layers
            .get_mut(&state.instruction.layer_index)
            .get_mut(&state.instruction.cell_index)
    }

    fn data_cell_mut(&mut self) -> &mut Cell {
        let state = &mut self.state;
        state
            .layers
            .get_mut(&state.data.layer_index)
            .get_mut(&state.data.cell_index)
    }
}
