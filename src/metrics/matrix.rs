//! The client x iteration result matrix.
//!
//! Cells are stored row-major: the outcome of `iteration` for `client` lives at
//! `client * iterations + iteration`. During a run every row is owned by
//! exactly one [`ClientLane`], so workers never share a writable cell.
use crate::args::PositiveUsize;
use crate::error::{EngineError, ValidationError};

use super::CallOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixShape {
    clients: usize,
    iterations: usize,
    cells: usize,
}

impl MatrixShape {
    /// # Errors
    ///
    /// Returns an error when `clients * iterations` overflows `usize`.
    pub fn new(clients: PositiveUsize, iterations: PositiveUsize) -> Result<Self, ValidationError> {
        let cells = clients.get().checked_mul(iterations.get()).ok_or(
            ValidationError::MatrixTooLarge {
                clients: clients.get(),
                iterations: iterations.get(),
            },
        )?;
        Ok(Self {
            clients: clients.get(),
            iterations: iterations.get(),
            cells,
        })
    }

    #[must_use]
    pub const fn clients(self) -> usize {
        self.clients
    }

    #[must_use]
    pub const fn iterations(self) -> usize {
        self.iterations
    }

    #[must_use]
    pub const fn cells(self) -> usize {
        self.cells
    }

    /// Flat index of a cell, or `None` when either coordinate is out of range.
    #[must_use]
    pub fn index(self, client: usize, iteration: usize) -> Option<usize> {
        if client >= self.clients || iteration >= self.iterations {
            return None;
        }
        client
            .checked_mul(self.iterations)
            .and_then(|base| base.checked_add(iteration))
    }
}

/// The row of one client, handed to the single worker that fills it.
#[derive(Debug)]
pub struct ClientLane {
    client: usize,
    cells: Vec<CallOutcome>,
    filled: usize,
}

impl ClientLane {
    fn allocate(client: usize, iterations: usize) -> Result<Self, EngineError> {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(iterations)
            .map_err(|_err| EngineError::MatrixAllocation { cells: iterations })?;
        cells.resize_with(iterations, CallOutcome::default);
        Ok(Self {
            client,
            cells,
            filled: 0,
        })
    }

    #[must_use]
    pub const fn client(&self) -> usize {
        self.client
    }

    #[must_use]
    pub fn outcomes(&self) -> &[CallOutcome] {
        &self.cells
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Writes the outcome of `iteration`. Iterations must be recorded in order,
    /// each exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error when `iteration` is not the next unwritten cell.
    pub fn record(&mut self, iteration: usize, outcome: CallOutcome) -> Result<(), EngineError> {
        if iteration != self.filled {
            return Err(EngineError::OutOfOrderWrite {
                client: self.client,
                iteration,
                expected: self.filled,
            });
        }
        let Some(cell) = self.cells.get_mut(iteration) else {
            return Err(EngineError::LaneFull {
                client: self.client,
            });
        };
        *cell = outcome;
        self.filled = self.filled.saturating_add(1);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultMatrix {
    shape: MatrixShape,
    cells: Vec<CallOutcome>,
}

impl ResultMatrix {
    /// Allocates one zero-initialised lane per client.
    ///
    /// # Errors
    ///
    /// Returns an error when the memory for the lanes cannot be reserved.
    pub fn allocate_lanes(shape: MatrixShape) -> Result<Vec<ClientLane>, EngineError> {
        let mut lanes = Vec::new();
        lanes
            .try_reserve_exact(shape.clients())
            .map_err(|_err| EngineError::MatrixAllocation {
                cells: shape.cells(),
            })?;
        for client in 0..shape.clients() {
            lanes.push(ClientLane::allocate(client, shape.iterations())?);
        }
        Ok(lanes)
    }

    /// Reassembles completed lanes, in any order, into the row-major matrix.
    ///
    /// # Errors
    ///
    /// Returns an error when a lane is missing, duplicated, out of range or
    /// not completely filled.
    pub fn from_lanes(shape: MatrixShape, lanes: Vec<ClientLane>) -> Result<Self, EngineError> {
        let mut slots: Vec<Option<ClientLane>> = Vec::new();
        slots.resize_with(shape.clients(), || None);
        for lane in lanes {
            let client = lane.client;
            let Some(slot) = slots.get_mut(client) else {
                return Err(EngineError::LaneOutOfRange {
                    client,
                    clients: shape.clients(),
                });
            };
            if slot.is_some() {
                return Err(EngineError::DuplicateLane { client });
            }
            if lane.cells.len() != shape.iterations() || !lane.is_complete() {
                return Err(EngineError::LaneLength {
                    client,
                    len: lane.filled,
                    expected: shape.iterations(),
                });
            }
            *slot = Some(lane);
        }

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(shape.cells())
            .map_err(|_err| EngineError::MatrixAllocation {
                cells: shape.cells(),
            })?;
        for (client, slot) in slots.into_iter().enumerate() {
            let lane = slot.ok_or(EngineError::MissingLane { client })?;
            cells.extend(lane.cells);
        }
        Ok(Self { shape, cells })
    }

    /// Builds a matrix from already row-major cells.
    ///
    /// # Errors
    ///
    /// Returns an error when the number of cells does not match the shape.
    pub fn from_cells(shape: MatrixShape, cells: Vec<CallOutcome>) -> Result<Self, EngineError> {
        if cells.len() != shape.cells() {
            return Err(EngineError::CellCount {
                len: cells.len(),
                expected: shape.cells(),
            });
        }
        Ok(Self { shape, cells })
    }

    #[must_use]
    pub const fn shape(&self) -> MatrixShape {
        self.shape
    }

    #[must_use]
    pub fn cells(&self) -> &[CallOutcome] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, client: usize, iteration: usize) -> Option<&CallOutcome> {
        self.shape
            .index(client, iteration)
            .and_then(|index| self.cells.get(index))
    }

    #[must_use]
    pub fn row(&self, client: usize) -> Option<&[CallOutcome]> {
        let start = self.shape.index(client, 0)?;
        let end = start.checked_add(self.shape.iterations)?;
        self.cells.get(start..end)
    }

    /// Rows in client order.
    pub fn rows(&self) -> impl Iterator<Item = &[CallOutcome]> {
        self.cells.chunks_exact(self.shape.iterations)
    }

    /// All clients' outcomes for one iteration, in client order.
    pub fn column(&self, iteration: usize) -> impl Iterator<Item = &CallOutcome> {
        let skip = if iteration < self.shape.iterations {
            iteration
        } else {
            self.cells.len()
        };
        self.cells.iter().skip(skip).step_by(self.shape.iterations)
    }

    /// `(client, iteration, outcome)` in row-major order.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, usize, &CallOutcome)> {
        self.rows().enumerate().flat_map(|(client, row)| {
            row.iter()
                .enumerate()
                .map(move |(iteration, outcome)| (client, iteration, outcome))
        })
    }
}
