use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to allocate result matrix of {cells} cells.")]
    MatrixAllocation { cells: usize },
    #[error("Client lane {client} is outside the matrix ({clients} clients).")]
    LaneOutOfRange { client: usize, clients: usize },
    #[error("Client lane {client} returned {len} outcomes, expected {expected}.")]
    LaneLength {
        client: usize,
        len: usize,
        expected: usize,
    },
    #[error("Client lane {client} was returned twice.")]
    DuplicateLane { client: usize },
    #[error("Client lane {client} never finished.")]
    MissingLane { client: usize },
    #[error("Client {client} wrote iteration {iteration}, expected {expected}.")]
    OutOfOrderWrite {
        client: usize,
        iteration: usize,
        expected: usize,
    },
    #[error("Client lane {client} is already full.")]
    LaneFull { client: usize },
    #[error("Matrix has {len} cells, expected {expected}.")]
    CellCount { len: usize, expected: usize },
}
