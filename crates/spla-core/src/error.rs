use thiserror::Error;

/// All errors returned by `spla-core`.
///
/// Shapes are reported as `(rows, columns)`; vectors report `(len, 1)`.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Operand shapes do not fit the operation.
    #[error("dimension mismatch in {op}: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        op: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// A checked access was outside the container.
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        index: (usize, usize),
        shape: (usize, usize),
    },

    /// A flat buffer does not hold `rows * cols` elements.
    #[error("invalid shape {rows}x{cols} for {len} elements: {reason}")]
    InvalidShape {
        rows: usize,
        cols: usize,
        len: usize,
        reason: &'static str,
    },

    /// The operation needs a square matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// No usable pivot was found during elimination.
    #[error("singular matrix: pivot {pivot:e} at step {step} is below tolerance {tolerance:e}")]
    SingularMatrix {
        step: usize,
        pivot: f64,
        tolerance: f64,
    },

    /// The operation is not supported for the given input.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// A token in text input could not be parsed.
    #[error("cannot parse token {token:?} at position {position}")]
    Parse { position: usize, token: String },

    /// Text input ended before the announced number of values.
    #[error("unexpected end of input: expected {expected} values, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `spla-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
