use thiserror::Error;

/// Errors surfaced by the engine's public contract.
///
/// Out-of-bounds addressing never happens inside a generation step; when it
/// shows up it is a caller contract violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("coordinate ({x}, {y}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        columns: u32,
        rows: u32,
    },

    #[error("live cell at ({x}, {y}) needs a color")]
    MissingColor { x: i32, y: i32 },

    #[error("color inheritance needs at least one parent color")]
    NoParents,

    #[error("unknown pattern: {0:?}")]
    UnknownPattern(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_coordinate() {
        let err = EngineError::OutOfBounds { x: -1, y: 4, columns: 10, rows: 8 };
        assert_eq!(err.to_string(), "coordinate (-1, 4) is outside the 10x8 grid");

        let err = EngineError::MissingColor { x: 2, y: 3 };
        assert_eq!(err.to_string(), "live cell at (2, 3) needs a color");
    }
}
