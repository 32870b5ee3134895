mod cells;

pub use cells::Cells;
