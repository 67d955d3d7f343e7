//! Terminal chart rendering for extracted series

pub mod bounds;
pub mod canvas;
pub mod chart;

pub use bounds::{Bounds, terminal_geometry};
pub use canvas::{BrailleCanvas, Cell};
pub use chart::Chart;
