pub mod cs;

pub use cs::combinatorial::{gray_code, large_gap};
pub use cs::error::{Error, Result};
pub use large_gap::{Code, CodeBuilder, LggcConfig, ShapeParameters, Statistics};
