pub mod gray_code;
pub mod large_gap;

pub use gray_code::reflected_code;
pub use large_gap::{compute_all_statistics, compute_gaps, CodeBuilder};
