//! Terminal output formatting

pub mod display;
pub mod formatters;
pub mod stats_table;
pub mod view;

pub use display::print_score_result;
pub use view::View;
