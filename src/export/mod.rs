//! Export of learned tables for external analysis.

pub mod q_csv;

pub use q_csv::write_table_csv;
