pub mod roster_table;
pub mod stats;
pub mod toolbar;
