// src/benchmark/mod.rs

pub mod records;
pub mod report;
pub mod speedup;
pub mod table;

pub use records::{SpeedupRecord, TableKind, TimeUnit, TimingRecord};
pub use report::SpeedupReport;
pub use speedup::SpeedupComputer;
pub use table::{DuplicatePolicy, LengthIndex, TimingTable};
