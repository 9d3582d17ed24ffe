// src/lib.rs

pub mod benchmark;
pub mod charts;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

pub use error::{PlotError, Result};
