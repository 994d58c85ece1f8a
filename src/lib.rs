//! Weatherdash library
//!
//! This module exposes the pipeline modules for use in integration tests.

pub mod advice;
pub mod cli;
pub mod conditions;
pub mod data;
pub mod report;
pub mod summary;
