//! Result aggregation for batch callers

pub mod report;
