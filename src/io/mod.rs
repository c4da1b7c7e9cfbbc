//! File export for computed plans.

pub mod export;
