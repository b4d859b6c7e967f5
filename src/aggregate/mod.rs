//! Capability aggregators
//!
//! Each aggregator drives probe primitives across one catalog and folds the
//! outcomes into report entries. Aggregators are independent of each other
//! and restartable: every scan builds its records from scratch.

pub mod display;
pub mod media;
pub mod protection;
