//! MediaSense
//!
//! A media-decryption and media-decoding capability scanner. Issues a
//! matrix of asynchronous feasibility probes against the host's media
//! subsystems (protected-content access, codec decodability, display and
//! color capabilities), tolerates per-probe failure, and assembles the
//! outcomes into one immutable capability report.

pub mod agent;
pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod platform;
pub mod probe;
pub mod render;
pub mod report;
pub mod scan;

pub use config::{ScanConfig, Theme};
pub use error::{Result, ScanError};
pub use platform::{fixture::Fixture, Platform};
pub use probe::{CapabilityQuery, DecodeProber};
pub use report::{
    CapabilityResult, DisplayReport, MediaCapabilityReport, ProtectionSchemeReport, ScanReport,
    SecurityLevel, SystemInfo,
};
pub use scan::{run, run_scan};
