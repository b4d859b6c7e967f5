//! Platform interface seams
//!
//! The scanner never talks to a concrete media subsystem directly. Each of
//! the four host interfaces (capability decision, binary type support,
//! protected-content access, display/media queries) is a trait, and a
//! [`Platform`] bundles whichever of them the host actually exposes.
//! Absence is a first-class state: constrained hosts leave a slot `None`
//! and the corresponding aggregation degrades instead of failing.

pub mod fixture;

use std::sync::Arc;

use async_trait::async_trait;

/// Transfer function for a video decode query (HDR probing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferFunction {
    Srgb,
    /// Perceptual quantizer (HDR10, Dolby Vision)
    Pq,
    /// Hybrid log-gamma
    Hlg,
}

impl TransferFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferFunction::Srgb => "srgb",
            TransferFunction::Pq => "pq",
            TransferFunction::Hlg => "hlg",
        }
    }
}

/// Video half of a decode-capability query.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoConfiguration {
    pub content_type: String,
    pub width: u32,
    pub height: u32,
    /// Bits per second
    pub bitrate: u64,
    /// Frames per second
    pub framerate: u32,
    pub transfer_function: Option<TransferFunction>,
}

/// Audio half of a decode-capability query.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioConfiguration {
    pub content_type: String,
    pub channels: u16,
}

/// Structured configuration submitted to the capability-decision interface.
/// Exactly one half is populated per probe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodingConfiguration {
    pub video: Option<VideoConfiguration>,
    pub audio: Option<AudioConfiguration>,
}

/// Answer from the capability-decision interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodingInfo {
    pub supported: bool,
    pub smooth: bool,
    pub power_efficient: bool,
}

/// Rejection from a platform decision call. Expected and frequent; the
/// probe layer converts it to an unsupported result, never propagates it.
#[derive(Debug, Clone, thiserror::Error)]
#[error("platform rejected configuration: {0}")]
pub struct PlatformError(pub String);

/// Rejection of a protected-content access request.
#[derive(Debug, Clone, thiserror::Error)]
#[error("key system access denied: {0}")]
pub struct AccessDenied(pub String);

/// Persistent-state requirement attached to an access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistentState {
    #[default]
    Optional,
    Required,
}

/// One audio or video capability alternative inside an access request:
/// content type plus an optional robustness hint and resolution.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CapabilityDescriptor {
    pub content_type: String,
    /// Robustness hint, empty for "any"
    pub robustness: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl CapabilityDescriptor {
    pub fn new(content_type: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            ..Default::default()
        }
    }

    pub fn with_robustness(mut self, robustness: &str) -> Self {
        self.robustness = robustness.to_string();
        self
    }

    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// One configuration alternative for a protected-content access request.
#[derive(Debug, Clone, PartialEq)]
pub struct KeySystemConfiguration {
    pub init_data_types: Vec<String>,
    pub audio_capabilities: Vec<CapabilityDescriptor>,
    pub video_capabilities: Vec<CapabilityDescriptor>,
    pub persistent_state: PersistentState,
    pub session_types: Vec<String>,
}

impl Default for KeySystemConfiguration {
    fn default() -> Self {
        Self {
            init_data_types: vec!["cenc".to_string()],
            audio_capabilities: Vec::new(),
            video_capabilities: Vec::new(),
            persistent_state: PersistentState::Optional,
            session_types: vec!["temporary".to_string()],
        }
    }
}

/// Rich capability-decision interface. Preferred probe backend; may be
/// entirely absent on some hosts.
#[async_trait]
pub trait MediaDecisionApi: Send + Sync {
    async fn decoding_info(
        &self,
        config: &DecodingConfiguration,
    ) -> Result<DecodingInfo, PlatformError>;
}

/// Binary content-type support interface. Fallback probe backend.
#[async_trait]
pub trait TypeSupportApi: Send + Sync {
    async fn is_type_supported(&self, content_type: &str) -> bool;
}

/// Protected-content access interface: grants or rejects a key-system
/// access request given a list of configuration alternatives.
#[async_trait]
pub trait KeySystemApi: Send + Sync {
    async fn request_access(
        &self,
        key_system: &str,
        configs: &[KeySystemConfiguration],
    ) -> Result<(), AccessDenied>;
}

/// Color gamut levels queryable from the display interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gamut {
    Srgb,
    P3,
    Rec2020,
}

/// Synchronous display/media-query interface: static screen geometry and
/// color facts.
pub trait DisplayApi: Send + Sync {
    /// (width, height) in pixels
    fn geometry(&self) -> (u32, u32);
    fn color_depth(&self) -> u32;
    fn matches_gamut(&self, gamut: Gamut) -> bool;
    /// The dynamic-range media predicate
    fn high_dynamic_range(&self) -> bool;
}

/// The set of host interfaces available to one scan. Every slot is
/// optional; a `None` models a host that does not expose that subsystem.
#[derive(Clone, Default)]
pub struct Platform {
    pub decision: Option<Arc<dyn MediaDecisionApi>>,
    pub type_support: Option<Arc<dyn TypeSupportApi>>,
    pub key_systems: Option<Arc<dyn KeySystemApi>>,
    pub display: Option<Arc<dyn DisplayApi>>,
}

impl Platform {
    /// A platform exposing no interfaces at all. Scanning it yields the
    /// fully degraded (but valid) report.
    pub fn detached() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Platform")
            .field("decision", &self.decision.is_some())
            .field("type_support", &self.type_support.is_some())
            .field("key_systems", &self.key_systems.is_some())
            .field("display", &self.display.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_platform_has_no_interfaces() {
        let p = Platform::detached();
        assert!(p.decision.is_none());
        assert!(p.type_support.is_none());
        assert!(p.key_systems.is_none());
        assert!(p.display.is_none());
    }

    #[test]
    fn test_key_system_config_defaults() {
        let config = KeySystemConfiguration::default();
        assert_eq!(config.init_data_types, vec!["cenc".to_string()]);
        assert_eq!(config.session_types, vec!["temporary".to_string()]);
        assert_eq!(config.persistent_state, PersistentState::Optional);
    }

    #[test]
    fn test_capability_descriptor_builder() {
        let desc = CapabilityDescriptor::new("video/mp4;codecs=\"avc1.42E01E\"")
            .with_robustness("HW_SECURE_ALL")
            .with_resolution(1920, 1080);
        assert_eq!(desc.robustness, "HW_SECURE_ALL");
        assert_eq!(desc.width, Some(1920));
        assert_eq!(desc.height, Some(1080));
    }
}
