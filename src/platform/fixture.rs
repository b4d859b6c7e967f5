//! Fixture-backed platform
//!
//! A [`Platform`] whose four interfaces are driven by a TOML description
//! instead of a live media subsystem. Used by the CLI for demonstration
//! scans and by tests for scripted hosts. Every section of the file is
//! optional; omitting one leaves the corresponding interface absent, which
//! is exactly how a constrained host presents itself to the scanner.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Result, ScanError};
use crate::platform::{
    AccessDenied, DecodingConfiguration, DecodingInfo, DisplayApi, Gamut, KeySystemApi,
    KeySystemConfiguration, MediaDecisionApi, PersistentState, Platform, PlatformError,
    TransferFunction, TypeSupportApi,
};

/// Top-level fixture file.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Fixture {
    /// User-agent string reported by the host, for system identification
    pub user_agent: Option<String>,
    pub display: Option<DisplaySection>,
    pub decision: Option<DecisionSection>,
    pub type_support: Option<TypeSupportSection>,
    #[serde(default, rename = "key_system")]
    pub key_systems: Vec<KeySystemRule>,
}

/// Static display facts.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySection {
    pub width: u32,
    pub height: u32,
    pub color_depth: u32,
    #[serde(default)]
    pub srgb: bool,
    #[serde(default)]
    pub p3: bool,
    #[serde(default)]
    pub rec2020: bool,
    /// The dynamic-range predicate
    #[serde(default)]
    pub hdr: bool,
}

/// Rich decision interface behavior.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DecisionSection {
    /// Whether configurations with the HLG transfer function are accepted
    #[serde(default)]
    pub hlg: bool,
    #[serde(default, rename = "codec")]
    pub codecs: Vec<DecisionCodec>,
}

/// One decision-table row: exact content type and its answer.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionCodec {
    pub content_type: String,
    pub supported: bool,
    #[serde(default)]
    pub smooth: bool,
    #[serde(default)]
    pub power_efficient: bool,
}

/// Binary type-support behavior: content-type prefixes answered yes.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TypeSupportSection {
    #[serde(default)]
    pub prefixes: Vec<String>,
}

/// Access rules for one key system.
#[derive(Debug, Clone, Deserialize)]
pub struct KeySystemRule {
    pub key_system: String,
    /// Smallest video width granted. Some hosts reject low rungs for
    /// configuration reasons unrelated to capability; this models that.
    #[serde(default)]
    pub min_width: u32,
    /// Largest video width granted
    pub max_width: u32,
    #[serde(default)]
    pub persistent: bool,
    #[serde(default)]
    pub hw_secure: bool,
    /// Codec substrings granted in video capability descriptors
    #[serde(default)]
    pub codecs: Vec<String>,
}

impl Fixture {
    /// Load a fixture description from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ScanError::Fixture(format!("failed to read {:?}: {}", path.as_ref(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse a fixture description from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScanError::Fixture(e.to_string()))
    }

    /// Build the platform this fixture describes. Missing sections leave
    /// the matching interface absent.
    pub fn into_platform(self) -> Platform {
        Platform {
            decision: self
                .decision
                .map(|section| Arc::new(FixtureDecision { section }) as Arc<dyn MediaDecisionApi>),
            type_support: self
                .type_support
                .map(|section| Arc::new(FixtureTypeSupport { section }) as Arc<dyn TypeSupportApi>),
            key_systems: if self.key_systems.is_empty() {
                None
            } else {
                Some(Arc::new(FixtureKeySystems {
                    rules: self.key_systems,
                }) as Arc<dyn KeySystemApi>)
            },
            display: self
                .display
                .map(|section| Arc::new(FixtureDisplay { section }) as Arc<dyn DisplayApi>),
        }
    }
}

struct FixtureDecision {
    section: DecisionSection,
}

#[async_trait]
impl MediaDecisionApi for FixtureDecision {
    async fn decoding_info(
        &self,
        config: &DecodingConfiguration,
    ) -> std::result::Result<DecodingInfo, PlatformError> {
        let (content_type, transfer) = match (&config.video, &config.audio) {
            (Some(video), _) => (&video.content_type, video.transfer_function),
            (None, Some(audio)) => (&audio.content_type, None),
            (None, None) => {
                return Err(PlatformError("empty decoding configuration".to_string()))
            }
        };

        if transfer == Some(TransferFunction::Hlg) && !self.section.hlg {
            return Ok(DecodingInfo {
                supported: false,
                smooth: false,
                power_efficient: false,
            });
        }

        let row = self
            .section
            .codecs
            .iter()
            .find(|c| c.content_type == *content_type);
        Ok(match row {
            Some(row) => DecodingInfo {
                supported: row.supported,
                smooth: row.smooth,
                power_efficient: row.power_efficient,
            },
            None => DecodingInfo {
                supported: false,
                smooth: false,
                power_efficient: false,
            },
        })
    }
}

struct FixtureTypeSupport {
    section: TypeSupportSection,
}

#[async_trait]
impl TypeSupportApi for FixtureTypeSupport {
    async fn is_type_supported(&self, content_type: &str) -> bool {
        self.section
            .prefixes
            .iter()
            .any(|prefix| content_type.starts_with(prefix.as_str()))
    }
}

struct FixtureKeySystems {
    rules: Vec<KeySystemRule>,
}

#[async_trait]
impl KeySystemApi for FixtureKeySystems {
    async fn request_access(
        &self,
        key_system: &str,
        configs: &[KeySystemConfiguration],
    ) -> std::result::Result<(), AccessDenied> {
        let rule = self
            .rules
            .iter()
            .find(|r| r.key_system == key_system)
            .ok_or_else(|| AccessDenied(format!("unknown key system {key_system}")))?;

        // Any single configuration alternative being satisfiable grants
        // the request.
        for config in configs {
            if satisfies(rule, config) {
                return Ok(());
            }
        }
        Err(AccessDenied("no configuration satisfiable".to_string()))
    }
}

fn satisfies(rule: &KeySystemRule, config: &KeySystemConfiguration) -> bool {
    if config.persistent_state == PersistentState::Required && !rule.persistent {
        return false;
    }
    for video in &config.video_capabilities {
        if !video.robustness.is_empty() && !rule.hw_secure {
            return false;
        }
        if let Some(width) = video.width {
            if width < rule.min_width || width > rule.max_width {
                return false;
            }
        }
        if !rule.codecs.iter().any(|c| video.content_type.contains(c)) {
            return false;
        }
    }
    true
}

struct FixtureDisplay {
    section: DisplaySection,
}

impl DisplayApi for FixtureDisplay {
    fn geometry(&self) -> (u32, u32) {
        (self.section.width, self.section.height)
    }

    fn color_depth(&self) -> u32 {
        self.section.color_depth
    }

    fn matches_gamut(&self, gamut: Gamut) -> bool {
        match gamut {
            Gamut::Srgb => self.section.srgb,
            Gamut::P3 => self.section.p3,
            Gamut::Rec2020 => self.section.rec2020,
        }
    }

    fn high_dynamic_range(&self) -> bool {
        self.section.hdr
    }
}
