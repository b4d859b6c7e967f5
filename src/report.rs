//! Capability report data model
//!
//! Every type here is a plain immutable snapshot: constructed fresh at the
//! start of a scan, populated by the aggregators, and never mutated after
//! the scan completes.

use serde::Serialize;

/// Outcome of a single capability probe.
///
/// `smooth` and `power_efficient` are only meaningful when `supported` is
/// true, and only when the rich decision interface answered; the binary
/// fallback path leaves them `None` rather than guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilityResult {
    pub supported: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_efficient: Option<bool>,
}

impl CapabilityResult {
    /// An unsupported outcome with no secondary flags.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            smooth: None,
            power_efficient: None,
        }
    }

    /// A bare supported/unsupported outcome, as produced by the binary
    /// type-support fallback.
    pub fn binary(supported: bool) -> Self {
        Self {
            supported,
            smooth: None,
            power_efficient: None,
        }
    }

    /// A full decision-interface outcome. Secondary flags are dropped when
    /// the platform reports the configuration unsupported.
    pub fn decision(supported: bool, smooth: bool, power_efficient: bool) -> Self {
        if supported {
            Self {
                supported: true,
                smooth: Some(smooth),
                power_efficient: Some(power_efficient),
            }
        } else {
            Self::unsupported()
        }
    }
}

/// One codec from a catalog together with its probe outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodecCapability {
    /// Display name, e.g. "HEVC"
    pub name: &'static str,
    /// Canonical content-type string, e.g. `video/mp4;codecs="hvc1.1.6.L93.B0"`
    pub content_type: &'static str,
    #[serde(flatten)]
    pub result: CapabilityResult,
}

/// One HDR format and its detection outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HdrCapability {
    /// Display name, e.g. "Dolby Vision"
    pub name: &'static str,
    /// Human-readable description for presentation
    pub description: &'static str,
    #[serde(flatten)]
    pub result: CapabilityResult,
    /// True when the outcome is a heuristic inference from a weaker signal
    /// (e.g. a color-gamut query) rather than an authoritative answer.
    pub inferred: bool,
}

/// A test resolution from the resolution ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
    /// Display name, e.g. "1080p"
    pub name: &'static str,
}

/// Coarse classification of where content protection is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SecurityLevel {
    Unknown,
    /// Hardware-backed protection path confirmed via robustness probe
    HardwareL1,
    /// Basic access works but the hardware robustness probe was rejected
    SoftwareL3,
    NotSupported,
}

impl SecurityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityLevel::Unknown => "Unknown",
            SecurityLevel::HardwareL1 => "L1 (Hardware)",
            SecurityLevel::SoftwareL3 => "L3 (Software)",
            SecurityLevel::NotSupported => "Not Supported",
        }
    }
}

impl std::fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One content-protection scheme under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProtectionSchemeProfile {
    /// Display name, e.g. "Widevine"
    pub name: &'static str,
    /// Key-system identifier, e.g. "com.widevine.alpha"
    pub key_system: &'static str,
    /// Icon tag for presentation
    pub icon: &'static str,
}

/// Per-scheme probing outcome.
///
/// When `supported` is false every nested list is empty, the security level
/// is `NotSupported`, and `persistent_license` is false.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtectionSchemeReport {
    #[serde(flatten)]
    pub profile: ProtectionSchemeProfile,
    pub supported: bool,
    /// Resolutions confirmed usable, in ascending ladder order
    pub supported_resolutions: Vec<Resolution>,
    pub security_level: SecurityLevel,
    pub persistent_license: bool,
    /// Representative codecs probed under this scheme
    pub supported_codecs: Vec<CodecCapability>,
    /// HDR results carried over from the display report; these are not
    /// re-probed under the scheme
    pub hdr_capabilities: Vec<HdrCapability>,
}

impl ProtectionSchemeReport {
    /// The terminal report for a scheme whose resolution ladder came up
    /// empty: everything below the support flag is cleared.
    pub fn unsupported(profile: ProtectionSchemeProfile) -> Self {
        Self {
            profile,
            supported: false,
            supported_resolutions: Vec::new(),
            security_level: SecurityLevel::NotSupported,
            persistent_license: false,
            supported_codecs: Vec::new(),
            hdr_capabilities: Vec::new(),
        }
    }
}

/// The host's static display and color facts, captured once per scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayReport {
    pub width: u32,
    pub height: u32,
    pub color_depth: u32,
    /// Standard gamut (sRGB)
    pub gamut_srgb: bool,
    /// Wide gamut (Display-P3)
    pub gamut_p3: bool,
    /// Ultra-wide gamut (Rec. 2020)
    pub gamut_rec2020: bool,
    pub hdr_capabilities: Vec<HdrCapability>,
}

impl DisplayReport {
    /// The degraded report used when the display interface is absent.
    pub fn unavailable() -> Self {
        Self {
            width: 0,
            height: 0,
            color_depth: 0,
            gamut_srgb: false,
            gamut_p3: false,
            gamut_rec2020: false,
            hdr_capabilities: Vec::new(),
        }
    }
}

/// Decode-capability portion of the scan: codec support plus display facts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaCapabilityReport {
    /// Video codec results in catalog order
    pub video_codecs: Vec<CodecCapability>,
    /// Audio codec results in catalog order
    pub audio_codecs: Vec<CodecCapability>,
    pub display: DisplayReport,
}

/// The final artifact of one scan, handed to presentation and export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    /// One report per enumerated protection scheme; empty when the host has
    /// no protected-content entry point at all
    pub protection_schemes: Vec<ProtectionSchemeReport>,
    pub media: MediaCapabilityReport,
}

/// Host identification parsed from a user-agent string. Not part of the
/// probing core; attached to rendered and exported output only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub os: String,
    pub browser: String,
    pub version: String,
}

impl SystemInfo {
    pub fn unknown() -> Self {
        Self {
            os: "Unknown".to_string(),
            browser: "Unknown".to_string(),
            version: "Unknown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_result_drops_flags_when_unsupported() {
        let r = CapabilityResult::decision(false, true, true);
        assert!(!r.supported);
        assert_eq!(r.smooth, None);
        assert_eq!(r.power_efficient, None);
    }

    #[test]
    fn test_binary_result_has_no_flags() {
        let r = CapabilityResult::binary(true);
        assert!(r.supported);
        assert_eq!(r.smooth, None);
        assert_eq!(r.power_efficient, None);
    }

    #[test]
    fn test_unsupported_scheme_report_is_empty() {
        let profile = ProtectionSchemeProfile {
            name: "Widevine",
            key_system: "com.widevine.alpha",
            icon: "Shield",
        };
        let report = ProtectionSchemeReport::unsupported(profile);
        assert!(!report.supported);
        assert!(report.supported_resolutions.is_empty());
        assert!(report.supported_codecs.is_empty());
        assert!(!report.persistent_license);
        assert_eq!(report.security_level, SecurityLevel::NotSupported);
    }

    #[test]
    fn test_security_level_display() {
        assert_eq!(SecurityLevel::HardwareL1.to_string(), "L1 (Hardware)");
        assert_eq!(SecurityLevel::SoftwareL3.to_string(), "L3 (Software)");
        assert_eq!(SecurityLevel::NotSupported.to_string(), "Not Supported");
    }
}
