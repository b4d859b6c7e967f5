//! Static probe catalogs
//!
//! Fixed enumerations of the codec, resolution, HDR-format, and
//! protection-scheme identifiers the scanner tests. Declaration order is a
//! contract: aggregators preserve it, and it becomes the display order.

use crate::report::{ProtectionSchemeProfile, Resolution};

/// Whether a catalog entry describes video or audio content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

/// Structured test parameters for a video decode probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoProbeParams {
    pub width: u32,
    pub height: u32,
    /// Bits per second
    pub bitrate: u64,
    /// Frames per second
    pub framerate: u32,
}

const FHD: VideoProbeParams = VideoProbeParams {
    width: 1920,
    height: 1080,
    bitrate: 5_000_000,
    framerate: 30,
};

/// One testable codec: a display name plus the canonical content-type
/// string submitted to the platform decision API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecEntry {
    pub name: &'static str,
    pub content_type: &'static str,
    pub kind: MediaKind,
    /// Present for video entries; the decision probe submits these
    pub video: Option<VideoProbeParams>,
    /// Present for audio entries
    pub channels: Option<u16>,
}

const fn video(name: &'static str, content_type: &'static str) -> CodecEntry {
    CodecEntry {
        name,
        content_type,
        kind: MediaKind::Video,
        video: Some(FHD),
        channels: None,
    }
}

const fn audio(name: &'static str, content_type: &'static str) -> CodecEntry {
    CodecEntry {
        name,
        content_type,
        kind: MediaKind::Audio,
        video: None,
        channels: Some(2),
    }
}

/// Video codecs probed by the media aggregator, in display order.
pub const VIDEO_CODECS: &[CodecEntry] = &[
    video("H.264 (AVC)", "video/mp4;codecs=\"avc1.42E01E\""),
    video("H.264 High", "video/mp4;codecs=\"avc1.640028\""),
    video("HEVC (H.265)", "video/mp4;codecs=\"hvc1.1.6.L93.B0\""),
    video("VP8", "video/webm;codecs=\"vp8\""),
    video("VP9", "video/webm;codecs=\"vp09.00.10.08\""),
    video("AV1", "video/mp4;codecs=\"av01.0.04M.08\""),
];

/// Audio codecs probed by the media aggregator, in display order.
pub const AUDIO_CODECS: &[CodecEntry] = &[
    audio("AAC", "audio/mp4;codecs=\"mp4a.40.2\""),
    audio("AC3 (Dolby Digital)", "audio/mp4;codecs=\"ac-3\""),
    audio("E-AC3 (Dolby Digital Plus)", "audio/mp4;codecs=\"ec-3\""),
    audio("FLAC", "audio/flac"),
    audio("Opus", "audio/opus"),
    audio("Vorbis", "audio/ogg"),
];

/// One HDR format under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HdrFormat {
    pub name: &'static str,
    pub description: &'static str,
}

/// HDR formats reported by the display aggregator, in display order.
pub const HDR_FORMATS: &[HdrFormat] = &[
    HdrFormat {
        name: "HDR10",
        description: "High Dynamic Range 10-bit",
    },
    HdrFormat {
        name: "Dolby Vision",
        description: "Advanced HDR format by Dolby",
    },
    HdrFormat {
        name: "HLG",
        description: "Hybrid Log-Gamma HDR",
    },
];

/// Resolution ladder for protected-content probing, ascending. Every rung
/// is attempted independently; no short-circuit on failure.
pub const TEST_RESOLUTIONS: &[Resolution] = &[
    Resolution {
        width: 854,
        height: 480,
        name: "480p",
    },
    Resolution {
        width: 1280,
        height: 720,
        name: "720p",
    },
    Resolution {
        width: 1920,
        height: 1080,
        name: "1080p",
    },
    Resolution {
        width: 3840,
        height: 2160,
        name: "4K",
    },
];

/// The three protection schemes under test: two cross-platform, one
/// vendor-specific.
pub const PROTECTION_SCHEMES: &[ProtectionSchemeProfile] = &[
    ProtectionSchemeProfile {
        name: "Widevine",
        key_system: "com.widevine.alpha",
        icon: "Shield",
    },
    ProtectionSchemeProfile {
        name: "PlayReady",
        key_system: "com.microsoft.playready",
        icon: "ShieldCheck",
    },
    ProtectionSchemeProfile {
        name: "FairPlay",
        key_system: "com.apple.fps",
        icon: "ShieldAlert",
    },
];

/// Representative video codecs probed individually under each protection
/// scheme.
pub const PROTECTED_TEST_CODECS: &[CodecEntry] = &[
    video("H.264", "video/mp4;codecs=\"avc1.42E01E\""),
    video("HEVC", "video/mp4;codecs=\"hvc1.1.6.L93.B0\""),
    video("VP9", "video/webm;codecs=\"vp09.00.10.08\""),
    video("AV1", "video/mp4;codecs=\"av01.0.04M.08\""),
];

/// Baseline video content type used for resolution-ladder and robustness
/// probes.
pub const BASELINE_VIDEO: &str = "video/mp4;codecs=\"avc1.42E01E\"";

/// Baseline audio content type accompanying protected-content requests.
pub const BASELINE_AUDIO: &str = "audio/mp4;codecs=\"mp4a.40.2\"";

/// Robustness identifier requested by the security-tier probe.
pub const HW_ROBUSTNESS: &str = "HW_SECURE_ALL";
