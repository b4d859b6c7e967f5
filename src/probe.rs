//! Probe primitives
//!
//! A probe is one asynchronous feasibility question against the host:
//! "can this configuration be decoded". Probes never raise; platform
//! rejections, missing interfaces, and decision errors all collapse to an
//! unsupported [`CapabilityResult`].

use std::sync::Arc;

use crate::catalog::CodecEntry;
use crate::platform::{
    AudioConfiguration, DecodingConfiguration, MediaDecisionApi, Platform, TransferFunction,
    TypeSupportApi, VideoConfiguration,
};
use crate::report::CapabilityResult;

/// Video parameters attached to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoQueryParams {
    pub width: u32,
    pub height: u32,
    pub bitrate: u64,
    pub framerate: u32,
    pub transfer_function: Option<TransferFunction>,
}

/// One testable unit: a symbolic name, a canonical content-type string, and
/// optional structured test parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityQuery {
    pub name: &'static str,
    pub content_type: String,
    pub video: Option<VideoQueryParams>,
    pub channels: Option<u16>,
}

impl CapabilityQuery {
    /// Build a query with an explicit transfer function, used by the HDR
    /// detection path.
    pub fn with_transfer(mut self, transfer: TransferFunction) -> Self {
        if let Some(video) = self.video.as_mut() {
            video.transfer_function = Some(transfer);
        }
        self
    }
}

impl From<&CodecEntry> for CapabilityQuery {
    fn from(entry: &CodecEntry) -> Self {
        Self {
            name: entry.name,
            content_type: entry.content_type.to_string(),
            video: entry.video.map(|v| VideoQueryParams {
                width: v.width,
                height: v.height,
                bitrate: v.bitrate,
                framerate: v.framerate,
                transfer_function: None,
            }),
            channels: entry.channels,
        }
    }
}

/// Decode-probe backend for one scan.
///
/// The flavor is selected once at scan start from whatever the platform
/// exposes, not re-detected per call: the rich decision interface when
/// present, the binary type-support interface as fallback, or nothing.
#[derive(Clone)]
pub enum DecodeProber {
    /// Rich decision interface: answers supported/smooth/power-efficient
    Decision(Arc<dyn MediaDecisionApi>),
    /// Binary fallback: supported only, secondary flags left unset
    TypeOnly(Arc<dyn TypeSupportApi>),
    /// No decode-capability interface at all
    Unavailable,
}

impl DecodeProber {
    /// Select the probe flavor for this scan.
    pub fn detect(platform: &Platform) -> Self {
        if let Some(decision) = platform.decision.clone() {
            tracing::debug!("using decision-info probe backend");
            DecodeProber::Decision(decision)
        } else if let Some(type_support) = platform.type_support.clone() {
            tracing::warn!("decision interface absent, falling back to binary type-support probe");
            DecodeProber::TypeOnly(type_support)
        } else {
            tracing::warn!("no decode-capability interface exposed by platform");
            DecodeProber::Unavailable
        }
    }

    /// True when the rich decision interface backs this prober.
    pub fn has_decision_interface(&self) -> bool {
        matches!(self, DecodeProber::Decision(_))
    }

    /// Probe one query. Never raises: rejections and backend errors are
    /// translated to an unsupported result.
    pub async fn probe(&self, query: &CapabilityQuery) -> CapabilityResult {
        match self {
            DecodeProber::Decision(api) => {
                let config = build_decoding_configuration(query);
                match api.decoding_info(&config).await {
                    Ok(info) => {
                        CapabilityResult::decision(info.supported, info.smooth, info.power_efficient)
                    }
                    Err(err) => {
                        tracing::debug!(query = query.name, %err, "decision probe rejected");
                        CapabilityResult::unsupported()
                    }
                }
            }
            DecodeProber::TypeOnly(api) => {
                let supported = api.is_type_supported(&query.content_type).await;
                CapabilityResult::binary(supported)
            }
            DecodeProber::Unavailable => CapabilityResult::unsupported(),
        }
    }
}

/// Each probe constructs its own isolated configuration; nothing is shared
/// across probes.
fn build_decoding_configuration(query: &CapabilityQuery) -> DecodingConfiguration {
    match query.video {
        Some(video) => DecodingConfiguration {
            video: Some(VideoConfiguration {
                content_type: query.content_type.clone(),
                width: video.width,
                height: video.height,
                bitrate: video.bitrate,
                framerate: video.framerate,
                transfer_function: video.transfer_function,
            }),
            audio: None,
        },
        None => DecodingConfiguration {
            video: None,
            audio: Some(AudioConfiguration {
                content_type: query.content_type.clone(),
                channels: query.channels.unwrap_or(2),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AUDIO_CODECS, VIDEO_CODECS};
    use crate::platform::{DecodingInfo, PlatformError};
    use async_trait::async_trait;

    struct AlwaysSmooth;

    #[async_trait]
    impl MediaDecisionApi for AlwaysSmooth {
        async fn decoding_info(
            &self,
            _config: &DecodingConfiguration,
        ) -> Result<DecodingInfo, PlatformError> {
            Ok(DecodingInfo {
                supported: true,
                smooth: true,
                power_efficient: false,
            })
        }
    }

    struct AlwaysErr;

    #[async_trait]
    impl MediaDecisionApi for AlwaysErr {
        async fn decoding_info(
            &self,
            _config: &DecodingConfiguration,
        ) -> Result<DecodingInfo, PlatformError> {
            Err(PlatformError("nope".to_string()))
        }
    }

    struct Mp4Only;

    #[async_trait]
    impl TypeSupportApi for Mp4Only {
        async fn is_type_supported(&self, content_type: &str) -> bool {
            content_type.starts_with("video/mp4") || content_type.starts_with("audio/mp4")
        }
    }

    #[tokio::test]
    async fn test_decision_probe_reads_secondary_flags() {
        let prober = DecodeProber::Decision(Arc::new(AlwaysSmooth));
        let query = CapabilityQuery::from(&VIDEO_CODECS[0]);
        let result = prober.probe(&query).await;
        assert!(result.supported);
        assert_eq!(result.smooth, Some(true));
        assert_eq!(result.power_efficient, Some(false));
    }

    #[tokio::test]
    async fn test_decision_error_never_raises() {
        let prober = DecodeProber::Decision(Arc::new(AlwaysErr));
        for entry in VIDEO_CODECS.iter().chain(AUDIO_CODECS) {
            let result = prober.probe(&CapabilityQuery::from(entry)).await;
            assert_eq!(result, CapabilityResult::unsupported());
        }
    }

    #[tokio::test]
    async fn test_binary_fallback_leaves_flags_unset() {
        let prober = DecodeProber::TypeOnly(Arc::new(Mp4Only));
        let result = prober.probe(&CapabilityQuery::from(&VIDEO_CODECS[0])).await;
        assert!(result.supported);
        assert_eq!(result.smooth, None);
        assert_eq!(result.power_efficient, None);

        let webm = prober.probe(&CapabilityQuery::from(&VIDEO_CODECS[3])).await;
        assert!(!webm.supported);
    }

    #[tokio::test]
    async fn test_unavailable_backend_reports_unsupported() {
        let prober = DecodeProber::Unavailable;
        let result = prober.probe(&CapabilityQuery::from(&AUDIO_CODECS[0])).await;
        assert_eq!(result, CapabilityResult::unsupported());
    }

    #[test]
    fn test_detect_prefers_decision_interface() {
        let platform = Platform {
            decision: Some(Arc::new(AlwaysSmooth)),
            type_support: Some(Arc::new(Mp4Only)),
            ..Platform::detached()
        };
        assert!(DecodeProber::detect(&platform).has_decision_interface());

        let fallback = Platform {
            type_support: Some(Arc::new(Mp4Only)),
            ..Platform::detached()
        };
        assert!(matches!(
            DecodeProber::detect(&fallback),
            DecodeProber::TypeOnly(_)
        ));

        assert!(matches!(
            DecodeProber::detect(&Platform::detached()),
            DecodeProber::Unavailable
        ));
    }

    #[test]
    fn test_audio_query_builds_audio_configuration() {
        let query = CapabilityQuery::from(&AUDIO_CODECS[0]);
        let config = build_decoding_configuration(&query);
        assert!(config.video.is_none());
        let audio = config.audio.unwrap();
        assert_eq!(audio.channels, 2);
        assert_eq!(audio.content_type, "audio/mp4;codecs=\"mp4a.40.2\"");
    }
}
