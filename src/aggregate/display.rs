//! Display snapshot and HDR-format detection
//!
//! Captures the host's static display facts once per scan and derives the
//! HDR-format records. Two of the three formats have no authoritative query
//! on most hosts:
//!
//! - HDR10 is taken from the dynamic-range display predicate (the base HDR
//!   format, so a high-dynamic-range screen is counted as HDR10-capable).
//! - Dolby Vision is *inferred* from the wide-gamut (P3) predicate. This is
//!   a heuristic proxy with no confirmation available; the record carries
//!   `inferred = true` so presentation can label it as best-effort.
//! - HLG is probed through the decision interface with the `hlg` transfer
//!   function. The binary fallback cannot express a transfer function, so
//!   without the decision interface HLG stays unsupported rather than
//!   guessed.

use crate::catalog::{BASELINE_VIDEO, HDR_FORMATS};
use crate::platform::{Gamut, Platform, TransferFunction};
use crate::probe::{CapabilityQuery, DecodeProber, VideoQueryParams};
use crate::report::{CapabilityResult, DisplayReport, HdrCapability};

/// Capture the display report, including HDR-format records in catalog
/// order. Absence of the display interface degrades to the zeroed report
/// with every HDR format unsupported.
pub async fn capture(platform: &Platform, prober: &DecodeProber) -> DisplayReport {
    let Some(display) = platform.display.as_ref() else {
        tracing::warn!("display interface absent, reporting degraded display facts");
        let mut report = DisplayReport::unavailable();
        report.hdr_capabilities = HDR_FORMATS
            .iter()
            .map(|format| HdrCapability {
                name: format.name,
                description: format.description,
                result: CapabilityResult::unsupported(),
                inferred: false,
            })
            .collect();
        return report;
    };

    let (width, height) = display.geometry();
    let high_dynamic_range = display.high_dynamic_range();
    let gamut_p3 = display.matches_gamut(Gamut::P3);

    let mut hdr_capabilities = Vec::with_capacity(HDR_FORMATS.len());
    for format in HDR_FORMATS {
        let (result, inferred) = match format.name {
            "HDR10" => (CapabilityResult::binary(high_dynamic_range), false),
            "Dolby Vision" => (CapabilityResult::binary(gamut_p3), true),
            "HLG" => (probe_hlg(prober).await, false),
            _ => (CapabilityResult::unsupported(), false),
        };
        tracing::debug!(
            format = format.name,
            supported = result.supported,
            inferred,
            "HDR format evaluated"
        );
        hdr_capabilities.push(HdrCapability {
            name: format.name,
            description: format.description,
            result,
            inferred,
        });
    }

    DisplayReport {
        width,
        height,
        color_depth: display.color_depth(),
        gamut_srgb: display.matches_gamut(Gamut::Srgb),
        gamut_p3,
        gamut_rec2020: display.matches_gamut(Gamut::Rec2020),
        hdr_capabilities,
    }
}

/// HLG decode probe: baseline codec at 1080p30 with the HLG transfer
/// function. Requires the decision interface.
async fn probe_hlg(prober: &DecodeProber) -> CapabilityResult {
    if !prober.has_decision_interface() {
        return CapabilityResult::unsupported();
    }
    let query = CapabilityQuery {
        name: "HLG",
        content_type: BASELINE_VIDEO.to_string(),
        video: Some(VideoQueryParams {
            width: 1920,
            height: 1080,
            bitrate: 5_000_000,
            framerate: 30,
            transfer_function: Some(TransferFunction::Hlg),
        }),
        channels: None,
    };
    prober.probe(&query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{
        DecodingConfiguration, DecodingInfo, DisplayApi, MediaDecisionApi, PlatformError,
    };
    use async_trait::async_trait;
    use std::sync::Arc;

    struct WideGamutScreen;

    impl DisplayApi for WideGamutScreen {
        fn geometry(&self) -> (u32, u32) {
            (3840, 2160)
        }
        fn color_depth(&self) -> u32 {
            30
        }
        fn matches_gamut(&self, gamut: Gamut) -> bool {
            matches!(gamut, Gamut::Srgb | Gamut::P3)
        }
        fn high_dynamic_range(&self) -> bool {
            true
        }
    }

    /// Decision backend that accepts HLG transfer but nothing else special.
    struct HlgCapable;

    #[async_trait]
    impl MediaDecisionApi for HlgCapable {
        async fn decoding_info(
            &self,
            config: &DecodingConfiguration,
        ) -> Result<DecodingInfo, PlatformError> {
            let supported = config
                .video
                .as_ref()
                .map(|v| v.transfer_function == Some(TransferFunction::Hlg))
                .unwrap_or(false);
            Ok(DecodingInfo {
                supported,
                smooth: supported,
                power_efficient: false,
            })
        }
    }

    fn platform_with_display() -> Platform {
        Platform {
            display: Some(Arc::new(WideGamutScreen)),
            ..Platform::detached()
        }
    }

    #[tokio::test]
    async fn test_capture_reads_display_facts() {
        let platform = platform_with_display();
        let report = capture(&platform, &DecodeProber::Unavailable).await;
        assert_eq!((report.width, report.height), (3840, 2160));
        assert_eq!(report.color_depth, 30);
        assert!(report.gamut_srgb);
        assert!(report.gamut_p3);
        assert!(!report.gamut_rec2020);
    }

    #[tokio::test]
    async fn test_dolby_vision_is_labeled_inferred() {
        let platform = platform_with_display();
        let report = capture(&platform, &DecodeProber::Unavailable).await;
        let dv = report
            .hdr_capabilities
            .iter()
            .find(|h| h.name == "Dolby Vision")
            .unwrap();
        // Wide gamut screen: the heuristic fires, and is labeled as such
        assert!(dv.result.supported);
        assert!(dv.inferred);

        let hdr10 = report.hdr_capabilities.iter().find(|h| h.name == "HDR10").unwrap();
        assert!(hdr10.result.supported);
        assert!(!hdr10.inferred);
    }

    #[tokio::test]
    async fn test_hlg_requires_decision_interface() {
        let platform = platform_with_display();

        let without = capture(&platform, &DecodeProber::Unavailable).await;
        let hlg = without.hdr_capabilities.iter().find(|h| h.name == "HLG").unwrap();
        assert!(!hlg.result.supported);

        let prober = DecodeProber::Decision(Arc::new(HlgCapable));
        let with = capture(&platform, &prober).await;
        let hlg = with.hdr_capabilities.iter().find(|h| h.name == "HLG").unwrap();
        assert!(hlg.result.supported);
    }

    #[tokio::test]
    async fn test_absent_display_degrades_to_unsupported_formats() {
        let report = capture(&Platform::detached(), &DecodeProber::Unavailable).await;
        assert_eq!(report.width, 0);
        assert_eq!(report.hdr_capabilities.len(), HDR_FORMATS.len());
        assert!(report.hdr_capabilities.iter().all(|h| !h.result.supported));
    }
}
