//! Report assembly
//!
//! The single top-level scan entry point: captures the display snapshot,
//! runs the video/audio aggregators, then the protection aggregator once
//! per enumerated scheme, and freezes everything into one [`ScanReport`].
//! All probing is demand-driven from here; nothing recurs in the
//! background.

use crate::aggregate::{display, media, protection};
use crate::catalog::{AUDIO_CODECS, VIDEO_CODECS};
use crate::error::{Result, ScanError};
use crate::platform::Platform;
use crate::probe::DecodeProber;
use crate::report::{MediaCapabilityReport, ScanReport};

/// Run one full capability scan. Always completes with a best-effort
/// report: missing interfaces degrade their portion of the report, they
/// never abort the scan.
pub async fn run_scan(platform: &Platform) -> ScanReport {
    tracing::info!(?platform, "capability scan starting");

    let prober = DecodeProber::detect(platform);

    let display = display::capture(platform, &prober).await;
    let video_codecs = media::probe_catalog(&prober, VIDEO_CODECS).await;
    let audio_codecs = media::probe_catalog(&prober, AUDIO_CODECS).await;

    // Total absence of the protected-content entry point yields an empty
    // scheme list, not three unsupported entries. Media and display
    // reporting is unaffected.
    let protection_schemes = match platform.key_systems.as_ref() {
        Some(api) => protection::probe_all_schemes(api, &display.hdr_capabilities).await,
        None => {
            tracing::warn!("protected-content interface absent, skipping scheme probing");
            Vec::new()
        }
    };

    tracing::info!(
        schemes = protection_schemes.len(),
        video = video_codecs.len(),
        audio = audio_codecs.len(),
        "capability scan complete"
    );

    ScanReport {
        protection_schemes,
        media: MediaCapabilityReport {
            video_codecs,
            audio_codecs,
            display,
        },
    }
}

/// Run a scan isolated in its own task. Probe rejections are already
/// absorbed below; the only failure left is a defect inside assembly
/// itself, which surfaces here as a single terminal [`ScanError::Internal`]
/// instead of a partial report.
pub async fn run(platform: Platform) -> Result<ScanReport> {
    tokio::spawn(async move { run_scan(&platform).await })
        .await
        .map_err(|err| ScanError::Internal(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HDR_FORMATS;

    #[tokio::test]
    async fn test_detached_platform_scan_completes() {
        let report = run_scan(&Platform::detached()).await;
        assert!(report.protection_schemes.is_empty());
        assert_eq!(report.media.video_codecs.len(), VIDEO_CODECS.len());
        assert_eq!(report.media.audio_codecs.len(), AUDIO_CODECS.len());
        assert!(report.media.video_codecs.iter().all(|c| !c.result.supported));
        assert_eq!(report.media.display.hdr_capabilities.len(), HDR_FORMATS.len());
    }

    #[tokio::test]
    async fn test_run_wrapper_returns_report() {
        let report = run(Platform::detached()).await.unwrap();
        assert!(report.protection_schemes.is_empty());
    }
}
