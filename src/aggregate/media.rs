//! Video/audio codec aggregation
//!
//! Applies the decode prober to every entry of a codec catalog. Catalog
//! declaration order is a contract: it is the display order, so results are
//! joined positionally rather than appended on completion. Entries are
//! independent; probes are dispatched concurrently and one outcome never
//! affects another.

use futures::future::join_all;

use crate::catalog::CodecEntry;
use crate::probe::{CapabilityQuery, DecodeProber};
use crate::report::CodecCapability;

/// Probe every catalog entry and return one record per entry, in catalog
/// order regardless of which probe settles first.
pub async fn probe_catalog(prober: &DecodeProber, catalog: &[CodecEntry]) -> Vec<CodecCapability> {
    let probes = catalog.iter().map(|entry| async move {
        let query = CapabilityQuery::from(entry);
        prober.probe(&query).await
    });

    // join_all yields results in input order, independent of completion order
    let results = join_all(probes).await;

    catalog
        .iter()
        .zip(results)
        .map(|(entry, result)| {
            tracing::debug!(
                codec = entry.name,
                supported = result.supported,
                "codec probe complete"
            );
            CodecCapability {
                name: entry.name,
                content_type: entry.content_type,
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AUDIO_CODECS, VIDEO_CODECS};
    use crate::platform::{
        DecodingConfiguration, DecodingInfo, MediaDecisionApi, PlatformError,
    };
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    /// Decision backend whose replies arrive in reverse catalog order:
    /// later entries answer faster. Exercises the ordering contract.
    struct InvertedLatency;

    #[async_trait]
    impl MediaDecisionApi for InvertedLatency {
        async fn decoding_info(
            &self,
            config: &DecodingConfiguration,
        ) -> Result<DecodingInfo, PlatformError> {
            let content_type = config
                .video
                .as_ref()
                .map(|v| v.content_type.clone())
                .or_else(|| config.audio.as_ref().map(|a| a.content_type.clone()))
                .unwrap_or_default();
            let position = VIDEO_CODECS
                .iter()
                .position(|e| e.content_type == content_type)
                .unwrap_or(0);
            let delay = (VIDEO_CODECS.len() - position) as u64 * 10;
            tokio::time::sleep(Duration::from_millis(delay)).await;
            // Only H.264 variants are supported by this fake host
            Ok(DecodingInfo {
                supported: content_type.contains("avc1"),
                smooth: true,
                power_efficient: false,
            })
        }
    }

    #[tokio::test]
    async fn test_result_order_matches_catalog_under_latency_inversion() {
        let prober = DecodeProber::Decision(Arc::new(InvertedLatency));
        let results = probe_catalog(&prober, VIDEO_CODECS).await;

        assert_eq!(results.len(), VIDEO_CODECS.len());
        for (entry, result) in VIDEO_CODECS.iter().zip(&results) {
            assert_eq!(result.name, entry.name);
            assert_eq!(result.content_type, entry.content_type);
            assert_eq!(result.result.supported, entry.content_type.contains("avc1"));
        }
    }

    #[tokio::test]
    async fn test_unavailable_prober_yields_full_length_unsupported() {
        let results = probe_catalog(&DecodeProber::Unavailable, AUDIO_CODECS).await;
        assert_eq!(results.len(), AUDIO_CODECS.len());
        assert!(results.iter().all(|r| !r.result.supported));
        assert!(results.iter().all(|r| r.result.smooth.is_none()));
    }
}
