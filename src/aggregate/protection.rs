//! Protection-scheme aggregation
//!
//! For each enumerated scheme, support is established by escalating through
//! a fixed sequence of access probes:
//!
//! 1. resolution ladder (every rung attempted, no short-circuit)
//! 2. gate: zero rungs means the scheme is unsupported, full stop
//! 3. persistent-license session probe (downgrades only the flag)
//! 4. hardware-robustness probe (tier classification, best effort)
//! 5. representative codec probes, each an independent access request
//!
//! Schemes are processed independently; one scheme's rejections never
//! affect another's probing.

use std::sync::Arc;

use crate::catalog::{
    BASELINE_AUDIO, BASELINE_VIDEO, HW_ROBUSTNESS, PROTECTED_TEST_CODECS, PROTECTION_SCHEMES,
    TEST_RESOLUTIONS,
};
use crate::platform::{
    CapabilityDescriptor, KeySystemApi, KeySystemConfiguration, PersistentState,
};
use crate::report::{
    CapabilityResult, CodecCapability, HdrCapability, ProtectionSchemeProfile,
    ProtectionSchemeReport, Resolution, SecurityLevel,
};

/// Probe every enumerated scheme against the access interface.
pub async fn probe_all_schemes(
    api: &Arc<dyn KeySystemApi>,
    hdr: &[HdrCapability],
) -> Vec<ProtectionSchemeReport> {
    let mut reports = Vec::with_capacity(PROTECTION_SCHEMES.len());
    for profile in PROTECTION_SCHEMES {
        reports.push(probe_scheme(api, *profile, hdr).await);
    }
    reports
}

/// Run the escalating probe sequence for one scheme.
pub async fn probe_scheme(
    api: &Arc<dyn KeySystemApi>,
    profile: ProtectionSchemeProfile,
    hdr: &[HdrCapability],
) -> ProtectionSchemeReport {
    // Stage 1: resolution ladder. A host may reject a low rung for reasons
    // unrelated to capability (configuration mismatches), so every rung is
    // attempted independently.
    let mut supported_resolutions: Vec<Resolution> = Vec::new();
    for resolution in TEST_RESOLUTIONS {
        let config = resolution_config(*resolution);
        if api.request_access(profile.key_system, &[config]).await.is_ok() {
            supported_resolutions.push(*resolution);
        }
    }

    // Stage 2: gate. No rung succeeded: terminal unsupported state, with
    // every nested field cleared.
    if supported_resolutions.is_empty() {
        tracing::info!(scheme = profile.name, "scheme unsupported, no resolution granted");
        return ProtectionSchemeReport::unsupported(profile);
    }

    // Stage 3: persistent-license capability. Failure only clears the flag.
    let persistent_license = api
        .request_access(profile.key_system, &[persistent_config()])
        .await
        .is_ok();

    // Stage 4: security tier. Hardware robustness granted means a
    // hardware-backed path exists; rejection means the software tier. This
    // classifies what the host will grant, not what it enforces.
    let security_level = if api
        .request_access(profile.key_system, &[robustness_config()])
        .await
        .is_ok()
    {
        SecurityLevel::HardwareL1
    } else {
        SecurityLevel::SoftwareL3
    };

    // Stage 5: representative codecs, each scoped to a single-codec request.
    let mut supported_codecs = Vec::with_capacity(PROTECTED_TEST_CODECS.len());
    for entry in PROTECTED_TEST_CODECS {
        let granted = api
            .request_access(profile.key_system, &[codec_config(entry.content_type)])
            .await
            .is_ok();
        supported_codecs.push(CodecCapability {
            name: entry.name,
            content_type: entry.content_type,
            result: CapabilityResult::binary(granted),
        });
    }

    tracing::info!(
        scheme = profile.name,
        resolutions = supported_resolutions.len(),
        security = %security_level,
        persistent_license,
        "scheme probing complete"
    );

    ProtectionSchemeReport {
        profile,
        supported: true,
        supported_resolutions,
        security_level,
        persistent_license,
        supported_codecs,
        // Carried over from the general display report, not re-probed
        // under the scheme.
        hdr_capabilities: hdr.to_vec(),
    }
}

fn resolution_config(resolution: Resolution) -> KeySystemConfiguration {
    KeySystemConfiguration {
        audio_capabilities: vec![CapabilityDescriptor::new(BASELINE_AUDIO)],
        video_capabilities: vec![CapabilityDescriptor::new(BASELINE_VIDEO)
            .with_resolution(resolution.width, resolution.height)],
        ..Default::default()
    }
}

fn persistent_config() -> KeySystemConfiguration {
    KeySystemConfiguration {
        audio_capabilities: vec![CapabilityDescriptor::new(BASELINE_AUDIO)],
        persistent_state: PersistentState::Required,
        session_types: vec!["persistent-license".to_string()],
        ..Default::default()
    }
}

fn robustness_config() -> KeySystemConfiguration {
    KeySystemConfiguration {
        video_capabilities: vec![
            CapabilityDescriptor::new(BASELINE_VIDEO).with_robustness(HW_ROBUSTNESS)
        ],
        ..Default::default()
    }
}

fn codec_config(content_type: &str) -> KeySystemConfiguration {
    KeySystemConfiguration {
        video_capabilities: vec![CapabilityDescriptor::new(content_type)],
        ..Default::default()
    }
}
