//! Plain-text presentation of a scan report
//!
//! Simple data formatting only; nothing here feeds back into probing.

use std::fmt::Write;

use crate::report::{
    CapabilityResult, HdrCapability, ProtectionSchemeReport, ScanReport, SystemInfo,
};

fn mark(supported: bool) -> &'static str {
    if supported {
        "[x]"
    } else {
        "[ ]"
    }
}

fn result_tags(result: &CapabilityResult) -> String {
    let mut tags = Vec::new();
    if result.smooth == Some(true) {
        tags.push("smooth");
    }
    if result.power_efficient == Some(true) {
        tags.push("power-efficient");
    }
    if tags.is_empty() {
        String::new()
    } else {
        format!("  ({})", tags.join(", "))
    }
}

fn hdr_line(out: &mut String, hdr: &HdrCapability, indent: &str) {
    let inferred = if hdr.inferred { "  (inferred)" } else { "" };
    let _ = writeln!(
        out,
        "{indent}{} {} - {}{inferred}",
        mark(hdr.result.supported),
        hdr.name,
        hdr.description
    );
}

fn scheme_section(out: &mut String, scheme: &ProtectionSchemeReport) {
    let _ = writeln!(out, "\n  {} ({})", scheme.profile.name, scheme.profile.key_system);
    if !scheme.supported {
        let _ = writeln!(out, "    not supported");
        return;
    }
    let resolutions: Vec<_> = scheme
        .supported_resolutions
        .iter()
        .map(|r| r.name)
        .collect();
    let _ = writeln!(out, "    resolutions: {}", resolutions.join(", "));
    let _ = writeln!(out, "    security level: {}", scheme.security_level);
    let _ = writeln!(
        out,
        "    persistent license: {}",
        if scheme.persistent_license { "yes" } else { "no" }
    );
    let _ = writeln!(out, "    codecs:");
    for codec in &scheme.supported_codecs {
        let _ = writeln!(out, "      {} {}", mark(codec.result.supported), codec.name);
    }
}

/// Render the full report as display-ready text.
pub fn render_report(report: &ScanReport, system: &SystemInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "MediaSense capability report");
    let _ = writeln!(out, "============================");
    let _ = writeln!(
        out,
        "Host: {} / {} {}",
        system.os, system.browser, system.version
    );

    let _ = writeln!(out, "\nVideo codecs:");
    for codec in &report.media.video_codecs {
        let _ = writeln!(
            out,
            "  {} {}{}",
            mark(codec.result.supported),
            codec.name,
            result_tags(&codec.result)
        );
    }

    let _ = writeln!(out, "\nAudio codecs:");
    for codec in &report.media.audio_codecs {
        let _ = writeln!(out, "  {} {}", mark(codec.result.supported), codec.name);
    }

    let display = &report.media.display;
    let _ = writeln!(out, "\nDisplay:");
    let _ = writeln!(
        out,
        "  {}x{} @ {}-bit color",
        display.width, display.height, display.color_depth
    );
    let _ = writeln!(
        out,
        "  gamut: srgb={} p3={} rec2020={}",
        display.gamut_srgb, display.gamut_p3, display.gamut_rec2020
    );
    let _ = writeln!(out, "  HDR formats:");
    for hdr in &display.hdr_capabilities {
        hdr_line(&mut out, hdr, "    ");
    }

    let _ = writeln!(out, "\nProtection schemes:");
    if report.protection_schemes.is_empty() {
        let _ = writeln!(out, "  no protected-content interface detected");
    } else {
        for scheme in &report.protection_schemes {
            scheme_section(&mut out, scheme);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use crate::scan::run_scan;

    #[tokio::test]
    async fn test_render_degraded_report() {
        let report = run_scan(&Platform::detached()).await;
        let text = render_report(&report, &SystemInfo::unknown());
        assert!(text.contains("MediaSense capability report"));
        assert!(text.contains("no protected-content interface detected"));
        assert!(text.contains("Video codecs:"));
        assert!(text.contains("[ ] AV1"));
    }

    #[test]
    fn test_inferred_hdr_is_labeled() {
        let hdr = HdrCapability {
            name: "Dolby Vision",
            description: "Advanced HDR format by Dolby",
            result: CapabilityResult::binary(true),
            inferred: true,
        };
        let mut out = String::new();
        hdr_line(&mut out, &hdr, "");
        assert!(out.contains("(inferred)"));
        assert!(out.contains("[x] Dolby Vision"));
    }
}
