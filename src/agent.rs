//! User-agent string parsing
//!
//! Simple host identification for the rendered report header. Order
//! matters for the browser checks: most Chromium derivatives keep
//! "Chrome" in their user agent, so the specific tokens are matched
//! before the generic ones.

use regex::Regex;

use crate::report::SystemInfo;

/// Browser token table, checked in order. The capture group is the
/// version.
const BROWSERS: &[(&str, &str, &str)] = &[
    ("Edg/", "Edge", r"Edg/([\d.]+)"),
    ("OPR/", "Opera", r"OPR/([\d.]+)"),
    ("Opera/", "Opera", r"Opera/([\d.]+)"),
    ("Brave", "Brave", r"Brave/([\d.]+)"),
    ("Vivaldi", "Vivaldi", r"Vivaldi/([\d.]+)"),
    ("Arc/", "Arc", r"Arc/([\d.]+)"),
    ("Chrome", "Chrome", r"Chrome/([\d.]+)"),
    ("Firefox", "Firefox", r"Firefox/([\d.]+)"),
    ("Safari", "Safari", r"Version/([\d.]+)"),
    ("Edge/", "Edge (Legacy)", r"Edge/([\d.]+)"),
];

/// Parse a user-agent string into OS, browser, and version. Unknown
/// components come back as "Unknown".
pub fn parse_user_agent(user_agent: &str) -> SystemInfo {
    let mut info = SystemInfo::unknown();

    // iOS first: mobile Safari user agents also contain "like Mac OS X"
    info.os = if ["iPhone", "iPad", "iPod"].iter().any(|t| user_agent.contains(t)) {
        "iOS"
    } else if user_agent.contains("Win") {
        "Windows"
    } else if user_agent.contains("Mac") {
        "MacOS"
    } else if user_agent.contains("Android") {
        "Android"
    } else if user_agent.contains("Linux") {
        "Linux"
    } else {
        "Unknown"
    }
    .to_string();

    for (token, name, version_pattern) in BROWSERS {
        if user_agent.contains(token) {
            info.browser = name.to_string();
            let re = Regex::new(version_pattern).unwrap();
            if let Some(caps) = re.captures(user_agent) {
                info.version = caps[1].to_string();
            }
            break;
        }
    }

    info
}
