//! Keyword-based classification of callable symbols into the fixed set of
//! functional categories. The rules are deliberately literal: an ordered
//! table evaluated top to bottom, first match wins.

/// The fixed categories, in publication order.
pub const CATEGORIES: [&str; 7] = [
    "Initialization",
    "Identification",
    "Capture",
    "Feature flags",
    "Session replay",
    "Privacy",
    "Configuration",
];

const INITIALIZATION_EXACT: &[&str] = &["setup", "with"];
const IDENTIFICATION_EXACT: &[&str] = &["identify", "alias", "getDistinctId", "getAnonymousId"];
const CAPTURE_EXACT: &[&str] = &[
    "capture",
    "screen",
    "autocapture",
    "flush",
    "register",
    "unregister",
];
const FEATURE_FLAG_TERMS: &[&str] = &["feature", "flag", "reload"];
const SESSION_REPLAY_TERMS: &[&str] = &["session", "recording", "replay"];
const PRIVACY_EXACT: &[&str] = &["optOut", "optIn", "reset", "isOptOut"];
const CONFIGURATION_EXACT: &[&str] = &["debug", "close"];

/// Assign a method's base name to one of [`CATEGORIES`].
///
/// Rules are evaluated top to bottom, first match wins. Substring rules
/// match case-insensitively; exact rules are case-sensitive. Unmatched
/// names land in Configuration.
pub fn categorize(method_name: &str) -> &'static str {
    let lowered = method_name.to_lowercase();

    if INITIALIZATION_EXACT.contains(&method_name) || lowered.contains("init") {
        return "Initialization";
    }
    if IDENTIFICATION_EXACT.contains(&method_name) {
        return "Identification";
    }
    if CAPTURE_EXACT.contains(&method_name) {
        return "Capture";
    }
    if FEATURE_FLAG_TERMS.iter().any(|term| lowered.contains(term)) {
        return "Feature flags";
    }
    if SESSION_REPLAY_TERMS.iter().any(|term| lowered.contains(term)) {
        return "Session replay";
    }
    if PRIVACY_EXACT.contains(&method_name) {
        return "Privacy";
    }
    if CONFIGURATION_EXACT.contains(&method_name) || method_name.starts_with("get") {
        return "Configuration";
    }
    "Configuration"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_rule_bucket_is_reachable() {
        assert_eq!(categorize("setup"), "Initialization");
        assert_eq!(categorize("identify"), "Identification");
        assert_eq!(categorize("capture"), "Capture");
        assert_eq!(categorize("reloadFeatureFlags"), "Feature flags");
        assert_eq!(categorize("startSessionRecording"), "Session replay");
        assert_eq!(categorize("optOut"), "Privacy");
        assert_eq!(categorize("debug"), "Configuration");
        assert_eq!(categorize("somethingElse"), "Configuration");
    }

    #[test]
    fn assigned_category_is_always_one_of_the_fixed_set() {
        for name in [
            "setup",
            "identify",
            "capture",
            "getFeatureFlag",
            "isSessionReplayActive",
            "reset",
            "getDistinctId",
            "close",
            "unknownName",
            "",
        ] {
            assert!(CATEGORIES.contains(&categorize(name)), "name: {name}");
        }
    }

    #[test]
    fn earlier_rules_win_over_later_substring_matches() {
        // contains "init" beats the later "session" substring rule
        assert_eq!(categorize("initSessionTracking"), "Initialization");
        // exact Identification beats the "get" prefix rule
        assert_eq!(categorize("getDistinctId"), "Identification");
        // "feature" beats the "get" prefix rule
        assert_eq!(categorize("getFeatureFlagPayload"), "Feature flags");
    }

    #[test]
    fn exact_rules_are_case_sensitive_substring_rules_are_not() {
        assert_eq!(categorize("OptOut"), "Configuration");
        assert_eq!(categorize("RELOAD"), "Feature flags");
    }
}
