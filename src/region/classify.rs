//! Macro-region classification of region codes.

use strum_macros::{Display, EnumIter};

/// Coarse geographic bucket of a region code.
///
/// Variants are declared in alphabetical order of their tags so that the
/// derived `Ord` sorts pairs the same way the tags sort as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum MacroRegion {
    #[strum(serialize = "AS")]
    Asia,
    #[strum(serialize = "EU")]
    Europe,
    #[strum(serialize = "NA")]
    NorthAmerica,
    #[strum(serialize = "OTHER")]
    Other,
}

/// Prefix rules, checked in order. First match wins.
const PREFIX_RULES: &[(&str, MacroRegion)] = &[
    ("us-", MacroRegion::NorthAmerica),
    ("eu-", MacroRegion::Europe),
    ("asia-", MacroRegion::Asia),
];

/// Maps a region code to its macro-region. Absent or unrecognized codes are `Other`.
pub fn classify(code: Option<&str>) -> MacroRegion {
    let Some(code) = code else {
        return MacroRegion::Other;
    };
    PREFIX_RULES
        .iter()
        .find(|(prefix, _)| code.starts_with(prefix))
        .map(|(_, macro_region)| *macro_region)
        .unwrap_or(MacroRegion::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_prefixes() {
        assert_eq!(classify(Some("us-east")), MacroRegion::NorthAmerica);
        assert_eq!(classify(Some("us-southeast")), MacroRegion::NorthAmerica);
        assert_eq!(classify(Some("eu-central-east")), MacroRegion::Europe);
        assert_eq!(classify(Some("asia-south")), MacroRegion::Asia);
    }

    #[test]
    fn test_classify_unknown_and_absent() {
        assert_eq!(classify(None), MacroRegion::Other);
        assert_eq!(classify(Some("")), MacroRegion::Other);
        assert_eq!(classify(Some("oceania-sydney")), MacroRegion::Other);
        // Prefix must include the dash
        assert_eq!(classify(Some("usa")), MacroRegion::Other);
        // Case sensitive
        assert_eq!(classify(Some("US-east")), MacroRegion::Other);
    }

    #[test]
    fn test_macro_region_tags_sort_alphabetically() {
        let mut regions = vec![
            MacroRegion::Other,
            MacroRegion::NorthAmerica,
            MacroRegion::Europe,
            MacroRegion::Asia,
        ];
        regions.sort();
        let tags: Vec<String> = regions.iter().map(|r| r.to_string()).collect();
        assert_eq!(tags, vec!["AS", "EU", "NA", "OTHER"]);
    }
}
