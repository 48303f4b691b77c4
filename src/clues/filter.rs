/// Deny patterns for the imagery provider's own artifacts: watermarks,
/// attribution overlays and capture-date stamps routinely survive OCR and
/// would otherwise be fed into the guess heuristics as "street text".
const DENY_SUBSTRINGS: [&str; 8] = [
    "google",
    "street view",
    "©",
    "(c)",
    "copyright",
    "terms of use",
    "report a problem",
    "image capture",
];

/// Single words that show up in the provider's UI chrome. Matched exactly,
/// not as substrings, so genuine short place names pass through.
const BOILERPLATE_WORDS: [&str; 5] = ["maps", "map", "image", "photo", "data"];

/// Allow-by-default provenance filter: a fragment is dropped only when it
/// matches an explicit watermark/boilerplate pattern or is a bare year.
pub fn is_provenance_artifact(fragment: &str) -> bool {
    let trimmed = fragment.trim();
    if trimmed.is_empty() {
        return true;
    }
    let lowered = trimmed.to_lowercase();
    if DENY_SUBSTRINGS
        .iter()
        .any(|pattern| lowered.contains(pattern))
    {
        return true;
    }
    if BOILERPLATE_WORDS.iter().any(|word| lowered == *word) {
        return true;
    }
    is_bare_year(&lowered)
}

fn is_bare_year(fragment: &str) -> bool {
    fragment.len() == 4
        && fragment.chars().all(|c| c.is_ascii_digit())
        && (fragment.starts_with("19") || fragment.starts_with("20"))
}
