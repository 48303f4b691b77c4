use crate::clues::consts::MAX_GUESSES_PER_LANGUAGE;
use crate::clues::models::{ConfidenceTier, SignalSet};

pub struct CandidatePlace {
    pub location: &'static str,
    pub region: Option<&'static str>,
}

const fn area(location: &'static str) -> CandidatePlace {
    CandidatePlace {
        location,
        region: None,
    }
}

const fn place(location: &'static str, region: &'static str) -> CandidatePlace {
    CandidatePlace {
        location,
        region: Some(region),
    }
}

pub enum Matcher {
    /// An OCR locale's primary subtag equals this language code.
    LanguageCode(&'static str),
    /// Some filtered text fragment contains this keyword (compared lowercased).
    TextKeyword(&'static str),
    /// Some label, object or logo term contains one of these keywords.
    LabelKeywords(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, signals: &SignalSet) -> bool {
        match self {
            Matcher::LanguageCode(code) => signals.languages.iter().any(|lang| lang == code),
            Matcher::TextKeyword(keyword) => signals
                .text_fragments
                .iter()
                .any(|fragment| fragment.to_lowercase().contains(keyword)),
            Matcher::LabelKeywords(keywords) => signals
                .labels
                .iter()
                .chain(signals.logos.iter())
                .any(|term| {
                    let term = term.to_lowercase();
                    keywords.iter().any(|keyword| term.contains(keyword))
                }),
        }
    }
}

pub struct GuessRule {
    pub matcher: Matcher,
    pub candidates: &'static [CandidatePlace],
    pub max_candidates: usize,
    pub confidence: ConfidenceTier,
    pub reasoning: &'static str,
}

/// The whole heuristic table in one place: every rule is a matcher, the
/// places it vouches for, and a fixed tier and reasoning line. Adding a
/// heuristic is a data change here, not a new code path.
///
/// Tier rationale: languages spoken in one country pin the location (very
/// high); languages shared by a handful of countries narrow it well (high);
/// diffuse languages and environmental features only gesture at a region
/// (medium).
pub static RULESET: &[GuessRule] = &[
    // Languages seen in OCR text.
    GuessRule {
        matcher: Matcher::LanguageCode("ru"),
        candidates: &[
            area("Russia"),
            area("Belarus"),
            area("Kazakhstan"),
            area("Ukraine"),
        ],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Russian.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("uk"),
        candidates: &[area("Ukraine")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Ukrainian.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("de"),
        candidates: &[
            area("Germany"),
            area("Austria"),
            area("Switzerland"),
        ],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::High,
        reasoning: "Street text appears to be in German.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("en"),
        candidates: &[
            area("United States"),
            area("United Kingdom"),
            area("Australia"),
            area("Canada"),
            area("New Zealand"),
            area("Ireland"),
        ],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::Medium,
        reasoning: "Street text appears to be in English, which narrows it down only a little.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("es"),
        candidates: &[
            area("Spain"),
            area("Mexico"),
            area("Argentina"),
            area("Colombia"),
            area("Chile"),
        ],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::High,
        reasoning: "Street text appears to be in Spanish.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("fr"),
        candidates: &[
            area("France"),
            area("Belgium"),
            place("Canada", "Quebec"),
            area("Switzerland"),
        ],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::High,
        reasoning: "Street text appears to be in French.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("pt"),
        candidates: &[area("Brazil"), area("Portugal")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::High,
        reasoning: "Street text appears to be in Portuguese.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("it"),
        candidates: &[area("Italy"), place("Switzerland", "Ticino")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Italian.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("ja"),
        candidates: &[area("Japan")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Japanese.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("ko"),
        candidates: &[area("South Korea")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Korean.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("zh"),
        candidates: &[area("China"), area("Taiwan"), area("Singapore")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::High,
        reasoning: "Street text appears to be in Chinese.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("ar"),
        candidates: &[
            area("Egypt"),
            area("Saudi Arabia"),
            area("United Arab Emirates"),
            area("Morocco"),
        ],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::Medium,
        reasoning: "Street text appears to be in Arabic.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("hi"),
        candidates: &[area("India")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Hindi.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("th"),
        candidates: &[area("Thailand")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Thai.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("vi"),
        candidates: &[area("Vietnam")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Vietnamese.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("nl"),
        candidates: &[area("Netherlands"), area("Belgium")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::High,
        reasoning: "Street text appears to be in Dutch.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("sv"),
        candidates: &[area("Sweden")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Swedish.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("fi"),
        candidates: &[area("Finland")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Finnish.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("pl"),
        candidates: &[area("Poland")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Polish.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("tr"),
        candidates: &[area("Turkey")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Turkish.",
    },
    GuessRule {
        matcher: Matcher::LanguageCode("el"),
        candidates: &[area("Greece")],
        max_candidates: MAX_GUESSES_PER_LANGUAGE,
        confidence: ConfidenceTier::VeryHigh,
        reasoning: "Street text appears to be in Greek.",
    },
    // Country names and endonyms spotted in the OCR text itself.
    GuessRule {
        matcher: Matcher::TextKeyword("japan"),
        candidates: &[area("Japan")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign mentions Japan by name.",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("nippon"),
        candidates: &[area("Japan")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the Japanese endonym \"Nippon\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("france"),
        candidates: &[area("France")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign mentions France by name.",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("deutschland"),
        candidates: &[area("Germany")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the German endonym \"Deutschland\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("españa"),
        candidates: &[area("Spain")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the Spanish endonym \"España\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("italia"),
        candidates: &[area("Italy")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the Italian endonym \"Italia\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("brasil"),
        candidates: &[area("Brazil")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the Portuguese endonym \"Brasil\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("méxico"),
        candidates: &[area("Mexico")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the Spanish endonym \"México\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("россия"),
        candidates: &[area("Russia")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the Russian endonym \"Россия\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("polska"),
        candidates: &[area("Poland")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the Polish endonym \"Polska\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("norge"),
        candidates: &[area("Norway")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the Norwegian endonym \"Norge\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("sverige"),
        candidates: &[area("Sweden")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the Swedish endonym \"Sverige\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("suomi"),
        candidates: &[area("Finland")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the Finnish endonym \"Suomi\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("schweiz"),
        candidates: &[area("Switzerland")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the German endonym \"Schweiz\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("österreich"),
        candidates: &[area("Austria")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the German endonym \"Österreich\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("nederland"),
        candidates: &[area("Netherlands")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the Dutch endonym \"Nederland\".",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("australia"),
        candidates: &[area("Australia")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign mentions Australia by name.",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("canada"),
        candidates: &[area("Canada")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign mentions Canada by name.",
    },
    GuessRule {
        matcher: Matcher::TextKeyword("türkiye"),
        candidates: &[area("Turkey")],
        max_candidates: 1,
        confidence: ConfidenceTier::High,
        reasoning: "A sign carries the Turkish endonym \"Türkiye\".",
    },
    // Environmental and commercial features from labels, objects and logos.
    GuessRule {
        matcher: Matcher::LabelKeywords(&["palm", "tropic"]),
        candidates: &[area("a tropical region")],
        max_candidates: 1,
        confidence: ConfidenceTier::Medium,
        reasoning: "Palm trees and tropical vegetation are in view.",
    },
    GuessRule {
        matcher: Matcher::LabelKeywords(&["pine", "spruce", "conifer", "fir", "birch"]),
        candidates: &[area("a northern temperate region")],
        max_candidates: 1,
        confidence: ConfidenceTier::Medium,
        reasoning: "Conifer and birch vegetation suggests a northern climate.",
    },
    GuessRule {
        matcher: Matcher::LabelKeywords(&[
            "volkswagen",
            "renault",
            "peugeot",
            "citroën",
            "citroen",
            "fiat",
            "škoda",
            "skoda",
            "opel",
            "dacia",
        ]),
        candidates: &[area("Europe")],
        max_candidates: 1,
        confidence: ConfidenceTier::Medium,
        reasoning: "European car brands are in view.",
    },
    GuessRule {
        matcher: Matcher::LabelKeywords(&["cactus", "desert", "arid"]),
        candidates: &[area("an arid region")],
        max_candidates: 1,
        confidence: ConfidenceTier::Medium,
        reasoning: "Desert vegetation and arid terrain are in view.",
    },
    GuessRule {
        matcher: Matcher::LabelKeywords(&["rice paddy", "paddy field", "rice field"]),
        candidates: &[area("Southeast Asia")],
        max_candidates: 1,
        confidence: ConfidenceTier::Medium,
        reasoning: "Rice paddies are in view.",
    },
    GuessRule {
        matcher: Matcher::LabelKeywords(&["snow", "glacier", "tundra"]),
        candidates: &[area("a cold northern or alpine region")],
        max_candidates: 1,
        confidence: ConfidenceTier::Medium,
        reasoning: "Snow cover is in view.",
    },
];
