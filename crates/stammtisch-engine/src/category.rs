//! The fixed excuse vocabulary.
//!
//! Eight categories, each with a stable key, a display label, an emoji and a
//! list of German detection keywords. The keyword lists are data consumed by
//! [`crate::classifier`]; nothing here is derived at runtime.

use serde::{Deserialize, Serialize};

/// One of the eight excuse categories.
///
/// The declaration order is the canonical enumeration order: it drives
/// `Ord`, the key order of category maps and favorite-category tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcuseCategory {
    Work,
    Family,
    Health,
    Fatigue,
    Weather,
    Leisure,
    Creative,
    NoMotivation,
}

impl ExcuseCategory {
    /// All categories in canonical enumeration order.
    pub const ALL: [ExcuseCategory; 8] = [
        ExcuseCategory::Work,
        ExcuseCategory::Family,
        ExcuseCategory::Health,
        ExcuseCategory::Fatigue,
        ExcuseCategory::Weather,
        ExcuseCategory::Leisure,
        ExcuseCategory::Creative,
        ExcuseCategory::NoMotivation,
    ];

    /// The order in which keyword lists are tested. First match wins.
    ///
    /// `Creative` has no keywords and is only reachable through the
    /// long-message fallback.
    pub const CLASSIFICATION_ORDER: [ExcuseCategory; 7] = [
        ExcuseCategory::Work,
        ExcuseCategory::Family,
        ExcuseCategory::Health,
        ExcuseCategory::Fatigue,
        ExcuseCategory::Weather,
        ExcuseCategory::Leisure,
        ExcuseCategory::NoMotivation,
    ];

    /// Stable identifier, identical to the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            ExcuseCategory::Work => "work",
            ExcuseCategory::Family => "family",
            ExcuseCategory::Health => "health",
            ExcuseCategory::Fatigue => "fatigue",
            ExcuseCategory::Weather => "weather",
            ExcuseCategory::Leisure => "leisure",
            ExcuseCategory::Creative => "creative",
            ExcuseCategory::NoMotivation => "no_motivation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExcuseCategory::Work => "Arbeit",
            ExcuseCategory::Family => "Familie",
            ExcuseCategory::Health => "Gesundheit",
            ExcuseCategory::Fatigue => "Müdigkeit",
            ExcuseCategory::Weather => "Wetter",
            ExcuseCategory::Leisure => "Andere Pläne",
            ExcuseCategory::Creative => "Kreativ",
            ExcuseCategory::NoMotivation => "Keine Lust",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ExcuseCategory::Work => "💼",
            ExcuseCategory::Family => "👨‍👩‍👧",
            ExcuseCategory::Health => "🤒",
            ExcuseCategory::Fatigue => "😴",
            ExcuseCategory::Weather => "🌧️",
            ExcuseCategory::Leisure => "🎉",
            ExcuseCategory::Creative => "🎨",
            ExcuseCategory::NoMotivation => "😬",
        }
    }

    /// Lower-case detection keywords, matched as substrings.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            ExcuseCategory::Work => &[
                "arbeit", "arbeiten", "job", "meeting", "büro", "buero", "office",
                "projekt", "deadline", "chef", "kunde", "kunden", "firma",
                "überstunden", "ueberstunden", "dienst", "geschäft", "termin",
                "beruflich", "kollege", "kollegin",
            ],
            ExcuseCategory::Family => &[
                "familie", "familien", "kind", "kinder", "eltern", "frau", "mann",
                "schwiegermutter", "schwiegervater", "hochzeit", "geburtstag",
                "verwandte", "oma", "opa", "tante", "onkel", "schwester", "bruder",
                "sohn", "tochter", "baby", "enkel",
            ],
            ExcuseCategory::Health => &[
                "krank", "erkältet", "erkaeltet", "grippe", "arzt", "ärztin",
                "doktor", "krankenhaus", "op", "operation", "schmerz", "kopfschmerz",
                "migräne", "migraene", "magen", "rücken", "ruecken", "fieber",
                "erkältung", "erkaeltung", "husten", "schnupfen", "verletzt",
                "angeschlagen", "anstecken", "corona", "covid", "positiv",
            ],
            ExcuseCategory::Fatigue => &[
                "müde", "muede", "erschöpft", "erschoepft", "kaputt", "platt",
                "schlaf", "energie", "fertig", "ausgepowert", "ko", "k.o.",
                "durch", "ausgelaugt",
            ],
            ExcuseCategory::Weather => &[
                "wetter", "regen", "regnet", "schnee", "sturm", "gewitter",
                "kalt", "hitze", "heiß", "heiss", "unwetter", "glatteis",
                "nebel", "frost",
            ],
            ExcuseCategory::Leisure => &[
                "konzert", "festival", "spiel", "fußball", "fussball", "champions",
                "bundesliga", "ticket", "kino", "theater", "veranstaltung",
                "party", "feier", "reise", "urlaub", "verreist", "unterwegs",
                "verabredet", "verabredung", "besuch", "besucher", "gast",
                "eingeladen", "einladung",
            ],
            ExcuseCategory::Creative => &[],
            ExcuseCategory::NoMotivation => &[
                "kein bock", "keine lust", "keinen bock", "null bock",
                "unlust", "motivation", "motiviert", "antriebslos",
                "heute nicht", "nicht heute", "pause", "auszeit",
            ],
        }
    }

    /// Parse a category from its stable key.
    pub fn from_key(key: &str) -> Option<ExcuseCategory> {
        ExcuseCategory::ALL.into_iter().find(|c| c.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_roundtrip_through_from_key() {
        for category in ExcuseCategory::ALL {
            assert_eq!(ExcuseCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(ExcuseCategory::from_key("arbeit"), None);
    }

    #[test]
    fn classification_order_skips_only_creative() {
        let skipped: Vec<_> = ExcuseCategory::ALL
            .into_iter()
            .filter(|c| !ExcuseCategory::CLASSIFICATION_ORDER.contains(c))
            .collect();
        assert_eq!(skipped, vec![ExcuseCategory::Creative]);
    }

    #[test]
    fn serialized_form_matches_key() {
        for category in ExcuseCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }
}
