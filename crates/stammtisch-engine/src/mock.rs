//! Seeded demo dataset, used when the real data source is unavailable.
//!
//! The generator produces *raw* absence records, so demo data runs through
//! the same engine as real data. All randomness comes from a
//! [`ChaCha8Rng`] seeded from [`MockConfig::seed`]: the same config always
//! yields the same document.

use chrono::{NaiveDate, Weekday};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::calendar::{build_calendar, weekday_name, Period};
use crate::category::ExcuseCategory;
use crate::error::{EngineError, Result};
use crate::evaluator::EvaluationInput;
use crate::types::{AbsenceRecord, RawUser};

pub const DEFAULT_SEED: u64 = 42;

/// A simulated member and how they tend to cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct MockMember {
    pub user: RawUser,
    /// Probability of cancelling on any given calendar day.
    pub absence_rate: f64,
    /// Categories this member picks excuses from, uniformly.
    pub favorite_categories: Vec<ExcuseCategory>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MockConfig {
    pub seed: u64,
    pub period: Period,
    pub weekday: Weekday,
    pub today: NaiveDate,
    pub roster: Vec<MockMember>,
}

impl MockConfig {
    /// The 15-member demo roster on Thursdays of the season containing
    /// `today`, seeded with [`DEFAULT_SEED`].
    pub fn demo(today: NaiveDate) -> Self {
        Self {
            seed: DEFAULT_SEED,
            period: Period::season_of(today),
            weekday: Weekday::Thu,
            today,
            roster: demo_roster(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> Result<()> {
        for member in &self.roster {
            if !(0.0..=1.0).contains(&member.absence_rate) {
                return Err(EngineError::InvalidMockConfig(format!(
                    "absence rate {} for '{}' is outside 0.0..=1.0",
                    member.absence_rate, member.user.name
                )));
            }
            if member.favorite_categories.is_empty() {
                return Err(EngineError::InvalidMockConfig(format!(
                    "'{}' has no favorite categories",
                    member.user.name
                )));
            }
        }
        Ok(())
    }
}

/// Generate a reproducible input document.
///
/// Days are walked in calendar order and members in roster order; each
/// member draws once per day and, on a cancel, draws a category and then a
/// message from that category's examples.
///
/// # Errors
/// Returns `EngineError::InvalidMockConfig` for a rate outside `0.0..=1.0`
/// or an empty favorite list.
pub fn generate_input(config: &MockConfig) -> Result<EvaluationInput> {
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let calendar = build_calendar(&config.period, config.weekday, &[], config.today);
    let mut absences = Vec::new();

    for &date in &calendar {
        for member in &config.roster {
            if rng.gen::<f64>() >= member.absence_rate {
                continue;
            }
            let favorites = &member.favorite_categories;
            let category = favorites[rng.gen_range(0..favorites.len())];
            let examples = example_messages(category);
            let message = examples[rng.gen_range(0..examples.len())];

            absences.push(AbsenceRecord {
                user_id: member.user.id.clone(),
                date,
                message: Some(message.to_string()),
            });
        }
    }

    tracing::debug!(
        seed = config.seed,
        days = calendar.len(),
        absences = absences.len(),
        "generated mock input"
    );

    Ok(EvaluationInput {
        period: config.period,
        weekday: weekday_name(config.weekday).to_string(),
        blackout_dates: Vec::new(),
        today: Some(config.today),
        users: config.roster.iter().map(|m| m.user.clone()).collect(),
        absences,
    })
}

/// Sample excuse messages per category. Never empty.
pub fn example_messages(category: ExcuseCategory) -> &'static [&'static str] {
    match category {
        ExcuseCategory::Work => &[
            "Muss länger arbeiten, sorry Jungs 😔",
            "Meeting bis 20 Uhr, das wird nix heute",
            "Deadline morgen, sitze noch im Büro",
            "Chef hat spontan was reingedrückt...",
            "Überstunden ohne Ende, nächste Woche wieder!",
            "Projekt-Crunch, ihr kennt das 💼",
            "Kundenbesuch, muss leider absagen",
        ],
        ExcuseCategory::Family => &[
            "Familienfeier, muss zur Schwiegermutter 😅",
            "Kind ist krank, bleibe daheim",
            "Hochzeitstag vergessen... muss was gutmachen",
            "Eltern kommen zu Besuch",
            "Kindergeburtstag, nächste Woche!",
            "Frau hat was geplant, sorry!",
            "Familiending, kann nicht weg",
        ],
        ExcuseCategory::Health => &[
            "Bin flach, Erkältung hat mich erwischt 🤧",
            "Rücken macht nicht mit heute",
            "Migräne, liege im Dunkeln",
            "Magen-Darm, sag ich nur...",
            "Arzttermin morgen früh, muss fit sein",
            "Bin angeschlagen, will euch nicht anstecken",
        ],
        ExcuseCategory::Fatigue => &[
            "Komplett platt, sorry Leute 😴",
            "Null Energie heute, wird ne Couch-Session",
            "Die Woche war brutal, brauch Schlaf",
            "Bin durch, nächste Woche wieder fit!",
            "Einfach zu müde für alles",
        ],
        ExcuseCategory::Weather => &[
            "Bei dem Wetter geh ich nicht raus 🌧️",
            "Schnee ohne Ende, Auto eingefroren",
            "Sturm angesagt, bleib lieber daheim",
            "40 Grad? Ich bleib in der Klimaanlage",
        ],
        ExcuseCategory::Leisure => &[
            "Champions League heute, sorry nicht sorry ⚽",
            "Konzert-Tickets seit Monaten, muss hin 🎸",
            "Kumpel von früher ist in der Stadt",
            "Geburtstag von nem Kollegen",
            "Andere Verabredung, war zuerst geplant",
        ],
        ExcuseCategory::Creative => &[
            "Mein Goldfisch hat Geburtstag 🐟",
            "Muss meine Pflanzen gießen, die sehen traurig aus",
            "Hab mir vorgenommen heute mal früh ins Bett zu gehen (lol)",
            "Sitze in der Badewanne, kein Bock rauszugehen",
            "Mars steht ungünstig, Astrologe sagt nein 🔮",
            "Netflix hat neue Staffel released, ihr versteht",
            "Bin in einem Wikipedia-Rabbit-Hole gefangen",
            "Muss meinen Kühlschrank sortieren, dringend",
            "Hab mich ausgesperrt und warte auf den Schlüsseldienst (Spoiler: Lüge)",
            "Meine Katze braucht emotionale Unterstützung heute 🐱",
        ],
        ExcuseCategory::NoMotivation => &[
            "Hab heute einfach keinen Bock, sorry 😬",
            "Brauch mal ne Pause, nächste Woche!",
            "Heute nicht, Jungs",
            "Chill-Abend geplant, ohne Menschen",
        ],
    }
}

fn member(
    id: &str,
    name: &str,
    emoji: &str,
    absence_rate: f64,
    favorite_categories: &[ExcuseCategory],
) -> MockMember {
    MockMember {
        user: RawUser {
            id: id.to_string(),
            name: name.to_string(),
            display_emoji: Some(emoji.to_string()),
        },
        absence_rate,
        favorite_categories: favorite_categories.to_vec(),
    }
}

/// The default 15-member roster.
pub fn demo_roster() -> Vec<MockMember> {
    use ExcuseCategory::*;

    vec![
        member("1", "Max", "🍺", 0.08, &[Work, Health]),
        member("2", "Thomas", "🎸", 0.12, &[Leisure, Work]),
        member("3", "Stefan", "⚽", 0.18, &[Leisure, Family]),
        member("4", "Andreas", "🎮", 0.35, &[Fatigue, NoMotivation, Creative]),
        member("5", "Michael", "📚", 0.15, &[Work, Family]),
        member("6", "Christian", "🏔️", 0.25, &[Weather, Leisure]),
        member("7", "Markus", "🚴", 0.10, &[Work, Health]),
        member("8", "Daniel", "🎬", 0.45, &[NoMotivation, Creative, Fatigue]),
        member("9", "Sebastian", "💻", 0.22, &[Work, Fatigue]),
        member("10", "Patrick", "🎯", 0.30, &[Family, Leisure]),
        member("11", "Florian", "🍕", 0.14, &[Health, Work]),
        member("12", "Tobias", "🏋️", 0.20, &[Health, Fatigue]),
        member("13", "Martin", "🎵", 0.55, &[NoMotivation, Creative, Fatigue]),
        member("14", "Philipp", "🎨", 0.28, &[Creative, Leisure]),
        member("15", "Jan", "🏀", 0.38, &[Leisure, NoMotivation]),
    ]
}
