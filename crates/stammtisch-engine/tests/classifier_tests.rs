//! Tests for keyword-based excuse classification.

use stammtisch_engine::classifier::{classify, CREATIVE_MIN_LEN};
use stammtisch_engine::ExcuseCategory;

// ── Missing or empty messages ───────────────────────────────────────────────

#[test]
fn empty_message_is_no_motivation() {
    assert_eq!(classify(Some("")), ExcuseCategory::NoMotivation);
}

#[test]
fn missing_message_is_no_motivation() {
    assert_eq!(classify(None), ExcuseCategory::NoMotivation);
}

// ── Keyword matching ────────────────────────────────────────────────────────

#[test]
fn matches_each_keyword_category() {
    let cases = [
        ("Muss länger arbeiten", ExcuseCategory::Work),
        ("Eltern kommen zu Besuch", ExcuseCategory::Family),
        ("Bin angeschlagen, will euch nicht anstecken", ExcuseCategory::Health),
        ("Komplett platt, sorry Leute 😴", ExcuseCategory::Fatigue),
        ("Sturm angesagt, bleib lieber daheim", ExcuseCategory::Weather),
        ("Champions League heute, sorry nicht sorry ⚽", ExcuseCategory::Leisure),
        ("Heute nicht, Jungs", ExcuseCategory::NoMotivation),
    ];
    for (message, expected) in cases {
        assert_eq!(classify(Some(message)), expected, "message: {message}");
    }
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(classify(Some("MEETING bis spät")), ExcuseCategory::Work);
}

#[test]
fn first_category_in_check_order_wins() {
    // "kind" (family) and "krank" (health): family is checked first.
    assert_eq!(
        classify(Some("Kind ist krank, bleibe daheim")),
        ExcuseCategory::Family
    );
    // "kollege" (work) and "geburtstag" (family): work is checked first.
    assert_eq!(classify(Some("Kollege hat Geburtstag")), ExcuseCategory::Work);
    // Long, but "kein bock" hits before the length fallback is considered.
    assert_eq!(
        classify(Some("Sitze in der Badewanne, kein Bock rauszugehen")),
        ExcuseCategory::NoMotivation
    );
}

#[test]
fn keyword_inside_longer_word_still_matches() {
    // "geburtstag" is a substring of the message even in a creative excuse.
    assert_eq!(
        classify(Some("Mein Goldfisch hat Geburtstag 🐟")),
        ExcuseCategory::Family
    );
}

// ── Length fallback ─────────────────────────────────────────────────────────

#[test]
fn long_unmatched_message_is_creative() {
    let message = "Ich sitze in der Badewanne, lol";
    assert_eq!(message.len(), CREATIVE_MIN_LEN + 1);
    assert_eq!(classify(Some(message)), ExcuseCategory::Creative);
}

#[test]
fn message_at_threshold_is_not_creative() {
    let message = "Ich sitze in der Badewanne, lo";
    assert_eq!(message.len(), CREATIVE_MIN_LEN);
    assert_eq!(classify(Some(message)), ExcuseCategory::NoMotivation);
}

#[test]
fn short_unmatched_message_is_no_motivation() {
    let message = "Ich sitze in der Badewanne, l";
    assert_eq!(message.len(), 29);
    assert_eq!(classify(Some(message)), ExcuseCategory::NoMotivation);
    assert_eq!(classify(Some("nö")), ExcuseCategory::NoMotivation);
}

#[test]
fn inventive_excuses_without_keywords_are_creative() {
    for message in [
        "Netflix hat neue Staffel released, ihr versteht",
        "Bin in einem Wikipedia-Rabbit-Hole gefangen",
        "Muss meinen Kühlschrank sortieren, dringend",
    ] {
        assert_eq!(classify(Some(message)), ExcuseCategory::Creative, "message: {message}");
    }
}

#[test]
fn classification_is_pure() {
    let message = "Bei dem Wetter geh ich nicht raus 🌧️";
    let first = classify(Some(message));
    for _ in 0..10 {
        assert_eq!(classify(Some(message)), first);
    }
    assert_eq!(first, ExcuseCategory::Weather);
}
