//! Integration tests for the classifier.
//!
//! These exercise the public API the way the site generator uses it: one
//! record at a time, with realistic Scholar-style venue strings.

use pubclass_core::{
    BibliographicRecord, Category, Classifier, Lexicon, LexiconExtension, Tier, classify,
    venue_display,
};

fn venue(text: &str) -> BibliographicRecord {
    BibliographicRecord::new().with_venue_text(text)
}

/// Every record gets exactly one of the five categories, including degenerate ones.
#[test]
fn test_classification_is_total() {
    let records = [
        BibliographicRecord::default(),
        BibliographicRecord::new().with_title("!!!"),
        venue("   "),
        venue("Proceedings"),
        BibliographicRecord::new().with_entry_type("thesis"),
        BibliographicRecord::new().with_publisher("Self-published"),
    ];
    for record in &records {
        assert!(Category::ALL.contains(&classify(record)), "{record:?}");
    }
}

#[test]
fn test_entry_type_wins_over_everything() {
    let record = BibliographicRecord::new()
        .with_entry_type("book")
        .with_book_title("Proceedings of the Workshop")
        .with_journal_name("Journal of Things")
        .with_venue_text("CVPR 2023")
        .with_title("Chapter 3");
    let decision = Classifier::default().decide(&record);
    assert_eq!(decision.category, Category::Book);
    assert_eq!(decision.tier, Tier::EntryType);
}

#[test]
fn test_book_title_beats_journal_name() {
    let record = BibliographicRecord::new()
        .with_book_title("Advances in Things")
        .with_journal_name("Journal of Things");
    assert_eq!(classify(&record), Category::Conference);
}

#[test]
fn test_journal_name_classifies_journal() {
    let record = BibliographicRecord::new().with_journal_name("Nature");
    assert_eq!(classify(&record), Category::Journal);
}

#[test]
fn test_scholar_style_venue_strings() {
    let cases = [
        ("Proceedings of the IEEE/CVF Conference on Computer Vision", Category::Conference),
        ("NeurIPS 2022", Category::Conference),
        ("arXiv preprint arXiv:2301.00001", Category::Other),
        ("Nature Communications 14 (1), 1-12", Category::Other),
        ("IEEE Transactions on Pattern Analysis and Machine Intelligence", Category::Journal),
        ("Journal of Machine Learning Research 23, 1-40", Category::Journal),
        ("Handbook of Medical Imaging, 233-260", Category::BookChapter),
        ("Cambridge University Press", Category::Book),
        ("Physical Review Letters 120 (3)", Category::Journal),
    ];
    for (text, expected) in cases {
        assert_eq!(classify(&venue(text)), expected, "venue {text:?}");
    }
}

#[test]
fn test_conference_cue_beats_journal_cue() {
    let record = venue("Journal of Proceedings");
    let decision = Classifier::default().decide(&record);
    assert_eq!(decision.category, Category::Conference);
    assert_eq!(decision.tier, Tier::ConferenceCue);
}

#[test]
fn test_chapter_title_beats_book_cue() {
    let record = BibliographicRecord::new()
        .with_title("Chapter 7: Sampling")
        .with_publisher("Oxford University Press");
    let decision = Classifier::default().decide(&record);
    assert_eq!(decision.category, Category::BookChapter);
    assert_eq!(decision.tier, Tier::ChapterCue);
}

#[test]
fn test_book_cue_requires_both_tokens() {
    assert_eq!(classify(&venue("Princeton University Press")), Category::Book);
    assert_eq!(classify(&venue("MIT Press")), Category::Other);
    assert_eq!(classify(&venue("Stanford University")), Category::Other);
}

#[test]
fn test_acronyms_match_whole_words_only() {
    let extension = LexiconExtension {
        conference_acronyms: vec!["ic".to_string()],
        ..LexiconExtension::default()
    };
    let classifier = Classifier::new(Lexicon::with_extension(&extension).unwrap());
    assert_eq!(classifier.classify(&venue("Clinic Reports")), Category::Other);
    assert_eq!(classifier.classify(&venue("IC Reports")), Category::Conference);
}

#[test]
fn test_keywords_match_as_substrings() {
    assert_eq!(
        classify(&venue("Annual Meetings of the Society")),
        Category::Conference
    );
    assert_eq!(classify(&venue("Journalism Practice")), Category::Journal);
    assert_eq!(classify(&venue("Trans-Pacific Outlet")), Category::Other);
    assert_eq!(classify(&venue("IEEE Trans. Robotics")), Category::Journal);
}

#[test]
fn test_classification_is_case_insensitive() {
    assert_eq!(
        classify(&venue("proceedings of the acm")),
        classify(&venue("PROCEEDINGS OF THE ACM"))
    );
    assert_eq!(classify(&venue("ICML")), Category::Conference);
}

#[test]
fn test_classification_is_idempotent() {
    let classifier = Classifier::default();
    let record = venue("Workshop on Efficient Systems");
    let first = classifier.decide(&record);
    let second = classifier.decide(&record);
    assert_eq!(first, second);
}

#[test]
fn test_configured_acronym_extends_builtin() {
    let record = venue("IC 2021, Lisbon");
    assert_eq!(classify(&record), Category::Other);

    let extension = LexiconExtension {
        conference_acronyms: vec!["IC".to_string()],
        ..LexiconExtension::default()
    };
    let classifier = Classifier::new(Lexicon::with_extension(&extension).unwrap());
    assert_eq!(classifier.classify(&record), Category::Conference);
    // Built-in cues keep working.
    assert_eq!(classifier.classify(&venue("CVPR")), Category::Conference);
}

#[test]
fn test_venue_display_prefers_structured_fields() {
    let record = BibliographicRecord::new()
        .with_venue_text("Nature 1, 2-3")
        .with_journal_name("  Nature  ");
    assert_eq!(venue_display(&record), "Nature");

    let record = BibliographicRecord::new().with_venue_text("CVPR   2023");
    assert_eq!(venue_display(&record), "CVPR 2023");

    assert_eq!(venue_display(&BibliographicRecord::default()), "");
}
