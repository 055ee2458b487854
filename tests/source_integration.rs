//! Integration tests for the export readers and batch pipeline.
//!
//! These feed realistic Scholar-profile JSON and BibTeX documents through
//! `read_publications` and `classify_batch`.

use pubclass_core::{
    Category, Classifier, InputFormat, SourceError, classify_batch, read_publications,
};

const SCHOLAR_PROFILE: &str = r#"{
  "name": "A. Researcher",
  "publications": [
    {
      "bib": {
        "title": "Fast Vision Transformers",
        "author": "A Researcher and B Coauthor",
        "pub_year": "2023",
        "citation": "Proceedings of the IEEE/CVF Conference on Computer Vision, 1-10",
        "ENTRYTYPE": "inproceedings"
      },
      "num_citations": 42,
      "pub_url": "https://example.org/fvt"
    },
    {
      "bib": {
        "title": "A Survey of Sampling",
        "author": "A Researcher",
        "pub_year": 2021,
        "journal": "Journal of Machine Learning Research"
      },
      "num_citations": "7",
      "eprint_url": "https://arxiv.org/abs/2101.00001"
    },
    {
      "bib": {
        "title": "Untitled Draft",
        "pub_year": "forthcoming"
      }
    },
    {
      "bib": {
        "title": "Chapter 4: Graphs",
        "citation": "Handbook of Network Science"
      },
      "pub_url": "not a url"
    }
  ]
}"#;

const BIBTEX_DATABASE: &str = r#"
@string{jmlr = "Journal of Machine Learning Research"}

@inproceedings{smith2023,
  title = {Fast {Vision} Transformers},
  author = {Smith, Jane and Doe, John},
  booktitle = {Proceedings of CVPR},
  year = {2023},
  doi = {10.1234/cvpr.2023.1}
}

@article{lee2021,
  title = "A Survey of Sampling",
  author = "Lee, Ann",
  journal = {Annals of Statistics},
  year = 2021
}

@misc{note2020,
  title = {Lecture notes},
  howpublished = {University of Somewhere Press}
}

@article{broken,
  title = {Missing brace
"#;

#[test]
fn test_scholar_profile_end_to_end() {
    let batch = read_publications(SCHOLAR_PROFILE, InputFormat::Auto).unwrap();
    assert_eq!(batch.total_found, 4);
    assert_eq!(batch.len(), 3, "the non-numeric year entry is skipped");
    assert_eq!(batch.skipped_count(), 1);
    assert!(batch.skipped[0].contains("#3"), "got: {}", batch.skipped[0]);

    let report = classify_batch(batch, &Classifier::default());
    let categories: Vec<_> = report.records.iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![Category::Conference, Category::Journal, Category::BookChapter]
    );

    let first = &report.records[0];
    assert_eq!(first.title, "Fast Vision Transformers");
    assert_eq!(first.year, Some(2023));
    assert_eq!(first.citation_count, 42);
    assert_eq!(first.link, "https://example.org/fvt");

    let second = &report.records[1];
    assert_eq!(second.venue, "Journal of Machine Learning Research");
    assert_eq!(second.citation_count, 7);
    assert_eq!(second.link, "https://arxiv.org/abs/2101.00001");

    assert_eq!(report.records[2].link, "", "invalid links are blanked");
}

#[test]
fn test_scholar_output_json_shape() {
    let batch = read_publications(SCHOLAR_PROFILE, InputFormat::Scholar).unwrap();
    let report = classify_batch(batch, &Classifier::default());
    let json = serde_json::to_value(&report.records).unwrap();

    let first = &json[0];
    assert_eq!(first["title"], "Fast Vision Transformers");
    assert_eq!(first["category"], "Conference");
    assert_eq!(first["citedBy"], 42);
    assert_eq!(first["year"], 2023);
    assert_eq!(json[2]["category"], "Book Chapter");
}

#[test]
fn test_bibtex_database_end_to_end() {
    let batch = read_publications(BIBTEX_DATABASE, InputFormat::Auto).unwrap();
    assert_eq!(batch.len(), 3);
    assert_eq!(batch.skipped_count(), 1, "unterminated entry is reported");

    let report = classify_batch(batch, &Classifier::default());
    let first = &report.records[0];
    assert_eq!(first.category, Category::Conference);
    assert_eq!(first.title, "Fast Vision Transformers");
    assert_eq!(first.link, "https://doi.org/10.1234/cvpr.2023.1");
    assert_eq!(first.year, Some(2023));

    assert_eq!(report.records[1].category, Category::Journal);
    assert_eq!(report.records[1].venue, "Annals of Statistics");

    let misc = &report.records[2];
    assert_eq!(misc.category, Category::Book);
    assert_eq!(misc.venue, "University of Somewhere Press");

    assert_eq!(report.count(Category::Conference), 1);
    assert_eq!(report.count(Category::Other), 0);
}

#[test]
fn test_explicit_format_overrides_sniffing() {
    let err = read_publications(BIBTEX_DATABASE, InputFormat::Scholar).unwrap_err();
    assert!(matches!(err, SourceError::InvalidJson { .. }), "got: {err:?}");
}

#[test]
fn test_unrecognized_input_is_rejected() {
    let err = read_publications("title,year\nfoo,2020\n", InputFormat::Auto).unwrap_err();
    assert!(
        matches!(err, SourceError::UnrecognizedFormat { .. }),
        "got: {err:?}"
    );
    assert!(err.to_string().contains("Suggestion"), "got: {err}");
}

#[test]
fn test_empty_input_is_rejected() {
    let err = read_publications("  \n", InputFormat::Auto).unwrap_err();
    assert!(matches!(err, SourceError::EmptyInput), "got: {err:?}");
}

#[test]
fn test_flat_record_list_is_accepted() {
    let input = r#"[
      {"title": "Flat", "venue": "NeurIPS 2022", "year": 2022, "citedBy": 3, "link": "https://x.org/p"}
    ]"#;
    let batch = read_publications(input, InputFormat::Auto).unwrap();
    let report = classify_batch(batch, &Classifier::default());
    assert_eq!(report.records[0].category, Category::Conference);
    assert_eq!(report.records[0].citation_count, 3);
    assert_eq!(report.records[0].link, "https://x.org/p");
}
