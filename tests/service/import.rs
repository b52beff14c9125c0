//! Loading exports from disk.

use super::common::{sample_store, write_export, SAMPLE_DOCUMENT, SAMPLE_EXPORT};
use carta::{import_into, load_document, load_store, MemoryStore};

#[test]
fn test_sample_report() {
    let (store, report) = sample_store();
    assert_eq!(report.document_id, SAMPLE_DOCUMENT);
    assert_eq!(report.imported, 10);
    assert_eq!(report.skipped, 1);
    assert_eq!(store.len(), 10);
}

#[test]
fn test_report_json() {
    let (_, report) = sample_store();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["documentId"], SAMPLE_DOCUMENT);
    assert_eq!(json["imported"], 10);
}

#[test]
fn test_importing_twice_skips_everything() {
    let file = write_export(SAMPLE_EXPORT);
    let (mut store, _) = load_store(file.path()).unwrap();
    let report = import_into(&mut store, load_document(file.path()).unwrap());
    assert_eq!(report.imported, 0);
    assert_eq!(report.skipped, 11);
    assert_eq!(store.len(), 10);
}

#[test]
fn test_two_documents_share_a_store() {
    let mut store = MemoryStore::new();
    let first = write_export(r#"{"name": "Ley A", "year": 2000, "articles": [{"number": 1, "content": "a"}]}"#);
    let second = write_export(r#"{"name": "Ley B", "year": 2000, "articles": [{"number": 1, "content": "b"}]}"#);
    import_into(&mut store, load_document(first.path()).unwrap());
    let report = import_into(&mut store, load_document(second.path()).unwrap());
    assert_eq!(report.imported, 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_missing_fields_default() {
    let file = write_export(r#"{"articles": [{"number": 5}]}"#);
    let document = load_document(file.path()).unwrap();
    assert_eq!(document.name, "Unknown");
    assert_eq!(document.document_id(), "unknown");
    assert_eq!(document.articles[0].content, "");
}

#[test]
fn test_article_without_number_is_skipped() {
    let file = write_export(
        r#"{"name": "Ley", "articles": [{"content": "x"}, {"number": "4", "content": "y"}]}"#,
    );
    let (store, report) = load_store(file.path()).unwrap();
    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped, 1);
    assert!(store.contains("ley", 4));
}
