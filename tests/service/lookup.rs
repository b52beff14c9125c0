//! Article lookup by number.

use super::common::{numbers, sample_service, SAMPLE_DOCUMENT};
use carta::{ArticleService, FetchError, LookupError, MemoryStore};

#[test]
fn test_lookup_in_document() {
    let found = sample_service()
        .find_by_article_number(3, Some(SAMPLE_DOCUMENT))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title.as_deref(), Some("Derecho a la vida"));
    assert_eq!(found[0].concordances[0].referenced_law, "Código Penal");
    assert_eq!(found[0].concordances[0].referenced_articles, vec!["103", "104"]);
}

#[test]
fn test_missing_article_in_document() {
    let result = sample_service().find_by_article_number(300, Some(SAMPLE_DOCUMENT));
    match result {
        Err(LookupError::NotFound {
            document_id,
            number,
        }) => {
            assert_eq!(document_id, SAMPLE_DOCUMENT);
            assert_eq!(number, 300);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_missing_article_without_document_is_empty() {
    let found = sample_service().find_by_article_number(300, None).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_non_positive_numbers() {
    let service = sample_service();
    assert!(service.find_by_article_number(0, None).unwrap().is_empty());
    assert!(service
        .find_by_article_number(-1, Some(SAMPLE_DOCUMENT))
        .unwrap()
        .is_empty());
}

#[test]
fn test_first_import_wins_for_duplicate_numbers() {
    let found = sample_service().find_by_article_number(4, None).unwrap();
    assert_eq!(numbers(&found), vec![4]);
    assert_eq!(found[0].title.as_deref(), Some("Igualdad"));
}

#[test]
fn test_lookup_across_documents() {
    let mut store = MemoryStore::new();
    store.insert(carta::Article::new("ley-a", 12, "uno"));
    store.insert(carta::Article::new("ley-b", 12, "dos"));
    let service = ArticleService::new(store);

    let found = service.find_by_article_number(12, None).unwrap();
    let documents: Vec<&str> = found.iter().map(|a| a.document_id.as_str()).collect();
    assert_eq!(documents, vec!["ley-a", "ley-b"]);
}

#[test]
fn test_fetch_error_message() {
    let error = LookupError::from(FetchError::Backend("timeout".to_string()));
    assert_eq!(error.to_string(), "data source error: timeout");
}
