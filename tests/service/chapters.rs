//! Chapter listing, grouping and ordering.

use super::common::{numbers, sample_service, sample_store};
use carta::{ArticleService, CartaConfig, PageRequest, NO_CHAPTER_LABEL};

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_chapters_in_constitutional_order() {
    assert_eq!(
        sample_service().chapters().unwrap(),
        strings(&[
            "Principios fundamentales",
            "Derechos",
            "Garantías",
            "Otros",
            "Disposiciones transitorias",
        ])
    );
}

#[test]
fn test_sort_chapters_example() {
    let sorted = sample_service().sort_chapters(strings(&[
        "Otros",
        "Derechos",
        "Zeta",
        "Principios fundamentales",
    ]));
    assert_eq!(
        sorted,
        strings(&["Principios fundamentales", "Derechos", "Otros", "Zeta"])
    );
}

#[test]
fn test_sort_chapter_groups_example() {
    let groups = sample_service().sort_chapter_groups(vec![
        ("Zeta".to_string(), vec![5, 2]),
        ("Derechos".to_string(), vec![9]),
    ]);
    let chapters: Vec<&str> = groups.chapters().collect();
    assert_eq!(chapters, vec!["Derechos", "Zeta"]);
    assert_eq!(groups.get("Zeta"), Some(&[5, 2][..]));
}

#[test]
fn test_grouped_page() {
    let grouped = sample_service()
        .grouped_page(&PageRequest::new(1, 20))
        .unwrap();
    let chapters: Vec<&str> = grouped.data.chapters().collect();
    assert_eq!(
        chapters,
        vec![
            "Principios fundamentales",
            "Derechos",
            "Garantías",
            "Otros",
            "Disposiciones transitorias",
            NO_CHAPTER_LABEL,
        ]
    );
    assert_eq!(numbers(grouped.data.get("Derechos").unwrap()), vec![3, 4, 5]);
    assert_eq!(numbers(grouped.data.get(NO_CHAPTER_LABEL).unwrap()), vec![10]);
    assert_eq!(grouped.meta.total, 10);
}

#[test]
fn test_grouped_page_json_keeps_order() {
    let grouped = sample_service()
        .grouped_page(&PageRequest::new(1, 10).with_chapter("Garantías"))
        .unwrap();
    let json = serde_json::to_string(&grouped).unwrap();
    assert!(json.starts_with(r#"{"data":{"Garantías":["#));
    assert!(json.contains(r#""meta":{"total":2"#));
}

#[test]
fn test_configured_table_and_label() {
    let config = CartaConfig {
        chapter_order: strings(&["Otros", "Garantías"]),
        no_chapter_label: "Sin clasificar".to_string(),
        ..CartaConfig::default()
    };
    let service = ArticleService::from_config(sample_store().0, &config).unwrap();
    assert_eq!(
        service.chapters().unwrap(),
        strings(&[
            "Otros",
            "Garantías",
            "Derechos",
            "Disposiciones transitorias",
            "Principios fundamentales",
        ])
    );

    let grouped = service.grouped_page(&PageRequest::new(1, 20)).unwrap();
    assert_eq!(grouped.data.chapters().last(), Some("Sin clasificar"));
}
