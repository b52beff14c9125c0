//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;

use carta::{load_store, ArticleService, ImportReport, MemoryStore};
use tempfile::NamedTempFile;

// Re-export canonical test utilities from carta::testing
pub use carta::testing::{
    make_article, make_articles, numbers, FetchCall, RecordingFetcher, TEST_DOCUMENT,
};

/// Document id the sample export imports under.
pub const SAMPLE_DOCUMENT: &str = "constitucion-politica-1991";

/// A small constitution export.
///
/// Ten articles across the four canonical chapters, one unlisted chapter and
/// one article without a chapter. Article 4 appears twice; the second copy
/// is skipped on import.
pub const SAMPLE_EXPORT: &str = r#"{
    "name": "Constitución Política",
    "year": 1991,
    "last_modified": "2023-07-01",
    "total_articles": 11,
    "articles": [
        {"number": 1, "title": "Estado constitucional", "chapter": "Principios fundamentales",
         "content": "Colombia es un Estado social de derecho, organizado en forma de República unitaria."},
        {"number": 2, "title": "Fines del Estado", "chapter": "Principios fundamentales",
         "content": "Son fines esenciales del Estado servir a la comunidad y garantizar la efectividad de los principios."},
        {"number": 3, "title": "Derecho a la vida", "chapter": "Derechos",
         "content": "El derecho a la vida es inviolable. No habrá pena de muerte.",
         "concordancias": [{"law": "Código Penal", "articles": "103, 104"}]},
        {"number": 4, "title": "Igualdad", "chapter": "Derechos",
         "content": "Todas las personas nacen libres e iguales ante la ley."},
        {"number": 5, "title": "Libertad de conciencia", "chapter": "Derechos",
         "content": "Se garantiza la libertad de conciencia."},
        {"number": 6, "title": "Hábeas corpus", "chapter": "Garantías",
         "content": "Quien estuviere privado de su libertad tendrá derecho a invocar ante cualquier autoridad judicial el Hábeas Corpus."},
        {"number": 7, "title": "Acción de tutela", "chapter": "Garantías",
         "content": "Toda persona tendrá acción de tutela para reclamar ante los jueces la protección inmediata de sus derechos."},
        {"number": 8, "title": "Símbolos patrios", "chapter": "Otros",
         "content": "Son símbolos de la patria la bandera, el escudo y el himno nacional."},
        {"number": 9, "title": "Transición", "chapter": "Disposiciones transitorias",
         "content": "Las disposiciones transitorias rigen hasta la expedición de las leyes."},
        {"number": 10, "content": "Artículo sin capítulo asignado."},
        {"number": 4, "content": "Copia repetida del artículo cuatro."}
    ]
}"#;

/// Write `json` to a temporary file.
pub fn write_export(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write export");
    file
}

/// Import the sample export through the file loader.
pub fn sample_store() -> (MemoryStore, ImportReport) {
    let file = write_export(SAMPLE_EXPORT);
    load_store(file.path()).expect("Failed to load sample export")
}

/// A service over the sample export with default configuration.
pub fn sample_service() -> ArticleService<MemoryStore> {
    ArticleService::new(sample_store().0)
}
