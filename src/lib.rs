//! Search, pagination and chapter ordering for constitutional-law articles.
//!
//! This crate sits between a caller's raw query parameters and whatever
//! stores the articles. It validates search terms, clamps paging parameters,
//! picks the right fetch call and orders chapters for display.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  query.rs   │────▶│ pagination.rs │────▶│  fetch/*.rs  │
//! │ (normalize, │     │ (clamp, pick  │     │ (ArticleFetc-│
//! │  min length)│     │  fetch call)  │     │  her, Memory)│
//! └─────────────┘     └───────────────┘     └──────────────┘
//!        │                   │                     │
//!        ▼                   ▼                     ▼
//! ┌──────────────────────────────────────────────────────┐
//! │                     service.rs                        │
//! │  (ArticleService: paginate, chapters, grouped_page,   │
//! │   find_by_article_number, quick_search)               │
//! └──────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!                   ┌────────────────┐
//!                   │  chapters.rs   │
//!                   │ (ChapterOrder) │
//!                   └────────────────┘
//! ```
//!
//! | Module       | Key Properties                                      |
//! |--------------|-----------------------------------------------------|
//! | `query`      | Trimmed length < minimum never reaches the fetcher  |
//! | `pagination` | `page >= 1`, size clamped, `pages = ceil(total/size)` |
//! | `chapters`   | Total order: table position, then code points       |
//! | `contracts`  | Debug assertions for all of the above               |
//!
//! # Usage
//!
//! ```
//! use carta::{Article, ArticleService, MemoryStore, PageRequest};
//!
//! let store = MemoryStore::from_articles(vec![
//!     Article::new("constitucion-2015", 1, "Principios del Estado").with_chapter("Otros"),
//!     Article::new("constitucion-2015", 2, "Derecho a la vida").with_chapter("Derechos"),
//! ]);
//! let service = ArticleService::new(store);
//!
//! let page = service.paginate(&PageRequest::new(1, 20).with_search("vida")).unwrap();
//! assert_eq!(page.total, 1);
//!
//! assert_eq!(service.chapters().unwrap(), vec!["Derechos", "Otros"]);
//! ```

pub mod chapters;
pub mod config;
pub mod contracts;
pub mod error;
pub mod fetch;
pub mod import;
pub mod pagination;
pub mod query;
pub mod service;
pub mod testing;
pub mod types;
pub mod util;

pub use chapters::{ChapterGroups, ChapterOrder, DEFAULT_CHAPTER_ORDER, NO_CHAPTER_LABEL};
pub use config::{
    CartaConfig, PaginationBounds, DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE, MIN_ITEMS_PER_PAGE,
    MIN_SEARCH_LENGTH,
};
pub use error::{ConfigError, FetchError, ImportError, LookupError};
pub use fetch::{ArticleFetcher, MemoryStore};
pub use import::{import_into, load_document, load_store, ImportDocument, ImportReport};
pub use pagination::{total_pages, PaginationPolicy};
pub use query::{NormalizedQuery, SearchQueryNormalizer};
pub use service::{ArticleService, GroupedPage, QUICK_SEARCH_LIMIT};
pub use types::{
    Article, Concordance, FetchedPage, PageEnvelope, PageMeta, PageRequest, PageResult, PageWindow,
};
pub use util::normalize::normalize;
