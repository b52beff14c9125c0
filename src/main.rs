// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use carta::{load_store, ArticleService, CartaConfig, ImportReport, MemoryStore, PageRequest};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<CartaConfig> {
    let Some(path) = path else {
        return Ok(CartaConfig::default());
    };
    let config = CartaConfig::from_file(path)?;
    config.validate()?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let data = cli
        .data
        .as_deref()
        .context("no data file given; pass --data or set CARTA_DATA")?;
    let (store, report) =
        load_store(data).with_context(|| format!("failed to load {}", data.display()))?;
    let service = ArticleService::from_config(store, &config)?;
    let default_limit = service.policy().bounds().default_items_per_page() as i64;

    match cli.command {
        Commands::List {
            page,
            limit,
            chapter,
            grouped,
            json,
        } => {
            let mut request = PageRequest::new(page, limit.unwrap_or(default_limit));
            request.chapter = chapter;
            if grouped {
                let grouped = service.grouped_page(&request)?;
                if json {
                    print_json(&grouped)?;
                } else {
                    display::print_grouped(&grouped);
                }
            } else {
                let result = service.paginate(&request)?;
                if json {
                    print_json(&result.into_envelope())?;
                } else {
                    display::print_page(&result);
                }
            }
        }
        Commands::Search {
            query,
            page,
            limit,
            json,
        } => {
            let request = PageRequest::new(page, limit.unwrap_or(default_limit)).with_search(query);
            let result = service.paginate(&request)?;
            if json {
                print_json(&result.into_envelope())?;
            } else {
                display::print_page(&result);
            }
        }
        Commands::Chapters { json } => {
            let chapters = service.chapters()?;
            if json {
                print_json(&chapters)?;
            } else {
                display::print_chapters(&chapters);
            }
        }
        Commands::Article {
            number,
            document,
            json,
        } => {
            let articles = service.find_by_article_number(number, document.as_deref())?;
            if json {
                print_json(&articles)?;
            } else {
                display::print_articles(&articles);
            }
        }
        Commands::Inspect => inspect(&service, &report),
    }

    Ok(())
}

fn inspect(service: &ArticleService<MemoryStore>, report: &ImportReport) {
    let groups = service
        .chapter_order()
        .group_by_chapter(service.fetcher().articles().cloned());
    let counts: Vec<(String, usize)> = groups
        .iter()
        .map(|(chapter, articles)| (chapter.to_string(), articles.len()))
        .collect();
    display::print_inspect(report, &counts);
}
