// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the carta command-line interface.
//!
//! Every subcommand loads a constitution export (`--data` or `CARTA_DATA`)
//! into memory and answers one question about it: a page of articles, a
//! search, the chapter list, a single article, or a summary of the file.
//! `--json` switches from the boxed terminal view to the `{data, meta}`
//! envelope an HTTP client would get.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "carta",
    about = "Browse, search and organize constitutional-law articles",
    version
)]
pub struct Cli {
    /// Constitution export to load (JSON)
    #[arg(long, env = "CARTA_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Configuration file (JSON); defaults apply when omitted
    #[arg(long, env = "CARTA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "carta=trace"
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List articles page by page
    List {
        /// Page number (values below 1 mean 1)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Articles per page (clamped to the configured bounds)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Only articles of this chapter
        #[arg(short, long)]
        chapter: Option<String>,

        /// Group the page by chapter
        #[arg(long)]
        grouped: bool,

        /// Print JSON instead of the terminal view
        #[arg(long)]
        json: bool,
    },

    /// Full-text search over titles, content and chapters
    Search {
        /// Search query (at least two characters after trimming)
        query: String,

        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,

        #[arg(long)]
        json: bool,
    },

    /// List chapters in constitutional order
    Chapters {
        #[arg(long)]
        json: bool,
    },

    /// Show one article by number
    Article {
        /// Article number
        #[arg(allow_negative_numbers = true)]
        number: i64,

        /// Restrict to one document; a miss is then an error
        #[arg(short, long)]
        document: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Summarize the data file: import counts and articles per chapter
    Inspect,
}
