// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the carta CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `CARTA_THEME` first, then `COLORFGBG`, then macOS system appearance, then
//! defaults to dark. `NO_COLOR` and non-TTY stdout turn colors off entirely,
//! so piped output stays plain.
//!
//! # Theme detection order
//!
//! 1. `CARTA_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use carta::{Article, GroupedPage, ImportReport, PageResult};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("CARTA_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_YELLOW);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off
fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` characters, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// Greedy word wrap of plain text to `width` characters per line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() { 0 } else { 1 } + word.chars().count();
        if !line.is_empty() && line.chars().count() + needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (b, reset) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{}{}{}{}│{}", b, reset, content, " ".repeat(pad), b, reset);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (b, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}┌{}{}{}{}┐{}", b, reset, label_part, b, "─".repeat(remaining), reset);
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let (b, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}├{}{}{}{}┤{}", b, reset, label_part, b, "─".repeat(remaining), reset);
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (b, reset) = border(GRAY);
    println!("{}└{}┘{}", b, "─".repeat(BOX_WIDTH), reset);
}

/// Print double-line header: ╔══════════════════╗
pub fn double_header() {
    let (b, reset) = border(BLUE);
    println!("{}╔{}╗{}", b, "═".repeat(BOX_WIDTH), reset);
}

/// Print double-line divider: ╠══════════════════╣
pub fn double_divider() {
    let (b, reset) = border(BLUE);
    println!("{}╠{}╣{}", b, "═".repeat(BOX_WIDTH), reset);
}

/// Print double-line footer: ╚══════════════════╝
pub fn double_footer() {
    let (b, reset) = border(BLUE);
    println!("{}╚{}╝{}", b, "═".repeat(BOX_WIDTH), reset);
}

/// Print content line inside a double box: ║ content          ║
pub fn row_double(content: &str) {
    let (b, reset) = border(BLUE);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}║{}{}{}{}║{}", b, reset, content, " ".repeat(pad), b, reset);
}

/// Print centered title with bold
pub fn title(text: &str) {
    let (b, reset) = border(BLUE);
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!(
        "{}║{}{}{}{}{}║{}",
        b,
        reset,
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad),
        b,
        reset
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// "Art. 12" badge, right-aligned to three digits.
pub fn article_badge(number: u32) -> String {
    themed(YELLOW, &[BOLD], &format!("Art. {:>3}", number))
}

/// One list line: badge plus title, or the start of the content.
pub fn article_line(article: &Article) -> String {
    let badge = article_badge(article.article_number);
    let text = article.title.as_deref().unwrap_or(&article.content);
    // " Art. 123  " is 11 columns
    let room = BOX_WIDTH.saturating_sub(12);
    format!(" {}  {}", badge, truncate(text.trim(), room))
}

/// "page 2/3 · 23 articles · 10 per page".
pub fn page_summary(current_page: i64, pages: usize, total: usize, items_per_page: usize) -> String {
    let noun = if total == 1 { "article" } else { "articles" };
    format!(
        " page {}/{} · {} {} · {} per page",
        current_page,
        pages,
        themed(GREEN, &[BOLD], &total.to_string()),
        noun,
        items_per_page
    )
}

fn nav_hint(has_previous: bool, has_next: bool) -> Option<String> {
    match (has_previous, has_next) {
        (false, false) => None,
        (true, false) => Some(" ◂ previous".to_string()),
        (false, true) => Some(" next ▸".to_string()),
        (true, true) => Some(" ◂ previous · next ▸".to_string()),
    }
}

fn empty_row() {
    row(&themed(GRAY, &[DIM], " no articles"));
}

/// Boxed page of articles.
pub fn print_page(result: &PageResult) {
    match &result.search_term {
        Some(term) => section_top(&format!("SEARCH {}", themed(BRIGHT_YELLOW, &[], &format!("{:?}", term)))),
        None => section_top("ARTICLES"),
    }
    if result.items.is_empty() {
        empty_row();
    }
    for article in &result.items {
        row(&article_line(article));
    }
    section_mid("PAGE");
    row(&page_summary(
        result.current_page,
        result.pages,
        result.total,
        result.items_per_page,
    ));
    if let Some(hint) = nav_hint(result.has_previous_page(), result.has_next_page()) {
        row(&themed(GRAY, &[], &hint));
    }
    section_bot();
}

/// Boxed page, one section per chapter.
pub fn print_grouped(page: &GroupedPage) {
    if page.data.is_empty() {
        section_top("ARTICLES");
        empty_row();
    }
    for (i, (chapter, articles)) in page.data.iter().enumerate() {
        let label = themed(MAGENTA, &[BOLD], chapter);
        if i == 0 {
            section_top(&label);
        } else {
            section_mid(&label);
        }
        for article in articles {
            row(&article_line(article));
        }
    }
    let meta = &page.meta;
    section_mid("PAGE");
    row(&page_summary(
        meta.current_page,
        meta.pages,
        meta.total,
        meta.items_per_page,
    ));
    if let Some(hint) = nav_hint(meta.has_previous_page, meta.has_next_page) {
        row(&themed(GRAY, &[], &hint));
    }
    section_bot();
}

/// Numbered chapter list.
pub fn print_chapters(chapters: &[String]) {
    section_top("CHAPTERS");
    if chapters.is_empty() {
        row(&themed(GRAY, &[DIM], " no chapters"));
    }
    for (i, chapter) in chapters.iter().enumerate() {
        row(&format!(
            " {:>2}. {}",
            i + 1,
            themed(MAGENTA, &[], &truncate(chapter, BOX_WIDTH - 6))
        ));
    }
    section_bot();
}

/// Full article cards.
pub fn print_articles(articles: &[Article]) {
    if articles.is_empty() {
        println!("{}", themed(GRAY, &[], "No matching article."));
        return;
    }
    for article in articles {
        double_header();
        title(&format!("Artículo {}", article.article_number));
        double_divider();
        row_double(&format!(" {} {}", themed(GRAY, &[], "document"), article.document_id));
        if let Some(chapter) = article.chapter_label() {
            row_double(&format!(" {}  {}", themed(GRAY, &[], "chapter"), themed(MAGENTA, &[], chapter)));
        }
        if let Some(heading) = &article.title {
            row_double(&format!("    {}  {}", themed(GRAY, &[], "title"), truncate(heading, BOX_WIDTH - 12)));
        }
        double_divider();
        for line in wrap(&article.content, BOX_WIDTH - 2) {
            row_double(&format!(" {}", line));
        }
        if !article.concordances.is_empty() {
            double_divider();
            for concordance in &article.concordances {
                let refs = concordance.referenced_articles.join(", ");
                let line = format!("{}: {}", concordance.referenced_law, refs);
                row_double(&format!(" {} {}", themed(CYAN, &[], "↳"), truncate(&line, BOX_WIDTH - 4)));
            }
        }
        double_footer();
    }
}

/// Import counts and per-chapter totals of the loaded data file.
pub fn print_inspect(report: &ImportReport, chapter_counts: &[(String, usize)]) {
    section_top("DOCUMENT");
    row(&format!(" {}  {}", pad_right(&themed(GRAY, &[], "id"), 9), report.document_id));
    row(&format!(
        " {}  {}",
        pad_right(&themed(GRAY, &[], "imported"), 9),
        themed(GREEN, &[BOLD], &report.imported.to_string())
    ));
    row(&format!(
        " {}  {}",
        pad_right(&themed(GRAY, &[], "skipped"), 9),
        themed(YELLOW, &[], &report.skipped.to_string())
    ));
    section_mid("CHAPTERS");
    for (chapter, count) in chapter_counts {
        let name = pad_right(&truncate(chapter, 64), 66);
        row(&format!(" {}{:>6}", themed(MAGENTA, &[], &name), count));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
