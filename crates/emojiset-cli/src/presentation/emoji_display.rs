//! Emoji and dataset display utilities for CLI output.

use emojiset_core::{DatasetStats, Emoji, Issue, Keyword};

use super::tables::{format_optional, print_separator};

/// Display one emoji with its skins and the aliases pointing at it.
pub fn display_emoji(short_code: &str, emoji: &Emoji, aliases: &[&str]) {
    println!("{} {}", emoji.native().unwrap_or(" "), emoji.name);
    println!("  Short-code: {short_code}");
    if emoji.id != short_code {
        println!("  Id: {}", emoji.id);
    }
    if !aliases.is_empty() {
        println!("  Aliases: {}", aliases.join(", "));
    }
    println!("  Version: {}", emoji.version);

    let text: Vec<&str> = emoji.text_keywords().collect();
    let other = emoji
        .keywords
        .iter()
        .filter(|k| matches!(k, Keyword::Other(_)))
        .count();
    if text.is_empty() {
        println!("  Keywords: --");
    } else {
        println!("  Keywords: {}", text.join(", "));
    }
    if other > 0 {
        println!("  Non-text keywords: {other}");
    }

    if let Some(emoticons) = &emoji.emoticons {
        println!("  Emoticons: {}", emoticons.join(" "));
    }

    println!();
    println!("  {:<4} {:<32} {:<5} {:<5}", "", "Unified", "X", "Y");
    print_separator(50);
    for skin in &emoji.skins {
        println!(
            "  {:<4} {:<32} {:<5} {:<5}",
            skin.native,
            skin.unified,
            format_optional(skin.x, "--"),
            format_optional(skin.y, "--")
        );
    }
}

/// Display dataset statistics in `key = value` format.
pub fn display_stats(stats: &DatasetStats) {
    println!("categories = {}", stats.categories);
    println!("emojis = {}", stats.emojis);
    println!("aliases = {}", stats.aliases);
    println!("skins = {}", stats.skins);
    println!("sheet_capacity = {}", stats.sheet_capacity);
}

/// Display validation issues, one per line.
pub fn display_issues(issues: &[Issue]) {
    for issue in issues {
        println!("  - {issue}");
    }
}
