//! Categories command handler.
//!
//! Displays the dataset's categories in order with their member counts.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// Execute the categories command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let set = ctx.load_dataset()?;

    if set.categories.is_empty() {
        println!("Dataset has no categories.");
        return Ok(());
    }

    println!("{:<20} {:<8} First emojis", "Category", "Emojis");
    print_separator(72);

    for category in &set.categories {
        let preview: String = category
            .emojis
            .iter()
            .filter_map(|short_code| set.emojis.get(short_code))
            .filter_map(|emoji| emoji.native())
            .take(10)
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{:<20} {:<8} {}",
            truncate_string(&category.id, 19),
            category.emojis.len(),
            preview
        );
    }

    Ok(())
}
