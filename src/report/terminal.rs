use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{AnalysisSummary, Ingredient, SafetyStatus};

/// Render a colored terminal report.
pub fn render(
    ingredients: &[Ingredient],
    summary: &AnalysisSummary,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    if quiet {
        println!(
            "Total: {}  Harmful: {}  Safe: {}  Neutral: {}",
            summary.total,
            summary.harmful.to_string().red(),
            summary.safe.to_string().green(),
            summary.neutral.to_string().yellow(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}\n",
        "ingredient-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );

    let harmful_names = summarize_names(ingredients, SafetyStatus::Harmful);
    let safe_names = summarize_names(ingredients, SafetyStatus::Safe);
    let neutral_names = summarize_names(ingredients, SafetyStatus::Neutral);

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Ingredients checked : {}", summary.total)
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Harmful         : {:>4}  {}",
            "✗".red(),
            summary.harmful,
            harmful_names
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Safe            : {:>4}  {}",
            "✓".green(),
            summary.safe,
            safe_names
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Neutral         : {:>4}  {}",
            "⚠".yellow(),
            summary.neutral,
            neutral_names
        )
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if summary.harmful > 0 {
        println!(
            " {} Ingredients requiring attention:\n",
            "[HARMFUL]".red().bold()
        );
        render_table(ingredients, SafetyStatus::Harmful);
        println!();
    }

    if summary.neutral > 0 {
        println!(
            " {} Ingredients with mixed evidence:\n",
            "[NEUTRAL]".yellow().bold()
        );
        render_table(ingredients, SafetyStatus::Neutral);
        println!();
    }

    if verbose && summary.safe > 0 {
        println!(" {} Safe ingredients:\n", "[SAFE]".green().bold());
        render_table(ingredients, SafetyStatus::Safe);
        println!();
    }

    if summary.overall_safe() {
        println!(" {} No harmful ingredients detected\n", "✓".green().bold());
    } else {
        println!(
            " {} This product contains harmful ingredients\n",
            "✗".red().bold()
        );
    }

    Ok(())
}

fn render_table(ingredients: &[Ingredient], status_filter: SafetyStatus) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Ingredient").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
        ]);

    for ingredient in ingredients.iter().filter(|i| i.status == status_filter) {
        let (status_str, status_color) = match ingredient.status {
            SafetyStatus::Safe => ("✓ safe", Color::Green),
            SafetyStatus::Harmful => ("✗ harmful", Color::Red),
            SafetyStatus::Neutral => ("⚠ neutral", Color::Yellow),
        };

        table.add_row(vec![
            Cell::new(&ingredient.name),
            Cell::new(status_str)
                .fg(status_color)
                .set_alignment(CellAlignment::Center),
            Cell::new(ingredient.source.to_string()),
            Cell::new(&ingredient.description),
        ]);
    }

    println!("{}", table);
}

/// Up to three ingredient names for a status, for the summary box.
fn summarize_names(ingredients: &[Ingredient], status: SafetyStatus) -> String {
    let names: Vec<&str> = ingredients
        .iter()
        .filter(|i| i.status == status)
        .take(3)
        .map(|i| i.name.as_str())
        .collect();

    if names.is_empty() {
        String::new()
    } else {
        format!("[{}]", names.join(", "))
    }
}
