//! `--list`: print the catalog grouped by isle without starting the TUI.

use color_eyre::Result;

use crate::models::Boss;
use crate::preferences::PreferenceStore;
use crate::startup::{prepare, StartupConfig};
use crate::views::{group_by_isle, star_render_plan};

/// Line width for separators.
const LINE_WIDTH: usize = 48;

/// Handle the --list command.
pub fn handle_list_command(config: &StartupConfig) -> Result<()> {
    let prepared = prepare(config)?;
    let runtime = tokio::runtime::Runtime::new()?;

    let bosses = runtime.block_on(prepared.catalog.fetch_bosses())?;
    print!("{}", format_catalog(&bosses, &prepared.preferences));
    Ok(())
}

/// Render the catalog as plain text, one section per isle.
///
/// ```text
/// ISLE 1
/// ════════════════════════════════════════════════
///   ★ The Root Pack                 ●●○○○
/// ```
pub fn format_catalog(bosses: &[Boss], preferences: &PreferenceStore) -> String {
    if bosses.is_empty() {
        return "No bosses found\n".to_string();
    }

    let groups = group_by_isle(bosses);
    let mut out = String::new();

    for (isle, bucket) in groups.iter() {
        out.push_str(&isle.title());
        out.push('\n');
        out.push_str(&"═".repeat(LINE_WIDTH));
        out.push('\n');
        if bucket.is_empty() {
            out.push_str("  (none)\n");
        }
        for boss in bucket {
            let marker = if preferences.is_favorite(boss.id) { '★' } else { ' ' };
            out.push_str(&format!(
                "  {} {:<30} {}\n",
                marker,
                boss.name,
                star_text(boss)
            ));
        }
        out.push('\n');
    }

    out
}

/// Difficulty as `●` full, `◐` half and `○` empty slots.
fn star_text(boss: &Boss) -> String {
    let plan = star_render_plan(boss.difficulty);
    let mut text = String::new();
    text.extend(std::iter::repeat('●').take(usize::from(plan.full)));
    text.extend(std::iter::repeat('◐').take(usize::from(plan.half)));
    text.extend(std::iter::repeat('○').take(usize::from(plan.empty)));
    text
}
