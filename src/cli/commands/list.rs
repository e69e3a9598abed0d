//! List command - show cache entries or presets

use super::run_blocking;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::engine::{Engine, Source};
use crate::error::SwapResult;
use crate::store::{CacheEntry, Origin};
use crate::ui::{self, UiContext};
use chrono::{DateTime, Utc};
use console::style;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Serialize)]
struct EntryRow {
    #[serde(flatten)]
    entry: CacheEntry,
    modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct PresetRow {
    name: String,
    /// `None` when the preset could not be read
    entries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the list command
pub async fn execute(args: ListArgs, engine: &Arc<Engine>) -> SwapResult<()> {
    let source = args.source();

    if let OutputFormat::Plain = args.format {
        let labels = run_blocking(engine, move |e| e.list_entries(source)).await?;
        for label in labels {
            println!("{}", label);
        }
        return Ok(());
    }

    match source {
        Source::Caches => {
            let rows = run_blocking(engine, entry_rows).await?;
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                _ => print_entry_table(&rows),
            }
        }
        Source::Presets => {
            let rows = run_blocking(engine, preset_rows).await?;
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                _ => print_preset_table(&rows),
            }
        }
    }

    Ok(())
}

fn entry_rows(engine: &Engine) -> SwapResult<Vec<EntryRow>> {
    Ok(engine
        .store()
        .entries()?
        .into_iter()
        .map(|entry| {
            let modified = std::fs::metadata(&entry.path)
                .and_then(|m| m.modified())
                .ok()
                .map(DateTime::<Utc>::from);
            EntryRow { entry, modified }
        })
        .collect())
}

fn preset_rows(engine: &Engine) -> SwapResult<Vec<PresetRow>> {
    Ok(engine
        .presets()
        .list()?
        .into_iter()
        .map(|name| match engine.presets().entries(&name) {
            Ok(entries) => PresetRow {
                name,
                entries: Some(entries.len()),
                error: None,
            },
            Err(e) => {
                warn!("Could not read preset '{}': {}", name, e);
                PresetRow {
                    name,
                    entries: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect())
}

fn print_entry_table(rows: &[EntryRow]) {
    if rows.is_empty() {
        ui::step_info(&UiContext::detect(), "No cache entries found");
        return;
    }

    println!(
        "{:<30} {:<34} {:<14} {:<16}",
        style("NAME").bold(),
        style("HASH").bold(),
        style("LAYER").bold(),
        style("MODIFIED").bold()
    );
    println!("{}", "-".repeat(94));

    for row in rows {
        let layer = match &row.entry.origin {
            Origin::Layer(layer) => layer.to_string(),
            other => other.to_string(),
        };
        let modified = row
            .modified
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<30} {:<34} {:<14} {:<16}",
            row.entry.display_name, row.entry.hash, layer, modified
        );
    }

    println!();
    println!("{} entr{}", rows.len(), if rows.len() == 1 { "y" } else { "ies" });
}

fn print_preset_table(rows: &[PresetRow]) {
    if rows.is_empty() {
        ui::step_info(&UiContext::detect(), "No presets found");
        return;
    }

    println!("{:<30} {:<8}", style("PRESET").bold(), style("ENTRIES").bold());
    println!("{}", "-".repeat(39));
    for row in rows {
        match (row.entries, &row.error) {
            (Some(entries), _) => println!("{:<30} {:<8}", row.name, entries),
            (None, error) => println!(
                "{:<30} {:<8} {}",
                row.name,
                "-",
                style(error.as_deref().unwrap_or("unreadable")).red()
            ),
        }
    }

    println!();
    println!("{} preset(s)", rows.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathsConfig;
    use crate::store::Registry;
    use std::fs;
    use tempfile::TempDir;

    fn engine(temp: &TempDir) -> Engine {
        let paths = PathsConfig {
            preinstalled_dir: temp.path().join("pre"),
            own_dir: temp.path().join("own"),
            presets_dir: temp.path().join("presets"),
            functions_file: temp.path().join("functions.json"),
            live_dir: temp.path().join("live"),
        };
        Engine::new(&paths, Registry::empty())
    }

    #[test]
    fn preset_rows_count_entries() {
        let temp = TempDir::new().unwrap();
        let night = temp.path().join("presets").join("Night");
        fs::create_dir_all(&night).unwrap();
        fs::write(night.join("H1 - X"), "x").unwrap();
        fs::write(night.join("notes.txt"), "n").unwrap();
        fs::create_dir_all(temp.path().join("presets").join("Empty")).unwrap();

        let rows = preset_rows(&engine(&temp)).unwrap();
        let counts: Vec<(&str, Option<usize>)> =
            rows.iter().map(|r| (r.name.as_str(), r.entries)).collect();
        assert_eq!(counts, vec![("Empty", Some(0)), ("Night", Some(1))]);
    }

    #[cfg(unix)]
    #[test]
    fn preset_rows_survive_odd_directory_names() {
        let temp = TempDir::new().unwrap();
        let presets = temp.path().join("presets");
        fs::create_dir_all(presets.join("Good")).unwrap();
        fs::create_dir_all(presets.join("back\\slash")).unwrap();

        let rows = preset_rows(&engine(&temp)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Good");
        assert!(rows[0].error.is_none());
    }
}
