//! `films` command: aggregate once and print.

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;
use serde_json::Value;

use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::Config;

/// Maximum actor names listed per row before eliding.
const MAX_NAMES: usize = 3;

#[derive(Args, Debug)]
pub struct FilmsArgs {}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct FilmsOutput {
    pub films: Vec<Value>,
}

fn text<'a>(film: &'a Value, key: &str) -> &'a str {
    film.get(key).and_then(Value::as_str).unwrap_or("-")
}

fn cast_summary(film: &Value) -> String {
    let actors = film
        .get("actors")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    if actors.is_empty() {
        return "-".to_string();
    }

    let names: Vec<&str> = actors
        .iter()
        .take(MAX_NAMES)
        .filter_map(|a| a.get("name").and_then(Value::as_str))
        .collect();
    let mut summary = names.join(", ");
    if actors.len() > MAX_NAMES {
        summary.push_str(&format!(" (+{})", actors.len() - MAX_NAMES));
    }
    summary
}

impl CommandOutput for FilmsOutput {
    fn to_human(&self) -> String {
        if self.films.is_empty() {
            return "No films found.".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Title").add_attribute(Attribute::Bold),
                Cell::new("Year").add_attribute(Attribute::Bold),
                Cell::new("Director").add_attribute(Attribute::Bold),
                Cell::new("Score").add_attribute(Attribute::Bold),
                Cell::new("Cast").add_attribute(Attribute::Bold),
            ]);

        for film in &self.films {
            table.add_row(vec![
                Cell::new(truncate(text(film, "title"), 40)),
                Cell::new(text(film, "release_date")),
                Cell::new(text(film, "director")),
                Cell::new(text(film, "rt_score")),
                Cell::new(cast_summary(film)),
            ]);
        }

        format!("{table}\n{} film(s)", self.films.len())
    }

    fn to_json(&self) -> Value {
        Value::Array(self.films.clone())
    }
}

pub async fn execute(_args: FilmsArgs, config: Config, json_mode: bool) -> Result<()> {
    let movies = super::build_movie_service(&config)?;
    let films = movies
        .list_movies()
        .await
        .context("Failed to aggregate films")?;

    output(&FilmsOutput { films }, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cast_summary_elides_long_casts() {
        let film = json!({
            "actors": [
                { "name": "Pazu" }, { "name": "Sheeta" }, { "name": "Dola" },
                { "name": "Muska" }, { "name": "Uncle Pom" }
            ]
        });
        assert_eq!(cast_summary(&film), "Pazu, Sheeta, Dola (+2)");
        assert_eq!(cast_summary(&json!({ "actors": [] })), "-");
    }

    #[test]
    fn test_human_output_lists_titles() {
        let out = FilmsOutput {
            films: vec![json!({
                "title": "Castle in the Sky",
                "release_date": "1986",
                "director": "Hayao Miyazaki",
                "rt_score": "95",
                "actors": [{ "name": "Pazu" }]
            })],
        };
        let human = out.to_human();
        assert!(human.contains("Castle in the Sky"));
        assert!(human.contains("Pazu"));
        assert!(human.contains("1 film(s)"));
    }

    #[test]
    fn test_empty_output() {
        let out = FilmsOutput { films: vec![] };
        assert_eq!(out.to_human(), "No films found.");
        assert_eq!(out.to_json(), json!([]));
    }
}
