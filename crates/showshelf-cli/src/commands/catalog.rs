use catalog_core::seed;
use catalog_models::Content;
use clap::ValueEnum;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;

use crate::output::{Output, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    Movie,
    Series,
    Documentary,
}

impl KindFilter {
    fn matches(&self, content: &Content) -> bool {
        matches!(
            (self, content),
            (KindFilter::Movie, Content::Movie(_))
                | (KindFilter::Series, Content::Series(_))
                | (KindFilter::Documentary, Content::Documentary(_))
        )
    }
}

pub fn run_catalog(kind: Option<KindFilter>, output: &Output) -> Result<()> {
    let catalog = seed::sample_catalog()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to build the sample catalog: {}", e))?;

    let items: Vec<&Content> = catalog
        .items()
        .iter()
        .filter(|content| kind.map_or(true, |k| k.matches(content)))
        .collect();

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(
                ["Id", "Title", "Kind", "Year", "Duration", "Genres", "Rating"]
                    .iter()
                    .map(|h| {
                        Cell::new(*h)
                            .fg(comfy_table::Color::Cyan)
                            .add_attribute(comfy_table::Attribute::Bold)
                    })
                    .collect::<Vec<_>>(),
            );
            for content in &items {
                table.add_row(vec![
                    content.id().to_string(),
                    content.title().to_string(),
                    content.kind().to_string(),
                    content.release_year().to_string(),
                    content.duration(),
                    content.genres().join(", "),
                    format!("{:.1}", content.rating()),
                ]);
            }
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let entries: Vec<serde_json::Value> = items
                .iter()
                .map(|content| {
                    json!({
                        "id": content.id().as_str(),
                        "kind": content.kind(),
                        "title": content.title(),
                        "release_year": content.release_year(),
                        "genres": content.genres(),
                        "duration": content.duration(),
                        "info": content.info(),
                        "rating": content.rating(),
                        "rating_count": content.rating_count(),
                        "downloadable": content.supports_download(),
                    })
                })
                .collect();
            output.json(&json!({ "catalog": entries }));
        }
    }

    Ok(())
}
