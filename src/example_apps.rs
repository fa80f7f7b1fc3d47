//! Reusable demo runners shared by the cargo examples under `demos/`.

use std::collections::BTreeSet;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum, error::ErrorKind};

use crate::data::DatasetKind;
use crate::filter::{FilterSelection, Selection};
use crate::loader::CsvLoaderConfig;
use crate::session::{CatalogSession, RenderCycle};
use crate::types::Token;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DatasetArg {
    War,
    Trade,
}

impl From<DatasetArg> for DatasetKind {
    fn from(value: DatasetArg) -> Self {
        match value {
            DatasetArg::War => DatasetKind::War,
            DatasetArg::Trade => DatasetKind::Trade,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "browse_demo",
    disable_help_subcommand = true,
    about = "Filter a catalog CSV and print the table, chart, and map summaries",
    after_help = "Omitting --materials/--sites selects everything for that field, matching the default unfiltered view."
)]
struct BrowseDemoCli {
    #[arg(long, value_enum, default_value_t = DatasetArg::War, help = "Which catalog table to browse")]
    dataset: DatasetArg,
    #[arg(long, help = "Path to the war-context CSV", default_value = "war_translated.csv")]
    war_path: PathBuf,
    #[arg(long, help = "Path to the trade-context CSV", default_value = "trade_translated.csv")]
    trade_path: PathBuf,
    #[arg(long, value_delimiter = ',', help = "Material tokens to keep (comma-separated)")]
    materials: Option<Vec<Token>>,
    #[arg(long, value_delimiter = ',', help = "Site names to keep (comma-separated)")]
    sites: Option<Vec<Token>>,
    #[arg(long, help = "Emit the render cycle as JSON instead of text")]
    json: bool,
}

/// Run the catalog browsing demo over CLI-provided CSV paths and selections.
pub fn run_browse_demo<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<BrowseDemoCli, _>(
        std::iter::once("browse_demo".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let kind = DatasetKind::from(cli.dataset);
    let path = match kind {
        DatasetKind::War => &cli.war_path,
        DatasetKind::Trade => &cli.trade_path,
    };
    let dataset = CsvLoaderConfig::new(kind, path).load()?;
    let session = CatalogSession::new(Arc::new(dataset));

    let selection = FilterSelection {
        materials: selection_from_args(cli.materials),
        sites: selection_from_args(cli.sites),
    };
    let cycle = session.refresh(&selection);

    if cli.json {
        print_cycle_json(&cycle)?;
    } else {
        print_cycle_text(&session, &cycle);
    }
    Ok(())
}

fn selection_from_args(tokens: Option<Vec<Token>>) -> Selection {
    match tokens {
        None => Selection::All,
        Some(values) => Selection::Custom(
            values
                .into_iter()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .collect::<BTreeSet<Token>>(),
        ),
    }
}

fn print_cycle_text(session: &CatalogSession, cycle: &RenderCycle) {
    println!(
        "{} dataset: {} of {} records match",
        session.dataset().kind,
        cycle.view.len(),
        session.dataset().len()
    );
    println!(
        "vocabulary: {} materials, {} sites",
        session.vocabularies().materials.len(),
        session.vocabularies().sites.len()
    );

    match &cycle.material_frequency {
        Some(frequency) => {
            println!(
                "materials ({} occurrences, {} distinct):",
                frequency.total, frequency.distinct
            );
            for entry in &frequency.counts {
                println!("  {:>5}  {}", entry.count, entry.token);
            }
        }
        None => println!("no material data"),
    }

    if cycle.yearly_counts.is_empty() {
        println!("no discovery-year data");
    } else {
        println!("records per discovery year:");
        for (year, count) in &cycle.yearly_counts {
            println!("  {year}: {count}");
        }
    }

    match &cycle.geo_layer {
        Some(layer) => println!(
            "map: {} points, {} inside the Europe viewport",
            layer.points.len(),
            layer.visible_count()
        ),
        None => println!("no geographic data available"),
    }
}

fn print_cycle_json(cycle: &RenderCycle) -> Result<(), Box<dyn Error>> {
    let payload = serde_json::json!({
        "records": &cycle.view.records,
        "material_frequency": &cycle.material_frequency,
        "yearly_counts": &cycle.yearly_counts,
        "geo_layer": &cycle.geo_layer,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_from_args_maps_absent_to_all() {
        assert_eq!(selection_from_args(None), Selection::All);
    }

    #[test]
    fn selection_from_args_trims_and_drops_empty_values() {
        let selection = selection_from_args(Some(vec![
            " Iron ".to_string(),
            "".to_string(),
            "Bronze".to_string(),
        ]));
        assert_eq!(
            selection,
            Selection::Custom(BTreeSet::from(["Bronze".to_string(), "Iron".to_string()]))
        );
    }
}
