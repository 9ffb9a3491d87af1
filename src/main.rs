// SPDX-License-Identifier: PMPL-1.0-or-later

//! holocron: search the SWAPI Star Wars dataset from the terminal
//!
//! Fetches one page of records for a resource type and search term,
//! optionally sorts them by the resource's sortable field, and prints
//! each record with its image URL and a translated pt-BR description.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use holocron::fetch::{SearchClient, DEFAULT_BASE_URL};
use holocron::output;
use holocron::sort::sort_records;
use holocron::types::{ResourceType, SortDirection, SortSpec};

#[derive(Parser)]
#[command(name = "holocron")]
#[command(version = "0.1.0")]
#[command(about = "Search client for the SWAPI Star Wars dataset with pt-BR output")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a resource and print translated results
    Search {
        /// Free-text search term
        #[arg(value_name = "TERM")]
        term: String,

        /// Resource type to search
        #[arg(short, long, value_enum, default_value = "people")]
        resource: ResourceArg,

        /// Field to sort by (each resource supports one, see `resources`)
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort direction
        #[arg(long, value_enum, default_value = "asc")]
        order: OrderArg,

        /// API base URL
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Save results as a JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List resource types, labels, and sortable fields
    Resources,
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ResourceArg {
    People,
    Films,
    Planets,
    Starships,
    Vehicles,
    Species,
}

impl From<ResourceArg> for ResourceType {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::People => ResourceType::People,
            ResourceArg::Films => ResourceType::Films,
            ResourceArg::Planets => ResourceType::Planets,
            ResourceArg::Starships => ResourceType::Starships,
            ResourceArg::Vehicles => ResourceType::Vehicles,
            ResourceArg::Species => ResourceType::Species,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortDirection {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortDirection::Ascending,
            OrderArg::Desc => SortDirection::Descending,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            term,
            resource,
            sort,
            order,
            base_url,
            output,
        } => {
            let resource = ResourceType::from(resource);

            let term = term.trim().to_string();
            if term.is_empty() {
                bail!("informe um termo de busca");
            }
            if let Some(field) = sort.as_deref() {
                if field != resource.sort_field() {
                    bail!(
                        "campo de ordenação inválido para {}: '{}' (disponível: {})",
                        resource.label(),
                        field,
                        resource.sort_field()
                    );
                }
            }

            let client = SearchClient::new(&base_url)?;
            let mut page = client.search(resource, &term)?;

            let spec = SortSpec::new(sort, order.into());
            sort_records(&mut page.results, &spec);

            let rendered: Vec<_> = page
                .results
                .iter()
                .map(|record| output::render_record(resource, record))
                .collect();

            output::print_results(resource, &term, &rendered);

            if let Some(path) = output {
                let report = output::build_report(resource, &term, rendered);
                output::save_report(&report, path)?;
            }
        }

        Commands::Resources => {
            println!("Recursos disponíveis:");
            for resource in ResourceType::all() {
                println!(
                    "  {:<10} {:<12} ordenável por: {}",
                    resource.token(),
                    resource.label(),
                    resource.sort_field()
                );
            }
        }
    }

    Ok(())
}
