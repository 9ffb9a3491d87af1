// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal rendering and JSON report output.

use std::fs;
use std::path::Path;

use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};

use crate::describe::describe;
use crate::images::resolve_image;
use crate::types::{Record, ResourceType};

/// Presentation data for one record, in sorted order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedRecord {
    pub name: String,
    pub image_url: String,
    pub description: String,
}

/// A complete search run, ready to print or save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub created_at: String,
    pub resource: ResourceType,
    pub term: String,
    pub count: usize,
    pub results: Vec<RenderedRecord>,
}

/// Run one record through the presentation pipeline.
pub fn render_record(resource: ResourceType, record: &Record) -> RenderedRecord {
    let id = record.id();
    RenderedRecord {
        name: record.display_name().to_string(),
        image_url: resolve_image(resource.token(), &id),
        description: describe(resource, record),
    }
}

/// Assemble a timestamped report from rendered results.
pub fn build_report(
    resource: ResourceType,
    term: &str,
    results: Vec<RenderedRecord>,
) -> SearchReport {
    SearchReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        resource,
        term: term.to_string(),
        count: results.len(),
        results,
    }
}

/// Print rendered results to the terminal.
pub fn print_results(resource: ResourceType, term: &str, results: &[RenderedRecord]) {
    println!(
        "\n{}",
        format!("=== {} ===", resource.label().to_uppercase())
            .bold()
            .cyan()
    );

    if results.is_empty() {
        println!("{}", format!("Nenhum resultado para \"{term}\".").yellow());
        return;
    }

    println!("{} resultado(s) para \"{}\"\n", results.len(), term);
    for item in results {
        println!("{}", item.name.bold());
        println!("  {}", item.image_url.dimmed());
        for line in item.description.lines() {
            println!("  {line}");
        }
        println!();
    }
}

/// Write a report as pretty-printed JSON.
pub fn save_report<P: AsRef<Path>>(report: &SearchReport, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path.as_ref(), json)?;
    println!("Relatório salvo em: {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).expect("record fixture should deserialize")
    }

    #[test]
    fn render_record_wires_id_image_and_description() {
        let leia = record(json!({
            "name": "Leia Organa",
            "url": "https://swapi.dev/api/people/5/",
            "gender": "female"
        }));
        let rendered = render_record(ResourceType::People, &leia);
        assert_eq!(rendered.name, "Leia Organa");
        assert!(rendered.image_url.ends_with("/characters/5.jpg"));
        assert!(rendered.description.contains("Gênero: Feminino"));
    }

    #[test]
    fn report_counts_and_carries_results() {
        let rendered = vec![RenderedRecord {
            name: "Tatooine".to_string(),
            image_url: "https://example/planets/1.jpg".to_string(),
            description: "Clima: Árido".to_string(),
        }];
        let report = build_report(ResourceType::Planets, "tatooine", rendered);
        assert_eq!(report.count, 1);
        assert_eq!(report.term, "tatooine");
        assert!(!report.created_at.is_empty());
    }

    #[test]
    fn report_roundtrips_through_json() {
        let report = build_report(
            ResourceType::Starships,
            "falcon",
            vec![RenderedRecord {
                name: "Millennium Falcon".to_string(),
                image_url: "https://example/starships/10.jpg".to_string(),
                description: "Modelo: YT-1300".to_string(),
            }],
        );
        let json = serde_json::to_string(&report).expect("should serialize");
        let back: SearchReport = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back.resource, ResourceType::Starships);
        assert_eq!(back.results.len(), 1);
        assert_eq!(back.results[0].name, "Millennium Falcon");
    }
}
