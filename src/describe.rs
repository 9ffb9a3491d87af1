// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-resource description rendering.
//!
//! Each resource type reads a fixed set of record fields and composes a
//! multi-line pt-BR description from translated vocabulary and formatted
//! numbers. Rendering is total: every field substitution degrades
//! independently to a localized placeholder, so a malformed record never
//! fails the whole description.
//!
//! A field that is absent and a field holding the literal `"unknown"`
//! render identically — the upstream dataset uses both to mean "value
//! not recorded". Numeric fields are parsed before any formatting call;
//! unparseable values take the placeholder path instead.

use serde_json::Value;

use crate::i18n::{format_number, translate, translate_list};
use crate::types::{Record, ResourceType};

const UNKNOWN_M: &str = "Desconhecido";
const UNKNOWN_F: &str = "Desconhecida";
const NOT_AVAILABLE: &str = "N/A";

/// Render the description for one record of the given resource type.
///
/// Pure and idempotent: the same record always yields the same string.
pub fn describe(resource: ResourceType, record: &Record) -> String {
    match resource {
        ResourceType::People => people(record),
        ResourceType::Films => films(record),
        ResourceType::Planets => planets(record),
        ResourceType::Starships => starships(record),
        ResourceType::Vehicles => vehicles(record),
        ResourceType::Species => species(record),
    }
}

// ─── Per-resource renderers ─────────────────────────────────────────

fn people(record: &Record) -> String {
    let height = metres(record, "height");
    let mass = match passthrough(record, "mass") {
        Some(mass) => format!("{mass} kg"),
        None => UNKNOWN_M.to_string(),
    };
    let gender = match record.text("gender").filter(|g| !g.is_empty()) {
        Some(gender) => translate(gender),
        None => UNKNOWN_M,
    };
    let birth_year = passthrough(record, "birth_year").unwrap_or_else(|| UNKNOWN_M.to_string());
    let film_count = match record.field("films") {
        Some(Value::Array(list)) => list.len(),
        _ => 0,
    };

    format!(
        "Altura: {height}\n\
         Peso: {mass}\n\
         Gênero: {gender}\n\
         Data de Aniversário: {birth_year}\n\
         Cor dos Olhos: {}\n\
         Cor do Cabelo: {}\n\
         Cor da Pele: {}\n\
         Filmes: {film_count}",
        translated_list(record, "eye_color"),
        translated_list(record, "hair_color"),
        translated_list(record, "skin_color"),
    )
}

fn films(record: &Record) -> String {
    let director = passthrough(record, "director").unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let producer = passthrough(record, "producer").unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let release_date =
        passthrough(record, "release_date").unwrap_or_else(|| NOT_AVAILABLE.to_string());
    // The crawl is stored with embedded newlines; collapse to one line.
    let opening_crawl = match record.text("opening_crawl").filter(|c| !c.is_empty()) {
        Some(crawl) => crawl.replace('\n', " "),
        None => NOT_AVAILABLE.to_string(),
    };

    format!(
        "Diretor: {director}\n\
         Produtor: {producer}\n\
         Data de Lançamento: {release_date}\n\
         Abertura: \"{opening_crawl}\""
    )
}

fn planets(record: &Record) -> String {
    let diameter = match numeric(record, "diameter") {
        Some(d) => format!("{} km", format_number(d, 0)),
        None => UNKNOWN_M.to_string(),
    };
    let population = match numeric(record, "population") {
        Some(p) => format_number(p, 0),
        None => UNKNOWN_F.to_string(),
    };

    format!(
        "Clima: {}\n\
         Terreno: {}\n\
         Diâmetro: {diameter}\n\
         População: {population}",
        translated_list(record, "climate"),
        translated_list(record, "terrain"),
    )
}

fn species(record: &Record) -> String {
    let language = passthrough(record, "language").unwrap_or_else(|| NOT_AVAILABLE.to_string());

    format!(
        "Altura média: {}\n\
         Cores dos cabelos: {}\n\
         Cores dos olhos: {}\n\
         Linguagem: {language}",
        metres(record, "average_height"),
        translated_list(record, "hair_colors"),
        translated_list(record, "eye_colors"),
    )
}

fn vehicles(record: &Record) -> String {
    let craft = CraftFields::read(record);
    let max_speed = match numeric(record, "max_atmosphering_speed") {
        Some(speed) => format!("{} km/h", format_number(speed, 0)),
        None => UNKNOWN_F.to_string(),
    };

    format!(
        "Modelo: {}\n\
         Fábrica: {}\n\
         Valor: {}\n\
         Velocidade Máxima: {max_speed}\n\
         Capacidade de Passageiros: {}\n\
         Capacidade de Carga: {}",
        craft.model, craft.manufacturer, craft.cost, craft.passengers, craft.cargo,
    )
}

fn starships(record: &Record) -> String {
    let craft = CraftFields::read(record);

    format!(
        "Modelo: {}\n\
         Fábrica: {}\n\
         Valor: {}\n\
         Cap. de Passageiros: {}\n\
         Cap. de Carga: {}",
        craft.model, craft.manufacturer, craft.cost, craft.passengers, craft.cargo,
    )
}

// Fields vehicles and starships share.
struct CraftFields {
    model: String,
    manufacturer: String,
    cost: String,
    passengers: String,
    cargo: String,
}

impl CraftFields {
    fn read(record: &Record) -> Self {
        let model = passthrough(record, "model").unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let manufacturer =
            passthrough(record, "manufacturer").unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let cost = match numeric(record, "cost_in_credits") {
            Some(cost) => format_number(cost, 0),
            None => UNKNOWN_M.to_string(),
        };
        let passengers = match numeric(record, "passengers") {
            Some(p) => format_number(p, 0),
            None => UNKNOWN_F.to_string(),
        };
        let cargo = match numeric(record, "cargo_capacity") {
            Some(c) => format!("{} kg", format_number(c, 0)),
            None => UNKNOWN_F.to_string(),
        };
        Self {
            model,
            manufacturer,
            cost,
            passengers,
            cargo,
        }
    }
}

// ─── Field helpers ──────────────────────────────────────────────────

/// Raw passthrough value, with absence and the `"unknown"` sentinel
/// collapsed to `None`. Numbers stringify as-is.
fn passthrough(record: &Record, field: &str) -> Option<String> {
    match record.field(field) {
        Some(Value::String(s)) if !s.is_empty() && s != "unknown" => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric value of a field, from either a JSON number or a string that
/// fully parses as one. The `"unknown"` sentinel and anything else
/// unparseable read as `None`, keeping unparseable input away from the
/// number formatter.
fn numeric(record: &Record, field: &str) -> Option<f64> {
    match record.field(field)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Centimetre field rendered in metres with two decimals.
fn metres(record: &Record, field: &str) -> String {
    match numeric(record, field) {
        Some(cm) => format!("{} m", format_number(cm / 100.0, 2)),
        None => UNKNOWN_F.to_string(),
    }
}

/// Comma-separated vocabulary field, translated term by term.
fn translated_list(record: &Record, field: &str) -> String {
    match record.text(field).filter(|s| !s.is_empty()) {
        Some(list) => translate_list(list),
        None => UNKNOWN_M.to_string(),
    }
}
