// SPDX-License-Identifier: PMPL-1.0-or-later

//! Domain vocabulary catalog.
//!
//! Maps the dataset's lowercase English tokens to pt-BR display strings
//! as a compile-time static table. Lookup is O(n) on the key list, which
//! is fine for the ~100 entries here — this runs once per rendered
//! field, not in a hot loop.
//!
//! ## Adding a new token
//!
//! Append a `(key, value)` pair to [`VOCABULARY`] under the matching
//! section. Keys must be lowercase and unique; callers lowercase before
//! lookup, so mixed-case source values still match.

/// Fixed fallback for tokens with no catalog entry.
///
/// The dataset's own `"unknown"` sentinel maps here too, so "no entry"
/// and "value not recorded" render identically.
pub const FALLBACK: &str = "Desconhecido";

/// Translate a single vocabulary token.
///
/// Lowercases the token and looks it up in the catalog. Absence is not
/// an error — unmapped tokens return [`FALLBACK`]. Never fails.
///
/// # Examples
///
/// ```
/// use holocron::i18n::translate;
/// assert_eq!(translate("male"), "Masculino");
/// assert_eq!(translate("Red"), "Vermelho");
/// assert_eq!(translate("not-a-real-color"), "Desconhecido");
/// ```
pub fn translate(token: &str) -> &'static str {
    let key = token.to_lowercase();
    lookup(&key).unwrap_or(FALLBACK)
}

/// Translate a comma-separated token list.
///
/// Splits on commas, trims each segment, translates each, and rejoins
/// with ", ". Order and segment count are preserved. An empty input
/// yields an empty string.
pub fn translate_list(csv: &str) -> String {
    if csv.is_empty() {
        return String::new();
    }
    csv.split(',')
        .map(|segment| translate(segment.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn lookup(key: &str) -> Option<&'static str> {
    for &(k, v) in VOCABULARY {
        if k == key {
            return Some(v);
        }
    }
    None
}

// ─── Vocabulary table ───────────────────────────────────────────────

const VOCABULARY: &[(&str, &str)] = &[
    // Genders and common sentinels
    ("male", "Masculino"),
    ("female", "Feminino"),
    ("unknown", "Desconhecido"),
    ("none", "Nenhum"),
    ("n_a", "N/A"),
    // Climates
    ("arid", "Árido"),
    ("temperate", "Temperado"),
    ("tropical", "Tropical"),
    ("frozen", "Congelado"),
    ("murky", "Lamacento"),
    ("windy", "Ventoso"),
    ("hot", "Quente"),
    ("moist", "Úmido"),
    ("frigid", "Frígido"),
    // Terrains
    ("desert", "Deserto"),
    ("deserts", "Desertos"),
    ("jungle", "Selva"),
    ("jungles", "Selvas"),
    ("grasslands", "Campos"),
    ("forests", "Florestas"),
    ("mountains", "Montanhas"),
    ("oceans", "Oceanos"),
    ("lakes", "Lagos"),
    ("rivers", "Rios"),
    ("swamps", "Pântanos"),
    ("swamp", "Pântano"),
    ("tundra", "Tundra"),
    ("caves", "Cavernas"),
    ("caverns", "Carvernas"),
    ("cavernous", "Cavernoso"),
    ("cityscape", "Paisagem Urbana"),
    ("rainforests", "Florestas Tropicais"),
    ("ocean", "Oceano"),
    ("volcanic", "Vulcânico"),
    ("grassy hills", "Colinas Gramadas"),
    ("scrublands", "Matagais"),
    ("savanna", "Savana"),
    ("savannas", "Savanas"),
    ("canyons", "Cânions"),
    ("sinkholes", "Sumidouro"),
    ("volcanoes", "Vulcões"),
    ("lava rivers", "Rios de Lava"),
    ("fungus forests", "Floresta de Fungos"),
    ("fields", "Campos"),
    ("rock arches", "Arcos Rochosos"),
    ("hills", "Colinas"),
    ("plains", "Planícies"),
    ("urban", "Urbano"),
    ("reefs", "Recifes"),
    ("islands", "Ilhas"),
    ("verdant", "Verdejante"),
    ("rocky", "Rochoso"),
    ("seas", "Mares"),
    ("glaciers", "Geleiras"),
    ("rock", "Pedras"),
    ("mountain", "Montanhas"),
    ("barren", "Árido"),
    ("bogs", "Atoleiro"),
    ("valleys", "Vales"),
    ("grass", "Grama"),
    ("vines", "Videiras"),
    ("cliffs", "Penhascos"),
    ("rocky deserts", "Desertos Rochosos"),
    ("toxic cloudsea", "Nuvens Tóxicas"),
    ("plateaus", "Planaltos"),
    ("ice caves", "Cavernas de Gelo"),
    ("mountain ranges", "Serras"),
    ("ice canyons", "Desfiladeiros de Gelo"),
    ("gas giant", "Gigante Gasoso"),
    ("rocky islands", "Ilhas Rochosas"),
    // Colors
    ("blue", "Azul"),
    ("green", "Verde"),
    ("brown", "Marrom"),
    ("red", "Vermelho"),
    ("yellow", "Amarelo"),
    ("black", "Preto"),
    ("white", "Branco"),
    ("orange", "Laranja"),
    ("pink", "Rosa"),
    ("gold", "Dourado"),
    ("silver", "Prateado"),
    ("hazel", "Avelã"),
    ("blond", "Loiro"),
    ("fair", "Clara"),
    ("light", "Clara"),
    ("grey", "Cinza"),
    ("auburn", "Ruivo"),
    ("amber", "Âmbar"),
    ("dark", "Escura"),
    ("brown mottle", "Mancha Marrom"),
    ("green-tan", "Verde Bronzeado"),
    ("blue-gray", "Azul-Cinza"),
    ("mottled green", "Verde Manchado"),
];
