// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for holocron.
//!
//! The upstream dataset records enumerated vocabulary (genders, climates,
//! terrains, colors) as lowercase English tokens. This module maps those
//! tokens to pt-BR display strings and renders numbers with pt-BR
//! grouping/decimal conventions.
//!
//! ## Design
//!
//! The vocabulary catalog is embedded at compile time as static data —
//! no file I/O, no allocator pressure during lookups. Unknown tokens are
//! not errors: they collapse to a fixed fallback string, because the
//! upstream dataset itself uses `"unknown"` to mean "value not
//! recorded". The table is read-only for the process lifetime.

mod catalog;
mod locale;

pub use catalog::{translate, translate_list, FALLBACK};
pub use locale::format_number;
