// SPDX-License-Identifier: PMPL-1.0-or-later

//! Holocron — search client for the SWAPI Star Wars reference dataset.
//!
//! This crate fetches records (characters, films, planets, starships,
//! vehicles, species) from a SWAPI-compatible API and turns them into
//! pt-BR presentation data.
//!
//! PIPELINE STAGES:
//! 1. **Fetch**: one blocking request per (resource, term) pair, first
//!    page only.
//! 2. **Sort**: total ordering over a dynamically chosen field with
//!    null/"unknown" collapsing.
//! 3. **Describe**: per-resource multi-line descriptions built from a
//!    static vocabulary catalog and pt-BR number formatting.
//! 4. **Resolve**: record id extraction and image URL mapping.

pub mod describe;
pub mod fetch;
pub mod i18n;
pub mod images;
pub mod output;
pub mod sort;
pub mod types;
