//! # Country Directory
//!
//! Turns the raw upstream country list into the list the selector shows:
//! one entry per code, the default country always present, sorted by
//! display name. [`CountryDirectory`] tracks the explicit
//! `Loading` / `Error` / `Ready` states around that fetch.
//!
//! ## Ordering
//!
//! Names compare on a folded key: lower case with diacritics stripped
//! after canonical decomposition, so "Åland Islands" sorts beside
//! "Albania" rather than after "Zimbabwe". Ties fall back to the exact name, then the code, so the
//! order is total.

use std::cmp::Ordering;
use std::collections::HashSet;

use hcal_client::CountrySource;
use hcal_core::{CountryCode, CountryEntry};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::DirectoryError;

/// Display name used when the default country has to be synthesized.
fn synthesized_name(code: &CountryCode) -> String {
    match code.as_str() {
        "IN" => "India".to_string(),
        other => other.to_string(),
    }
}

/// Letters with no canonical decomposition that still read as a base letter.
fn fold_letter(c: char, out: &mut String) {
    let base = match c {
        'ø' => "o",
        'ł' => "l",
        'đ' | 'ð' => "d",
        'ı' => "i",
        'ħ' => "h",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'þ' => "th",
        _ => {
            out.push(c);
            return;
        }
    };
    out.push_str(base);
}

/// Case- and accent-insensitive sort key for a display name.
///
/// Decomposes to NFD, drops combining marks, then lower-cases, so
/// precomposed and decomposed spellings of a name share one key.
pub fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        fold_letter(c, &mut key);
    }
    key
}

/// Total order on entries by display name.
pub fn compare_entries(a: &CountryEntry, b: &CountryEntry) -> Ordering {
    collation_key(&a.name)
        .cmp(&collation_key(&b.name))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.country_code.cmp(&b.country_code))
}

/// De-duplicate by code (first occurrence wins), ensure `default` is
/// present, and sort by display name.
pub fn finalize_countries(raw: Vec<CountryEntry>, default: &CountryCode) -> Vec<CountryEntry> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut countries: Vec<CountryEntry> = raw
        .into_iter()
        .filter(|entry| seen.insert(entry.country_code.clone()))
        .collect();

    if !seen.contains(default) {
        tracing::debug!(%default, "default country missing upstream; synthesizing entry");
        countries.push(CountryEntry::new(default.clone(), synthesized_name(default)));
    }

    countries.sort_by(compare_entries);
    countries
}

/// Fetch the directory and finalize it.
pub async fn list_countries<S: CountrySource>(
    source: &S,
    default: &CountryCode,
) -> Result<Vec<CountryEntry>, DirectoryError> {
    let raw = source.list_countries().await?;
    Ok(finalize_countries(raw, default))
}

/// Observable state of the country directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryState {
    Loading,
    Error(String),
    Ready(Vec<CountryEntry>),
}

/// Country directory with its load state.
///
/// Populated once per [`CountryDirectory::load`]; a failed load stays
/// failed until `load` is called again.
#[derive(Debug)]
pub struct CountryDirectory {
    default: CountryCode,
    state: DirectoryState,
}

impl CountryDirectory {
    pub fn new(default: CountryCode) -> Self {
        Self {
            default,
            state: DirectoryState::Loading,
        }
    }

    pub fn default_country(&self) -> &CountryCode {
        &self.default
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    /// Fetch from `source` and move to `Ready` or `Error`.
    pub async fn load<S: CountrySource>(&mut self, source: &S) -> &DirectoryState {
        self.state = DirectoryState::Loading;
        self.state = match list_countries(source, &self.default).await {
            Ok(countries) => {
                tracing::info!(count = countries.len(), "country directory loaded");
                DirectoryState::Ready(countries)
            }
            Err(e) => {
                tracing::error!("{e}");
                DirectoryState::Error(e.user_message().to_string())
            }
        };
        &self.state
    }

    /// The list, once ready.
    pub fn countries(&self) -> Option<&[CountryEntry]> {
        match &self.state {
            DirectoryState::Ready(list) => Some(list),
            _ => None,
        }
    }

    pub fn find(&self, code: &CountryCode) -> Option<&CountryEntry> {
        self.countries()?.iter().find(|c| &c.country_code == code)
    }
}
