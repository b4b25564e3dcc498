//! Near matches for lookups that resolve to nothing.
use jaro_winkler::jaro_winkler;

use super::query::{AircraftQuery, AirportQuery};
use crate::aircraft::Aircraft;
use crate::airport::Airport;

const MAX_SUGGESTIONS: usize = 5;

/// Jaro-Winkler similarity below this is noise.
const MIN_SIMILARITY: f64 = 0.7;

fn similarity(candidate: &str, term: &str) -> f64 {
    jaro_winkler(
        &candidate.to_ascii_uppercase(),
        &term.to_ascii_uppercase(),
    )
}

/// Best-scoring labels, highest first. Equal scores keep dataset order.
fn rank<T>(items: &[T], score: impl Fn(&T) -> f64, label: impl Fn(&T) -> String) -> Vec<String> {
    let mut scored: Vec<(f64, &T)> = items
        .iter()
        .map(|item| (score(item), item))
        .filter(|(s, _)| *s >= MIN_SIMILARITY)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, item)| label(item))
        .collect()
}

/// Airports resembling `query`, as `IATA (name)`. Id queries get none.
pub(crate) fn airports(airports: &[Airport], query: &AirportQuery) -> Vec<String> {
    let score = |ap: &Airport| match query {
        AirportQuery::Id(_) => 0.0,
        AirportQuery::Iata(code) => similarity(&ap.iata, code),
        AirportQuery::Icao(code) => similarity(&ap.icao, code),
        AirportQuery::Name(name) => similarity(&ap.name, name),
        AirportQuery::Any(term) => similarity(&ap.iata, term)
            .max(similarity(&ap.icao, term))
            .max(similarity(&ap.name, term)),
    };
    rank(airports, score, |ap| format!("{} ({})", ap.iata, ap.name))
}

/// Aircraft resembling `query`, as `shortname (name)`. Id queries get none.
pub(crate) fn aircraft(fleet: &[Aircraft], query: &AircraftQuery) -> Vec<String> {
    let score = |ac: &Aircraft| match query {
        AircraftQuery::Id(_) => 0.0,
        AircraftQuery::Shortname(sn) => similarity(&ac.shortname, sn),
        AircraftQuery::Name(name) => similarity(&ac.name, name),
        AircraftQuery::Any(term) => similarity(&ac.shortname, term).max(similarity(&ac.name, term)),
    };
    rank(fleet, score, |ac| format!("{} ({})", ac.shortname, ac.name))
}

/// `; did you mean A, B?` or nothing.
pub(crate) fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean {}?", suggestions.join(", "))
    }
}
