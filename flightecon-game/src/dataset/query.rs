//! Lookup query strings: `id:12`, `iata:HKG`, `shortname:a388`, or a bare term.
//!
//! A `key:value` string whose key is not a known prefix is a bare term, so
//! names that contain a colon still resolve.
use std::str::FromStr;

use super::LookupError;
use crate::aircraft::AircraftId;
use crate::airport::AirportId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AirportQuery {
    Id(AirportId),
    Iata(String),
    Icao(String),
    Name(String),
    /// Bare term: IATA, then ICAO, then name, then id.
    Any(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AircraftQuery {
    Id(AircraftId),
    Shortname(String),
    Name(String),
    /// Bare term: shortname, then name, then id.
    Any(String),
}

impl FromStr for AirportQuery {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || LookupError::InvalidQuery {
            query: s.to_string(),
        };
        let Some((key, value)) = s.split_once(':') else {
            return non_empty(s).map(Self::Any).ok_or_else(invalid);
        };
        let key = key.trim().to_ascii_lowercase();
        if !matches!(key.as_str(), "id" | "iata" | "icao" | "name") {
            return Ok(Self::Any(s.to_string()));
        }
        let value = non_empty(value).ok_or_else(invalid)?;
        match key.as_str() {
            "id" => value.parse().map(Self::Id).map_err(|_| invalid()),
            "iata" => Ok(Self::Iata(value)),
            "icao" => Ok(Self::Icao(value)),
            _ => Ok(Self::Name(value)),
        }
    }
}

impl FromStr for AircraftQuery {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || LookupError::InvalidQuery {
            query: s.to_string(),
        };
        let Some((key, value)) = s.split_once(':') else {
            return non_empty(s).map(Self::Any).ok_or_else(invalid);
        };
        let key = key.trim().to_ascii_lowercase();
        if !matches!(key.as_str(), "id" | "shortname" | "name") {
            return Ok(Self::Any(s.to_string()));
        }
        let value = non_empty(value).ok_or_else(invalid)?;
        match key.as_str() {
            "id" => value.parse().map(Self::Id).map_err(|_| invalid()),
            "shortname" => Ok(Self::Shortname(value)),
            _ => Ok(Self::Name(value)),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
