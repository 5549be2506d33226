//! SPARQL query and `application/sparql-results+json` decoding for the street dataset.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::FormatError;
use crate::street::{StreetRecord, sort_by_year};

pub const DEFAULT_ENDPOINT: &str =
    "https://api.data.adamlink.nl/datasets/AdamNet/all/services/hva2018/sparql";

pub const RESULTS_FORMAT: &str = "application/sparql-results+json";

/// Every street with a label, an earliest begin timestamp and a WKT shape,
/// ordered by date on the server.
pub const STREETS_QUERY: &str = r#"
PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX hg: <http://rdf.histograph.io/>
PREFIX sem: <http://semanticweb.cs.vu.nl/2009/11/sem/>
PREFIX geo: <http://www.opengis.net/ont/geosparql#>

SELECT ?straat ?label ?date ?wkt WHERE {
  ?straat rdf:type hg:Street .
  ?straat rdfs:label ?label .
  ?straat sem:hasEarliestBeginTimeStamp ?date .
  ?straat geo:hasGeometry ?geo .
  ?geo geo:asWKT ?wkt .
}
ORDER BY ?date
LIMIT 9999"#;

/// Query-string parameters for the GET request. The HTTP client URL-encodes them.
pub fn query_params() -> [(&'static str, &'static str); 5] {
    [
        ("default-graph-uri", ""),
        ("query", STREETS_QUERY),
        ("format", RESULTS_FORMAT),
        ("timeout", "0"),
        ("debug", "on"),
    ]
}

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: SparqlResults,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    #[serde(default)]
    bindings: Vec<StreetBinding>,
}

#[derive(Debug, Deserialize)]
struct StreetBinding {
    #[serde(default)]
    label: Option<Term>,
    #[serde(default)]
    date: Option<Term>,
    #[serde(default)]
    wkt: Option<Term>,
}

#[derive(Debug, Deserialize)]
struct Term {
    #[serde(default)]
    value: Option<String>,
}

/// The term's non-empty value, if the binding carries one.
fn term_value(term: Option<Term>) -> Option<String> {
    term?.value.filter(|v| !v.trim().is_empty())
}

/// Decode a results document into street records sorted by year.
///
/// Bindings missing a label, date or shape, or carrying an empty value for
/// one of them, are skipped.
pub fn parse_response(payload: &str) -> Result<Vec<StreetRecord>, FormatError> {
    let response: SparqlResponse = serde_json::from_str(payload)?;
    let total = response.results.bindings.len();

    let mut records = Vec::with_capacity(total);
    for (index, binding) in response.results.bindings.into_iter().enumerate() {
        match (
            term_value(binding.label),
            term_value(binding.date),
            term_value(binding.wkt),
        ) {
            (Some(label), Some(date), Some(wkt)) => {
                records.push(StreetRecord::new(label, date, wkt));
            }
            _ => warn!(index, "skipping incomplete street binding"),
        }
    }

    sort_by_year(&mut records);
    debug!(total, kept = records.len(), "decoded street bindings");
    Ok(records)
}
