use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::date::{parse_date, MalformedDateError};

// One scheduled class session. The date is kept as the raw catalog text
// (it is displayed verbatim) and parsed on demand for comparisons.
// Aliases accept the deployed data file's original Spanish field names.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Session {
    #[serde(alias = "fecha")]
    pub date: String,
    #[serde(alias = "materia")]
    pub subject: String,
    #[serde(alias = "profesor")]
    pub instructor: String,
    #[serde(alias = "horario")]
    pub schedule: String,
    #[serde(alias = "enlace")]
    pub link: String,
}

impl Session {
    pub fn parsed_date(&self) -> Result<NaiveDate, MalformedDateError> {
        parse_date(&self.date)
    }
}

// Standing links that are shown regardless of the day's session.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FixedLink {
    #[serde(alias = "nombre")]
    pub label: String,
    #[serde(alias = "enlace")]
    pub link: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub sessions: Vec<Session>,
    pub fixed_links: Vec<FixedLink>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped {
        #[serde(alias = "sesiones")]
        sessions: Vec<Session>,
        #[serde(alias = "enlaces_fijos", default)]
        fixed_links: Vec<FixedLink>,
    },
    Bare(Vec<Session>),
}

/// Parses the catalog wire format: either a bare JSON array of sessions
/// or an object wrapping the array (plus optional fixed links).
pub fn parse_catalog(raw: &str) -> Result<Catalog, serde_json::Error> {
    let document: CatalogDocument = serde_json::from_str(raw)?;
    Ok(match document {
        CatalogDocument::Wrapped {
            sessions,
            fixed_links,
        } => Catalog {
            sessions,
            fixed_links,
        },
        CatalogDocument::Bare(sessions) => Catalog {
            sessions,
            fixed_links: Vec::new(),
        },
    })
}
