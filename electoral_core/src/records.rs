// ********* Reference data structures ***********

// These are the record shapes served by the collaborating fetches, declared
// here so that nothing duck-typed reaches the matching logic. Field names
// follow the JSON wire format of the backend (camelCase).

use std::error::Error;
use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// The office a candidacy runs for.
///
/// The set is closed: an unknown value in the input data is a
/// deserialization error, never a silent fallthrough.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    President,
    VicePresident,
    Deputy,
    Senator,
    AndeanParliament,
}

impl Role {
    /// Display label for the office, matched exhaustively.
    pub fn label(&self) -> &'static str {
        match self {
            Role::President => "President",
            Role::VicePresident => "Vice-president",
            Role::Deputy => "Deputy",
            Role::Senator => "Senator",
            Role::AndeanParliament => "Andean Parliament",
        }
    }
}

/// A physical site hosting one or more voting tables.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PollingPlace {
    pub id: String,
    pub name: String,
    pub address: String,
    pub district: String,
    pub province: String,
    #[serde(flatten)]
    pub location: GeoPoint,
}

/// A mesa: one voting table inside a polling place, with the room
/// directions printed on the voting credential.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct TableAssignment {
    pub mesa: String,
    #[serde(rename = "pollingPlaceId")]
    pub polling_place_id: String,
    pub room: String,
    pub floor: String,
    pub pavilion: String,
}

/// A registered voter. The id is the external identifier (national id
/// number or elector code).
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Elector {
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub mesa: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub id: String,
    pub name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    pub description: String,
    pub slogan: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(rename = "partyId")]
    pub party_id: String,
    pub name: String,
    pub role: Role,
    /// Missing for some national-list candidacies.
    pub region: Option<String>,
    pub bio: String,
    pub education: Option<String>,
    pub experience: Option<String>,
    /// Key proposals, in campaign order.
    pub proposals: Vec<String>,
}

/// One sector of a party's government plan (one-to-many from the party).
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct GovernmentPlanSection {
    pub id: String,
    #[serde(rename = "partyId")]
    pub party_id: String,
    pub sector: String,
    pub summary: String,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct CandidateActivity {
    pub id: String,
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub description: String,
}

/// A news item. Without a party id the item is general election news.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    #[serde(rename = "partyId")]
    pub party_id: Option<String>,
    pub title: String,
    pub source: String,
    pub summary: String,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    pub url: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Election,
    Process,
    PollWorker,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventTarget {
    Elector,
    PollWorker,
    General,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventLevel {
    National,
    Regional,
    Local,
}

/// A milestone of the electoral calendar.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ElectoralEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub date: DateTime<Utc>,
    pub target: EventTarget,
    pub level: Option<EventLevel>,
}

/// Soft failures of the reference-data joins.
///
/// Each join stage reports its own variant so a caller can tell which link
/// of the elector -> mesa -> polling place chain is broken and show a
/// specific message. These are everyday outcomes (a mistyped id), not
/// processing errors.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum LookupError {
    UnknownElector { id: String },
    UnknownTable { mesa: String },
    UnknownPollingPlace { id: String },
    UnknownParty { id: String },
    UnknownCandidate { id: String },
}

impl Error for LookupError {}

impl Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::UnknownElector { id } => {
                write!(f, "no elector is registered under the id {}", id)
            }
            LookupError::UnknownTable { mesa } => {
                write!(f, "mesa {} has no registered table assignment", mesa)
            }
            LookupError::UnknownPollingPlace { id } => {
                write!(f, "no polling place with the id {}", id)
            }
            LookupError::UnknownParty { id } => {
                write!(f, "no party with the id {}", id)
            }
            LookupError::UnknownCandidate { id } => {
                write!(f, "no candidate with the id {}", id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_wire_shape() {
        let raw = r#"{
            "id": "apd-presi",
            "partyId": "alianza-progreso",
            "name": "María Torres",
            "role": "PRESIDENT",
            "region": "Nacional",
            "bio": "Abogada y ex congresista.",
            "education": null,
            "experience": null,
            "proposals": ["Reforma del sistema político."]
        }"#;
        let c: Candidate = serde_json::from_str(raw).unwrap();
        assert_eq!(c.party_id, "alianza-progreso");
        assert_eq!(c.role, Role::President);
        assert_eq!(c.region.as_deref(), Some("Nacional"));
    }

    #[test]
    fn unknown_role_is_rejected() {
        let raw = r#"{
            "id": "x", "partyId": "y", "name": "z", "role": "MAYOR",
            "bio": "", "region": null, "education": null,
            "experience": null, "proposals": []
        }"#;
        assert!(serde_json::from_str::<Candidate>(raw).is_err());
    }

    #[test]
    fn event_wire_shape() {
        let raw = r#"{
            "id": "3",
            "title": "Capacitación para miembros de mesa",
            "description": "Primera jornada de capacitación obligatoria.",
            "type": "POLL_WORKER",
            "date": "2026-03-01T09:00:00Z",
            "target": "POLL_WORKER",
            "level": null
        }"#;
        let e: ElectoralEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(e.kind, EventType::PollWorker);
        assert_eq!(e.target, EventTarget::PollWorker);
        assert!(e.level.is_none());
    }

    #[test]
    fn lookup_errors_name_the_failed_stage() {
        let err = LookupError::UnknownTable {
            mesa: "042356".to_string(),
        };
        assert!(err.to_string().contains("042356"));
        assert_ne!(
            LookupError::UnknownElector {
                id: "1".to_string()
            },
            LookupError::UnknownPollingPlace {
                id: "1".to_string()
            }
        );
    }
}
