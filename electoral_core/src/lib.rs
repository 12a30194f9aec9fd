//! Core matching and selection logic for an electoral information
//! application.
//!
//! The crate operates over small in-memory reference collections (polling
//! places, voting tables, electors, parties, candidacies, plans, news and
//! calendar events) that a collaborator loads once at startup. Everything
//! here is a synchronous, total computation: lookups that find nothing
//! return `None`, empty lists or a [`LookupError`] value, never a panic.
//! The only mutable piece of state is the caller-owned [`SelectionSet`];
//! if it is ever shared across threads, the owner is responsible for
//! mutual exclusion.

mod compare;
mod filter;
mod geo;
mod records;
mod schedule;

use log::debug;
use serde::{Deserialize, Serialize};

pub use crate::compare::*;
pub use crate::filter::*;
pub use crate::geo::*;
pub use crate::records::*;
pub use crate::schedule::*;

/// The immutable reference collections, as resident in the process after
/// the startup fetch.
///
/// Collections are never mutated after construction; every accessor
/// returns a read-only projection. Missing collections deserialize as
/// empty, so partial datasets are usable.
#[derive(PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub polling_places: Vec<PollingPlace>,
    #[serde(default)]
    pub tables: Vec<TableAssignment>,
    #[serde(default)]
    pub electors: Vec<Elector>,
    #[serde(default)]
    pub parties: Vec<Party>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub plans: Vec<GovernmentPlanSection>,
    #[serde(default)]
    pub activities: Vec<CandidateActivity>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub events: Vec<ElectoralEvent>,
}

/// The fully joined answer to "where do I vote?": one elector, their mesa
/// and the room directions inside the polling place.
#[derive(PartialEq, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectorAssignment {
    pub elector_id: String,
    pub full_name: String,
    pub mesa: String,
    pub room: String,
    pub floor: String,
    pub pavilion: String,
    pub polling_place_id: String,
    pub polling_place_name: String,
    pub address: String,
    pub district: String,
    pub province: String,
    #[serde(flatten)]
    pub location: GeoPoint,
}

impl Dataset {
    pub fn party(&self, id: &str) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == id)
    }

    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// All candidacies of one party, in input order. This is the set the
    /// facet engine and the region-option derivation operate on.
    pub fn party_candidates(&self, party_id: &str) -> Vec<&Candidate> {
        self.candidates
            .iter()
            .filter(|c| c.party_id == party_id)
            .collect()
    }

    pub fn party_plan(&self, party_id: &str) -> Vec<&GovernmentPlanSection> {
        self.plans
            .iter()
            .filter(|s| s.party_id == party_id)
            .collect()
    }

    pub fn party_news(&self, party_id: &str) -> Vec<&NewsItem> {
        self.news
            .iter()
            .filter(|n| n.party_id.as_deref() == Some(party_id))
            .collect()
    }

    /// News items not attached to any party.
    pub fn general_news(&self) -> Vec<&NewsItem> {
        self.news.iter().filter(|n| n.party_id.is_none()).collect()
    }

    /// The agenda of one candidate, in chronological order.
    pub fn candidate_activities(&self, candidate_id: &str) -> Vec<&CandidateActivity> {
        let mut agenda: Vec<&CandidateActivity> = self
            .activities
            .iter()
            .filter(|a| a.candidate_id == candidate_id)
            .collect();
        agenda.sort_by_key(|a| a.date);
        agenda
    }

    /// The polling places as geo-tagged markers for the nearest-match
    /// resolver. Table markers fetched separately can be appended to the
    /// returned list; the resolver treats both kinds uniformly.
    pub fn voting_center_markers(&self) -> Vec<LocatedRecord> {
        self.polling_places.iter().map(LocatedRecord::from).collect()
    }

    /// Joins elector -> mesa -> polling place and composes the assignment.
    ///
    /// Each stage that finds nothing reports its own [`LookupError`]
    /// variant, so the caller can show which link failed: an unregistered
    /// elector id, a mesa without a table record, or a table pointing at a
    /// polling place that is not in the dataset.
    pub fn find_elector_assignment(
        &self,
        elector_id: &str,
    ) -> Result<ElectorAssignment, LookupError> {
        let elector = self
            .electors
            .iter()
            .find(|e| e.id == elector_id)
            .ok_or_else(|| LookupError::UnknownElector {
                id: elector_id.to_string(),
            })?;
        let table = self
            .tables
            .iter()
            .find(|t| t.mesa == elector.mesa)
            .ok_or_else(|| LookupError::UnknownTable {
                mesa: elector.mesa.clone(),
            })?;
        let place = self
            .polling_places
            .iter()
            .find(|p| p.id == table.polling_place_id)
            .ok_or_else(|| LookupError::UnknownPollingPlace {
                id: table.polling_place_id.clone(),
            })?;
        debug!(
            "find_elector_assignment: {} -> mesa {} -> {}",
            elector_id, table.mesa, place.id
        );
        Ok(ElectorAssignment {
            elector_id: elector.id.clone(),
            full_name: elector.full_name.clone(),
            mesa: table.mesa.clone(),
            room: table.room.clone(),
            floor: table.floor.clone(),
            pavilion: table.pavilion.clone(),
            polling_place_id: place.id.clone(),
            polling_place_name: place.name.clone(),
            address: place.address.clone(),
            district: place.district.clone(),
            province: place.province.clone(),
            location: place.location,
        })
    }
}
