use log::{debug, info};

use electoral_core::*;
use snafu::{prelude::*, Snafu};

use std::fs;

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;

use crate::args::Args;

#[derive(Debug, Snafu)]
pub enum AppError {
    #[snafu(display("Error opening dataset file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing dataset file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Both --lat and --lon are required for the nearest center search"))]
    IncompleteReference {},
    #[snafu(display("Unknown office {value}: expected president, vice-president, deputy, senator, andean-parliament or all"))]
    UnknownRole { value: String },
    #[snafu(display("Unknown event type {value}: expected election, process, poll-worker or all"))]
    UnknownEventType { value: String },
    #[snafu(display(""))]
    Serializing { source: serde_json::Error },
    #[snafu(display("{source}"))]
    Lookup { source: LookupError },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type AppResult<T> = Result<T, AppError>;

fn read_dataset(path: &str) -> AppResult<Dataset> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let dataset: Dataset =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    info!(
        "read_dataset: {} polling places, {} electors, {} parties, {} candidates, {} events",
        dataset.polling_places.len(),
        dataset.electors.len(),
        dataset.parties.len(),
        dataset.candidates.len(),
        dataset.events.len()
    );
    Ok(dataset)
}

fn parse_role(value: Option<&str>) -> AppResult<Option<Role>> {
    let value = match value {
        None => return Ok(None),
        Some(v) => v,
    };
    match value.to_lowercase().as_str() {
        "all" => Ok(None),
        "president" => Ok(Some(Role::President)),
        "vice-president" | "vice_president" => Ok(Some(Role::VicePresident)),
        "deputy" => Ok(Some(Role::Deputy)),
        "senator" => Ok(Some(Role::Senator)),
        "andean-parliament" | "andean_parliament" => Ok(Some(Role::AndeanParliament)),
        _ => UnknownRoleSnafu { value }.fail(),
    }
}

fn parse_event_type(value: &str) -> AppResult<Option<EventType>> {
    match value.to_lowercase().as_str() {
        "all" => Ok(None),
        "election" => Ok(Some(EventType::Election)),
        "process" => Ok(Some(EventType::Process)),
        "poll-worker" | "poll_worker" => Ok(Some(EventType::PollWorker)),
        _ => UnknownEventTypeSnafu { value }.fail(),
    }
}

fn reference_point(args: &Args) -> AppResult<Option<GeoPoint>> {
    match (args.lat, args.lon) {
        (Some(latitude), Some(longitude)) => Ok(Some(GeoPoint {
            latitude,
            longitude,
        })),
        (None, None) => Ok(None),
        _ => IncompleteReferenceSnafu {}.fail(),
    }
}

fn candidate_js(candidate: &Candidate) -> JSValue {
    json!({
        "id": candidate.id,
        "name": candidate.name,
        "partyId": candidate.party_id,
        "office": candidate.role.label(),
        "region": candidate.region,
    })
}

pub fn run(args: &Args) -> AppResult<()> {
    let dataset = read_dataset(&args.data)?;
    let mut output: JSMap<String, JSValue> = JSMap::new();

    if let Some(elector_id) = &args.elector {
        let assignment = dataset
            .find_elector_assignment(elector_id)
            .context(LookupSnafu)?;
        info!(
            "run: elector {} votes at mesa {} in {}",
            elector_id, assignment.mesa, assignment.polling_place_name
        );
        output.insert(
            "assignment".to_string(),
            serde_json::to_value(&assignment).context(SerializingSnafu)?,
        );
    }

    if let Some(point) = reference_point(args)? {
        let markers = dataset.voting_center_markers();
        let js = match find_nearest(Some(point), &markers) {
            Some(record) => json!({
                "id": record.id,
                "name": record.name,
                "kind": record.kind,
                "distanceKm": distance_km(point, record.location),
            }),
            None => JSValue::Null,
        };
        output.insert("nearestCenter".to_string(), js);
    }

    let browsing = args.party.is_some()
        || args.region.is_some()
        || args.role.is_some()
        || args.query.is_some();
    if browsing {
        let facets = CandidateFacets {
            region: args.region.clone(),
            role: parse_role(args.role.as_deref())?,
            query: args.query.clone().unwrap_or_default(),
        };

        let scoped: Vec<&Candidate> = match &args.party {
            Some(party_id) => {
                let party = dataset
                    .party(party_id)
                    .ok_or_else(|| LookupError::UnknownParty {
                        id: party_id.clone(),
                    })
                    .context(LookupSnafu)?;
                output.insert(
                    "party".to_string(),
                    json!({
                        "id": party.id,
                        "name": party.name,
                        "shortName": party.short_name,
                        "slogan": party.slogan,
                    }),
                );
                output.insert(
                    "plan".to_string(),
                    serde_json::to_value(dataset.party_plan(party_id))
                        .context(SerializingSnafu)?,
                );
                output.insert(
                    "news".to_string(),
                    serde_json::to_value(dataset.party_news(party_id))
                        .context(SerializingSnafu)?,
                );
                dataset.party_candidates(party_id)
            }
            None => dataset.candidates.iter().collect(),
        };

        // Region options come from the scoped set before any facet narrows it.
        output.insert(
            "availableRegions".to_string(),
            json!(available_regions(scoped.iter().copied())),
        );

        let selected = apply_filters(scoped, &facets);
        debug!("run: {} candidacies selected", selected.len());
        output.insert(
            "candidates".to_string(),
            JSValue::Array(selected.iter().map(|c| candidate_js(c)).collect()),
        );

        if args.party.is_none() {
            if let Some(query) = &args.query {
                let parties: Vec<JSValue> = dataset
                    .parties
                    .iter()
                    .filter(|p| party_matches(p, query))
                    .map(|p| {
                        json!({
                            "id": p.id,
                            "name": p.name,
                            "shortName": p.short_name,
                        })
                    })
                    .collect();
                output.insert("parties".to_string(), JSValue::Array(parties));
            }
        }
    }

    if let Some(compare_ids) = &args.compare {
        let mut selection = SelectionSet::new();
        for id in compare_ids {
            dataset
                .candidate(id)
                .ok_or_else(|| LookupError::UnknownCandidate { id: id.clone() })
                .context(LookupSnafu)?;
            let next = selection.toggle(id);
            if !selection.is_full() && next.is_full() {
                info!("run: comparison selection is now full");
            }
            selection = next;
        }
        let resolved = selection.resolve(&dataset.candidates);
        let rows_js = match resolved.as_slice() {
            [left, right] => JSValue::Array(
                comparison_rows(left, right, &dataset.parties)
                    .iter()
                    .map(|r| json!({"field": r.field, "left": r.left, "right": r.right}))
                    .collect(),
            ),
            _ => JSValue::Null,
        };
        output.insert(
            "comparison".to_string(),
            json!({ "selection": selection.ids(), "rows": rows_js }),
        );
    }

    if let Some(value) = &args.events {
        let ordered = schedule(&dataset.events, parse_event_type(value)?);
        output.insert(
            "events".to_string(),
            serde_json::to_value(ordered).context(SerializingSnafu)?,
        );
    }

    let pretty = serde_json::to_string_pretty(&JSValue::Object(output)).context(SerializingSnafu)?;
    println!("{}", pretty);
    Ok(())
}
