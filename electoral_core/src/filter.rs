use crate::records::{Candidate, Party, Role};

/// The facet values of the candidate listing.
///
/// Each facet is one independent filter dimension; facets compose by
/// logical AND. `None` stands for the "all" choice of the corresponding
/// widget. The values are owned by the active screen session and passed in
/// on every call; the engine keeps no state of its own.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct CandidateFacets {
    /// Exact, case-sensitive region value.
    pub region: Option<String>,
    pub role: Option<Role>,
    /// Free text, normalized by trimming and lowercasing before matching.
    pub query: String,
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

// `query` must already be normalized here.
fn matches_query(candidate: &Candidate, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    candidate.name.to_lowercase().contains(query)
        || candidate
            .region
            .as_deref()
            .map_or(false, |r| r.to_lowercase().contains(query))
}

fn matches_facets(candidate: &Candidate, facets: &CandidateFacets, query: &str) -> bool {
    if let Some(region) = &facets.region {
        // Candidacies without a region never match a concrete region value.
        if candidate.region.as_deref() != Some(region.as_str()) {
            return false;
        }
    }
    if let Some(role) = facets.role {
        if candidate.role != role {
            return false;
        }
    }
    matches_query(candidate, query)
}

/// Applies all facets to `records`, preserving the input order.
///
/// Filtering is total: no facet combination is an error, an empty result is
/// the everyday answer for over-narrow criteria.
pub fn apply_filters<'a, I>(records: I, facets: &CandidateFacets) -> Vec<&'a Candidate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let query = normalize(&facets.query);
    records
        .into_iter()
        .filter(|c| matches_facets(c, facets, &query))
        .collect()
}

/// The distinct region values to offer in the region filter widget, in
/// first-occurrence order.
///
/// Callers must pass the unfiltered candidate set scoped to the current
/// party, not an already filtered view: the options on display may not
/// change when another facet narrows the list. Records without a region do
/// not contribute an option.
pub fn available_regions<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut regions: Vec<String> = Vec::new();
    for candidate in records {
        if let Some(region) = &candidate.region {
            if !regions.contains(region) {
                regions.push(region.clone());
            }
        }
    }
    regions
}

/// Free-text matcher for the top-level party listing: substring match on
/// the name or the short name, after trimming and lowercasing. An
/// empty-after-trim query matches everything.
pub fn party_matches(party: &Party, query: &str) -> bool {
    let query = normalize(query);
    if query.is_empty() {
        return true;
    }
    party.name.to_lowercase().contains(&query)
        || party.short_name.to_lowercase().contains(&query)
}

/// Free-text matcher for the top-level candidate search: substring match on
/// the name or the region, with the same normalization as `party_matches`.
pub fn candidate_matches(candidate: &Candidate, query: &str) -> bool {
    let query = normalize(query);
    matches_query(candidate, &query)
}
