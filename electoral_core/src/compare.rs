use crate::records::{Candidate, Party};

/// Upper bound on the number of candidates lined up side by side.
pub const MAX_COMPARED: usize = 2;

/// Value rendered for a field the candidate does not provide.
pub const FIELD_PLACEHOLDER: &str = "-";

/// The three sizes a selection can have.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum SelectionState {
    Empty,
    Partial,
    Full,
}

/// Insertion-ordered set of candidate ids, capped at [`MAX_COMPARED`].
///
/// The set is owned by one screen session and never persisted. Transitions
/// are pure: `toggle` returns the next set and leaves the current one
/// untouched, so the caller can compare `state()` before and after and
/// present the comparison view exactly when the selection becomes full.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> SelectionSet {
        SelectionSet { ids: Vec::new() }
    }

    /// The selected ids, oldest first.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    pub fn state(&self) -> SelectionState {
        match self.ids.len() {
            0 => SelectionState::Empty,
            1 => SelectionState::Partial,
            _ => SelectionState::Full,
        }
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() == MAX_COMPARED
    }

    /// The pure toggle transition.
    ///
    /// An id already present is removed. A new id is appended while there is
    /// room; on a full set the oldest member is evicted to make room (FIFO
    /// replacement, an intentional choice of the selection widget rather
    /// than rejecting the third candidate).
    pub fn toggle(&self, id: &str) -> SelectionSet {
        let mut ids = self.ids.clone();
        if let Some(pos) = ids.iter().position(|x| x == id) {
            ids.remove(pos);
        } else {
            if ids.len() >= MAX_COMPARED {
                ids.remove(0);
            }
            ids.push(id.to_string());
        }
        SelectionSet { ids }
    }

    /// Resolves the selected ids to full records, in selection order.
    ///
    /// Ids that no longer match any record (e.g. after the dataset was
    /// swapped out) are silently dropped.
    pub fn resolve<'a>(&self, records: &'a [Candidate]) -> Vec<&'a Candidate> {
        self.ids
            .iter()
            .filter_map(|id| records.iter().find(|c| &c.id == id))
            .collect()
    }
}

/// One line of the two-column comparison table.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ComparisonRow {
    pub field: &'static str,
    pub left: String,
    pub right: String,
}

/// Projects two candidates onto the fields of the comparison table.
///
/// Absent optionals render as [`FIELD_PLACEHOLDER`]; the projection is
/// total and never panics on short proposal lists or missing regions.
pub fn comparison_rows(left: &Candidate, right: &Candidate, parties: &[Party]) -> Vec<ComparisonRow> {
    vec![
        ComparisonRow {
            field: "Party",
            left: party_label(&left.party_id, parties),
            right: party_label(&right.party_id, parties),
        },
        ComparisonRow {
            field: "Office",
            left: left.role.label().to_string(),
            right: right.role.label().to_string(),
        },
        ComparisonRow {
            field: "Region",
            left: or_placeholder(left.region.clone()),
            right: or_placeholder(right.region.clone()),
        },
        ComparisonRow {
            field: "Proposal 1",
            left: proposal(left, 0),
            right: proposal(right, 0),
        },
        ComparisonRow {
            field: "Proposal 2",
            left: proposal(left, 1),
            right: proposal(right, 1),
        },
    ]
}

fn party_label(party_id: &str, parties: &[Party]) -> String {
    match parties.iter().find(|p| p.id == party_id) {
        Some(p) => format!("{} ({})", p.name, p.short_name),
        None => FIELD_PLACEHOLDER.to_string(),
    }
}

fn proposal(candidate: &Candidate, index: usize) -> String {
    candidate
        .proposals
        .get(index)
        .cloned()
        .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string())
}

fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| FIELD_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Role;

    fn candidate(id: &str, proposals: &[&str], region: Option<&str>) -> Candidate {
        Candidate {
            id: id.to_string(),
            party_id: "apd".to_string(),
            name: format!("Candidate {}", id),
            role: Role::Deputy,
            region: region.map(|r| r.to_string()),
            bio: String::new(),
            education: None,
            experience: None,
            proposals: proposals.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn fifo_eviction_on_the_third_toggle() {
        let selection = SelectionSet::new()
            .toggle("a")
            .toggle("b")
            .toggle("c");
        assert_eq!(selection.ids(), ["b", "c"]);
    }

    #[test]
    fn toggling_a_selected_id_removes_it() {
        let two = SelectionSet::new().toggle("a").toggle("b");
        let one = two.toggle("a");
        assert_eq!(one.ids(), ["b"]);
        assert_eq!(one.state(), SelectionState::Partial);
        assert_eq!(one.toggle("b").state(), SelectionState::Empty);
    }

    #[test]
    fn the_caller_can_observe_the_selection_becoming_full() {
        let one = SelectionSet::new().toggle("a");
        let two = one.toggle("b");
        assert!(!one.is_full());
        assert!(two.is_full());

        // A toggle on a full set replaces a member; the set stays full and
        // must not re-trigger the presentation.
        let replaced = two.toggle("c");
        assert!(replaced.is_full());
        assert_eq!(replaced.ids(), ["b", "c"]);
    }

    #[test]
    fn resolve_returns_records_in_selection_order() {
        let records = vec![
            candidate("a", &[], None),
            candidate("b", &[], None),
            candidate("c", &[], None),
        ];
        let selection = SelectionSet::new().toggle("c").toggle("a");
        let resolved = selection.resolve(&records);
        let ids: Vec<&str> = resolved.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);

        let with_ghost = SelectionSet::new().toggle("c").toggle("zz");
        assert_eq!(with_ghost.resolve(&records).len(), 1);
    }

    #[test]
    fn comparison_rows_use_placeholders_for_missing_fields() {
        let left = candidate("a", &["Primera propuesta"], Some("Lima"));
        let right = candidate("b", &[], None);
        let parties = vec![Party {
            id: "apd".to_string(),
            name: "Alianza por el Progreso Democrático".to_string(),
            short_name: "APD".to_string(),
            description: String::new(),
            slogan: None,
        }];

        let rows = comparison_rows(&left, &right, &parties);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].left, "Alianza por el Progreso Democrático (APD)");
        assert_eq!(rows[2].left, "Lima");
        assert_eq!(rows[2].right, FIELD_PLACEHOLDER);
        assert_eq!(rows[3].left, "Primera propuesta");
        assert_eq!(rows[3].right, FIELD_PLACEHOLDER);
        assert_eq!(rows[4].left, FIELD_PLACEHOLDER);
    }

    #[test]
    fn comparison_rows_with_an_unknown_party() {
        let left = candidate("a", &[], None);
        let right = candidate("b", &[], None);
        let rows = comparison_rows(&left, &right, &[]);
        assert_eq!(rows[0].left, FIELD_PLACEHOLDER);
    }
}
