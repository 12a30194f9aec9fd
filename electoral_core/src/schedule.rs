use crate::records::{ElectoralEvent, EventType};

/// Chronological projection of the electoral calendar.
///
/// Events are narrowed by type (`None` keeps everything) and ordered by
/// their timestamp ascending. The comparison is on the parsed timestamp,
/// never on the rendered date string, and the sort is stable: events with
/// equal timestamps keep their input order. Empty input yields empty
/// output; there is no error case.
pub fn schedule<'a>(
    events: &'a [ElectoralEvent],
    filter: Option<EventType>,
) -> Vec<&'a ElectoralEvent> {
    let mut selected: Vec<&ElectoralEvent> = events
        .iter()
        .filter(|e| filter.map_or(true, |t| e.kind == t))
        .collect();
    selected.sort_by_key(|e| e.date);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::EventTarget;
    use chrono::{DateTime, Utc};

    fn event(id: &str, kind: EventType, date: &str) -> ElectoralEvent {
        ElectoralEvent {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: String::new(),
            kind,
            date: date.parse::<DateTime<Utc>>().unwrap(),
            target: EventTarget::General,
            level: None,
        }
    }

    fn ids(events: &[&ElectoralEvent]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn events_are_ordered_by_timestamp_ascending() {
        let events = vec![
            event("vote", EventType::Election, "2026-04-12T08:00:00Z"),
            event("close", EventType::Process, "2025-12-01T23:59:59Z"),
            event("excuse", EventType::PollWorker, "2026-02-10T23:59:59Z"),
        ];
        let ordered = schedule(&events, None);
        assert_eq!(ids(&ordered), vec!["close", "excuse", "vote"]);
    }

    #[test]
    fn type_filter_keeps_only_matching_events() {
        let events = vec![
            event("vote", EventType::Election, "2026-04-12T08:00:00Z"),
            event("training", EventType::PollWorker, "2026-03-01T09:00:00Z"),
            event("excuse", EventType::PollWorker, "2026-02-10T23:59:59Z"),
        ];
        let ordered = schedule(&events, Some(EventType::PollWorker));
        assert_eq!(ids(&ordered), vec!["excuse", "training"]);
    }

    #[test]
    fn equal_timestamps_keep_their_input_order() {
        let events = vec![
            event("first", EventType::Process, "2026-01-15T00:00:00Z"),
            event("second", EventType::Process, "2026-01-15T00:00:00Z"),
        ];
        let ordered = schedule(&events, None);
        assert_eq!(ids(&ordered), vec!["first", "second"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(schedule(&[], None).is_empty());
        assert!(schedule(&[], Some(EventType::Election)).is_empty());
    }
}
