//! Event record returned by the fetch service.
//!
//! Only the identifier takes part in controller logic. The title is carried so
//! hosts have something to display and so test fixtures read naturally.

use serde::{Deserialize, Serialize};

/// Identifier of an event as assigned by the remote service.
pub type EventId = i64;

/// An event returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Remote identifier, used for favorites membership.
    pub id: EventId,

    /// Display title. Absent in a payload decodes as empty.
    #[serde(default)]
    pub title: String,
}

impl Event {
    /// Creates an event with the given id and title.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventsearch::Event;
    ///
    /// let event = Event::new(42, "Jazz in the Park");
    /// assert_eq!(event.id, 42);
    /// ```
    pub fn new(id: EventId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_without_title() {
        let event: Event = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(event, Event::new(7, ""));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let event: Event =
            serde_json::from_str(r#"{"id": 9, "title": "Opera", "venue": {"city": "Boston"}}"#)
                .unwrap();
        assert_eq!(event.id, 9);
        assert_eq!(event.title, "Opera");
    }
}
