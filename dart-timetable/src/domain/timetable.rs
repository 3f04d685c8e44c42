//! Timetable entries and their classifications.

use serde::Serialize;

/// Due-in threshold (inclusive) at or below which a train counts as urgent.
pub const URGENT_DUE_IN_MINS: i32 = 5;

/// One live prediction for a train calling at a station.
///
/// All text fields are passed through from the API unchanged. Only
/// `due_in_minutes` is interpreted numerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimetableEntry {
    /// Full name of the station this prediction is for.
    pub station: String,
    /// Raw direction text, usually "Northbound" or "Southbound".
    pub direction: String,
    /// Origin of the service.
    pub origin: String,
    /// Destination of the service.
    pub destination: String,
    /// Minutes until the train arrives.
    pub due_in_minutes: i32,
    /// Server-formatted expected arrival time (e.g. "10:30").
    pub estimated_time: String,
    /// Last reported location. Empty when unknown.
    pub last_location: String,
    /// Free-text train category. Empty when the API omits it.
    pub train_type: String,
}

impl TimetableEntry {
    /// Classify this entry's direction.
    pub fn direction_kind(&self) -> Direction {
        Direction::classify(&self.direction)
    }

    /// Classify this entry's train type.
    pub fn train_kind(&self) -> TrainType {
        TrainType::classify(&self.train_type)
    }

    /// Whether this is a DART service.
    pub fn is_dart(&self) -> bool {
        self.train_kind() == TrainType::Dart
    }

    /// Urgency of this arrival.
    pub fn urgency(&self) -> Urgency {
        Urgency::from_due_in(self.due_in_minutes)
    }

    /// Last known location, if the API reported one.
    pub fn last_location(&self) -> Option<&str> {
        let trimmed = self.last_location.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Direction of travel as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Northbound,
    Southbound,
    /// Anything else (e.g. "To Maynooth" on non-DART lines).
    Other,
}

impl Direction {
    /// Classify a raw direction string. Matching is exact.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "Northbound" => Direction::Northbound,
            "Southbound" => Direction::Southbound,
            _ => Direction::Other,
        }
    }
}

/// Two-way train type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainType {
    Dart,
    Other,
}

impl TrainType {
    /// Classify a raw train type. "DART" in any case is a DART; blank is not.
    ///
    /// ```
    /// use dart_timetable::domain::TrainType;
    ///
    /// assert_eq!(TrainType::classify("dart"), TrainType::Dart);
    /// assert_eq!(TrainType::classify("Train"), TrainType::Other);
    /// assert_eq!(TrainType::classify("   "), TrainType::Other);
    /// ```
    pub fn classify(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("DART") {
            TrainType::Dart
        } else {
            TrainType::Other
        }
    }
}

/// How soon a train is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    Urgent,
    Normal,
}

impl Urgency {
    pub fn from_due_in(due_in_minutes: i32) -> Self {
        if due_in_minutes <= URGENT_DUE_IN_MINS {
            Urgency::Urgent
        } else {
            Urgency::Normal
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_entry(direction: &str, due_in_minutes: i32) -> TimetableEntry {
    TimetableEntry {
        station: "Connolly".to_string(),
        direction: direction.to_string(),
        origin: "Bray".to_string(),
        destination: "Howth".to_string(),
        due_in_minutes,
        estimated_time: "10:30".to_string(),
        last_location: "Pearse".to_string(),
        train_type: "DART".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_direction() {
        assert_eq!(Direction::classify("Northbound"), Direction::Northbound);
        assert_eq!(Direction::classify("Southbound"), Direction::Southbound);
        assert_eq!(Direction::classify("To Maynooth"), Direction::Other);
        assert_eq!(Direction::classify("northbound"), Direction::Other);
        assert_eq!(Direction::classify(""), Direction::Other);
    }

    #[test]
    fn classify_train_type() {
        assert_eq!(TrainType::classify("DART"), TrainType::Dart);
        assert_eq!(TrainType::classify("dart"), TrainType::Dart);
        assert_eq!(TrainType::classify(" Dart "), TrainType::Dart);
        assert_eq!(TrainType::classify("Commuter"), TrainType::Other);
        assert_eq!(TrainType::classify(""), TrainType::Other);
        assert_eq!(TrainType::classify("   "), TrainType::Other);
    }

    #[test]
    fn urgency_boundary() {
        assert_eq!(Urgency::from_due_in(0), Urgency::Urgent);
        assert_eq!(Urgency::from_due_in(3), Urgency::Urgent);
        assert_eq!(Urgency::from_due_in(5), Urgency::Urgent);
        assert_eq!(Urgency::from_due_in(6), Urgency::Normal);
        assert_eq!(Urgency::from_due_in(10), Urgency::Normal);
    }

    #[test]
    fn entry_helpers() {
        let mut entry = sample_entry("Southbound", 12);
        assert_eq!(entry.direction_kind(), Direction::Southbound);
        assert!(entry.is_dart());
        assert_eq!(entry.urgency(), Urgency::Normal);
        assert_eq!(entry.last_location(), Some("Pearse"));

        entry.train_type = "Commuter".to_string();
        entry.last_location = "  ".to_string();
        assert!(!entry.is_dart());
        assert_eq!(entry.last_location(), None);
    }
}
