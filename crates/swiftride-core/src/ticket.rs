//! Ticket data model
//!
//! The fixed set of ticket fields, their layout table, and the record of
//! field values shown on the card.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SeedError;

/// One of the fixed, known ticket fields.
///
/// The key set is closed: a field that is not listed here cannot be read or
/// written, so there is no runtime "unknown field" case to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketField {
    PassengerName,
    Date,
    From,
    To,
    DepartureTime,
    ArrivalTime,
    BusNo,
    Seat,
    Platform,
}

impl TicketField {
    /// All fields in card order.
    pub const ALL: [TicketField; 9] = [
        TicketField::PassengerName,
        TicketField::Date,
        TicketField::From,
        TicketField::To,
        TicketField::DepartureTime,
        TicketField::ArrivalTime,
        TicketField::BusNo,
        TicketField::Seat,
        TicketField::Platform,
    ];

    /// Stable key used in seed files and as the input `name` attribute.
    pub fn key(&self) -> &'static str {
        match self {
            TicketField::PassengerName => "passengerName",
            TicketField::Date => "date",
            TicketField::From => "from",
            TicketField::To => "to",
            TicketField::DepartureTime => "departureTime",
            TicketField::ArrivalTime => "arrivalTime",
            TicketField::BusNo => "busNo",
            TicketField::Seat => "seat",
            TicketField::Platform => "platform",
        }
    }

    /// Parse a key back into a field. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Layout entry for this field.
    pub fn spec(&self) -> FieldSpec {
        FIELD_SPECS
            .iter()
            .copied()
            .find(|spec| spec.field == *self)
            .unwrap_or(FieldSpec {
                field: *self,
                label: "",
                max_len: SHORT_FIELD_MAX,
            })
    }

    /// Maximum number of characters the form accepts for this field.
    pub fn max_len(&self) -> usize {
        self.spec().max_len
    }

    /// Cut `value` down to this field's maximum length, counted in chars.
    pub fn clamp(&self, value: &str) -> String {
        value.chars().take(self.max_len()).collect()
    }
}

impl std::fmt::Display for TicketField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Max length for the passenger name and date inputs.
pub const LONG_FIELD_MAX: usize = 18;
/// Max length for route, vehicle, seat and platform inputs.
pub const SHORT_FIELD_MAX: usize = 10;

/// Static rendering entry: which field, what label, how many chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: TicketField,
    pub label: &'static str,
    pub max_len: usize,
}

impl FieldSpec {
    const fn new(field: TicketField, label: &'static str, max_len: usize) -> Self {
        Self {
            field,
            label,
            max_len,
        }
    }
}

/// Every field with its label and input limit, in card order.
pub const FIELD_SPECS: [FieldSpec; 9] = [
    FieldSpec::new(TicketField::PassengerName, "Passenger", LONG_FIELD_MAX),
    FieldSpec::new(TicketField::Date, "Date", LONG_FIELD_MAX),
    FieldSpec::new(TicketField::From, "From", SHORT_FIELD_MAX),
    FieldSpec::new(TicketField::To, "To", SHORT_FIELD_MAX),
    FieldSpec::new(TicketField::DepartureTime, "Departure", SHORT_FIELD_MAX),
    FieldSpec::new(TicketField::ArrivalTime, "Arrival", SHORT_FIELD_MAX),
    FieldSpec::new(TicketField::BusNo, "Bus No", SHORT_FIELD_MAX),
    FieldSpec::new(TicketField::Seat, "Seat", SHORT_FIELD_MAX),
    FieldSpec::new(TicketField::Platform, "Platform", SHORT_FIELD_MAX),
];

/// Header row: passenger and travel date.
pub const PASSENGER_FIELDS: [FieldSpec; 2] = [FIELD_SPECS[0], FIELD_SPECS[1]];

/// Route box, one `(place, time)` pair per side.
pub const ROUTE_FIELDS: [(FieldSpec, FieldSpec); 2] = [
    (FIELD_SPECS[2], FIELD_SPECS[4]),
    (FIELD_SPECS[3], FIELD_SPECS[5]),
];

/// Bottom row of identical boxes.
pub const DETAIL_FIELDS: [FieldSpec; 3] = [FIELD_SPECS[6], FIELD_SPECS[7], FIELD_SPECS[8]];

/// Values shown on the ticket.
///
/// All values are plain display strings; dates and times are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default = "TicketData::sample")]
pub struct TicketData {
    pub passenger_name: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub bus_no: String,
    pub seat: String,
    pub platform: String,
}

impl TicketData {
    /// Sample ticket shown when no seed is supplied.
    pub fn sample() -> Self {
        Self {
            passenger_name: "Jane Smith".to_string(),
            date: "20 JUL 2024".to_string(),
            from: "Boston".to_string(),
            to: "New York".to_string(),
            departure_time: "08:30 AM".to_string(),
            arrival_time: "01:30 PM".to_string(),
            bus_no: "SR205".to_string(),
            seat: "14B".to_string(),
            platform: "3".to_string(),
        }
    }

    /// Parse a seed from JSON. Missing keys keep their sample value.
    ///
    /// Values longer than their field's input limit are cut to the limit,
    /// so the form never shows more than it can store.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: Self = serde_json::from_str(json)?;
        Ok(seed.clamped())
    }

    /// Cut every value to its field's maximum length.
    pub fn clamped(mut self) -> Self {
        for field in TicketField::ALL {
            let value = self.get(field);
            if value.chars().count() > field.max_len() {
                tracing::warn!(field = %field, max = field.max_len(), "Seed value truncated");
                let clamped = field.clamp(value);
                self.set(field, clamped);
            }
        }
        self
    }

    /// Read a JSON seed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn get(&self, field: TicketField) -> &str {
        match field {
            TicketField::PassengerName => &self.passenger_name,
            TicketField::Date => &self.date,
            TicketField::From => &self.from,
            TicketField::To => &self.to,
            TicketField::DepartureTime => &self.departure_time,
            TicketField::ArrivalTime => &self.arrival_time,
            TicketField::BusNo => &self.bus_no,
            TicketField::Seat => &self.seat,
            TicketField::Platform => &self.platform,
        }
    }

    fn slot_mut(&mut self, field: TicketField) -> &mut String {
        match field {
            TicketField::PassengerName => &mut self.passenger_name,
            TicketField::Date => &mut self.date,
            TicketField::From => &mut self.from,
            TicketField::To => &mut self.to,
            TicketField::DepartureTime => &mut self.departure_time,
            TicketField::ArrivalTime => &mut self.arrival_time,
            TicketField::BusNo => &mut self.bus_no,
            TicketField::Seat => &mut self.seat,
            TicketField::Platform => &mut self.platform,
        }
    }

    /// Overwrite one field, leaving the others untouched.
    pub fn set(&mut self, field: TicketField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }
}

/// Fixed decorative content printed on every ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub company: &'static str,
    pub tagline: &'static str,
    pub ticket_no: &'static str,
    pub footer: &'static str,
    pub barcode: &'static str,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            company: "SwiftRide Express",
            tagline: "Fast. Reliable. Comfortable.",
            ticket_no: "SR987654",
            footer: "Please arrive 15 minutes before departure. Thank you for choosing SwiftRide Express!",
            barcode: "||||| |||| |||| ||||| ||||",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for field in TicketField::ALL {
            assert_eq!(TicketField::from_key(field.key()), Some(field));
        }
        assert_eq!(TicketField::from_key("driver"), None);
    }

    #[test]
    fn test_field_specs_cover_every_field_once() {
        for field in TicketField::ALL {
            let count = FIELD_SPECS.iter().filter(|s| s.field == field).count();
            assert_eq!(count, 1, "{field} should appear exactly once");
        }
    }

    #[test]
    fn test_max_lengths() {
        assert_eq!(TicketField::PassengerName.max_len(), 18);
        assert_eq!(TicketField::Date.max_len(), 18);
        for field in [
            TicketField::From,
            TicketField::To,
            TicketField::DepartureTime,
            TicketField::ArrivalTime,
            TicketField::BusNo,
            TicketField::Seat,
            TicketField::Platform,
        ] {
            assert_eq!(field.max_len(), 10, "{field}");
        }
    }

    #[test]
    fn test_clamp_counts_chars_not_bytes() {
        let clamped = TicketField::Seat.clamp("ÄÄÄÄÄÄÄÄÄÄÄÄ");
        assert_eq!(clamped.chars().count(), 10);
        assert_eq!(TicketField::Seat.clamp("14B"), "14B");
    }

    #[test]
    fn test_layout_groups() {
        assert_eq!(PASSENGER_FIELDS[0].field, TicketField::PassengerName);
        assert_eq!(ROUTE_FIELDS[0].0.field, TicketField::From);
        assert_eq!(ROUTE_FIELDS[0].1.field, TicketField::DepartureTime);
        assert_eq!(ROUTE_FIELDS[1].0.field, TicketField::To);
        assert_eq!(ROUTE_FIELDS[1].1.field, TicketField::ArrivalTime);
        let labels: Vec<_> = DETAIL_FIELDS.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["Bus No", "Seat", "Platform"]);
    }

    #[test]
    fn test_sample_values() {
        let data = TicketData::sample();
        assert_eq!(data.get(TicketField::PassengerName), "Jane Smith");
        assert_eq!(data.get(TicketField::From), "Boston");
        assert_eq!(data.get(TicketField::To), "New York");
        assert_eq!(data.get(TicketField::Platform), "3");
    }

    #[test]
    fn test_seed_json_partial_and_unknown() {
        let data = TicketData::from_json(r#"{"passengerName":"Ann Lee","busNo":"X1"}"#).unwrap();
        assert_eq!(data.passenger_name, "Ann Lee");
        assert_eq!(data.bus_no, "X1");
        assert_eq!(data.from, "Boston");

        let err = TicketData::from_json(r#"{"driver":"Bob"}"#);
        assert!(matches!(err, Err(SeedError::Json(_))));
    }

    #[test]
    fn test_seed_json_clamps_long_values() {
        let data = TicketData::from_json(r#"{"from":"San Francisco Bay","seat":"14B"}"#).unwrap();
        assert_eq!(data.from, "San Franci");
        assert_eq!(data.seat, "14B");
    }

    #[test]
    fn test_seed_json_uses_field_keys() {
        let json = serde_json::to_value(TicketData::sample()).unwrap();
        for field in TicketField::ALL {
            assert!(json.get(field.key()).is_some(), "missing {field}");
        }
    }
}
