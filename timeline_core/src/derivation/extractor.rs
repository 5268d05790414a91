//! Attribute extractors - one description fragment per extraction.
//!
//! Every variant obeys the same contract: given a record's attribute bag,
//! produce one string fragment, with missing attributes coerced to `""`.
//! [`Extractor::SourceFileName`] is the single variant with an external
//! dependency; it resolves the record's backing file through the store and
//! is the only fallible path.

use artifact_model::{AttributeKind, Record, RecordStore, StoreError};

use super::coerce::{direction_label, display_string_of};

/// The closed set of extraction strategies used by leaf event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// Look up one attribute and coerce it to a display string.
    Attribute(AttributeKind),

    /// Always yields `""`; placeholder for levels with no meaningful
    /// fragment.
    Empty,

    /// Message header summary: direction, read status, direction word,
    /// contact (name preferred over phone number), subject.
    MessageSummary,

    /// `"from {latStart} {longStart} to {latEnd} {longEnd}"`.
    RouteEndpoints,

    /// `"{latitude} {longitude}"`.
    TrackpointCoordinates,

    /// `"{fromAddress} to {toAddress}"`.
    EmailHeader,

    /// `"{name}:{value} count: {count}"`.
    AutofillEntry,

    /// Name of the file backing the record, resolved via the store.
    SourceFileName,
}

impl Extractor {
    /// Produce this extractor's fragment for the given record.
    ///
    /// Total for every variant except [`Extractor::SourceFileName`], whose
    /// store lookup may fail.
    pub fn extract(&self, record: &Record, store: &dyn RecordStore) -> Result<String, StoreError> {
        match self {
            Extractor::Attribute(kind) => Ok(display_string_of(record.attribute(*kind))),
            Extractor::Empty => Ok(String::new()),
            Extractor::MessageSummary => Ok(message_summary(record)),
            Extractor::RouteEndpoints => Ok(route_endpoints(record)),
            Extractor::TrackpointCoordinates => Ok(trackpoint_coordinates(record)),
            Extractor::EmailHeader => Ok(email_header(record)),
            Extractor::AutofillEntry => Ok(autofill_entry(record)),
            Extractor::SourceFileName => store.source_file_name(record.object_id),
        }
    }
}

/// Space-joined message header. Empty fragments stay in the join; the
/// direction word appears only when a contact (name or phone number) does.
fn message_summary(record: &Record) -> String {
    let direction = record.attribute(AttributeKind::Direction);
    let read_status = record.attribute(AttributeKind::ReadStatus);
    let name = record.attribute(AttributeKind::Name);
    let phone_number = record.attribute(AttributeKind::PhoneNumber);
    let subject = record.attribute(AttributeKind::Subject);

    let direction_word = if name.is_none() && phone_number.is_none() {
        String::new()
    } else {
        direction_label(direction)
    };

    [
        display_string_of(direction),
        display_string_of(read_status),
        direction_word,
        display_string_of(name.or(phone_number)),
        display_string_of(subject),
    ]
    .join(" ")
}

fn route_endpoints(record: &Record) -> String {
    let lat_start = display_string_of(record.attribute(AttributeKind::GeoLatitudeStart));
    let long_start = display_string_of(record.attribute(AttributeKind::GeoLongitudeStart));
    let lat_end = display_string_of(record.attribute(AttributeKind::GeoLatitudeEnd));
    let long_end = display_string_of(record.attribute(AttributeKind::GeoLongitudeEnd));

    format!("from {} {} to {} {}", lat_start, long_start, lat_end, long_end)
}

fn trackpoint_coordinates(record: &Record) -> String {
    let latitude = display_string_of(record.attribute(AttributeKind::GeoLatitude));
    let longitude = display_string_of(record.attribute(AttributeKind::GeoLongitude));

    format!("{} {}", latitude, longitude)
}

fn email_header(record: &Record) -> String {
    let from = display_string_of(record.attribute(AttributeKind::EmailFrom));
    let to = display_string_of(record.attribute(AttributeKind::EmailTo));

    format!("{} to {}", from, to)
}

fn autofill_entry(record: &Record) -> String {
    let name = display_string_of(record.attribute(AttributeKind::Name));
    let value = display_string_of(record.attribute(AttributeKind::Value));
    let count = display_string_of(record.attribute(AttributeKind::Count));

    format!("{}:{} count: {}", name, value, count)
}

#[cfg(test)]
mod tests {
    use artifact_model::{InMemoryRecordStore, ObjectId, RecordKind};

    use super::*;

    fn store() -> InMemoryRecordStore {
        InMemoryRecordStore::new()
    }

    #[test]
    fn test_attribute_extractor_missing_yields_empty() {
        let record = Record::new(RecordKind::CallLog);
        let fragment = Extractor::Attribute(AttributeKind::Name)
            .extract(&record, &store())
            .unwrap();

        assert_eq!(fragment, "");
    }

    #[test]
    fn test_empty_extractor() {
        let record = Record::new(RecordKind::Message).with_attribute(AttributeKind::Text, "hi");
        assert_eq!(Extractor::Empty.extract(&record, &store()).unwrap(), "");
    }

    #[test]
    fn test_message_summary_with_phone_fallback() {
        let record = Record::new(RecordKind::Message)
            .with_attribute(AttributeKind::Direction, "Incoming")
            .with_attribute(AttributeKind::ReadStatus, "Read")
            .with_attribute(AttributeKind::PhoneNumber, "555-1234")
            .with_attribute(AttributeKind::Subject, "hi");

        let fragment = Extractor::MessageSummary.extract(&record, &store()).unwrap();
        assert_eq!(fragment, "Incoming Read from 555-1234 hi");
    }

    #[test]
    fn test_message_summary_prefers_name_over_phone() {
        let record = Record::new(RecordKind::Message)
            .with_attribute(AttributeKind::Direction, "Outgoing")
            .with_attribute(AttributeKind::Name, "Alice")
            .with_attribute(AttributeKind::PhoneNumber, "555-1234");

        let fragment = Extractor::MessageSummary.extract(&record, &store()).unwrap();
        assert_eq!(fragment, "Outgoing  to Alice ");
    }

    #[test]
    fn test_message_summary_without_contact_drops_direction_word() {
        let record = Record::new(RecordKind::Message)
            .with_attribute(AttributeKind::Direction, "Incoming")
            .with_attribute(AttributeKind::ReadStatus, "Unread");

        // No name and no phone number: the direction word stays empty even
        // though the direction itself is present.
        let fragment = Extractor::MessageSummary.extract(&record, &store()).unwrap();
        assert_eq!(fragment, "Incoming Unread   ");
    }

    #[test]
    fn test_route_endpoints() {
        let record = Record::new(RecordKind::GpsRoute)
            .with_attribute(AttributeKind::GeoLatitudeStart, 51.5074)
            .with_attribute(AttributeKind::GeoLongitudeStart, -0.1278)
            .with_attribute(AttributeKind::GeoLatitudeEnd, 48.8566)
            .with_attribute(AttributeKind::GeoLongitudeEnd, 2.3522);

        let fragment = Extractor::RouteEndpoints.extract(&record, &store()).unwrap();
        assert_eq!(fragment, "from 51.5074 -0.1278 to 48.8566 2.3522");
    }

    #[test]
    fn test_route_endpoints_degrades_per_coordinate() {
        let record = Record::new(RecordKind::GpsRoute)
            .with_attribute(AttributeKind::GeoLatitudeStart, 51.5074);

        let fragment = Extractor::RouteEndpoints.extract(&record, &store()).unwrap();
        assert_eq!(fragment, "from 51.5074  to  ");
    }

    #[test]
    fn test_trackpoint_coordinates() {
        let record = Record::new(RecordKind::GpsTrackpoint)
            .with_attribute(AttributeKind::GeoLatitude, 59.3293)
            .with_attribute(AttributeKind::GeoLongitude, 18.0686);

        let fragment = Extractor::TrackpointCoordinates
            .extract(&record, &store())
            .unwrap();
        assert_eq!(fragment, "59.3293 18.0686");
    }

    #[test]
    fn test_email_header() {
        let record = Record::new(RecordKind::EmailMessage)
            .with_attribute(AttributeKind::EmailFrom, "alice@example.com")
            .with_attribute(AttributeKind::EmailTo, "bob@example.com");

        let fragment = Extractor::EmailHeader.extract(&record, &store()).unwrap();
        assert_eq!(fragment, "alice@example.com to bob@example.com");
    }

    #[test]
    fn test_autofill_entry() {
        let record = Record::new(RecordKind::WebFormAutofill)
            .with_attribute(AttributeKind::Name, "email")
            .with_attribute(AttributeKind::Value, "alice@example.com")
            .with_attribute(AttributeKind::Count, 7i64);

        let fragment = Extractor::AutofillEntry.extract(&record, &store()).unwrap();
        assert_eq!(fragment, "email:alice@example.com count: 7");
    }

    #[test]
    fn test_source_file_name_resolves_through_store() {
        let object_id = ObjectId::new();
        let record = Record::new(RecordKind::ExifMetadata).with_object_id(object_id);
        let store = InMemoryRecordStore::new().with_file(object_id, "IMG_0042.jpg");

        let fragment = Extractor::SourceFileName.extract(&record, &store).unwrap();
        assert_eq!(fragment, "IMG_0042.jpg");
    }

    #[test]
    fn test_source_file_name_propagates_store_error() {
        let record = Record::new(RecordKind::ExifMetadata);
        let result = Extractor::SourceFileName.extract(&record, &store());

        assert_eq!(
            result,
            Err(StoreError::MissingSourceFile(record.object_id))
        );
    }
}
