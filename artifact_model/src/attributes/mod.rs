//! Attribute definitions - the typed fields attached to records.
//!
//! A record carries a sparse [`AttributeBag`]: any subset of the closed
//! [`AttributeKind`] set, each mapped to one [`AttributeValue`].

mod bag;
mod value;

pub use bag::*;
pub use value::*;

use serde::{Deserialize, Serialize};

/// The closed set of attribute types records may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    // Timestamps
    Datetime,
    DatetimeAccessed,
    DatetimeCreated,
    DatetimeSent,
    DatetimeStart,

    // Web
    Url,
    Domain,

    // Files
    Path,

    // Communications
    Name,
    PhoneNumber,
    Direction,
    ReadStatus,
    Subject,
    Text,
    MessageType,
    EmailFrom,
    EmailTo,
    EmailContentPlain,
    EmailAddress,

    // Geolocation
    GeoLatitude,
    GeoLongitude,
    GeoLatitudeStart,
    GeoLongitudeStart,
    GeoLatitudeEnd,
    GeoLongitudeEnd,

    // Programs and devices
    ProgramName,
    Location,
    DeviceMake,
    DeviceModel,
    DeviceId,

    // Forms
    Value,
    Count,

    // Pre-formatted descriptions
    Description,
}

impl AttributeKind {
    /// Short machine-readable name.
    pub fn label(self) -> &'static str {
        match self {
            AttributeKind::Datetime => "datetime",
            AttributeKind::DatetimeAccessed => "datetime_accessed",
            AttributeKind::DatetimeCreated => "datetime_created",
            AttributeKind::DatetimeSent => "datetime_sent",
            AttributeKind::DatetimeStart => "datetime_start",
            AttributeKind::Url => "url",
            AttributeKind::Domain => "domain",
            AttributeKind::Path => "path",
            AttributeKind::Name => "name",
            AttributeKind::PhoneNumber => "phone_number",
            AttributeKind::Direction => "direction",
            AttributeKind::ReadStatus => "read_status",
            AttributeKind::Subject => "subject",
            AttributeKind::Text => "text",
            AttributeKind::MessageType => "message_type",
            AttributeKind::EmailFrom => "email_from",
            AttributeKind::EmailTo => "email_to",
            AttributeKind::EmailContentPlain => "email_content_plain",
            AttributeKind::EmailAddress => "email_address",
            AttributeKind::GeoLatitude => "geo_latitude",
            AttributeKind::GeoLongitude => "geo_longitude",
            AttributeKind::GeoLatitudeStart => "geo_latitude_start",
            AttributeKind::GeoLongitudeStart => "geo_longitude_start",
            AttributeKind::GeoLatitudeEnd => "geo_latitude_end",
            AttributeKind::GeoLongitudeEnd => "geo_longitude_end",
            AttributeKind::ProgramName => "program_name",
            AttributeKind::Location => "location",
            AttributeKind::DeviceMake => "device_make",
            AttributeKind::DeviceModel => "device_model",
            AttributeKind::DeviceId => "device_id",
            AttributeKind::Value => "value",
            AttributeKind::Count => "count",
            AttributeKind::Description => "description",
        }
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
