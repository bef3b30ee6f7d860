use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::i18n::translation::{Services, ValidationMessages};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email regex")
});

const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Portrait,
    Family,
    Children,
    Wedding,
    Event,
    Studio,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::Portrait,
        ServiceType::Family,
        ServiceType::Children,
        ServiceType::Wedding,
        ServiceType::Event,
        ServiceType::Studio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Portrait => "portrait",
            ServiceType::Family => "family",
            ServiceType::Children => "children",
            ServiceType::Wedding => "wedding",
            ServiceType::Event => "event",
            ServiceType::Studio => "studio",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.as_str() == s)
    }

    pub fn label<'a>(&self, services: &'a Services) -> &'a str {
        match self {
            ServiceType::Portrait => &services.portrait,
            ServiceType::Family => &services.family,
            ServiceType::Children => &services.children,
            ServiceType::Wedding => &services.wedding,
            ServiceType::Event => &services.event,
            ServiceType::Studio => &services.studio,
        }
    }
}

/// Hourly session start, `09:00` through `19:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub const FIRST_HOUR: u8 = 9;
    pub const LAST_HOUR: u8 = 19;

    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (Self::FIRST_HOUR..=Self::LAST_HOUR).map(TimeSlot)
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().find(|slot| slot.to_string() == s)
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeSlot::parse(&value).ok_or_else(|| format!("unknown time slot: {value}"))
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// Raw values posted by the booking form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, rename = "serviceType")]
    pub service_type: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub honeypot: String,
}

/// A validated booking, in the shape the relay accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub service_type: ServiceType,
    pub date: NaiveDate,
    pub time: TimeSlot,
    #[serde(default)]
    pub message: Option<String>,
}

/// Booking as received by the relay endpoint.
///
/// Values are taken as sent; the site's own form validates before it gets here.
/// Non-string JSON scalars are accepted and kept in their JSON text form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayBooking {
    #[serde(deserialize_with = "any_string")]
    pub name: String,
    #[serde(deserialize_with = "any_string")]
    pub email: String,
    #[serde(default, deserialize_with = "any_optional_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "any_string")]
    pub service_type: String,
    #[serde(deserialize_with = "any_string")]
    pub date: String,
    #[serde(deserialize_with = "any_string")]
    pub time: String,
    #[serde(default, deserialize_with = "any_optional_string")]
    pub message: Option<String>,
}

fn any_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(any_optional_string(deserializer)?.unwrap_or_default())
}

fn any_optional_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

impl From<&BookingRequest> for RelayBooking {
    fn from(request: &BookingRequest) -> Self {
        Self {
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            service_type: request.service_type.as_str().to_string(),
            date: request.date.format("%Y-%m-%d").to_string(),
            time: request.time.to_string(),
            message: request.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    ServiceType,
    Date,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    Required,
    TooShort,
    InvalidEmail,
    UnknownService,
    InvalidDate,
    PastDate,
    UnknownTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub kind: ErrorKind,
}

impl FieldError {
    fn new(field: Field, kind: ErrorKind) -> Self {
        Self { field, kind }
    }

    pub fn message<'a>(&self, messages: &'a ValidationMessages) -> &'a str {
        match (self.field, self.kind) {
            (Field::Name, ErrorKind::TooShort) => &messages.name_too_short,
            (Field::Name, _) => &messages.name_required,
            (Field::Email, ErrorKind::InvalidEmail) => &messages.email_invalid,
            (Field::Email, _) => &messages.email_required,
            (Field::ServiceType, _) => &messages.service_required,
            (Field::Date, ErrorKind::PastDate) => &messages.date_in_past,
            (Field::Date, ErrorKind::InvalidDate) => &messages.date_invalid,
            (Field::Date, _) => &messages.date_required,
            (Field::Time, _) => &messages.time_required,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl BookingForm {
    /// A filled honeypot marks the submission as automated.
    pub fn is_spam(&self) -> bool {
        !self.honeypot.is_empty()
    }

    /// Validate every field against `today`, collecting all errors.
    pub fn validate(&self, today: NaiveDate) -> Result<BookingRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new(Field::Name, ErrorKind::Required));
        } else if name.chars().count() < MIN_NAME_CHARS {
            errors.push(FieldError::new(Field::Name, ErrorKind::TooShort));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new(Field::Email, ErrorKind::Required));
        } else if !is_valid_email(email) {
            errors.push(FieldError::new(Field::Email, ErrorKind::InvalidEmail));
        }

        let service_type = match self.service_type.trim() {
            "" => {
                errors.push(FieldError::new(Field::ServiceType, ErrorKind::Required));
                None
            }
            raw => {
                let parsed = ServiceType::parse(raw);
                if parsed.is_none() {
                    errors.push(FieldError::new(Field::ServiceType, ErrorKind::UnknownService));
                }
                parsed
            }
        };

        let date = match self.date.trim() {
            "" => {
                errors.push(FieldError::new(Field::Date, ErrorKind::Required));
                None
            }
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) if date < today => {
                    errors.push(FieldError::new(Field::Date, ErrorKind::PastDate));
                    None
                }
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(FieldError::new(Field::Date, ErrorKind::InvalidDate));
                    None
                }
            },
        };

        let time = match self.time.trim() {
            "" => {
                errors.push(FieldError::new(Field::Time, ErrorKind::Required));
                None
            }
            raw => {
                let parsed = TimeSlot::parse(raw);
                if parsed.is_none() {
                    errors.push(FieldError::new(Field::Time, ErrorKind::UnknownTime));
                }
                parsed
            }
        };

        match (service_type, date, time) {
            (Some(service_type), Some(date), Some(time)) if errors.is_empty() => Ok(BookingRequest {
                name: name.to_string(),
                email: email.to_string(),
                phone: non_blank(&self.phone),
                service_type,
                date,
                time,
                message: non_blank(&self.message),
            }),
            _ => Err(errors),
        }
    }

    pub fn error_for(errors: &[FieldError], field: Field) -> Option<&FieldError> {
        errors.iter().find(|e| e.field == field)
    }
}
