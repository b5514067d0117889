//! Creation timestamps that keep exactly the zone information they were
//! given.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const NAIVE_MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";
const LENIENT_DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%m/%d/%Y"];

/// Error returned when text is not an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid timestamp '{value}': expected an ISO-8601 date-time")]
pub struct ParseTimestampError {
    pub value: String,
}

/// A point in time, either with a UTC offset or without any zone at all.
///
/// Naive timestamps are never given a zone behind the caller's back; the
/// canonical text form round-trips both variants unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timestamp {
    /// Wall-clock time with no zone information.
    Naive(NaiveDateTime),

    /// Time carrying an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Returns the current time in UTC.
    pub fn now() -> Self {
        Timestamp::Zoned(Utc::now().fixed_offset())
    }

    /// Parses an ISO-8601 date or date-time.
    ///
    /// Accepted forms:
    /// - a bare date `YYYY-MM-DD` (midnight, naive)
    /// - date and time joined by `T` or a space, with minute or second
    ///   precision and an optional fraction
    /// - an optional trailing UTC designator: `Z`, `±HH`, `±HH:MM` or
    ///   `±HHMM`; without one the timestamp stays naive
    pub fn parse(text: &str) -> Result<Self, ParseTimestampError> {
        Self::parse_iso(text).ok_or_else(|| ParseTimestampError {
            value: text.to_string(),
        })
    }

    fn parse_iso(text: &str) -> Option<Self> {
        if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
            return Some(Timestamp::Naive(date.and_time(NaiveTime::MIN)));
        }

        // `YYYY-MM-DD` plus one separator character.
        let date = text.get(..10)?;
        let separator = text.get(10..11)?;
        if !matches!(separator, "T" | "t" | " ") {
            return None;
        }
        let rest = text.get(11..)?;

        let (time, offset) = match rest.find(['Z', 'z', '+', '-']) {
            Some(at) => (&rest[..at], Some(parse_offset(&rest[at..])?)),
            None => (rest, None),
        };

        let local = format!("{date}T{time}");
        let naive = NaiveDateTime::parse_from_str(&local, NAIVE_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&local, NAIVE_MINUTE_FORMAT))
            .ok()?;

        match offset {
            Some(offset) => offset
                .from_local_datetime(&naive)
                .single()
                .map(Timestamp::Zoned),
            None => Some(Timestamp::Naive(naive)),
        }
    }

    /// Like [`Timestamp::parse`], but also accepts `DD/MM/YYYY` and then
    /// `MM/DD/YYYY`. Returns `None` when no format matches.
    pub fn parse_lenient(text: &str) -> Option<Self> {
        Self::parse(text).ok().or_else(|| {
            LENIENT_DATE_FORMATS.iter().find_map(|format| {
                NaiveDate::parse_from_str(text, format)
                    .ok()
                    .map(|date| Timestamp::Naive(date.and_time(NaiveTime::MIN)))
            })
        })
    }

    /// Returns the instant this timestamp denotes, reading naive values as
    /// UTC.
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            Timestamp::Naive(naive) => naive.and_utc(),
            Timestamp::Zoned(zoned) => zoned.with_timezone(&Utc),
        }
    }

    /// Returns the UTC offset, if one was given.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Timestamp::Naive(_) => None,
            Timestamp::Zoned(zoned) => Some(*zoned.offset()),
        }
    }
}

/// Parses a UTC designator: `Z`, `±HH`, `±HH:MM` or `±HHMM`.
fn parse_offset(designator: &str) -> Option<FixedOffset> {
    if designator.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let sign = match designator.get(..1)? {
        "+" => 1,
        "-" => -1,
        _ => return None,
    };
    let digits = &designator[1..];
    if !digits.is_ascii() {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits, "00"),
        4 => (&digits[..2], &digits[2..]),
        5 if digits.get(2..3) == Some(":") => (&digits[..2], &digits[3..]),
        _ => return None,
    };
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Timestamp::Naive(naive)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(zoned: DateTime<FixedOffset>) -> Self {
        Timestamp::Zoned(zoned)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(utc: DateTime<Utc>) -> Self {
        Timestamp::Zoned(utc.fixed_offset())
    }
}

impl std::str::FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = ParseTimestampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timestamp::Naive(naive) => write!(f, "{}", naive.format(NAIVE_FORMAT)),
            Timestamp::Zoned(zoned) => {
                write!(f, "{}", zoned.to_rfc3339_opts(SecondsFormat::AutoSi, false))
            }
        }
    }
}
