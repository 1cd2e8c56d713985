// Caliper - Benchmark Result Model and XML Codec
//
// Copyright (c) 2025 The Caliper Authors and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The `executedTimestamp` text form, `yyyy-MM-dd'T'HH:mm:ssz`.
//!
//! Values are written in a configurable [`Zone`] and carry whole seconds
//! only, so sub-second precision does not survive a round trip.

use crate::error::MalformedError;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

/// Human-readable form of the timestamp pattern.
pub const TIMESTAMP_PATTERN: &str = "yyyy-MM-dd'T'HH:mm:ssz";

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_TIME_LEN: usize = 19;

/// Zone abbreviations accepted on decode, with their UTC offsets in seconds.
const KNOWN_ZONES: &[(&str, i32)] = &[
    ("UTC", 0),
    ("UT", 0),
    ("GMT", 0),
    ("Z", 0),
    ("WET", 0),
    ("WEST", 3600),
    ("BST", 3600),
    ("CET", 3600),
    ("CEST", 7200),
    ("EET", 7200),
    ("EEST", 3 * 3600),
    ("MSK", 3 * 3600),
    ("IST", 5 * 3600 + 1800),
    ("JST", 9 * 3600),
    ("KST", 9 * 3600),
    ("AEST", 10 * 3600),
    ("AEDT", 11 * 3600),
    ("NZST", 12 * 3600),
    ("NZDT", 13 * 3600),
    ("HST", -10 * 3600),
    ("AKST", -9 * 3600),
    ("AKDT", -8 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
];

/// The zone timestamps are written in.
///
/// A zone is a fixed UTC offset with an optional abbreviation. Named zones
/// print their abbreviation (`PDT`); unnamed ones print `GMT+hh:mm`, except
/// for UTC itself which prints `UTC`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    offset: FixedOffset,
    abbreviation: Option<&'static str>,
}

impl Zone {
    /// Coordinated Universal Time.
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
            abbreviation: None,
        }
    }

    /// An unnamed zone at `offset`.
    ///
    /// Returns `None` when the offset is not a whole number of minutes,
    /// since such a zone could not be printed in `GMT+hh:mm` form.
    pub fn fixed(offset: FixedOffset) -> Option<Self> {
        if offset.local_minus_utc() % 60 != 0 {
            return None;
        }
        Some(Self {
            offset,
            abbreviation: None,
        })
    }

    /// A zone from the table of known abbreviations, such as `"PDT"`.
    pub fn named(abbreviation: &str) -> Option<Self> {
        let (name, seconds) = KNOWN_ZONES
            .iter()
            .find(|(name, _)| *name == abbreviation)?;
        Some(Self {
            offset: FixedOffset::east_opt(*seconds)?,
            abbreviation: Some(*name),
        })
    }

    /// UTC offset of this zone.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The text written after the time of day.
    pub fn label(&self) -> String {
        if let Some(name) = self.abbreviation {
            return name.to_string();
        }
        let seconds = self.offset.local_minus_utc();
        if seconds == 0 {
            return "UTC".to_string();
        }
        let sign = if seconds < 0 { '-' } else { '+' };
        let minutes = seconds.unsigned_abs() / 60;
        format!("GMT{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self::utc()
    }
}

/// Format a timestamp in `zone`, truncated to whole seconds.
///
/// The pattern has a four-digit year, so instants whose local year falls
/// outside `0000..=9999` are rejected.
pub fn format_timestamp(timestamp: DateTime<Utc>, zone: &Zone) -> Result<String, MalformedError> {
    let local = timestamp.with_timezone(&zone.offset);
    if !(0..=9999).contains(&local.year()) {
        return Err(MalformedError::InvalidTimestamp {
            value: timestamp.to_rfc3339(),
            message: format!("year {} does not fit {}", local.year(), TIMESTAMP_PATTERN),
        });
    }
    Ok(format!("{}{}", local.format(DATE_TIME_FORMAT), zone.label()))
}

/// Parse a timestamp written as `yyyy-MM-dd'T'HH:mm:ssz`.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, MalformedError> {
    let invalid = |message: String| MalformedError::InvalidTimestamp {
        value: value.to_string(),
        message,
    };

    let (date_time, zone) = match (value.get(..DATE_TIME_LEN), value.get(DATE_TIME_LEN..)) {
        (Some(date_time), Some(zone)) => (date_time, zone),
        _ => return Err(invalid(format!("expected {}", TIMESTAMP_PATTERN))),
    };
    let naive = NaiveDateTime::parse_from_str(date_time, DATE_TIME_FORMAT)
        .map_err(|err| invalid(err.to_string()))?;
    let offset = parse_zone(zone).ok_or_else(|| invalid(format!("unknown time zone '{}'", zone)))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| invalid("time is out of range".to_string()))
}

fn parse_zone(zone: &str) -> Option<FixedOffset> {
    if let Some((_, seconds)) = KNOWN_ZONES.iter().find(|(name, _)| *name == zone) {
        return FixedOffset::east_opt(*seconds);
    }
    let numeric = zone
        .strip_prefix("GMT")
        .or_else(|| zone.strip_prefix("UTC"))
        .unwrap_or(zone);
    parse_numeric_offset(numeric)
}

/// `+hh`, `+h`, `+hhmm` or `+hh:mm`, with either sign.
fn parse_numeric_offset(text: &str) -> Option<FixedOffset> {
    if !text.is_ascii() {
        return None;
    }
    let (sign, digits) = match text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };
    let (hours, minutes) = match digits.split_once(':') {
        Some((hours, minutes)) if minutes.len() == 2 => (hours, minutes),
        Some(_) => return None,
        None if digits.len() == 4 => digits.split_at(2),
        None => (digits, "0"),
    };
    if hours.is_empty()
        || hours.len() > 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
