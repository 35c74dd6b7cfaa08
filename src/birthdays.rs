/*
 *  birthdays.rs
 *
 *  Festivo - every day has a face
 *  (c) 2023-26 Festivo authors
 *
 *  Compact birthday list codec and the fixed-capacity table it fills
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use arrayvec::{ArrayString, ArrayVec};
use log::debug;
use thiserror::Error;

/// Capacity of a birthday name, in characters.
pub const NAME_CAP: usize = 9;
/// Capacity of a birthday date (`MM-DD`), in characters.
pub const DATE_CAP: usize = 5;
/// Number of birthday slots the face tracks.
pub const MAX_BIRTHDAYS: usize = 10;

/// Error type for birthday list decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("unbalanced birthday list: {fields} fields")]
    Unbalanced { fields: usize },
}

/// One user-supplied birthday: a short name and an `MM-DD` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BirthdayRecord {
    pub name: ArrayString<NAME_CAP>,
    pub date: ArrayString<DATE_CAP>,
}

impl BirthdayRecord {
    fn from_fields(name: &str, date: &str) -> Self {
        Self {
            name: clamp(name),
            date: clamp(date),
        }
    }

    /// Month and day of this record, or `None` when the date field is not
    /// exactly `MM-DD`. Records that fail here are skipped by the resolver.
    pub fn month_day(&self) -> Option<(u32, u32)> {
        fn digit(c: u8) -> Option<u32> {
            c.is_ascii_digit().then(|| (c - b'0') as u32)
        }
        let b = self.date.as_bytes();
        if b.len() != DATE_CAP || b[2] != b'-' {
            return None;
        }
        let month = digit(b[0])? * 10 + digit(b[1])?;
        let day = digit(b[3])? * 10 + digit(b[4])?;
        Some((month, day))
    }
}

/// Copy `field` into a fixed-capacity string, dropping anything past the
/// cap. Truncation is policy here, never an error.
fn clamp<const CAP: usize>(field: &str) -> ArrayString<CAP> {
    let mut out = ArrayString::new();
    for ch in field.chars() {
        if out.try_push(ch).is_err() {
            break;
        }
    }
    out
}

/// Ordered, fixed-capacity birthday table. Insertion order is parse order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BirthdayTable {
    records: ArrayVec<BirthdayRecord, MAX_BIRTHDAYS>,
}

impl BirthdayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a `name,date,name,date,...` payload into a fresh table.
    ///
    /// An odd field count rejects the whole payload and the caller keeps
    /// whatever table it already had. An empty payload clears the list.
    /// Pairs past the tenth are dropped. The scan is forward-only over the
    /// immutable input; oversized fields clamp to their capacity.
    pub fn parse(raw: &str) -> Result<Self, CodecError> {
        let mut table = Self::new();
        if raw.is_empty() {
            return Ok(table);
        }
        let fields = raw.matches(',').count() + 1;
        if fields % 2 != 0 {
            return Err(CodecError::Unbalanced { fields });
        }
        let mut split = raw.split(',');
        while let (Some(name), Some(date)) = (split.next(), split.next()) {
            let record = BirthdayRecord::from_fields(name, date);
            if table.records.try_push(record).is_err() {
                debug!("birthday table full, dropping the remaining pairs");
                break;
            }
        }
        Ok(table)
    }

    /// Encode the table back into the wire form, no trailing delimiter.
    /// Only used for the persistence round-trip.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (i, rec) in self.records.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&rec.name);
            out.push(',');
            out.push_str(&rec.date);
        }
        out
    }

    pub fn records(&self) -> &[BirthdayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
