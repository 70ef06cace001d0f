use crate::error::{AbookError, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Non-empty contact name. Doubles as the record's key in the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(AbookError::Validation("Name cannot be empty.".to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exactly 10 ASCII decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(value: &str) -> Result<Self> {
        if value.len() != 10 || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(AbookError::Validation(
                "Phone number must be exactly 10 digits.".to_string(),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar date parsed from `DD.MM.YYYY` and rendered the same way.
///
/// Serialized in snapshots as that exact string so the on-disk format stays
/// readable and independent of chrono's default encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| {
                AbookError::Validation("Invalid date format. Use DD.MM.YYYY".to_string())
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Next calendar occurrence of this birthday's month/day, at or after
    /// `now`. The occurrence at midnight counts as passed once `now` is past
    /// midnight, matching how the upcoming-birthdays window has always
    /// behaved. Feb 29 rolls forward to Mar 1 in non-leap years.
    pub fn next_occurrence(&self, now: NaiveDateTime) -> NaiveDate {
        let this_year = self.occurrence_in(now.year());
        if this_year.and_time(NaiveTime::MIN) < now {
            self.occurrence_in(now.year() + 1)
        } else {
            this_year
        }
    }

    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .expect("Mar 1 exists in every year")
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0.format(BIRTHDAY_FORMAT))
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Birthday::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// One contact: a name, its phone numbers in the order they were added
/// (duplicates allowed), and at most one birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validates and appends. No uniqueness check.
    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        self.phones.push(PhoneNumber::parse(phone)?);
        Ok(())
    }

    /// Removes the first phone equal to `phone`; no-op when absent.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == phone) {
            self.phones.remove(pos);
        }
    }

    /// Replaces the first phone equal to `old` with a validated `new`,
    /// appended at the end. Silently does nothing when `old` is absent,
    /// in which case `new` is never validated.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == old) {
            self.phones.remove(pos);
            self.phones.push(PhoneNumber::parse(new)?);
        }
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validates and replaces the current birthday.
    pub fn set_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    /// Whole days from now to the next occurrence of the birthday at
    /// midnight, truncating fractional days. A birthday whose midnight has
    /// already passed today reports next year's occurrence.
    pub fn days_to_next_birthday(&self) -> Option<i64> {
        self.days_to_next_birthday_from(Local::now().naive_local())
    }

    pub(crate) fn days_to_next_birthday_from(&self, now: NaiveDateTime) -> Option<i64> {
        let birthday = self.birthday?;
        let next = birthday.next_occurrence(now).and_time(NaiveTime::MIN);
        Some((next - now).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = match &self.birthday {
            Some(b) => b.to_string(),
            None => "N/A".to_string(),
        };
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
