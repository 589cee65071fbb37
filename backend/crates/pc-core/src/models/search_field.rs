use crate::{CoreError, Result as CoreErrorResult, UserRecord};

use std::borrow::Cow;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A user record column that search can look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    City,
    Country,
    Picture,
    Gender,
    Age,
}

impl SearchField {
    /// Every column, in on-disk order
    pub const ALL: [SearchField; 10] = [
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::City,
        Self::Country,
        Self::Picture,
        Self::Gender,
        Self::Age,
    ];

    /// Columns searched when the caller does not pick any
    pub const DEFAULTS: [SearchField; 4] =
        [Self::FirstName, Self::LastName, Self::Email, Self::City];

    /// Column name as it appears in the CSV header and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::City => "city",
            Self::Country => "country",
            Self::Picture => "picture",
            Self::Gender => "gender",
            Self::Age => "age",
        }
    }

    /// Text value of this column for `record`
    pub fn value_of<'a>(&self, record: &'a UserRecord) -> Cow<'a, str> {
        match self {
            Self::Id => Cow::Borrowed(&record.id),
            Self::FirstName => Cow::Borrowed(&record.first_name),
            Self::LastName => Cow::Borrowed(&record.last_name),
            Self::Email => Cow::Borrowed(&record.email),
            Self::Phone => Cow::Borrowed(&record.phone),
            Self::City => Cow::Borrowed(&record.city),
            Self::Country => Cow::Borrowed(&record.country),
            Self::Picture => Cow::Borrowed(&record.picture),
            Self::Gender => Cow::Borrowed(&record.gender),
            Self::Age => Cow::Owned(record.age.to_string()),
        }
    }

    /// Parse a comma-separated list such as `"firstName,city"`.
    ///
    /// Blank entries are skipped; an all-blank list yields [`Self::DEFAULTS`].
    #[track_caller]
    pub fn parse_list(s: &str) -> CoreErrorResult<Vec<SearchField>> {
        let fields = s
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(SearchField::from_str)
            .collect::<CoreErrorResult<Vec<_>>>()?;

        if fields.is_empty() {
            return Ok(Self::DEFAULTS.to_vec());
        }
        Ok(fields)
    }
}

impl FromStr for SearchField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSearchField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
