use serde::{Deserialize, Deserializer};

use crate::utils;

/// One personnel record as returned by the directory API.
///
/// The API is the source of truth; the client only ever holds an ordered
/// in-memory list of these for the lifetime of a session.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Employee {
    pub name: EmployeeName,
    pub email: String,
    pub phone: String,
    pub cell: String,
    pub dob: BirthInfo,
    pub location: Location,
    pub picture: Picture,
    #[serde(default)]
    pub nat: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EmployeeName {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BirthInfo {
    pub date: String,
    #[serde(default)]
    pub age: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(deserialize_with = "postcode_string")]
    pub postcode: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

// Postcodes come back as JSON numbers for some nationalities and strings
// for others; normalize at the decode boundary.
fn postcode_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPostcode {
        Text(String),
        Number(i64),
    }

    Ok(match RawPostcode::deserialize(deserializer)? {
        RawPostcode::Text(s) => s,
        RawPostcode::Number(n) => n.to_string(),
    })
}

impl Employee {
    pub fn full_name(&self) -> String {
        utils::capitalize_words(&format!("{} {}", self.name.first, self.name.last))
    }

    /// Show the state for Canada and the United States, the country for the
    /// rest of the world.
    pub fn locality(&self) -> &str {
        if self.location.country == "Canada" || self.location.country == "United States" {
            &self.location.state
        } else {
            &self.location.country
        }
    }

    /// Date portion of the ISO dob timestamp.
    pub fn birth_date(&self) -> &str {
        self.dob.date.split('T').next().unwrap_or(&self.dob.date)
    }

    pub fn street(&self) -> String {
        format!("{} {}", self.location.street.number, self.location.street.name)
    }

    pub fn mailing_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street(),
            utils::capitalize_words(&self.location.city),
            self.locality(),
            self.location.postcode
        )
    }
}

/// The `results` + `info` envelope the API wraps every successful response in.
#[derive(Clone, Debug, Deserialize)]
pub struct DirectoryResponse {
    pub results: Vec<Employee>,
    pub info: ResponseInfo,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ResponseInfo {
    #[serde(default)]
    pub seed: String,
    #[serde(default)]
    pub results: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub version: String,
}

/// Failures are sometimes reported inside a 200 body instead of a status
/// code, as `{"error": "..."}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiEnvelope {
    Directory(DirectoryResponse),
    Error { error: String },
}
