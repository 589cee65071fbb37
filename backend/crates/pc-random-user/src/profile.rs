//! Response shape of the random-profile service (`GET /api/?results=N`).
//!
//! Only the fields that end up in a [`UserRecord`] are modelled; serde skips
//! the rest.

use pc_core::UserRecord;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<RandomProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomProfile {
    pub login: ProfileLogin,
    pub name: ProfileName,
    pub email: String,
    pub phone: String,
    pub location: ProfileLocation,
    pub picture: ProfilePicture,
    pub gender: String,
    pub dob: ProfileDob,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileLogin {
    pub uuid: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileLocation {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfilePicture {
    pub large: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDob {
    pub age: u32,
}

impl From<RandomProfile> for UserRecord {
    fn from(p: RandomProfile) -> Self {
        Self {
            id: p.login.uuid,
            first_name: p.name.first,
            last_name: p.name.last,
            email: p.email,
            phone: p.phone,
            city: p.location.city,
            country: p.location.country,
            picture: p.picture.large,
            gender: p.gender,
            age: p.dob.age,
        }
    }
}
