pub mod client;
pub mod error;
pub mod profile;

#[cfg(test)]
mod tests;

pub use client::RandomUserClient;
pub use error::{RandomUserError, Result as RandomUserResult};
pub use profile::{RandomProfile, RandomUserResponse};
