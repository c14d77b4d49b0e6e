pub mod client;
pub mod schema;

use anyhow::Result;

use crate::domain::application::{JobApplication, NewApplication};

/// The system of record for tracked applications.
pub trait ApplicationStore {
    /// Applications whose status is still open (Applied, Interview, Offer).
    fn query_open_applications(&self) -> Result<Vec<JobApplication>>;
    fn update_status(&self, application_id: &str, status: &str) -> Result<()>;
    fn create_application(&self, app: &NewApplication) -> Result<()>;
}

pub use client::NotionClient;
