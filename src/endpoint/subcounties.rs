use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::Result;

/// A subcounty within a county.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcounty {
    pub id: String,
    pub name: String,
    pub code: String,
    pub county_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Client {
    /// Retrieves all subcounties.
    pub fn list_subcounties(&self) -> Result<Vec<Subcounty>> {
        let response: Envelope<Vec<Subcounty>> = self.request(Method::GET, "/subcounties")?;
        Ok(response.data)
    }

    /// Retrieves a single subcounty by its identifier.
    pub fn get_subcounty(&self, id: &str) -> Result<Subcounty> {
        let path = format!("/subcounties/{}", id);
        let response: Envelope<Subcounty> = self.request(Method::GET, &path)?;
        Ok(response.data)
    }

    /// Retrieves the subcounties belonging to a county.
    pub fn list_subcounties_by_county(&self, county_id: &str) -> Result<Vec<Subcounty>> {
        let path = format!("/counties/{}/subcounties", county_id);
        let response: Envelope<Vec<Subcounty>> = self.request(Method::GET, &path)?;
        Ok(response.data)
    }
}
