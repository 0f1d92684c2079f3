use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::Result;

/// A county within a district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct County {
    pub id: String,
    pub name: String,
    pub code: String,
    pub district_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Client {
    /// Retrieves all counties.
    pub fn list_counties(&self) -> Result<Vec<County>> {
        let response: Envelope<Vec<County>> = self.request(Method::GET, "/counties")?;
        Ok(response.data)
    }

    /// Retrieves a single county by its identifier.
    pub fn get_county(&self, id: &str) -> Result<County> {
        let path = format!("/counties/{}", id);
        let response: Envelope<County> = self.request(Method::GET, &path)?;
        Ok(response.data)
    }

    /// Retrieves the counties belonging to a district.
    pub fn list_counties_by_district(&self, district_id: &str) -> Result<Vec<County>> {
        let path = format!("/districts/{}/counties", district_id);
        let response: Envelope<Vec<County>> = self.request(Method::GET, &path)?;
        Ok(response.data)
    }
}
