use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::Result;

/// A village, the lowest administrative level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Village {
    pub id: String,
    pub name: String,
    pub code: String,
    pub parish_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Client {
    /// Retrieves all villages.
    pub fn list_villages(&self) -> Result<Vec<Village>> {
        let response: Envelope<Vec<Village>> = self.request(Method::GET, "/villages")?;
        Ok(response.data)
    }

    /// Retrieves a single village by its identifier.
    pub fn get_village(&self, id: &str) -> Result<Village> {
        let path = format!("/villages/{}", id);
        let response: Envelope<Village> = self.request(Method::GET, &path)?;
        Ok(response.data)
    }

    /// Retrieves the villages belonging to a parish.
    pub fn list_villages_by_parish(&self, parish_id: &str) -> Result<Vec<Village>> {
        let path = format!("/parishes/{}/villages", parish_id);
        let response: Envelope<Vec<Village>> = self.request(Method::GET, &path)?;
        Ok(response.data)
    }
}
