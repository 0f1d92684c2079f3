use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::Result;

/// A parish within a subcounty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parish {
    pub id: String,
    pub name: String,
    pub code: String,
    pub subcounty_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Client {
    /// Retrieves all parishes.
    pub fn list_parishes(&self) -> Result<Vec<Parish>> {
        let response: Envelope<Vec<Parish>> = self.request(Method::GET, "/parishes")?;
        Ok(response.data)
    }

    /// Retrieves a single parish by its identifier.
    pub fn get_parish(&self, id: &str) -> Result<Parish> {
        let path = format!("/parishes/{}", id);
        let response: Envelope<Parish> = self.request(Method::GET, &path)?;
        Ok(response.data)
    }

    /// Retrieves the parishes belonging to a subcounty.
    pub fn list_parishes_by_subcounty(&self, subcounty_id: &str) -> Result<Vec<Parish>> {
        let path = format!("/subcounties/{}/parishes", subcounty_id);
        let response: Envelope<Vec<Parish>> = self.request(Method::GET, &path)?;
        Ok(response.data)
    }
}
