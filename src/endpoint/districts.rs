use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::envelope::Envelope;
use crate::error::Result;

/// A district of Uganda.
///
/// Regions have no endpoint of their own, so each district carries its
/// region reference together with the denormalized region name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    pub name: String,
    pub town_status: bool,
    pub region_id: String,
    pub region_name: String,
}

impl Client {
    /// Retrieves all districts.
    pub fn list_districts(&self) -> Result<Vec<District>> {
        let response: Envelope<Vec<District>> = self.request(Method::GET, "/districts")?;
        Ok(response.data)
    }

    /// Retrieves a single district by its identifier.
    pub fn get_district(&self, id: &str) -> Result<District> {
        let path = format!("/districts/{}", id);
        let response: Envelope<District> = self.request(Method::GET, &path)?;
        Ok(response.data)
    }
}
