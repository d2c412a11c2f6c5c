//! Service catalogue models.

use kilap_db::queries::services::{ServiceFields, ServiceRow};
use serde::{Deserialize, Serialize};

use crate::error::{KilapError, KilapResult};

/// A cleaning service offered to customers. Price is in rupiah.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub description: String,
    pub image_url: String,
}

impl Service {
    /// Create a Service from a database row.
    pub fn from_row(row: ServiceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            description: row.description,
            image_url: row.image_url,
        }
    }

    /// Usual turnaround for the stock services.
    pub fn turnaround(&self) -> Option<&'static str> {
        match self.name.as_str() {
            "Cuci Dasar" => Some("3 hari"),
            "Cuci Premium" => Some("1 hari"),
            "Repaint & Restoration" => Some("1 bulan"),
            _ => None,
        }
    }
}

/// Admin form for creating or editing a service. Absent fields deserialize
/// as empty so `into_fields` can report them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceInput {
    pub name: String,
    pub price: Option<i64>,
    pub description: String,
    pub image_url: String,
}

impl ServiceInput {
    /// Validate and convert into the stored field set.
    pub fn into_fields(self) -> KilapResult<ServiceFields> {
        if self.name.trim().is_empty() {
            return Err(KilapError::validation("Service name is required"));
        }
        let raw = self
            .price
            .ok_or_else(|| KilapError::validation("Service price is required"))?;
        let price = u64::try_from(raw).map_err(|_| {
            KilapError::validation(format!("Price must not be negative, got {}", raw))
        })?;

        Ok(ServiceFields {
            name: self.name,
            price,
            description: self.description,
            image_url: self.image_url,
        })
    }
}
