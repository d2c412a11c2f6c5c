//! Booking domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use kilap_db::queries::bookings::BookingRow;
use serde::{Deserialize, Serialize};

use crate::error::{KilapError, KilapResult};

/// Stage of a booking. Variants are declared in workflow order, so the derived
/// `Ord` is the business order: received < washing < ready < completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Order Diterima")]
    Received,
    #[serde(rename = "Dalam Proses Cuci")]
    Washing,
    #[serde(rename = "Siap Diantar")]
    ReadyForDelivery,
    #[serde(rename = "Selesai")]
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        Self::Received,
        Self::Washing,
        Self::ReadyForDelivery,
        Self::Completed,
    ];

    /// Label as stored and shown to customers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "Order Diterima",
            Self::Washing => "Dalam Proses Cuci",
            Self::ReadyForDelivery => "Siap Diantar",
            Self::Completed => "Selesai",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = KilapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                KilapError::validation(format!(
                    "Invalid status '{}'. Valid statuses: {}",
                    s,
                    valid.join(", ")
                ))
            })
    }
}

/// A customer booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub order_number: String,
    pub name: String,
    pub phone: String,
    pub service_id: String,
    /// Pickup date as entered by the customer.
    pub date: String,
    pub address: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Create a Booking from a database row.
    pub fn from_row(row: BookingRow) -> KilapResult<Self> {
        let status = row.status.parse::<OrderStatus>().map_err(|_| {
            KilapError::Malformed(format!(
                "booking {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;
        let created_at = crate::parse_timestamp("created_at", &row.created_at)?;

        Ok(Self {
            id: row.id,
            order_number: row.order_number,
            name: row.name,
            phone: row.phone,
            service_id: row.service_id,
            date: row.date,
            address: row.address,
            status,
            created_at,
        })
    }

    /// Admin search: name and order number match case-insensitively, phone
    /// matches as a plain substring. An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.order_number.to_lowercase().contains(&needle)
            || self.phone.contains(term)
    }

    /// WhatsApp deep link asking the customer to share their location.
    pub fn whatsapp_link(&self) -> String {
        let text = format!(
            "Halo {}, Saya ingin mengetahui status booking saya dengan nomor order {}. \
             Mohon bantuannya untuk membagikan lokasi anda agar kami dapat memberikan informasi lebih baik.",
            self.name, self.order_number
        );
        format!("https://wa.me/{}?text={}", self.phone, urlencoding::encode(&text))
    }
}

/// Customer-supplied fields of a new booking. Absent fields deserialize as
/// empty so `validate` can name them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingInput {
    pub name: String,
    pub phone: String,
    pub service_id: String,
    pub date: String,
    pub address: String,
}

impl BookingInput {
    /// Every field is required; whitespace-only counts as missing.
    pub fn validate(&self) -> KilapResult<()> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("serviceId", &self.service_id),
            ("date", &self.date),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(KilapError::validation(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }
}
