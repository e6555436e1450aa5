//! Core types for sample records

use serde::{Deserialize, Serialize};

/// Reserved value for "no data resolved" in any field.
pub const PLACEHOLDER: &str = "-";

/// Maximum number of entries kept in the history.
pub const HISTORY_CAPACITY: usize = 100;

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

/// One normalized lubricant sample record.
///
/// Every field is always a non-empty, trimmed string; absent data is the
/// `"-"` placeholder, never an empty string. Serde names match the upstream
/// camelCase keys so persisted snapshots stay compatible with the mobile
/// client's format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(default = "placeholder")]
    pub code: String,

    #[serde(rename = "deliveryDate", default = "placeholder")]
    pub delivery_date: String,

    #[serde(default = "placeholder")]
    pub compartment: String,

    #[serde(default = "placeholder")]
    pub chassis: String,

    #[serde(default = "placeholder")]
    pub client: String,

    #[serde(rename = "equipmentHours", default = "placeholder")]
    pub equipment_hours: String,

    #[serde(rename = "oilType", default = "placeholder")]
    pub oil_type: String,

    #[serde(default = "placeholder")]
    pub status: String,

    #[serde(rename = "collectionDate", default = "placeholder")]
    pub collection_date: String,

    #[serde(default = "placeholder")]
    pub technician: String,
}

impl Default for Sample {
    fn default() -> Self {
        Self {
            code: placeholder(),
            delivery_date: placeholder(),
            compartment: placeholder(),
            chassis: placeholder(),
            client: placeholder(),
            equipment_hours: placeholder(),
            oil_type: placeholder(),
            status: placeholder(),
            collection_date: placeholder(),
            technician: placeholder(),
        }
    }
}

impl Sample {
    /// A sample is valid only when its code carries real data.
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty() && self.code != PLACEHOLDER
    }

    /// Re-apply the placeholder rule to every field.
    ///
    /// Persisted records may have been written by older clients or tampered
    /// with: fields can come back untrimmed or empty even though the serde
    /// defaults only cover fields that are absent entirely.
    pub fn refill(mut self) -> Self {
        for field in [
            &mut self.code,
            &mut self.delivery_date,
            &mut self.compartment,
            &mut self.chassis,
            &mut self.client,
            &mut self.equipment_hours,
            &mut self.oil_type,
            &mut self.status,
            &mut self.collection_date,
            &mut self.technician,
        ] {
            let trimmed = field.trim();
            *field = if trimmed.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                trimmed.to_string()
            };
        }
        self
    }

    /// Field values in the fixed export column order.
    pub fn column_values(&self) -> [&str; 10] {
        [
            &self.code,
            &self.delivery_date,
            &self.compartment,
            &self.chassis,
            &self.client,
            &self.equipment_hours,
            &self.oil_type,
            &self.status,
            &self.collection_date,
            &self.technician,
        ]
    }
}
