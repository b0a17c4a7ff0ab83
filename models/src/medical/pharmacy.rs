// models/src/medical/pharmacy.rs

use serde::{Deserialize, Serialize};

/// Entry of `GET /api/patients/{id}/orders`. Items arrive already flattened
/// into display strings such as `"Amoxicillin (500mg)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub order_date: String,
    pub status: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Body of `POST /api/pharmacy/order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacyOrderRequest {
    pub patient_id: i64,
    pub shipping_address: String,
    pub prescription_ids: Vec<i64>,
}

/// Success body of `POST /api/pharmacy/order`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlaced {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub order_id: Option<i64>,
}
