use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response model for GET /balance/{address}/
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub address: String,
    pub balance: f64,
    pub unit: String,
}

/// Request model for POST /balance/
#[derive(Debug, Deserialize)]
pub struct BatchBalanceRequest {
    // Entries are kept as raw JSON so a non-string entry is reported per item
    #[serde(default)]
    pub addresses: Option<Vec<Value>>,
}

/// One entry of the batch response, in request order
#[derive(Debug, Serialize, PartialEq)]
pub struct BatchBalanceEntry {
    pub address: Value,
    pub balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchBalanceResponse {
    pub balances: Vec<BatchBalanceEntry>,
}
