//! Open Charge Map POI DTOs.
//!
//! The `/v3/poi` endpoint returns a bare JSON array. Every field is treated
//! as optional: registry entries are community maintained and frequently
//! incomplete.

use serde::Deserialize;

/// One point of interest (a charging site).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PoiDto {
    pub address_info: Option<AddressInfo>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub connections: Vec<ConnectionDto>,

    pub status_type: Option<StatusType>,
}

/// Location and naming for a POI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressInfo {
    pub title: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address_line1: Option<String>,
}

/// A single charging connection at a site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionDto {
    #[serde(rename = "PowerKW")]
    pub power_kw: Option<f64>,
    pub connection_type: Option<ConnectionType>,
}

/// Plug standard of a connection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionType {
    pub title: Option<String>,
}

/// Operational status of a site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusType {
    pub is_operational: Option<bool>,
}

/// The registry sends `"Connections": null` for some sites.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
