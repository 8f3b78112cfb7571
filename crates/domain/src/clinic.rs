/// A veterinary clinic as returned by the listing endpoint.
///
/// Field names follow the Rust convention; the serialized names are the
/// Spanish ones the public API has always used.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Clinic {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "latitud")]
    pub lat: f64,
    #[serde(rename = "longitud")]
    pub lon: f64,
    #[serde(rename = "municipio")]
    pub municipality: Option<String>,
    #[serde(rename = "codigo_postal")]
    pub postal_code: Option<String>,
}

/// One cell of the clustered map view: a representative coordinate and
/// how many clinics fall into the cell.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClusterBucket {
    pub lat: f64,
    pub lng: f64,
    pub count: i64,
}
