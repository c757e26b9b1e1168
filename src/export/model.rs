use crate::models::visit::{CELL_DATETIME_FORMAT, VisitRecord};
use serde::Serialize;

/// Flat, all-string projection of a visit record for export.
/// Serialized field names match the visit log columns so a CSV export is
/// column-compatible with the log itself.
#[derive(Serialize, Clone, Debug)]
pub struct VisitExport {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "FE/Contractor Name")]
    pub name: String,
    #[serde(rename = "Phone Number")]
    pub phone: String,
    #[serde(rename = "Site ID")]
    pub site_id: String,
    #[serde(rename = "RTO")]
    pub rto: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "TT Number")]
    pub ticket: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
    #[serde(rename = "Latitude")]
    pub latitude: String,
    #[serde(rename = "Longitude")]
    pub longitude: String,
    #[serde(rename = "Photo")]
    pub photo: String,
    #[serde(rename = "Site Visit Time")]
    pub opened_at: String,
    #[serde(rename = "Activity Complete Time")]
    pub closed_at: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl VisitExport {
    pub fn from_record(r: &VisitRecord) -> Self {
        Self {
            timestamp: r.timestamp.format(CELL_DATETIME_FORMAT).to_string(),
            name: r.name.clone(),
            phone: r.phone.clone(),
            site_id: r.site_id.clone(),
            rto: r.rto.clone(),
            region: r.region.clone(),
            ticket: r.ticket.clone(),
            remarks: r.remarks.clone(),
            latitude: r.latitude.map(|v| v.to_string()).unwrap_or_default(),
            longitude: r.longitude.map(|v| v.to_string()).unwrap_or_default(),
            photo: r.photo.clone(),
            opened_at: r.opened_at_str(),
            closed_at: r.closed_at_str(),
            status: r.status.as_cell().to_string(),
        }
    }
}

/// Header for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    crate::store::visit_log::HEADERS.to_vec()
}

pub(crate) fn visit_to_row(v: &VisitExport) -> Vec<String> {
    vec![
        v.timestamp.clone(),
        v.name.clone(),
        v.phone.clone(),
        v.site_id.clone(),
        v.rto.clone(),
        v.region.clone(),
        v.ticket.clone(),
        v.remarks.clone(),
        v.latitude.clone(),
        v.longitude.clone(),
        v.photo.clone(),
        v.opened_at.clone(),
        v.closed_at.clone(),
        v.status.clone(),
    ]
}
