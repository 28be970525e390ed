use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::consent::ConsentSet;
use crate::models::medical::MedicalHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum IdType {
    #[serde(rename = "Driver License")]
    DriverLicense,
    #[serde(rename = "Passport")]
    Passport,
    #[serde(rename = "Birth Certificate")]
    BirthCertificate,
}

impl IdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::DriverLicense => "Driver License",
            IdType::Passport => "Passport",
            IdType::BirthCertificate => "Birth Certificate",
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProcedureType {
    #[serde(rename = "Tattoo")]
    Tattoo,
    #[serde(rename = "Permanent cosmetics")]
    PermanentCosmetics,
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "Piercing")]
    Piercing,
}

impl ProcedureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcedureType::Tattoo => "Tattoo",
            ProcedureType::PermanentCosmetics => "Permanent cosmetics",
            ProcedureType::Branding => "Branding",
            ProcedureType::Piercing => "Piercing",
        }
    }
}

impl fmt::Display for ProcedureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The studio's practitioner roster. The form offers exactly these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Practitioner {
    #[serde(rename = "Mara Voss")]
    MaraVoss,
    #[serde(rename = "Dex Okafor")]
    DexOkafor,
    #[serde(rename = "Juniper Lee")]
    JuniperLee,
    #[serde(rename = "Sol Ramirez")]
    SolRamirez,
    #[serde(rename = "Guest Artist")]
    GuestArtist,
}

impl Practitioner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Practitioner::MaraVoss => "Mara Voss",
            Practitioner::DexOkafor => "Dex Okafor",
            Practitioner::JuniperLee => "Juniper Lee",
            Practitioner::SolRamirez => "Sol Ramirez",
            Practitioner::GuestArtist => "Guest Artist",
        }
    }
}

impl fmt::Display for Practitioner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One waiver as transmitted by the kiosk: a single flat JSON object with
/// attachments embedded as tagged base64 strings.
///
/// Contract-required fields are `Option` here so the ingestion service can
/// answer a missing field with its own 400 body instead of a deserializer
/// rejection; [`WaiverSubmission::validate`] enforces presence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WaiverSubmission {
    #[serde(default)]
    pub waiver_id: Option<String>,

    // Client
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    #[serde(default)]
    pub emergency_contact_phone: Option<String>,

    // Identification
    #[serde(default)]
    pub id_type: Option<IdType>,

    // Procedure
    #[serde(default)]
    pub procedure_type: Option<ProcedureType>,
    #[serde(default)]
    pub practitioner: Option<Practitioner>,
    #[serde(default)]
    pub procedure_site: Option<String>,
    #[serde(default)]
    pub procedure_description: Option<String>,

    #[serde(flatten)]
    pub medical: MedicalHistory,
    #[serde(flatten)]
    pub consents: ConsentSet,

    #[serde(default)]
    pub photo_release: bool,
    #[serde(default)]
    pub send_aftercare: bool,

    // Embedded attachments (tagged base64 strings)
    #[serde(default)]
    pub signature_png: Option<String>,
    #[serde(default)]
    pub id_photo_front: Option<String>,

    // Metadata
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<jiff::Timestamp>,
}

impl WaiverSubmission {
    /// The ingestion gate: `client_name` and `email` must be present and
    /// non-empty. Runs before any side effect.
    pub fn validate(&self) -> Result<(), CoreError> {
        if blank(&self.client_name) {
            return Err(CoreError::MissingField("client_name"));
        }
        if blank(&self.email) {
            return Err(CoreError::MissingField("email"));
        }
        Ok(())
    }

    /// Flatten into the persisted record shape. Embedded image fields are
    /// replaced by the storage paths the caller resolved; binary payloads
    /// never reach the database.
    pub fn into_record(
        self,
        waiver_id: String,
        signature_path: Option<String>,
        id_photo_front_path: Option<String>,
    ) -> WaiverRecord {
        WaiverRecord {
            waiver_id,
            client_name: self.client_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone,
            address: self.address,
            date_of_birth: self.date_of_birth,
            emergency_contact_name: self.emergency_contact_name,
            emergency_contact_phone: self.emergency_contact_phone,
            id_type: self.id_type,
            procedure_type: self.procedure_type,
            practitioner: self.practitioner,
            procedure_site: self.procedure_site,
            procedure_description: self.procedure_description,
            medical: self.medical,
            consents: self.consents,
            photo_release: self.photo_release,
            send_aftercare: self.send_aftercare,
            signature_path,
            id_photo_front_path,
            user_agent: self.user_agent,
            submitted_at: self.submitted_at.map(|t| t.to_string()),
        }
    }
}

fn blank(field: &Option<String>) -> bool {
    field.as_deref().map(str::trim).unwrap_or("").is_empty()
}

/// Resolve the id that joins the storage namespace and the database record:
/// the client-supplied value when present, otherwise derived from the
/// current time.
pub fn resolve_waiver_id(client_supplied: Option<&str>, now: jiff::Timestamp) -> String {
    match client_supplied.map(str::trim).filter(|s| !s.is_empty()) {
        Some(id) => id.to_string(),
        None => format!("waiver-{}", now.as_millisecond()),
    }
}

/// One waiver as persisted: the flattened submission with attachments
/// replaced by storage paths. The table adds a surrogate key and a
/// server-assigned `inserted_at` via column defaults; this type is the
/// insert payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WaiverRecord {
    pub waiver_id: String,
    pub client_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub id_type: Option<IdType>,
    pub procedure_type: Option<ProcedureType>,
    pub practitioner: Option<Practitioner>,
    pub procedure_site: Option<String>,
    pub procedure_description: Option<String>,
    #[serde(flatten)]
    pub medical: MedicalHistory,
    #[serde(flatten)]
    pub consents: ConsentSet,
    pub photo_release: bool,
    pub send_aftercare: bool,
    pub signature_path: Option<String>,
    pub id_photo_front_path: Option<String>,
    pub user_agent: Option<String>,
    pub submitted_at: Option<String>,
}
