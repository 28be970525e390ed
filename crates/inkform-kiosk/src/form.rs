use uuid::Uuid;

use inkform_core::data_url::DataUrl;
use inkform_core::models::consent::ConsentSet;
use inkform_core::models::medical::MedicalHistory;
use inkform_core::models::waiver::{IdType, Practitioner, ProcedureType, WaiverSubmission};
use inkform_signature::SignaturePad;
use inkform_signature::error::SignatureError;

/// One in-progress waiver session at the kiosk: the typed form fields, the
/// signature surface, and the optional scanned ID photo.
///
/// Text fields hold whatever the user typed; empty entries are dropped at
/// encode time rather than sent as `""`.
pub struct WaiverForm {
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub id_type: Option<IdType>,
    pub procedure_type: Option<ProcedureType>,
    pub practitioner: Option<Practitioner>,
    pub procedure_site: String,
    pub procedure_description: String,
    pub medical: MedicalHistory,
    pub consents: ConsentSet,
    pub photo_release: bool,
    pub send_aftercare: bool,
    pub signature: SignaturePad,
    pub id_photo: Option<DataUrl>,
    user_agent: String,
}

impl WaiverForm {
    /// A blank form with a signature surface of the given layout size.
    pub fn new(width: u32, height: u32, device_pixel_ratio: f32) -> Result<Self, SignatureError> {
        Ok(Self {
            client_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            date_of_birth: String::new(),
            emergency_contact_name: String::new(),
            emergency_contact_phone: String::new(),
            id_type: None,
            procedure_type: None,
            practitioner: None,
            procedure_site: String::new(),
            procedure_description: String::new(),
            medical: MedicalHistory::default(),
            consents: ConsentSet::default(),
            photo_release: false,
            send_aftercare: false,
            signature: SignaturePad::new(width, height, device_pixel_ratio)?,
            id_photo: None,
            user_agent: format!("inkform-kiosk/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Attach the scanned ID photo. Replaces any earlier selection.
    pub fn attach_id_photo(&mut self, mime_type: impl Into<String>, bytes: Vec<u8>) {
        self.id_photo = Some(DataUrl::new(mime_type, bytes));
    }

    pub fn clear_id_photo(&mut self) {
        self.id_photo = None;
    }

    /// The client-side gate. Returns every user-facing prompt currently
    /// blocking submission; an empty list means the form is ready to send.
    pub fn validation_prompts(&self) -> Vec<&'static str> {
        let mut prompts = Vec::new();

        if self.client_name.trim().is_empty() || self.email.trim().is_empty() {
            prompts.push("Name and email are required.");
        }
        if !self.consents.all_acknowledged() {
            prompts.push("Please acknowledge every consent statement.");
        }
        if !self.signature.has_ink() {
            prompts.push("Please sign the waiver before submitting.");
        }

        prompts
    }

    /// Encode into the wire payload: the pad exported to PNG, both images
    /// wrapped as tagged base64 strings, empty text fields dropped, and a
    /// fresh client-side id stamped as the fallback correlation key.
    pub fn encode(&self) -> Result<WaiverSubmission, SignatureError> {
        let signature_png = DataUrl::new("image/png", self.signature.export_png()?);

        Ok(WaiverSubmission {
            waiver_id: Some(format!("waiver-{}", Uuid::new_v4())),
            client_name: opt(&self.client_name),
            email: opt(&self.email),
            phone: opt(&self.phone),
            address: opt(&self.address),
            date_of_birth: opt(&self.date_of_birth),
            emergency_contact_name: opt(&self.emergency_contact_name),
            emergency_contact_phone: opt(&self.emergency_contact_phone),
            id_type: self.id_type,
            procedure_type: self.procedure_type,
            practitioner: self.practitioner,
            procedure_site: opt(&self.procedure_site),
            procedure_description: opt(&self.procedure_description),
            medical: self.medical.clone(),
            consents: self.consents,
            photo_release: self.photo_release,
            send_aftercare: self.send_aftercare,
            signature_png: Some(signature_png.encode()),
            id_photo_front: self.id_photo.as_ref().map(DataUrl::encode),
            user_agent: Some(self.user_agent.clone()),
            submitted_at: Some(jiff::Timestamp::now()),
        })
    }
}

/// Empty and whitespace-only entries are sent as absent, not as `""`.
fn opt(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
