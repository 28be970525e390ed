use inkform_core::models::waiver::WaiverRecord;

use crate::error::RecordsError;
use crate::pool::DatabasePool;

const INSERT_WAIVER: &str = r#"
INSERT INTO waivers (
    waiver_id, client_name, email, phone, address, date_of_birth,
    emergency_contact_name, emergency_contact_phone,
    id_type, procedure_type, practitioner, procedure_site, procedure_description,
    heart_condition, high_blood_pressure, diabetes, epilepsy_seizures,
    bleeding_disorder, hepatitis, hiv_aids, skin_condition, keloid_scarring,
    fainting, latex_allergy, pigment_metal_allergy, antibiotic_allergy,
    pregnant_or_nursing, blood_thinners, isotretinoin_use, immune_suppressed,
    cancer_treatment, recent_surgery, recent_alcohol_drugs,
    allergy_details, medication_list, condition_notes,
    consent_age_verified, consent_sober, consent_risks_explained,
    consent_medical_disclosure, consent_aftercare_instructions,
    consent_permanence, consent_liability_release, consent_voluntary,
    photo_release, send_aftercare,
    signature_path, id_photo_front_path,
    user_agent, submitted_at
)
VALUES (
    $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20,
    $21, $22, $23, $24, $25, $26, $27, $28, $29, $30,
    $31, $32, $33, $34, $35, $36, $37, $38, $39, $40,
    $41, $42, $43, $44, $45, $46, $47, $48, $49, $50
)
"#;

/// Append one waiver row.
///
/// `waiver_id` carries no uniqueness constraint: a retried submission
/// appends a second row under the same id, and the surrogate key keeps
/// rows distinct.
pub async fn insert_waiver(
    pool: &DatabasePool,
    record: &WaiverRecord,
) -> Result<(), RecordsError> {
    sqlx::query(INSERT_WAIVER)
        .bind(&record.waiver_id)
        .bind(&record.client_name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.address)
        .bind(&record.date_of_birth)
        .bind(&record.emergency_contact_name)
        .bind(&record.emergency_contact_phone)
        .bind(record.id_type.map(|t| t.as_str()))
        .bind(record.procedure_type.map(|t| t.as_str()))
        .bind(record.practitioner.map(|p| p.as_str()))
        .bind(&record.procedure_site)
        .bind(&record.procedure_description)
        .bind(record.medical.heart_condition)
        .bind(record.medical.high_blood_pressure)
        .bind(record.medical.diabetes)
        .bind(record.medical.epilepsy_seizures)
        .bind(record.medical.bleeding_disorder)
        .bind(record.medical.hepatitis)
        .bind(record.medical.hiv_aids)
        .bind(record.medical.skin_condition)
        .bind(record.medical.keloid_scarring)
        .bind(record.medical.fainting)
        .bind(record.medical.latex_allergy)
        .bind(record.medical.pigment_metal_allergy)
        .bind(record.medical.antibiotic_allergy)
        .bind(record.medical.pregnant_or_nursing)
        .bind(record.medical.blood_thinners)
        .bind(record.medical.isotretinoin_use)
        .bind(record.medical.immune_suppressed)
        .bind(record.medical.cancer_treatment)
        .bind(record.medical.recent_surgery)
        .bind(record.medical.recent_alcohol_drugs)
        .bind(&record.medical.allergy_details)
        .bind(&record.medical.medication_list)
        .bind(&record.medical.condition_notes)
        .bind(record.consents.consent_age_verified)
        .bind(record.consents.consent_sober)
        .bind(record.consents.consent_risks_explained)
        .bind(record.consents.consent_medical_disclosure)
        .bind(record.consents.consent_aftercare_instructions)
        .bind(record.consents.consent_permanence)
        .bind(record.consents.consent_liability_release)
        .bind(record.consents.consent_voluntary)
        .bind(record.photo_release)
        .bind(record.send_aftercare)
        .bind(&record.signature_path)
        .bind(&record.id_photo_front_path)
        .bind(&record.user_agent)
        .bind(&record.submitted_at)
        .execute(pool)
        .await
        .map_err(RecordsError::from_query)?;

    tracing::info!(waiver_id = %record.waiver_id, "waiver recorded");
    Ok(())
}
