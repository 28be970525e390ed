use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The fixed medical screening vocabulary, in form order. Each entry is
/// `(field, question)` where `field` is the flattened column name carrying
/// the yes/no answer.
pub const MEDICAL_CONDITIONS: [(&str, &str); 20] = [
    ("heart_condition", "Heart condition or pacemaker"),
    ("high_blood_pressure", "High or low blood pressure"),
    ("diabetes", "Diabetes"),
    ("epilepsy_seizures", "Epilepsy or seizures"),
    ("bleeding_disorder", "Hemophilia or another bleeding disorder"),
    ("hepatitis", "Hepatitis (any type)"),
    ("hiv_aids", "HIV / AIDS"),
    ("skin_condition", "Eczema, psoriasis, or another chronic skin condition"),
    ("keloid_scarring", "Tendency to keloid or hypertrophic scarring"),
    ("fainting", "History of fainting or dizzy spells"),
    ("latex_allergy", "Latex allergy"),
    ("pigment_metal_allergy", "Allergy to pigments, dyes, or metals"),
    ("antibiotic_allergy", "Allergy to antibiotics or topical ointments"),
    ("pregnant_or_nursing", "Currently pregnant or nursing"),
    ("blood_thinners", "Taking blood-thinning medication"),
    ("isotretinoin_use", "Isotretinoin (Accutane) use within the last twelve months"),
    ("immune_suppressed", "Compromised or suppressed immune system"),
    ("cancer_treatment", "Cancer treatment within the last twelve months"),
    ("recent_surgery", "Surgery within the last six months"),
    ("recent_alcohol_drugs", "Alcohol or recreational drug use within the last 24 hours"),
];

/// One boolean answer per screened condition, plus the free-text follow-ups,
/// flattened into the waiver payload and record under the field names of
/// [`MEDICAL_CONDITIONS`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicalHistory {
    #[serde(default)]
    pub heart_condition: bool,
    #[serde(default)]
    pub high_blood_pressure: bool,
    #[serde(default)]
    pub diabetes: bool,
    #[serde(default)]
    pub epilepsy_seizures: bool,
    #[serde(default)]
    pub bleeding_disorder: bool,
    #[serde(default)]
    pub hepatitis: bool,
    #[serde(default)]
    pub hiv_aids: bool,
    #[serde(default)]
    pub skin_condition: bool,
    #[serde(default)]
    pub keloid_scarring: bool,
    #[serde(default)]
    pub fainting: bool,
    #[serde(default)]
    pub latex_allergy: bool,
    #[serde(default)]
    pub pigment_metal_allergy: bool,
    #[serde(default)]
    pub antibiotic_allergy: bool,
    #[serde(default)]
    pub pregnant_or_nursing: bool,
    #[serde(default)]
    pub blood_thinners: bool,
    #[serde(default)]
    pub isotretinoin_use: bool,
    #[serde(default)]
    pub immune_suppressed: bool,
    #[serde(default)]
    pub cancer_treatment: bool,
    #[serde(default)]
    pub recent_surgery: bool,
    #[serde(default)]
    pub recent_alcohol_drugs: bool,

    // Free-text follow-ups
    #[serde(default)]
    pub allergy_details: Option<String>,
    #[serde(default)]
    pub medication_list: Option<String>,
    #[serde(default)]
    pub condition_notes: Option<String>,
}

impl MedicalHistory {
    /// Set the answer named by `field`. Returns false for a field outside
    /// the fixed vocabulary. This is how the form layer writes answers while
    /// iterating [`MEDICAL_CONDITIONS`].
    pub fn set(&mut self, field: &str, answer: bool) -> bool {
        let slot = match field {
            "heart_condition" => &mut self.heart_condition,
            "high_blood_pressure" => &mut self.high_blood_pressure,
            "diabetes" => &mut self.diabetes,
            "epilepsy_seizures" => &mut self.epilepsy_seizures,
            "bleeding_disorder" => &mut self.bleeding_disorder,
            "hepatitis" => &mut self.hepatitis,
            "hiv_aids" => &mut self.hiv_aids,
            "skin_condition" => &mut self.skin_condition,
            "keloid_scarring" => &mut self.keloid_scarring,
            "fainting" => &mut self.fainting,
            "latex_allergy" => &mut self.latex_allergy,
            "pigment_metal_allergy" => &mut self.pigment_metal_allergy,
            "antibiotic_allergy" => &mut self.antibiotic_allergy,
            "pregnant_or_nursing" => &mut self.pregnant_or_nursing,
            "blood_thinners" => &mut self.blood_thinners,
            "isotretinoin_use" => &mut self.isotretinoin_use,
            "immune_suppressed" => &mut self.immune_suppressed,
            "cancer_treatment" => &mut self.cancer_treatment,
            "recent_surgery" => &mut self.recent_surgery,
            "recent_alcohol_drugs" => &mut self.recent_alcohol_drugs,
            _ => return false,
        };
        *slot = answer;
        true
    }
}
