use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The fixed consent statements, in presentation order. Each entry is
/// `(field, statement)` where `field` is the flattened column name carrying
/// the acknowledgment. Every statement must be acknowledged before a
/// submission leaves the kiosk.
pub const CONSENT_STATEMENTS: [(&str, &str); 8] = [
    (
        "consent_age_verified",
        "I confirm that I am at least 18 years of age and that the identification I have \
         presented is valid and belongs to me.",
    ),
    (
        "consent_sober",
        "I confirm that I am not under the influence of alcohol or drugs.",
    ),
    (
        "consent_risks_explained",
        "I understand that tattooing, permanent cosmetics, branding, and piercing carry risks \
         including infection, allergic reaction, and scarring, and that these risks have been \
         explained to me.",
    ),
    (
        "consent_medical_disclosure",
        "I have truthfully disclosed all medical conditions, medications, and allergies that \
         could affect my procedure or my healing.",
    ),
    (
        "consent_aftercare_instructions",
        "I understand that aftercare instructions will be provided and that failure to follow \
         them may cause complications for which the studio is not responsible.",
    ),
    (
        "consent_permanence",
        "I understand that the procedure produces a permanent change to my appearance, that \
         results vary between individuals, and that touch-up work may incur additional cost.",
    ),
    (
        "consent_liability_release",
        "I release the studio and my practitioner from all liability for complications that do \
         not arise from the workmanship of the procedure.",
    ),
    (
        "consent_voluntary",
        "I am undergoing this procedure voluntarily and of my own free will.",
    ),
];

/// One boolean acknowledgment per consent statement, flattened into the
/// waiver payload and record under the field names of
/// [`CONSENT_STATEMENTS`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsentSet {
    #[serde(default)]
    pub consent_age_verified: bool,
    #[serde(default)]
    pub consent_sober: bool,
    #[serde(default)]
    pub consent_risks_explained: bool,
    #[serde(default)]
    pub consent_medical_disclosure: bool,
    #[serde(default)]
    pub consent_aftercare_instructions: bool,
    #[serde(default)]
    pub consent_permanence: bool,
    #[serde(default)]
    pub consent_liability_release: bool,
    #[serde(default)]
    pub consent_voluntary: bool,
}

impl ConsentSet {
    /// Acknowledgments in the order of [`CONSENT_STATEMENTS`].
    fn flags(&self) -> [bool; 8] {
        [
            self.consent_age_verified,
            self.consent_sober,
            self.consent_risks_explained,
            self.consent_medical_disclosure,
            self.consent_aftercare_instructions,
            self.consent_permanence,
            self.consent_liability_release,
            self.consent_voluntary,
        ]
    }

    pub fn all_acknowledged(&self) -> bool {
        self.flags().iter().all(|&ack| ack)
    }

    /// Statements not yet acknowledged, in presentation order.
    pub fn missing(&self) -> Vec<&'static str> {
        self.flags()
            .iter()
            .zip(CONSENT_STATEMENTS.iter())
            .filter(|&(&ack, _)| !ack)
            .map(|(_, (_, statement))| *statement)
            .collect()
    }

    /// Set the acknowledgment named by `field`. Returns false for a field
    /// outside the fixed vocabulary. This is how the form layer writes
    /// answers while iterating [`CONSENT_STATEMENTS`].
    pub fn acknowledge(&mut self, field: &str, acknowledged: bool) -> bool {
        let slot = match field {
            "consent_age_verified" => &mut self.consent_age_verified,
            "consent_sober" => &mut self.consent_sober,
            "consent_risks_explained" => &mut self.consent_risks_explained,
            "consent_medical_disclosure" => &mut self.consent_medical_disclosure,
            "consent_aftercare_instructions" => &mut self.consent_aftercare_instructions,
            "consent_permanence" => &mut self.consent_permanence,
            "consent_liability_release" => &mut self.consent_liability_release,
            "consent_voluntary" => &mut self.consent_voluntary,
            _ => return false,
        };
        *slot = acknowledged;
        true
    }
}
