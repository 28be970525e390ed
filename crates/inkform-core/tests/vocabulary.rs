use inkform_core::models::consent::{CONSENT_STATEMENTS, ConsentSet};
use inkform_core::models::medical::{MEDICAL_CONDITIONS, MedicalHistory};

#[test]
fn every_consent_field_is_addressable() {
    let mut consents = ConsentSet::default();
    for (field, _) in CONSENT_STATEMENTS {
        assert!(consents.acknowledge(field, true), "unknown field {field}");
    }
    assert!(consents.all_acknowledged());
}

#[test]
fn acknowledge_rejects_fields_outside_the_vocabulary() {
    let mut consents = ConsentSet::default();
    assert!(!consents.acknowledge("consent_unknown", true));
    assert!(!consents.all_acknowledged());
}

#[test]
fn missing_lists_unacknowledged_statements_in_order() {
    let consents = ConsentSet::default();
    let missing = consents.missing();
    assert_eq!(missing.len(), CONSENT_STATEMENTS.len());
    for (listed, (_, statement)) in missing.iter().zip(CONSENT_STATEMENTS.iter()) {
        assert_eq!(listed, statement);
    }
}

#[test]
fn one_unacknowledged_statement_blocks_the_set() {
    let mut consents = ConsentSet::default();
    for (field, _) in CONSENT_STATEMENTS {
        consents.acknowledge(field, true);
    }
    consents.acknowledge("consent_sober", false);

    assert!(!consents.all_acknowledged());
    assert_eq!(consents.missing().len(), 1);
    assert!(consents.missing()[0].contains("not under the influence"));
}

#[test]
fn every_medical_field_is_addressable() {
    let mut medical = MedicalHistory::default();
    for (field, _) in MEDICAL_CONDITIONS {
        assert!(medical.set(field, true), "unknown field {field}");
    }
}

#[test]
fn medical_set_rejects_fields_outside_the_vocabulary() {
    let mut medical = MedicalHistory::default();
    assert!(!medical.set("third_arm", true));
}

#[test]
fn vocabulary_field_names_are_unique() {
    let mut fields: Vec<&str> = CONSENT_STATEMENTS
        .iter()
        .map(|(field, _)| *field)
        .chain(MEDICAL_CONDITIONS.iter().map(|(field, _)| *field))
        .collect();
    let total = fields.len();
    fields.sort_unstable();
    fields.dedup();
    assert_eq!(fields.len(), total);
}
