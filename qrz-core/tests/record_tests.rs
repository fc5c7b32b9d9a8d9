//! Integration tests for core record types.

use qrz_core::{CALLSIGN_FIELDS, Callsign, DXCC_FIELDS, Dxcc, LookupAction, LookupRecord};

#[test]
fn test_field_tables_have_unique_names() {
    let mut names: Vec<&str> = CALLSIGN_FIELDS.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), CALLSIGN_FIELDS.len());

    let mut names: Vec<&str> = DXCC_FIELDS.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), DXCC_FIELDS.len());
}

#[test]
fn test_dxcc_fields_follow_wire_order() {
    let dxcc = Dxcc {
        dxcc: "291".to_string(),
        notes: "none".to_string(),
        ..Default::default()
    };
    let fields = dxcc.fields();

    assert_eq!(fields.first(), Some(&("dxcc", "291".to_string())));
    assert_eq!(fields.last(), Some(&("notes", "none".to_string())));
}

#[test]
fn test_every_action_round_trips_through_its_cli_name() {
    for action in LookupAction::ALL {
        assert_eq!(action.cli_name().parse::<LookupAction>().unwrap(), action);
    }
}

#[test]
fn test_record_key() {
    let record: LookupRecord = Callsign::new("K1ABC").into();
    assert_eq!(record.key(), "K1ABC");
}
