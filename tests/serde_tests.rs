//! Slots serialize as the value they denote

use anyhow::Result;
use serde::{Deserialize, Serialize};
use slotref::{unwrap, Cell, Slot};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Form {
    name: Slot<String>,
    age: Slot<u32>,
}

#[test]
fn test_slot_serializes_without_tag() -> Result<()> {
    let name = Cell::new(String::from("Ada"));
    let form = Form {
        name: Slot::Boxed(name.clone()),
        age: Slot::Direct(36),
    };

    assert_eq!(serde_json::to_string(&form)?, r#"{"name":"Ada","age":36}"#);

    name.write(String::from("Grace"));
    assert_eq!(serde_json::to_string(&form)?, r#"{"name":"Grace","age":36}"#);
    Ok(())
}

#[test]
fn test_slot_deserializes_as_direct() -> Result<()> {
    let form: Form = serde_json::from_str(r#"{"name":"Ada","age":36}"#)?;
    assert!(!form.name.is_cell());
    assert_eq!(form.age, Slot::Direct(36));
    Ok(())
}

#[test]
fn test_container_snapshot_after_set() -> Result<()> {
    let mut state = BTreeMap::from([
        (String::from("count"), Slot::boxed(0_i64)),
        (String::from("step"), Slot::Direct(1_i64)),
    ]);

    unwrap::set(&mut state, String::from("count"), 3);
    unwrap::set(&mut state, String::from("limit"), 10);

    let json = serde_json::to_value(&state)?;
    assert_eq!(json, serde_json::json!({ "count": 3, "limit": 10, "step": 1 }));

    let restored: BTreeMap<String, Slot<i64>> = serde_json::from_value(json)?;
    assert_eq!(restored, state);
    Ok(())
}

#[test]
fn test_cell_roundtrip_creates_fresh_identity() -> Result<()> {
    let original = Cell::new(vec![1_u8, 2]);
    let json = serde_json::to_string(&original)?;
    let copy: Cell<Vec<u8>> = serde_json::from_str(&json)?;
    assert_eq!(copy.read(), original.read());
    assert!(!Cell::ptr_eq(&copy, &original));
    Ok(())
}

#[test]
fn test_serializing_cell_being_written_is_an_error() {
    let cell = Cell::new(1_u32);
    let slot = Slot::Boxed(cell.clone());

    let result = cell.update(|_| serde_json::to_string(&slot));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("already mutably borrowed"));

    // Once the write finishes the cell serializes normally.
    assert_eq!(serde_json::to_string(&slot).unwrap(), "1");
}
