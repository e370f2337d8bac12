#![allow(unexpected_cfgs)]

use gnomix_derive::api_model;
use serde_json::json;

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Release {
    pub release_date: String,
    pub is_beta: bool,
}

#[api_model(deny_unknown_fields = false)]
pub struct Loose {
    pub display_name: String,
}

#[test]
fn fields_are_camel_case() {
    let release = Release { release_date: "November 5, 2025".to_owned(), is_beta: true };
    let value = serde_json::to_value(&release).unwrap();
    assert_eq!(value, json!({ "releaseDate": "November 5, 2025", "isBeta": true }));
}

#[test]
fn unknown_fields_are_rejected_by_default() {
    let raw = json!({ "releaseDate": "x", "isBeta": false, "extra": 1 });
    assert!(serde_json::from_value::<Release>(raw).is_err());
}

#[test]
fn unknown_fields_can_be_allowed() {
    let raw = json!({ "displayName": "Alex", "extra": 1 });
    let loose: Loose = serde_json::from_value(raw).unwrap();
    assert_eq!(loose.display_name, "Alex");
}
