#![allow(unexpected_cfgs)]

use gnomix_derive::api_model;

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Counter {
    pub total_downloads: u64,
}

#[api_model(deny_unknown_fields = false)]
pub struct Loose {
    pub display_name: String,
}

fn main() {
    let counter = Counter { total_downloads: 1 };
    assert!(counter.clone() == counter);
    let _ = Loose { display_name: String::new() };
}
