#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every crate of the workspace. They remove the
//! boilerplate around error enums, JSON/OpenAPI models, Axum handlers and
//! feature slices so that each feature crate reads the same way.
//!
//! Examples are `ignore`d: a proc-macro crate cannot use its own macros in doctests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Defines a domain error enum.
///
/// * Adds `#[derive(Debug, thiserror::Error)]` unless already present.
/// * Generates a `<Name>Ext` trait with `.context(...)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a `source`.
/// * Implements `From<Source>` for variants with a `source` field.
/// * Implements `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * Emits a module-local `format_context` helper for `#[error(...)]` strings, so keep
///   one error enum per module.
///
/// Variants must use named fields. A variant with a `source` must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[gnomix_derive::gnomix_error]
/// pub enum SeedError {
///     #[error("Seed read failed{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal seed error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, SeedError> {
///     std::fs::read_to_string(path).context("Reading seed file")
/// }
/// ```
#[proc_macro_attribute]
pub fn gnomix_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Declares a JSON data model exchanged over the API.
///
/// Adds `Debug`, `Serialize` and `Deserialize` when missing, derives `utoipa::ToSchema`
/// when the consuming crate builds with its `server` feature, renames fields to
/// `camelCase` and rejects unknown fields. `deny_unknown_fields = false` relaxes the
/// last rule.
///
/// ```rust,ignore
/// #[gnomix_derive::api_model]
/// pub struct Stats {
///     pub downloads: u64,
///     pub github_stars: u64,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_model(args.into(), input).into()
}

/// Marks an Axum handler and forwards its arguments to `utoipa::path`
/// (only when the consuming crate builds with its `server` feature).
///
/// ```rust,ignore
/// #[gnomix_derive::api_handler(get, path = "/stats", responses((status = OK, body = Stats)))]
/// pub async fn get_stats(State(state): State<ApiState>) -> Result<Json<Stats>, ApiError> {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_handler(args.into(), input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The fields move into a generated `<Name>Inner` struct; `<Name>` becomes a cheap
/// `Arc` wrapper that derefs to it and implements
/// `gnomix_kernel::domain::registry::FeatureSlice`.
///
/// ```rust,ignore
/// #[gnomix_derive::gnomix_slice]
/// pub struct Content {
///     pub store: Arc<dyn ContentStore>,
/// }
///
/// let slice = Content::new(ContentInner { store });
/// ```
#[proc_macro_attribute]
pub fn gnomix_slice(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand(input).into()
}
