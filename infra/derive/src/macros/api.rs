use super::error::derived_names;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, ItemFn, ItemStruct, Lit, MetaNameValue, Token};

pub fn expand_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    let deny_unknown = match parse_deny_unknown(args) {
        Ok(value) => value,
        Err(err) => return err.to_compile_error(),
    };

    let present = derived_names(&input.attrs);
    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !present.contains("Serialize") {
        derives.push(quote! { ::serde::Serialize });
    }
    if !present.contains("Deserialize") {
        derives.push(quote! { ::serde::Deserialize });
    }
    let derive_attr = if derives.is_empty() { quote! {} } else { quote! { #[derive(#(#derives),*)] } };

    let schema_attr = if present.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let (has_rename, has_deny) = serde_flags(&input.attrs);
    let rename_attr = if has_rename { quote! {} } else { quote! { #[serde(rename_all = "camelCase")] } };
    let deny_attr =
        if deny_unknown && !has_deny { quote! { #[serde(deny_unknown_fields)] } } else { quote! {} };

    quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    }
}

pub fn expand_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

/// `#[api_model]` accepts a single optional `deny_unknown_fields = <bool>` argument.
fn parse_deny_unknown(args: TokenStream) -> syn::Result<bool> {
    let metas = Punctuated::<MetaNameValue, Token![,]>::parse_terminated.parse2(args)?;
    let mut deny_unknown = true;

    for meta in metas {
        if !meta.path.is_ident("deny_unknown_fields") {
            return Err(syn::Error::new_spanned(
                meta.path,
                "unsupported argument; expected `deny_unknown_fields = <bool>`",
            ));
        }
        let Expr::Lit(ExprLit { lit: Lit::Bool(value), .. }) = &meta.value else {
            return Err(syn::Error::new_spanned(
                &meta.value,
                "deny_unknown_fields must be a boolean literal",
            ));
        };
        deny_unknown = value.value;
    }

    Ok(deny_unknown)
}

/// Reports whether the struct already sets `rename_all` or `deny_unknown_fields` via serde.
fn serde_flags(attrs: &[Attribute]) -> (bool, bool) {
    let mut rename = false;
    let mut deny = false;

    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                rename = true;
                let _: syn::LitStr = meta.value()?.parse()?;
            } else if meta.path.is_ident("deny_unknown_fields") {
                deny = true;
            } else if meta.input.peek(Token![=]) {
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        });
    }

    (rename, deny)
}
