use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, LitStr, Result, Token};

use proc_macro_crate::{FoundCrate, crate_name};

/// Code alphabet, kept in sync with `course_code::base30::ALPHABET`.
const ALPHABET: &[u8; 30] = b"0123456789BCDFGHJKLMNPQRSTVWXY";

/// Largest payload a code may hold (54 bits).
const MAX_PAYLOAD: u128 = (1 << 54) - 1;

/// Parsed `code!` arguments.
enum CodeInput {
    /// `code!("2JD-H08-CC8")`
    Literal(LitStr),
    /// `code!(meta = ..., value = ...)`, a missing field is zero.
    Fields {
        meta: Option<Expr>,
        value: Option<Expr>,
    },
}

impl Parse for CodeInput {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            if !input.is_empty() {
                return Err(input.error("expected a single string literal"));
            }
            return Ok(Self::Literal(lit));
        }

        let mut meta = None;
        let mut value = None;
        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            let expr: Expr = input.parse()?;

            let slot = if key == "meta" {
                &mut meta
            } else if key == "value" {
                &mut value
            } else {
                return Err(syn::Error::new(key.span(), "expected `meta` or `value`"));
            };
            if slot.is_some() {
                return Err(syn::Error::new(key.span(), format!("duplicate `{}`", key)));
            }
            *slot = Some(expr);

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }
        Ok(Self::Fields { meta, value })
    }
}

/// Decode a literal the way the runtime parser does, skipping characters
/// outside the alphabet. `None` once the payload exceeds 54 bits.
fn literal_payload(text: &str) -> Option<u64> {
    let mut acc: u128 = 0;
    for b in text.bytes() {
        if let Some(d) = ALPHABET.iter().position(|&c| c == b) {
            acc = acc * 30 + d as u128;
            if acc > MAX_PAYLOAD {
                return None;
            }
        }
    }
    Some(acc as u64)
}

// =============================================================================
// Crate path resolution
// =============================================================================

fn code_crate_path() -> TokenStream2 {
    match crate_name("course-code") {
        Ok(FoundCrate::Itself) => {
            quote!(::course_code)
        }
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Err(_) => quote!(::course_code),
    }
}

// =============================================================================
// Code generation
// =============================================================================

fn expand(input: CodeInput, krate: &TokenStream2) -> Result<TokenStream2> {
    let (constructor, message) = match input {
        CodeInput::Literal(lit) => {
            if literal_payload(&lit.value()).is_none() {
                return Err(syn::Error::new(
                    lit.span(),
                    "code literal does not fit in 54 bits",
                ));
            }
            (
                quote! { #krate::Code::parse(#lit) },
                "code literal does not fit in 54 bits",
            )
        }
        CodeInput::Fields { meta, value } => {
            let meta = meta.map_or_else(|| quote!(0), |e| quote!(#e));
            let value = value.map_or_else(|| quote!(0), |e| quote!(#e));
            (
                quote! { #krate::Code::from_fields(#meta, #value) },
                "code fields out of range: meta must fit in 14 bits, value in 33 bits",
            )
        }
    };

    Ok(quote! {
        {
            const CODE: #krate::Code = match #constructor {
                ::core::result::Result::Ok(code) => code,
                ::core::result::Result::Err(_) => ::core::panic!(#message),
            };
            CODE
        }
    })
}

// =============================================================================
// Entry point
// =============================================================================

/// Build a `Code` at compile time.
///
/// ```ignore
/// use course_code::{code, Code, NSO_COURSE_META};
///
/// const MAKER: Code = code!("2JD-H08-CC8");
/// const COURSE: Code = code!(meta = NSO_COURSE_META, value = 12345);
/// ```
///
/// A literal wider than 54 bits, or fields outside their widths, fail to
/// compile. Characters outside the code alphabet are skipped, as at runtime.
#[proc_macro]
pub fn code(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as CodeInput);
    let krate = code_crate_path();

    match expand(input, &krate) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
