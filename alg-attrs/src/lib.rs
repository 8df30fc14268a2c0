mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives `alg_error::ErrorKind` for a struct, generating the `ariadne` report of the error from
/// the `error` attribute.
///
/// ```
/// use alg_attrs::ErrorKind;
/// use alg_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("`{}` cannot be used here", token),
///     labels = ["this token"],
///     help = "remove it",
/// )]
/// pub struct Misplaced {
///     token: String,
/// }
/// ```
///
/// The attribute takes these tags, each an expression:
///
/// - `message` (required): the headline of the report.
/// - `labels`: something iterable over strings. The first label is attached to the first span of
///   the error, the second to the second span, and so on; whatever is left over on either side is
///   dropped. Empty labels highlight their span without any text.
/// - `help`: a note telling the user how to fix the error.
///
/// The named fields of the struct are in scope in every expression. Tuple structs are rejected.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
