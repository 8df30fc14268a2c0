use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    Result,
    Token,
};

/// A single `tag = expression` pair inside the `error` attribute.
struct Tag {
    name: Ident,
    value: Expr,
}

impl Parse for Tag {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = input.parse()?;
        Ok(Self { name, value })
    }
}

/// The contents of the `error` attribute: how to build the report of an error kind.
#[derive(Default)]
pub struct ReportSpec {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Parse for ReportSpec {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut spec = Self::default();

        for tag in Punctuated::<Tag, Token![,]>::parse_terminated(input)? {
            let slot = match tag.name.to_string().as_str() {
                "message" => &mut spec.message,
                "labels" => &mut spec.labels,
                "help" => &mut spec.help,
                other => {
                    return Err(syn::Error::new_spanned(&tag.name, format!("unknown tag `{}`", other)));
                },
            };

            if slot.replace(tag.value).is_some() {
                return Err(syn::Error::new_spanned(&tag.name, format!("duplicate tag `{}`", tag.name)));
            }
        }

        Ok(spec)
    }
}

/// A struct to derive [`ErrorKind`] for, along with its report specification.
pub struct ErrorKindTarget {
    pub name: Ident,
    fields: Fields,
    spec: ReportSpec,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let input = input.parse::<DeriveInput>()?;
        let Data::Struct(data) = input.data else {
            return Err(syn::Error::new_spanned(&input.ident, "`ErrorKind` can only be derived for structs"));
        };

        let spec = match input.attrs.iter().find(|attr| attr.path().is_ident("error")) {
            Some(attr) => attr.parse_args::<ReportSpec>()?,
            None => ReportSpec::default(),
        };
        if spec.message.is_none() {
            return Err(syn::Error::new_spanned(&input.ident, "missing `message` in the `error` attribute"));
        }

        Ok(Self {
            name: input.ident,
            fields: data.fields,
            spec,
        })
    }
}

impl ErrorKindTarget {
    /// Binds each named field of `self` to a variable of the same name, so that the tag
    /// expressions can refer to them.
    fn bind_fields(&self) -> TokenStream2 {
        match &self.fields {
            Fields::Named(fields) => {
                let names = fields.named.iter().map(|field| &field.ident);
                quote! { let Self { #(#names),* } = self; }
            },
            Fields::Unnamed(_) => quote_spanned! {
                self.name.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => quote! {},
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bindings = self.bind_fields();
        let message = &self.spec.message;
        let labels = match &self.spec.labels {
            Some(labels) => quote! { (#labels) },
            None => quote! { std::iter::empty::<String>() },
        };
        let help = self.spec.help.as_ref().map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<'a, (&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #bindings

                let offset = spans.first().map_or(0, |span| span.start);
                let labels = #labels
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(alg_error::EXPR);
                        let text = text.to_string();
                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    })
                    .collect::<Vec<_>>();

                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(labels);
                #help
                builder.finish()
            }
        });
    }
}
