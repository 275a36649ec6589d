use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod process;

/// Implements `sqlx_util::IntoRow` for a struct with named fields.
///
/// Columns follow field declaration order. `#[field(rename = "col")]` changes
/// a column name, `#[field(skip = true)]` leaves the field out.
#[proc_macro_derive(IntoRow, attributes(field))]
pub fn into_row_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match input.data {
        Data::Struct(ref data) => match data.fields {
            Fields::Named(ref fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(name, "IntoRow only supports structs with named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "IntoRow only supports structs")
                .to_compile_error()
                .into()
        }
    };

    let process::Output { columns, values } = match process::process_fields(fields) {
        Ok(output) => output,
        Err(err) => return err.to_compile_error().into(),
    };

    let expanded = quote! {
        impl #impl_generics ::sqlx_util::IntoRow for #name #ty_generics #where_clause {
            const COLUMNS: &'static [&'static str] = &[#(#columns),*];

            fn into_row(&self) -> ::std::vec::Vec<::sqlx_util::Value> {
                ::std::vec![#(::sqlx_util::Value::from(::std::clone::Clone::clone(&self.#values))),*]
            }
        }
    };

    expanded.into()
}
