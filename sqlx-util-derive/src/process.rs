use deluxe::ExtractAttributes;
use proc_macro2::Ident;

pub struct Output {
    pub columns: Vec<String>,
    pub values: Vec<Ident>,
}

#[derive(ExtractAttributes, Default, Debug)]
#[deluxe(attributes(field))]
struct RowField {
    skip: Option<bool>,
    rename: Option<String>,
}

pub fn process_fields(
    fields: &syn::punctuated::Punctuated<syn::Field, syn::Token![,]>,
) -> syn::Result<Output> {
    let mut columns = Vec::new();
    let mut values = Vec::new();

    for field in fields {
        let attributes = RowField::extract_attributes(&mut field.clone())?;
        if attributes.skip.unwrap_or(false) {
            continue;
        }

        let Some(field_name) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let column = attributes
            .rename
            .unwrap_or_else(|| field_name.to_string().trim_start_matches("r#").to_owned());

        columns.push(column);
        values.push(field_name);
    }

    if columns.is_empty() {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "IntoRow needs at least one column",
        ));
    }

    Ok(Output { columns, values })
}
