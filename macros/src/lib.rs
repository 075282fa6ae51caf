use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct with exactly three component fields.
///
/// The fields are made public, value derives are added and any type
/// parameters are carried as `PhantomData` tags. The model gets a `new`
/// constructor and conversions to and from `crate::color::Components`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Model components must be named fields.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = match syn::Attribute::parse_outer.parse2(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let mut type_params: Vec<syn::Ident> = vec![];
    for param in input.generics.params.iter() {
        match param {
            syn::GenericParam::Type(type_param) => type_params.push(type_param.ident.clone()),
            other => {
                return syn::Error::new_spanned(other, "only type parameters are supported")
                    .to_compile_error()
                    .into()
            }
        }
    }

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    if let syn::Fields::Named(ref mut named) = input.fields {
        for ident in type_params.iter() {
            let field_name = format!("_{}", ident.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            match syn::Field::parse_named.parse2(quote! {
                #field_name: std::marker::PhantomData<#ident>
            }) {
                Ok(field) => named.named.push(field),
                Err(err) => return err.to_compile_error().into(),
            }
        }
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color in this model.
            pub const fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl #impl_gen From<crate::color::Components> for #struct_name #type_gen #where_clause {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl #impl_gen From<#struct_name #type_gen> for crate::color::Components #where_clause {
            fn from(value: #struct_name #type_gen) -> Self {
                value.to_components()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
