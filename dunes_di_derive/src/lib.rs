use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

/// Derives `dunes_di::Build` for a struct.
///
/// Every field is built from the provider, except fields marked with
/// `#[state]` which are initialized with `Default::default()`. The built
/// instance is cached in the provider so dependents share it.
#[proc_macro_derive(Build, attributes(state))]
pub fn derive_build(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ident = &input.ident;
    let generics = input
        .generics
        .type_params()
        .map(|param| &param.ident)
        .collect::<Vec<_>>();

    let Data::Struct(data) = &input.data else {
        return quote! { ::core::compile_error!("Build can only be derived for structs"); }.into();
    };

    let bounds = data
        .fields
        .iter()
        .filter(|field| !is_state(field))
        .map(|Field { ty, .. }| quote! { #ty: ::dunes_di::Build<__Provider> })
        .collect::<Vec<_>>();

    let construct = construct(&data.fields);

    quote! {
        impl<__Provider, #(#generics),*> ::dunes_di::Build<__Provider> for #ident<#(#generics),*>
        where
            Self: ::core::clone::Clone + 'static,
            __Provider: ::dunes_di::Provider,
            #(#bounds,)*
        {
            fn build(provider: &mut __Provider) -> Self {
                if let ::core::option::Option::Some(cached) =
                    ::dunes_di::Provider::cache(provider).get::<Self>().cloned()
                {
                    return cached;
                }

                let built = #construct;
                ::dunes_di::Provider::cache(provider)
                    .insert(::core::clone::Clone::clone(&built));
                built
            }
        }
    }
    .into()
}

fn is_state(field: &Field) -> bool {
    field
        .attrs
        .iter()
        .any(|attr| attr.path().is_ident("state"))
}

fn field_value(field: &Field) -> TokenStream2 {
    if is_state(field) {
        quote! { ::core::default::Default::default() }
    } else {
        quote! { ::dunes_di::Build::build(provider) }
    }
}

fn construct(fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|field| {
                let ident = &field.ident;
                let value = field_value(field);
                quote! { #ident: #value }
            });
            quote! { Self { #(#fields),* } }
        }
        Fields::Unnamed(fields) => {
            let fields = fields.unnamed.iter().map(field_value);
            quote! { Self( #(#fields),* ) }
        }
        Fields::Unit => quote! { Self },
    }
}
