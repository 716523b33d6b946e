use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;
use syn::spanned::Spanned;

/// Generate a color model struct.
///
/// The struct must declare 3 or 4 named component fields. The macro makes
/// every component public, appends `alpha` and `flags` fields plus a phantom
/// field for each generic type parameter and generates a constructor and
/// accessors.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::ItemStruct);

    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(mut input: syn::ItemStruct) -> syn::Result<proc_macro2::TokenStream> {
    let count = input.fields.len();
    if count != 3 && count != 4 {
        return Err(syn::Error::new(
            input.span(),
            "Models must have 3 or 4 fields, one for each component of the color.",
        ));
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| {
            f.ident
                .clone()
                .ok_or_else(|| syn::Error::new(f.span(), "model fields must be named"))
        })
        .collect::<syn::Result<Vec<_>>>()?;

    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input.attrs.push(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    });

    let mut phantom_fields: Vec<syn::Ident> = vec![];
    let mut phantom_types: Vec<syn::Ident> = vec![];
    for param in input.generics.params.iter() {
        match param {
            syn::GenericParam::Type(type_param) => phantom_types.push(type_param.ident.clone()),
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "only type parameters are supported on models",
                ))
            }
        }
    }

    let syn::Fields::Named(ref mut named) = input.fields else {
        return Err(syn::Error::new(input.span(), "model fields must be named"));
    };

    named.named.push(syn::Field::parse_named.parse2(quote! {
        /// The alpha component of the color.
        pub alpha: crate::color::Component
    })?);
    named.named.push(syn::Field::parse_named.parse2(quote! {
        /// Components that are missing or powerless.
        pub flags: crate::color::Flags
    })?);

    for ident in phantom_types.iter() {
        let field_name = format!("_{}", ident.to_string().to_lowercase());
        let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
        phantom_fields.push(field_name.clone());

        named.named.push(syn::Field::parse_named.parse2(quote! {
            #field_name: std::marker::PhantomData<#ident>
        })?);
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let components_impl = if count == 3 {
        let (f1, f2, f3) = (&field_names[0], &field_names[1], &field_names[2]);
        quote! {
            /// Return the three components as a generic [`Components`](crate::color::Components).
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#f1, self.#f2, self.#f3)
            }

            /// Create the model from generic components.
            pub fn from_components(
                components: crate::color::Components,
                alpha: crate::color::Component,
            ) -> Self {
                Self::new(components.0, components.1, components.2, alpha)
            }
        }
    } else {
        quote! {}
    };

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color having this model.
            pub fn new(
                #(#field_names: crate::color::Component,)*
                alpha: crate::color::Component,
            ) -> Self {
                Self {
                    #(#field_names,)*
                    alpha,
                    flags: crate::color::Flags::empty(),
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }

            /// Return the same color with the given flags set.
            pub fn with_flags(mut self, flags: crate::color::Flags) -> Self {
                self.flags |= flags;
                self
            }

            /// Return the color components in declaration order, excluding alpha.
            pub fn to_array(&self) -> [crate::color::Component; #count] {
                [#(self.#field_names,)*]
            }

            #components_impl
        }
    };

    Ok(quote! {
        #input
        #new_impl
    })
}
