/// Declares a provider struct.
///
/// Plain fields are handed out by cloning. A `..base: Base { A, B, }` section
/// delegates the listed types to a nested provider.
#[macro_export]
macro_rules! provider {
    ($(#[doc=$doc:literal])* $vis:vis $ident:ident {
        $( $field:ident: $ty:ty, )*
        $( .. $base_field:ident: $base:ty { $($base_ty:ty,)* } )?
    }) => {
        $(#[doc=$doc])*
        $vis struct $ident {
            _cache: $crate::TypeMap,
            $( $field: $ty, )*
            $( $base_field: $base, )?
        }

        impl $crate::Provider for $ident {
            fn cache(&mut self) -> &mut $crate::TypeMap {
                &mut self._cache
            }
        }

        $(
            impl $crate::Build<$ident> for $ty {
                fn build(provider: &mut $ident) -> Self {
                    ::core::clone::Clone::clone(&provider.$field)
                }
            }
        )*

        $($(
            impl $crate::Build<$ident> for $base_ty {
                fn build(provider: &mut $ident) -> Self {
                    $crate::Provide::provide(&mut provider.$base_field)
                }
            }
        )*)?
    };
}
