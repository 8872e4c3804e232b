//! Compile time dependency injection.
//!
//! Services declare their dependencies as generic struct fields and derive
//! [`Build`]. A provider created with [`provider!`] supplies the leaf values
//! (configuration, database handles) and every derived service is built
//! exactly once per provider.

extern crate self as dunes_di;

pub use dunes_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// Instances that have already been built by this provider.
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or derive `Build` for `{Self}` and make sure \
            all of its dependencies can be built"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}
