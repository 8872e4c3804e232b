pub mod contact;
mod macros;
