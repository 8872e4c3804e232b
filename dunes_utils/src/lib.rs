pub use dunes_utils_derive::trace_instrument;

/// Asserts that an expression matches a pattern, optionally guarded by a
/// predicate.
///
/// #### Example
/// ```rust
/// # use dunes_utils::assert_matches;
/// let value: Result<u8, ()> = Ok(3);
/// assert_matches!(value, Ok(_));
/// assert_matches!(value, Ok(x) if *x > 2);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "assertion failed: {val:?} does not match {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables, reason = "bindings are only used by the guard")]
            $pat => ::core::panic!(
                "assertion failed: {val:?} does not satisfy {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "assertion failed: {val:?} does not match {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}
