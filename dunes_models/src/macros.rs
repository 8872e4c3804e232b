macro_rules! id {
    ($(#[doc = $doc:literal])* $ident:ident) => {
        $(#[doc = $doc])*
        #[::nutype::nutype(derive(
            Debug,
            Display,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Deref,
            From,
            Serialize,
            Deserialize,
        ))]
        pub struct $ident(::uuid::Uuid);
    };
}

macro_rules! nutype_string {
    ($(#[doc = $doc:literal])* $ident:ident($($args:tt)*)) => {
        $(#[doc = $doc])*
        #[::nutype::nutype(
            $($args)*,
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                Hash,
                AsRef,
                Deref,
                TryFrom,
                Serialize,
                Deserialize,
            )
        )]
        pub struct $ident(String);
    };
}

pub(crate) use id;
pub(crate) use nutype_string;
