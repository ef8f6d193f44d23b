#[macro_export]
/// Implements `From` for each listed source type by converting through `$mid`.
///
/// `compose_from!(Value via Inum: i8, i16)` is `Value::from(Inum::from(x))` for both.
macro_rules! compose_from {
    ($to:ident via $mid:ident: $($from:ty),+ $(,)?) => {
        $(
            impl From<$from> for $to {
                fn from(f: $from) -> Self { Self::from($mid::from(f)) }
            }
        )+
    };
}

#[macro_export]
/// Implements `From` for each `source => conversion` pair.
macro_rules! from_fn {
    ($to:ty: $($from:ty => $fn:expr;)+) => {
        $(
            impl From<$from> for $to {
                fn from(f: $from) -> $to { $fn(f) }
            }
        )+
    };
}

#[macro_export]
/// Implements `From` for each listed primitive by casting it to `$as` first.
macro_rules! from_as {
    ($to:ident as $as:ty: $($from:ty),+ $(,)?) => {
        $(
            impl From<$from> for $to {
                fn from(f: $from) -> $to { $to::from(f as $as) }
            }
        )+
    };
}
