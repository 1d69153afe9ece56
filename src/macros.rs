#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Builds one registry entry.
///
/// ```ignore
/// compressor! {
///     kind: Kind::Pause,
///     requires: [Kind::Token],
///     compress: punctuation::compress_pauses,
/// }
/// ```
macro_rules! compressor {
    (
        kind: $kind:expr,
        requires: [ $($req:expr),* $(,)? ],
        compress: $compress:expr
        $(,)?
    ) => {
        $crate::engine::Compressor {
            kind: $kind,
            requires: $crate::KindSet::of(&[ $($req),* ]),
            compress: $compress,
        }
    };
}
