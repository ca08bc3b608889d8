#[cfg(feature = "doc")]
macro_rules! diagram_doc {
    (
        $($t:tt)*
    ) => (
        svgbobdoc::transform!(
            $($t)*
        )
    )
}

#[cfg(not(feature = "doc"))]
macro_rules! diagram_doc {
    (
        $( #![doc = $d:literal] )*
    ) => (
        core::concat!( $( $d, '\n' ),* )
    )
}

pub(crate) use diagram_doc;
