// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! notice {
    // Notice shorthand: notice!(Warning, "Saved {} players", n)
    ($level:ident, $($arg:tt)*) => {
        $crate::notice::Notice::new($crate::notice::Level::$level, format!($($arg)*))
    };
}
