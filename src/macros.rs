// src/macros.rs
// Small String helpers used across the crate.

/// `s!()` → empty String, `s!(x)` → `String::from(x)`,
/// `s!("{} Hz", f)` → `format!`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($fmt:literal, $($arg:tt)+) => {
        ::std::format!($fmt, $($arg)+)
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate two or more `&str` pieces (URL = base + path, `</` + tag).
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $( out.push_str($rest); )+
        out
    }};
}
