//! A `toon!` macro for building [`crate::Value`] literals, the way `serde_json::json!` builds
//! `serde_json::Value` literals. Falls back to `to_value` for any expression that isn't one of
//! the recognized literal shapes, so arbitrary `Serialize` values can be spliced in.

#[macro_export]
macro_rules! toon {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::toon!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ToonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ToonMap::new();
        $(
            object.insert($key.to_string(), $crate::toon!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}
