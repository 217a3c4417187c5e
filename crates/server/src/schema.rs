use std::fmt::Display;

use axum::response::IntoResponse;
use serde_json::{json, Value};

/// Generate example values for OAPI documentation.
macro_rules! generate_examples {
    ($name:ident, $type:ty, $expr:expr) => {
        ::paste::paste! {
            #[doc = concat!("Generate example [`", stringify!($type), "`] value for OAPI documentation.")]
            pub(crate) fn [<example_ $name>]() -> $type {
                $expr
            }
        }
    };

    ($name:ident, $type:ty, $expr:expr; $($name_repeat:ident, $type_repeat:ty, $expr_repeat:expr);+) => {
        generate_examples!($name, $type, $expr);
        generate_examples!($($name_repeat, $type_repeat, $expr_repeat);+);
    }
}

/// Convert an error into a JSON value suitable for OAPI documentation.
pub(crate) fn example_error<E: Display + IntoResponse>(err: E) -> Value {
    let error = err.to_string();

    json! {{
        "code": err.into_response().status().as_u16(),
        "error": error,
    }}
}

generate_examples!(
    database_identifier, i64, 1;
    result_code, i64, 0;
    machine_id, String, String::from("a7e2b6f0c1d54a3e9b8f");
    info, String, String::from("ddev start");
    client_timestamp, i64, 1488369600;
    inserted_datetime, String, String::from("2017-03-01 12:00:04")
);
