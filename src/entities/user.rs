use super::lenient_optional_string;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque user record. Only `usr_fullname` is ever displayed; the remaining
/// columns are kept as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub usr_fullname: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
