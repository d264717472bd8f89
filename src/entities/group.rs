use super::{lenient_string, RecordId};
use serde::{Deserialize, Serialize};

/// A named category a contact may belong to. Read-only from the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub grp_id: RecordId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub grp_name: String,
}

impl Group {
    pub fn new(grp_id: impl Into<RecordId>, name: &str) -> Self {
        Self {
            grp_id: grp_id.into(),
            grp_name: name.to_string(),
        }
    }
}
