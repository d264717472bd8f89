use super::{lenient_optional_string, lenient_string, non_empty, RecordId};
use serde::{Deserialize, Serialize};

/// A contact row as returned by `getContacts`.
///
/// `grp_name` and `usr_fullname` are denormalized by the backend for read views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub contact_id: RecordId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact_phone: String,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub contact_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub contact_image: Option<String>,
    #[serde(default)]
    pub grp_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub grp_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub usr_fullname: Option<String>,
}

impl Contact {
    pub fn new(contact_id: impl Into<RecordId>, name: &str, phone: &str) -> Self {
        Self {
            contact_id: contact_id.into(),
            contact_name: name.to_string(),
            contact_phone: phone.to_string(),
            contact_email: None,
            contact_address: None,
            contact_image: None,
            grp_id: None,
            grp_name: None,
            usr_fullname: None,
        }
    }

    /// Full URL of the contact image under `base_url`, if the contact has one.
    pub fn image_url(&self, base_url: &str) -> Option<String> {
        non_empty(&self.contact_image)
            .map(|image| format!("{}/{}", base_url.trim_end_matches('/'), image.trim_start_matches('/')))
    }
}

/// Editable fields of the edit form, in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DraftField {
    #[default]
    Name,
    Phone,
    Email,
    Address,
    Group,
    Image,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::Name,
        DraftField::Phone,
        DraftField::Email,
        DraftField::Address,
        DraftField::Group,
        DraftField::Image,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Phone => "Phone",
            DraftField::Email => "Email",
            DraftField::Address => "Address",
            DraftField::Group => "Group",
            DraftField::Image => "Image URL",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The group field is a selector, every other field is free text.
    pub fn is_text(self) -> bool {
        !matches!(self, DraftField::Group)
    }
}

/// Transient copy of a contact's editable fields while the edit form is open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// `grp_id` as text; empty means no group selected.
    pub group: String,
    pub image: String,
}

impl ContactDraft {
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: contact.contact_name.clone(),
            phone: contact.contact_phone.clone(),
            email: contact.contact_email.clone().unwrap_or_default(),
            address: contact.contact_address.clone().unwrap_or_default(),
            group: contact.grp_id.as_ref().map(ToString::to_string).unwrap_or_default(),
            image: contact.contact_image.clone().unwrap_or_default(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Phone => &self.phone,
            DraftField::Email => &self.email,
            DraftField::Address => &self.address,
            DraftField::Group => &self.group,
            DraftField::Image => &self.image,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Phone => &mut self.phone,
            DraftField::Email => &mut self.email,
            DraftField::Address => &mut self.address,
            DraftField::Group => &mut self.group,
            DraftField::Image => &mut self.image,
        }
    }

    /// Required fields that are blank, in form order.
    pub fn missing_required(&self) -> Vec<DraftField> {
        [DraftField::Name, DraftField::Phone]
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }
}
