use async_trait::async_trait;
use contactdash::backend::{BackendError, ContactBackend, ContactUpdate};
use contactdash::entities::{Contact, Group, RecordId, User};
use std::sync::Mutex;

/// In-memory contacts service that records the operations it receives.
#[derive(Default)]
pub struct FakeBackend {
    pub contacts: Mutex<Vec<Contact>>,
    pub groups: Vec<Group>,
    pub calls: Mutex<Vec<String>>,
    /// Returned by the next update or delete instead of applying it
    pub next_failure: Mutex<Option<BackendError>>,
}

#[allow(dead_code)]
impl FakeBackend {
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
            groups: vec![Group::new(1, "Family"), Group::new(2, "Work")],
            ..Default::default()
        }
    }

    pub fn fail_next(&self, error: BackendError) {
        *self.next_failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    fn record(&self, operation: &str) {
        self.calls.lock().unwrap().push(operation.to_string());
    }

    fn take_failure(&self) -> Result<(), BackendError> {
        match self.next_failure.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContactBackend for FakeBackend {
    fn describe(&self) -> String {
        "in-memory".to_string()
    }

    async fn fetch_contacts(&self) -> Result<Vec<Contact>, BackendError> {
        self.record("getContacts");
        Ok(self.contacts())
    }

    async fn fetch_groups(&self) -> Result<Vec<Group>, BackendError> {
        self.record("getGroups");
        Ok(self.groups.clone())
    }

    async fn fetch_users(&self) -> Result<Vec<User>, BackendError> {
        self.record("getUsers");
        Ok(Vec::new())
    }

    async fn update_contact(&self, update: ContactUpdate) -> Result<(), BackendError> {
        self.record("updateContact");
        self.take_failure()?;
        let mut contacts = self.contacts.lock().unwrap();
        if let Some(contact) = contacts.iter_mut().find(|c| c.contact_id == update.contact_id) {
            contact.contact_name = update.contact_name;
            contact.contact_phone = update.contact_phone;
        }
        Ok(())
    }

    async fn delete_contact(&self, contact_id: RecordId) -> Result<(), BackendError> {
        self.record("deleteContact");
        self.take_failure()?;
        self.contacts.lock().unwrap().retain(|c| c.contact_id != contact_id);
        Ok(())
    }
}

#[allow(dead_code)]
pub fn sample_contacts() -> Vec<Contact> {
    let mut alice = Contact::new(1, "Alice", "111");
    alice.contact_email = Some("alice@example.com".to_string());
    alice.grp_id = Some(RecordId::Number(2));
    alice.grp_name = Some("Work".to_string());
    vec![alice, Contact::new(2, "Bob", "222"), Contact::new(3, "Carol", "333")]
}
