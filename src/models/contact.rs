//! Contact models.

use serde::{Deserialize, Serialize};

use super::meta::{list_response, null_as_default};

/// A shared or personal contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Company name
    #[serde(default)]
    pub company_name: Option<String>,
    /// Free-form notes
    #[serde(default)]
    pub information: Option<String>,
    /// Whether the contact is visible company-wide
    #[serde(default)]
    pub is_shared: Option<bool>,
    /// API URL of this resource
    #[serde(default)]
    pub direct_link: Option<String>,
    /// Unix timestamp
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Unix timestamp
    #[serde(default)]
    pub updated_at: Option<i64>,
    /// Phone numbers
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_numbers: Vec<ContactInfo>,
    /// Emails
    #[serde(default, deserialize_with = "null_as_default")]
    pub emails: Vec<ContactInfo>,
}

/// A labelled phone number or email of a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Unique identifier
    #[serde(default)]
    pub id: Option<i64>,
    /// Label
    #[serde(default)]
    pub label: Option<String>,
    /// Value
    #[serde(default)]
    pub value: Option<String>,
}

list_response! {
    /// A page of contacts.
    ContactList { contacts: Contact }
}
