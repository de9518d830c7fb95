//! Contacts service.

use std::sync::Arc;

use crate::client::paginated::PaginatedStream;
use crate::client::query::query_params;
use crate::client::resource::Resource;
use crate::client::{ApiResponse, ClientInner};
use crate::models::{Contact, ContactList};
use crate::Result;

query_params! {
    /// Options for [`ContactsService::list`].
    ListContactsQuery { date_range, order, order_by, paginate }
}

/// Service for contact operations.
pub struct ContactsService {
    inner: Arc<ClientInner>,
}

impl ContactsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List shared contacts.
    pub async fn list(&self, query: Option<&ListContactsQuery>) -> Result<ApiResponse<ContactList>> {
        Resource::new(&self.inner, "contacts")
            .list(query.map(AsRef::as_ref))
            .await
    }

    /// Stream every contact, fetching pages lazily.
    pub fn list_stream(&self, query: Option<&ListContactsQuery>) -> PaginatedStream<Contact> {
        Resource::new(&self.inner, "contacts").stream::<ContactList>(query.map(AsRef::as_ref))
    }
}
