//! Pagination metadata shared by list responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize lists the API may send as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `meta` object returned by every Aircall list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Number of items in this page
    #[serde(default)]
    pub count: Option<u64>,
    /// Total number of items across all pages
    #[serde(default)]
    pub total: Option<u64>,
    /// Current page number (1-based)
    #[serde(default)]
    pub current_page: Option<u32>,
    /// Page size used for this response
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Absolute URL of the next page, absent or null on the last page
    #[serde(default)]
    pub next_page_link: Option<String>,
    /// Absolute URL of the previous page
    #[serde(default)]
    pub previous_page_link: Option<String>,
}

impl ResponseMeta {
    /// Whether another page follows this one.
    pub fn has_more(&self) -> bool {
        self.next_page_link.as_deref().is_some_and(|link| !link.is_empty())
    }
}

/// Declares a `{ meta, <items> }` list response and its [`ListPage`] impl.
///
/// [`ListPage`]: crate::client::ListPage
macro_rules! list_response {
    ($(#[$doc:meta])* $name:ident { $field:ident: $item:ty }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            /// Pagination metadata
            #[serde(default)]
            pub meta: Option<$crate::models::ResponseMeta>,
            /// Items of this page
            #[serde(default, deserialize_with = "crate::models::meta::null_as_default")]
            pub $field: Vec<$item>,
        }

        impl $crate::client::ListPage for $name {
            type Item = $item;

            fn into_parts(self) -> (Vec<$item>, Option<$crate::models::ResponseMeta>) {
                (self.$field, self.meta)
            }
        }
    };
}

pub(crate) use list_response;
