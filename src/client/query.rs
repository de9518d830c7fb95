//! Query-string parameters shared by every list and search endpoint.
//!
//! [`QueryValues`] is the raw holder; the typed builders generated below
//! (`ListCallsQuery`, `SearchUsersQuery`, ...) only expose the options their
//! endpoint accepts.
//!
//! Values are written verbatim: no percent-encoding is applied, so a value
//! containing `&`, `=` or a space produces a broken query string.

use std::collections::HashMap;

/// Mapping of query option names to string values.
///
/// Serialization order is unspecified. Setting a key twice keeps the last
/// value.
///
/// # Example
///
/// ```
/// use aircall_rs::QueryValues;
///
/// let mut query = QueryValues::new();
/// query.set_pagination(2, 50);
///
/// let encoded = query.encode();
/// assert!(encoded.starts_with('?'));
/// assert!(encoded.contains("page=2"));
/// assert!(encoded.contains("per_page=50"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    values: HashMap<String, String>,
}

impl QueryValues {
    /// Create an empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite one parameter.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Current value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns `true` if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of parameters set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Set the `from` option (start of a date range, unix timestamp).
    pub fn set_date_from(&mut self, value: impl Into<String>) {
        self.set("from", value);
    }

    /// Set the `to` option (end of a date range, unix timestamp).
    pub fn set_date_to(&mut self, value: impl Into<String>) {
        self.set("to", value);
    }

    /// Set the `order` option (`asc` or `desc`).
    pub fn set_order(&mut self, value: impl Into<String>) {
        self.set("order", value);
    }

    /// Set the `order_by` option.
    pub fn set_order_by(&mut self, value: impl Into<String>) {
        self.set("order_by", value);
    }

    /// Set the `page` and `per_page` options.
    pub fn set_pagination(&mut self, page: u32, per_page: u32) {
        self.set("page", page.to_string());
        self.set("per_page", per_page.to_string());
    }

    /// Render the query string: empty if nothing is set, otherwise `?`
    /// followed by `key=value` pairs joined by `&`.
    pub fn encode(&self) -> String {
        if self.values.is_empty() {
            return String::new();
        }

        let pairs: Vec<String> = self
            .values
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();

        format!("?{}", pairs.join("&"))
    }
}

impl AsRef<QueryValues> for QueryValues {
    fn as_ref(&self) -> &QueryValues {
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.set(key, value);
        }
        query
    }
}

/// Declares a typed query builder over [`QueryValues`].
///
/// Each listed capability adds the matching chaining setter; `extra` lines
/// add endpoint-specific options as `name(type) => "key"`.
macro_rules! query_params {
    (@cap date_range) => {
        /// Only return results created after this unix timestamp.
        pub fn date_from(mut self, value: impl Into<String>) -> Self {
            self.values.set_date_from(value);
            self
        }

        /// Only return results created before this unix timestamp.
        pub fn date_to(mut self, value: impl Into<String>) -> Self {
            self.values.set_date_to(value);
            self
        }
    };
    (@cap order) => {
        /// Sort direction, `asc` or `desc`.
        pub fn order(mut self, value: impl Into<String>) -> Self {
            self.values.set_order(value);
            self
        }
    };
    (@cap order_by) => {
        /// Field to sort on.
        pub fn order_by(mut self, value: impl Into<String>) -> Self {
            self.values.set_order_by(value);
            self
        }
    };
    (@cap paginate) => {
        /// Page number (1-based) and page size.
        pub fn paginate(mut self, page: u32, per_page: u32) -> Self {
            self.values.set_pagination(page, per_page);
            self
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident { $($cap:ident),* $(,)? }
        $(extra { $($(#[$fmeta:meta])* $field:ident($ty:ty) => $key:literal),* $(,)? })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            values: $crate::client::QueryValues,
        }

        impl $name {
            /// Create an empty query.
            pub fn new() -> Self {
                Self::default()
            }

            /// Set an arbitrary option.
            pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
                self.values.set(key, value);
                self
            }

            $($crate::client::query::query_params!(@cap $cap);)*

            $($(
                $(#[$fmeta])*
                pub fn $field(mut self, value: $ty) -> Self {
                    self.values.set($key, value.to_string());
                    self
                }
            )*)?
        }

        impl AsRef<$crate::client::QueryValues> for $name {
            fn as_ref(&self) -> &$crate::client::QueryValues {
                &self.values
            }
        }
    };
}

pub(crate) use query_params;
