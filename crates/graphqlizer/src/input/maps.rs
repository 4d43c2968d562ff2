//! Key-to-list maps: labels, HTTP headers and query parameters.
//!
//! All three are `BTreeMap` newtypes, so iteration (and therefore the
//! rendered key order) is sorted and identical on every render.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

macro_rules! string_list_map {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub BTreeMap<String, Vec<String>>);

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Adds `key` with `values`, replacing any previous entry.
            pub fn with<K, I, V>(mut self, key: K, values: I) -> Self
            where
                K: Into<String>,
                I: IntoIterator<Item = V>,
                V: Into<String>,
            {
                self.0
                    .insert(key.into(), values.into_iter().map(Into::into).collect());
                self
            }
        }

        impl Deref for $name {
            type Target = BTreeMap<String, Vec<String>>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<BTreeMap<String, Vec<String>>> for $name {
            fn from(map: BTreeMap<String, Vec<String>>) -> Self {
                Self(map)
            }
        }

        impl<K, V> FromIterator<(K, Vec<V>)> for $name
        where
            K: Into<String>,
            V: Into<String>,
        {
            fn from_iter<T: IntoIterator<Item = (K, Vec<V>)>>(iter: T) -> Self {
                Self(
                    iter.into_iter()
                        .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
                        .collect(),
                )
            }
        }
    };
}

string_list_map! {
    /// Labels attached to applications and runtimes.
    Labels
}

string_list_map! {
    /// Extra HTTP headers sent with an authenticated request.
    HttpHeaders
}

string_list_map! {
    /// Extra query parameters sent with an authenticated request.
    QueryParams
}
