//! Preference projection
//!
//! Projects the preferences collection to the flat key-to-value mapping
//! consumed by the public render path. Every field other than `key` and
//! `value` is discarded.

use std::collections::HashMap;

use crate::models::Preference;

/// Build the key-to-value mapping over a preference sequence
///
/// Pure and total. Order-independent except for duplicate keys, where
/// the later record in sequence order overwrites the earlier one. That
/// is the opposite end from `find_preference`, which returns the first
/// occurrence; a duplicated key therefore shows seeded-then-updated
/// skew, which is documented behavior rather than something this layer
/// corrects.
pub fn preferences_map(prefs: &[Preference]) -> HashMap<String, String> {
    let mut map = HashMap::with_capacity(prefs.len());
    for pref in prefs {
        map.insert(pref.key.clone(), pref.value.clone());
    }
    map
}
