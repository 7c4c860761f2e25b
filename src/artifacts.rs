// Copyright 2024 Zenlink Contributors

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Actor-keyed artifact documents.
//!
//! Most engine output is keyed by the actor the contract declared
//! (`Given that I am known as 'Alice'` prints under `"Alice"`).

use std::collections::BTreeMap;

use crate::errors::Error;

/// Engine output keyed by the actor that owns it.
pub type Owned<T> = BTreeMap<String, T>;

/// The artifact a named actor owns.
pub fn actor<'a, T>(doc: &'a Owned<T>, name: &str) -> Result<&'a T, Error> {
    doc.get(name)
        .ok_or_else(|| Error::MissingActor(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_lookup_reports_missing_entries() {
        let mut doc: Owned<u8> = Owned::new();
        doc.insert("Alice".to_string(), 7);
        assert_eq!(*actor(&doc, "Alice").unwrap(), 7);
        assert!(matches!(actor(&doc, "Bob"), Err(Error::MissingActor(_))));
    }
}
