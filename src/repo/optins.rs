//! Append-only repository for email opt-ins.
//!
//! Disjoint from the response collection so response exports stay free
//! of contact details. The caller must have validated the address and
//! obtained explicit consent before `add`.

use crate::error::Result;
use crate::model::OptIn;
use crate::store::KvStore;
use tracing::debug;

/// Store key holding the opt-in collection (JSON array).
pub const OPTINS_KEY: &str = "optins";

/// Append-only collection of consented email records.
pub struct OptInRepository<'a> {
    store: &'a KvStore,
}

impl<'a> OptInRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// All opt-ins in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails.
    pub fn all(&self) -> Result<Vec<OptIn>> {
        Ok(self.store.load(OPTINS_KEY, Vec::new())?.into_inner())
    }

    /// Append an opt-in, rewriting the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read or write fails.
    pub fn add(&self, optin: &OptIn) -> Result<()> {
        let mut optins = self.all()?;
        optins.push(optin.clone());
        self.store.save(OPTINS_KEY, &optins)?;
        debug!(count = optins.len(), "opt-in stored");
        Ok(())
    }

    /// Remove the entire collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the store delete fails.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(OPTINS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optins_are_disjoint_from_responses() {
        let store = KvStore::open_memory().unwrap();
        let optins = OptInRepository::new(&store);

        optins
            .add(&OptIn::new(
                "user@example.com".to_string(),
                "Concert".to_string(),
            ))
            .unwrap();

        // The response key is untouched
        assert_eq!(
            store
                .get_raw(crate::repo::responses::RESPONSES_KEY)
                .unwrap(),
            None
        );
        assert_eq!(optins.all().unwrap().len(), 1);
    }

    #[test]
    fn test_clear() {
        let store = KvStore::open_memory().unwrap();
        let repo = OptInRepository::new(&store);

        repo.add(&OptIn::new("a@b.co".to_string(), "E".to_string()))
            .unwrap();
        repo.clear().unwrap();
        assert!(repo.all().unwrap().is_empty());
    }
}
