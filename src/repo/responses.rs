//! Append-only repository for feedback responses.

use crate::error::Result;
use crate::model::Response;
use crate::store::KvStore;
use tracing::debug;

/// Store key holding the response collection (JSON array).
pub const RESPONSES_KEY: &str = "responses";

/// Append-only collection of submitted responses.
///
/// Permissive by design: selection validation belongs to the submission
/// layer, the repository stores what it is given.
pub struct ResponseRepository<'a> {
    store: &'a KvStore,
}

impl<'a> ResponseRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// All responses in insertion order.
    ///
    /// A corrupt or absent collection reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails.
    pub fn all(&self) -> Result<Vec<Response>> {
        Ok(self
            .store
            .load(RESPONSES_KEY, Vec::new())?
            .into_inner())
    }

    /// Append a response, rewriting the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read or write fails.
    pub fn add(&self, response: &Response) -> Result<()> {
        let mut responses = self.all()?;
        responses.push(response.clone());
        self.store.save(RESPONSES_KEY, &responses)?;
        debug!(id = %response.id, count = responses.len(), "response stored");
        Ok(())
    }

    /// Remove the entire collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the store delete fails.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(RESPONSES_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn make_response(mood: &str) -> Response {
        let mut selections = BTreeMap::new();
        selections.insert("mood".to_string(), mood.to_string());
        selections.insert("story".to_string(), "Journey".to_string());
        Response::new(selections, None, String::new(), "sess-1".to_string())
    }

    #[test]
    fn test_empty_store_reads_empty() {
        let store = KvStore::open_memory().unwrap();
        let repo = ResponseRepository::new(&store);
        assert!(repo.all().unwrap().is_empty());
    }

    #[test]
    fn test_add_preserves_insertion_order_and_ids() {
        let store = KvStore::open_memory().unwrap();
        let repo = ResponseRepository::new(&store);

        let moods = ["Happy", "Calm", "Tense", "Happy"];
        for mood in moods {
            repo.add(&make_response(mood)).unwrap();
        }

        let all = repo.all().unwrap();
        assert_eq!(all.len(), moods.len());
        for (response, mood) in all.iter().zip(moods) {
            assert_eq!(response.selections["mood"], mood);
        }

        let ids: std::collections::HashSet<_> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), moods.len(), "ids must be unique");
    }

    #[test]
    fn test_clear_then_all_is_empty() {
        let store = KvStore::open_memory().unwrap();
        let repo = ResponseRepository::new(&store);

        repo.add(&make_response("Happy")).unwrap();
        repo.clear().unwrap();
        assert!(repo.all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_collection_reads_empty() {
        let store = KvStore::open_memory().unwrap();
        store.put_raw(RESPONSES_KEY, "[{broken").unwrap();

        let repo = ResponseRepository::new(&store);
        assert!(repo.all().unwrap().is_empty());
    }
}
