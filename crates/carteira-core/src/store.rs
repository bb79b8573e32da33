//! Owned cache of the last-loaded transaction list
//!
//! The store is replaced wholesale after every successful load; it is never
//! diffed. Reads between loads always see a complete snapshot that came from
//! the server.

use super::models::Transaction;

/// Token handed out when a load begins
///
/// Only the token from the most recent `begin_load` may install a result, so
/// a response from an overlapped earlier load cannot overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// The in-memory transaction list
///
/// Initialized empty, replaced only through `begin_load` + `install`,
/// read-only everywhere else.
#[derive(Debug, Default)]
pub struct TransactionStore {
    items: Vec<Transaction>,
    generation: u64,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load and invalidate any load already in flight
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        LoadToken(self.generation)
    }

    /// Replace the cached list wholesale
    ///
    /// Returns false without touching the list when the token is stale.
    pub fn install(&mut self, token: LoadToken, items: Vec<Transaction>) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.items = items;
        true
    }

    /// Look up a cached transaction by its normalized id
    pub fn find(&self, id: i64) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    /// All cached transactions in server response order
    pub fn all(&self) -> &[Transaction] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(id: i64, descricao: &str) -> Transaction {
        Transaction {
            id,
            descricao: descricao.to_string(),
            valor: 10.0,
            data: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        }
    }

    #[test]
    fn test_store_starts_empty() {
        let store = TransactionStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.find(1).is_none());
    }

    #[test]
    fn test_install_replaces_wholesale() {
        let mut store = TransactionStore::new();

        let token = store.begin_load();
        assert!(store.install(token, vec![tx(1, "Salary"), tx(2, "Rent")]));
        assert_eq!(store.len(), 2);

        let token = store.begin_load();
        assert!(store.install(token, vec![tx(3, "Coffee")]));
        assert_eq!(store.len(), 1);
        assert!(store.find(1).is_none());
        assert_eq!(store.find(3).unwrap().descricao, "Coffee");
    }

    #[test]
    fn test_find_by_id() {
        let mut store = TransactionStore::new();
        let token = store.begin_load();
        store.install(token, vec![tx(3, "Groceries"), tx(7, "Salary")]);

        assert_eq!(store.find(7).unwrap().descricao, "Salary");
        assert!(store.find(99).is_none());
    }

    #[test]
    fn test_stale_install_is_discarded() {
        let mut store = TransactionStore::new();

        let stale = store.begin_load();
        let current = store.begin_load();

        assert!(store.install(current, vec![tx(2, "Fresh")]));
        assert!(!store.install(stale, vec![tx(1, "Stale")]));

        assert_eq!(store.len(), 1);
        assert_eq!(store.find(2).unwrap().descricao, "Fresh");
    }

    #[test]
    fn test_order_follows_install_order() {
        let mut store = TransactionStore::new();
        let token = store.begin_load();
        store.install(token, vec![tx(5, "b"), tx(1, "a"), tx(9, "c")]);

        let ids: Vec<i64> = store.all().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 1, 9]);
    }
}
