//! # Customer Repository
//!
//! In-memory customer table. Customers are never updated after creation.

use std::collections::BTreeMap;
use std::sync::RwLock;

use shopkeep_core::{Customer, Entity};
use tracing::debug;

use super::{read, write, CustomerStore};
use crate::error::{StoreError, StoreResult};

/// Repository for customers, keyed by customer id.
#[derive(Debug, Default)]
pub struct MemoryCustomerRepository {
    by_id: RwLock<BTreeMap<i64, Customer>>,
}

impl MemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerStore for MemoryCustomerRepository {
    fn create(&self, customer: Customer) -> StoreResult<()> {
        debug!(customer_id = %customer.id, "Creating customer");

        let mut table = write(&self.by_id);
        if table.contains_key(&customer.id) {
            return Err(StoreError::duplicate(Entity::Customer, customer.id));
        }
        table.insert(customer.id, customer);
        Ok(())
    }

    fn get_by_id(&self, id: i64) -> StoreResult<Customer> {
        read(&self.by_id)
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(Entity::Customer, id))
    }

    fn list(&self) -> Vec<Customer> {
        read(&self.by_id).values().cloned().collect()
    }

    fn count(&self) -> usize {
        read(&self.by_id).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_get_list() {
        let repo = MemoryCustomerRepository::new();
        repo.create(Customer::new(7, "Ada", "ada@example.com")).unwrap();
        repo.create(Customer::new(3, "Grace", "grace@example.com")).unwrap();

        assert_eq!(repo.get_by_id(7).unwrap().name, "Ada");
        let ids: Vec<i64> = repo.list().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 7]);
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn test_duplicate_and_missing() {
        let repo = MemoryCustomerRepository::new();
        repo.create(Customer::new(7, "Ada", "ada@example.com")).unwrap();

        assert_eq!(
            repo.create(Customer::new(7, "Other", "o@example.com")),
            Err(StoreError::duplicate(Entity::Customer, 7))
        );
        assert_eq!(
            repo.get_by_id(8),
            Err(StoreError::not_found(Entity::Customer, 8))
        );
        // the original survives the rejected duplicate
        assert_eq!(repo.get_by_id(7).unwrap().name, "Ada");
    }
}
