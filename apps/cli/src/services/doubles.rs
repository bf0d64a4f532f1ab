//! Store doubles that stand in for a second caller touching the same
//! records in the middle of an operation.

use std::sync::{Arc, Mutex};

use shopkeep_core::{Cart, Product};
use shopkeep_store::{CartStore, MemoryCartRepository, MemoryProductRepository, ProductStore, StoreResult};

/// Cart table where another writer saves `pending` just before the next
/// conditional write.
pub(crate) struct InterleavedCarts {
    inner: MemoryCartRepository,
    pending: Mutex<Option<Cart>>,
}

impl InterleavedCarts {
    pub(crate) fn racing_with(cart: Cart) -> Self {
        InterleavedCarts {
            inner: MemoryCartRepository::new(),
            pending: Mutex::new(Some(cart)),
        }
    }
}

impl CartStore for InterleavedCarts {
    fn get(&self, customer_id: i64) -> Cart {
        self.inner.get(customer_id)
    }

    fn save(&self, cart: &Cart) {
        self.inner.save(cart)
    }

    fn save_if(&self, expected: &Cart, new: &Cart) -> Result<(), Cart> {
        if let Some(theirs) = self.pending.lock().unwrap().take() {
            self.inner.save(&theirs);
        }
        self.inner.save_if(expected, new)
    }

    fn clear(&self, customer_id: i64) {
        self.inner.clear(customer_id)
    }

    fn count(&self) -> usize {
        self.inner.count()
    }
}

/// A cart table reachable both from the `Store` and from a test hook.
#[derive(Clone, Default)]
pub(crate) struct SharedCarts(Arc<MemoryCartRepository>);

impl CartStore for SharedCarts {
    fn get(&self, customer_id: i64) -> Cart {
        self.0.get(customer_id)
    }

    fn save(&self, cart: &Cart) {
        self.0.save(cart)
    }

    fn save_if(&self, expected: &Cart, new: &Cart) -> Result<(), Cart> {
        self.0.save_if(expected, new)
    }

    fn clear(&self, customer_id: i64) {
        self.0.clear(customer_id)
    }

    fn count(&self) -> usize {
        self.0.count()
    }
}

/// Product table that runs `before_stock_write` ahead of every
/// conditional stock write.
pub(crate) struct HookedProducts<F> {
    pub(crate) inner: MemoryProductRepository,
    pub(crate) before_stock_write: F,
}

impl<F> ProductStore for HookedProducts<F>
where
    F: Fn(&MemoryProductRepository) + Send + Sync,
{
    fn create(&self, product: Product) -> StoreResult<()> {
        self.inner.create(product)
    }

    fn get_by_id(&self, id: i64) -> StoreResult<Product> {
        self.inner.get_by_id(id)
    }

    fn update(&self, product: Product) -> StoreResult<()> {
        self.inner.update(product)
    }

    fn update_stock(&self, id: i64, expected: i64, new_stock: i64) -> StoreResult<Product> {
        (self.before_stock_write)(&self.inner);
        self.inner.update_stock(id, expected, new_stock)
    }

    fn list(&self) -> Vec<Product> {
        self.inner.list()
    }

    fn count(&self) -> usize {
        self.inner.count()
    }
}
