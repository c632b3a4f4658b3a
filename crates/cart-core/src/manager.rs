//! Cart state machine.
//!
//! [`CartManager`] is the single owner of the cart. It validates every
//! mutation against the cached stock snapshot and writes the cart through to
//! the durable store once per operation.
//!
//! Each operation is an error boundary: it always returns an [`Outcome`] and
//! never an error. Mutations are computed as a new [`Cart`] value, persisted,
//! and only then installed, so a failed write leaves memory and store at the
//! same last-good state.

use std::num::NonZeroU32;

use cart_store::KvStore;
use tracing::{debug, info, warn};

use crate::cart::{Cart, CartEntry};
use crate::catalog::{Catalog, CatalogSource};
use crate::config::CartConfig;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::notify::{Locale, Notice, Notifier};
use crate::persist::CartPersistence;
use crate::policy::{self, Rejection};
use crate::view::CartBadge;

/// Arguments for [`CartManager::update_product_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    /// Requested quantity. Non-positive values are ignored.
    pub amount: i64,
}

impl UpdateProductAmount {
    pub fn new(product_id: ProductId, amount: i64) -> Self {
        Self { product_id, amount }
    }
}

/// Why an operation left the cart alone without telling the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Product is stocked but missing from the catalog.
    ProductNotFound(ProductId),
    /// Product is not in the cart.
    NotInCart(ProductId),
    /// Requested quantity was zero or negative.
    NonPositiveAmount(i64),
}

/// What an operation did. Exactly one of these happens per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Cart changed and the new cart was persisted.
    Accepted,
    /// Stock policy refused the change; the shopper was notified.
    Rejected(Rejection),
    /// Nothing to do; no notification.
    Ignored(IgnoreReason),
    /// Something broke (usually the store); the shopper was notified and the
    /// cart kept its previous value.
    Failed(Notice),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Owner of the cart, its catalog cache, and its durable copy.
///
/// Consumers that only display the cart borrow it through [`cart`](Self::cart)
/// or [`badge`](Self::badge); mutation goes through the three operations.
pub struct CartManager<S, N> {
    cart: Cart,
    catalog: Catalog,
    persistence: CartPersistence<S>,
    notifier: N,
    locale: Locale,
}

impl<S: KvStore, N: Notifier> CartManager<S, N> {
    /// Create a manager, restoring the cart persisted in `store`.
    ///
    /// The catalog starts pending; call [`load_catalog`](Self::load_catalog)
    /// to fill it.
    pub fn new(store: S, notifier: N, config: CartConfig) -> Self {
        let persistence = CartPersistence::new(store, config.storage_key);
        let cart = persistence.load_or_default();

        Self {
            cart,
            catalog: Catalog::new(),
            persistence,
            notifier,
            locale: config.locale,
        }
    }

    /// Fetch products and stock from `source` and cache them.
    ///
    /// Failed fetches are logged and leave their slot failed; they are never
    /// surfaced to the shopper.
    pub async fn load_catalog<C: CatalogSource + ?Sized>(&mut self, source: &C) {
        self.catalog = Catalog::load(source).await;
        info!(
            products = self.catalog.products().loaded().map_or(0, Vec::len),
            stock = self.catalog.stock().loaded().map_or(0, Vec::len),
            ready = self.catalog.is_ready(),
            "catalog loaded"
        );
    }

    /// Replace the cached catalog.
    ///
    /// For hosts that fetch products and stock themselves instead of going
    /// through [`load_catalog`](Self::load_catalog), or that already hold a
    /// catalog (a fixture, a cache from a previous run).
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// Mutable access to the catalog cache.
    ///
    /// Hosts whose two fetches finish at different times install each result
    /// as it arrives with [`Catalog::set_products`] and [`Catalog::set_stock`].
    /// While the stock slot is pending or failed, add and update are
    /// rejected. A stocked product missing from the products slot is ignored.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Header badge for the current cart.
    pub fn badge(&self) -> CartBadge {
        CartBadge::from_cart(&self.cart)
    }

    pub fn persistence(&self) -> &CartPersistence<S> {
        &self.persistence
    }

    /// The underlying durable store.
    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    /// Add one unit of a product.
    pub fn add_product(&mut self, product_id: ProductId) -> Outcome {
        match self.try_add(product_id) {
            Ok(outcome) => outcome,
            Err(e) => self.fail(Notice::AddProductFailed, product_id, e),
        }
    }

    /// Remove a product entirely. Removing an absent product is a no-op.
    pub fn remove_product(&mut self, product_id: ProductId) -> Outcome {
        match self.try_remove(product_id) {
            Ok(outcome) => outcome,
            Err(e) => self.fail(Notice::RemoveProductFailed, product_id, e),
        }
    }

    /// Set the quantity of a product already in the cart.
    pub fn update_product_amount(&mut self, request: UpdateProductAmount) -> Outcome {
        let UpdateProductAmount { product_id, amount } = request;
        if amount <= 0 {
            debug!(product_id = %product_id, amount, "ignoring non-positive amount");
            return Outcome::Ignored(IgnoreReason::NonPositiveAmount(amount));
        }

        match self.try_update(product_id, amount.unsigned_abs()) {
            Ok(outcome) => outcome,
            Err(e) => self.fail(Notice::UpdateAmountFailed, product_id, e),
        }
    }

    fn try_add(&mut self, id: ProductId) -> Result<Outcome, CartError> {
        let current = self.cart.get(id).map_or(0, CartEntry::amount);
        let amount = match policy::next_add_amount(&self.catalog, id, current) {
            Ok(amount) => amount,
            Err(rejection) => return self.reject(rejection),
        };

        let entry = match self.cart.get(id) {
            Some(existing) => existing.with_amount(amount),
            None => match self.catalog.product(id) {
                Some(product) => CartEntry::from_product(product),
                None => return self.ignore(IgnoreReason::ProductNotFound(id)),
            },
        };

        let next = self.cart.with_entry(entry);
        self.commit(next)?;
        debug!(product_id = %id, amount = amount.get(), "product added");
        Ok(Outcome::Accepted)
    }

    fn try_remove(&mut self, id: ProductId) -> Result<Outcome, CartError> {
        if !self.cart.contains(id) {
            return self.ignore(IgnoreReason::NotInCart(id));
        }

        let next = self.cart.without(id);
        self.commit(next)?;
        debug!(product_id = %id, "product removed");
        Ok(Outcome::Accepted)
    }

    fn try_update(&mut self, id: ProductId, requested: u64) -> Result<Outcome, CartError> {
        let amount: NonZeroU32 = match policy::check_update(&self.catalog, id, requested) {
            Ok(amount) => amount,
            Err(rejection) => return self.reject(rejection),
        };

        let Some(existing) = self.cart.get(id) else {
            return self.ignore(IgnoreReason::NotInCart(id));
        };

        let next = self.cart.with_entry(existing.with_amount(amount));
        self.commit(next)?;
        debug!(product_id = %id, amount = amount.get(), "product amount updated");
        Ok(Outcome::Accepted)
    }

    /// Persist `next`, then install it.
    fn commit(&mut self, next: Cart) -> Result<(), CartError> {
        self.persistence.save(&next)?;
        self.cart = next;
        Ok(())
    }

    /// Persist the current cart unchanged.
    fn write_through(&mut self) -> Result<(), CartError> {
        self.persistence.save(&self.cart)
    }

    fn reject(&mut self, rejection: Rejection) -> Result<Outcome, CartError> {
        self.write_through()?;
        if rejection.is_not_ready() {
            warn!(product_id = %rejection.product_id(), %rejection, "stock not ready");
        } else {
            warn!(product_id = %rejection.product_id(), %rejection, "out of stock");
        }
        self.notify(Notice::OutOfStock);
        Ok(Outcome::Rejected(rejection))
    }

    fn ignore(&mut self, reason: IgnoreReason) -> Result<Outcome, CartError> {
        self.write_through()?;
        debug!(?reason, "operation ignored");
        Ok(Outcome::Ignored(reason))
    }

    fn fail(&self, notice: Notice, product_id: ProductId, error: CartError) -> Outcome {
        warn!(product_id = %product_id, error = %error, ?notice, "cart operation failed");
        self.notify(notice);
        Outcome::Failed(notice)
    }

    fn notify(&self, notice: Notice) {
        self.notifier.notify(notice.message(self.locale));
    }
}
