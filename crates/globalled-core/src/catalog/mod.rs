//! In-memory product catalog store.
//!
//! The store owns the authoritative category→products mapping for one
//! session. All mutation goes through its operations; no other component
//! holds a mutable alias to the catalog.
//!
//! # Design
//!
//! - Buckets keep insertion order, for categories and for products alike
//! - Mutations are synchronous structural edits, applied atomically per call
//! - Lookup misses are lenient no-ops surfaced as `None` so callers can
//!   inspect them
//!
//! The interior lock exists only so one store can be shared behind an `Arc`;
//! it is never held across suspension points.

pub mod seed;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::domain::{NewProduct, Product, ProductId, ProductPatch, group_number};

type Buckets = Vec<(String, Vec<Product>)>;

/// Errors from catalog store validation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Create requires a non-blank category to name the target bucket.
    #[error("Product category is required")]
    MissingCategory,
}

/// Holds the category→products mapping and enforces its invariants.
///
/// The bucket a product lives in always equals the product's `category`
/// field; `update` relocates products whose category changes.
pub struct CatalogStore {
    buckets: RwLock<Buckets>,
}

impl CatalogStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: RwLock::new(Vec::new()),
        }
    }

    /// Create a store primed with the initial storefront catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_products(seed::seed_products())
    }

    /// Create a store from an existing product list.
    ///
    /// Buckets are created in first-appearance order of each category.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        let store = Self::new();
        {
            let mut buckets = store.write();
            for product in products {
                let idx = Self::bucket_index_or_create(&mut buckets, &product.category);
                buckets[idx].1.push(product);
            }
        }
        store
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────

    /// Products in one category, or every product when `category` is `None`.
    ///
    /// An absent or empty category yields an empty list. The unfiltered
    /// listing concatenates buckets in their insertion order and preserves
    /// each bucket's internal order.
    #[must_use]
    pub fn list(&self, category: Option<&str>) -> Vec<Product> {
        let buckets = self.read();
        match category {
            Some(name) => buckets
                .iter()
                .find(|(bucket, _)| bucket.as_str() == name)
                .map(|(_, products)| products.clone())
                .unwrap_or_default(),
            None => buckets
                .iter()
                .flat_map(|(_, products)| products.iter().cloned())
                .collect(),
        }
    }

    /// The full bucket layout, cloned.
    ///
    /// Mainly useful to presentation layers that render per-category
    /// sections, and to invariant checks in tests.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, Vec<Product>)> {
        self.read().clone()
    }

    /// Total number of products across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().iter().map(|(_, products)| products.len()).sum()
    }

    /// True when no bucket holds a product.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Next product code for a category: `GLB-<group>-<seq>`.
    ///
    /// The sequence number derives from the category's *live* product count,
    /// zero-padded to two digits. Deleting products can therefore make a
    /// newly generated code collide with an existing one; that is the
    /// documented policy, not an accident.
    #[must_use]
    pub fn generate_code(&self, category: &str) -> String {
        let group = group_number(category);
        let count = self
            .read()
            .iter()
            .find(|(bucket, _)| bucket.as_str() == category)
            .map_or(0, |(_, products)| products.len());
        format!("GLB-{group}-{:02}", count + 1)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Insert a new product, assigning it a fresh id.
    ///
    /// The product is appended to the bucket named by its category, creating
    /// the bucket if absent. A missing or blank category is rejected.
    pub fn create(&self, new: NewProduct) -> Result<Product, CatalogError> {
        if new.category.trim().is_empty() {
            return Err(CatalogError::MissingCategory);
        }

        let product = new.with_id(ProductId::generate());
        let mut buckets = self.write();
        let idx = Self::bucket_index_or_create(&mut buckets, &product.category);
        buckets[idx].1.push(product.clone());

        tracing::debug!(id = %product.id, category = %product.category, "Created product");
        Ok(product)
    }

    /// Shallow-merge a patch into the product with this id.
    ///
    /// Buckets are scanned in order and the first id match wins. When the
    /// patch names a different category, the merged product is removed from
    /// its old bucket and appended at the end of the new one. Returns the
    /// merged product, or `None` when the id is unknown (lenient no-op).
    pub fn update(&self, id: &ProductId, patch: ProductPatch) -> Option<Product> {
        let mut patch = patch;
        // A blank category cannot name a bucket; dropping it keeps the
        // bucket/field invariant intact rather than desynchronizing it.
        if patch.category.as_ref().is_some_and(|c| c.trim().is_empty()) {
            tracing::debug!(id = %id, "Ignoring blank category in patch");
            patch.category = None;
        }
        let target_category = patch.category.clone();

        let mut buckets = self.write();
        let Some((bucket_idx, product_idx)) = Self::locate(&buckets, id) else {
            tracing::debug!(id = %id, "Update target not found");
            return None;
        };

        let mut merged = buckets[bucket_idx].1[product_idx].clone();
        patch.apply(&mut merged);

        let current_category = buckets[bucket_idx].0.clone();
        if let Some(new_category) = target_category.filter(|cat| *cat != current_category) {
            buckets[bucket_idx].1.remove(product_idx);
            let idx = Self::bucket_index_or_create(&mut buckets, &new_category);
            buckets[idx].1.push(merged.clone());
            tracing::debug!(id = %id, from = %current_category, to = %new_category, "Moved product");
        } else {
            buckets[bucket_idx].1[product_idx] = merged.clone();
            tracing::debug!(id = %id, "Updated product");
        }

        Some(merged)
    }

    /// Remove the product with this id from whichever bucket holds it.
    ///
    /// Returns the removed product, or `None` when the id is unknown; a
    /// repeated delete is therefore an inspectable no-op. Media objects in
    /// external storage are not touched.
    pub fn delete(&self, id: &ProductId) -> Option<Product> {
        let mut buckets = self.write();
        let Some((bucket_idx, product_idx)) = Self::locate(&buckets, id) else {
            tracing::debug!(id = %id, "Delete target not found");
            return None;
        };

        let removed = buckets[bucket_idx].1.remove(product_idx);
        tracing::debug!(id = %removed.id, category = %removed.category, "Deleted product");
        Some(removed)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────

    fn read(&self) -> RwLockReadGuard<'_, Buckets> {
        self.buckets.read().expect("catalog lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Buckets> {
        self.buckets.write().expect("catalog lock poisoned")
    }

    /// First (bucket, product) index pair whose product matches `id`.
    fn locate(buckets: &Buckets, id: &ProductId) -> Option<(usize, usize)> {
        buckets
            .iter()
            .enumerate()
            .find_map(|(bucket_idx, (_, products))| {
                products
                    .iter()
                    .position(|product| &product.id == id)
                    .map(|product_idx| (bucket_idx, product_idx))
            })
    }

    fn bucket_index_or_create(buckets: &mut Buckets, category: &str) -> usize {
        match buckets
            .iter()
            .position(|(name, _)| name.as_str() == category)
        {
            Some(idx) => idx,
            None => {
                buckets.push((category.to_string(), Vec::new()));
                buckets.len() - 1
            }
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
