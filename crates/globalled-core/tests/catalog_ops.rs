//! Integration tests for the catalog store.
//!
//! These drive the public API through realistic admin workflows: creating
//! products with generated codes, moving them between categories, deleting,
//! and checking the bucket/category invariant along the way.
//!
//! # What is tested
//!
//! - Code generation from the live per-category count
//! - The bucket ≡ `category` field invariant across mixed operations
//! - Idempotent delete and lenient miss handling
//! - Category moves landing at the end of the target bucket
//! - Unfiltered listing as an exact union of all buckets
//! - Seed catalog integrity

use std::collections::HashSet;

use globalled_core::{CatalogStore, NewProduct, Product, ProductId, ProductPatch};

// ── Helpers ────────────────────────────────────────────────────────

fn lamp(name: &str, category: &str) -> NewProduct {
    NewProduct::new(name, "GLB-00-00", category, 19.99, "Test aydınlatma ürünü")
}

/// Every product must live in the bucket named by its own category, every
/// id must be unique, and the unfiltered listing must equal the union of
/// all buckets.
fn assert_catalog_consistent(store: &CatalogStore) {
    let snapshot = store.snapshot();
    for (bucket, products) in &snapshot {
        for product in products {
            assert_eq!(
                &product.category, bucket,
                "product {} lives in bucket {bucket} but claims category {}",
                product.id, product.category
            );
        }
    }

    let all = store.list(None);
    let bucket_total: usize = snapshot.iter().map(|(_, products)| products.len()).sum();
    assert_eq!(all.len(), bucket_total);

    let ids: HashSet<&str> = all.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), all.len(), "duplicate ids in unfiltered listing");
}

// ── Code generation ────────────────────────────────────────────────

#[test]
fn generated_codes_derive_from_live_count() {
    let store = CatalogStore::seeded();

    // Tavan Lambası holds 3 seed products, group 01
    assert_eq!(store.generate_code("Tavan Lambası"), "GLB-01-04");
    // Avize holds 2, group 04
    assert_eq!(store.generate_code("Avize"), "GLB-04-03");

    store.create(lamp("Yeni Avize", "Avize")).unwrap();
    assert_eq!(store.generate_code("Avize"), "GLB-04-04");
}

#[test]
fn generated_codes_are_zero_padded() {
    let store = CatalogStore::new();
    assert_eq!(store.generate_code("Sensörler"), "GLB-06-01");

    for i in 0..9 {
        store.create(lamp(&format!("S{i}"), "Sensörler")).unwrap();
    }
    assert_eq!(store.generate_code("Sensörler"), "GLB-06-10");
}

#[test]
fn code_collision_after_delete_is_the_documented_policy() {
    let store = CatalogStore::new();

    let mut first = lamp("A", "Avize");
    first.code = store.generate_code("Avize");
    let first = store.create(first).unwrap();

    let mut second = lamp("B", "Avize");
    second.code = store.generate_code("Avize");
    let second = store.create(second).unwrap();
    assert_eq!(second.code, "GLB-04-02");

    // The live count shrinks, so the next code repeats B's
    store.delete(&first.id).unwrap();
    assert_eq!(store.generate_code("Avize"), second.code);
}

// ── Mutations and the bucket invariant ─────────────────────────────

#[test]
fn update_moves_product_to_end_of_target_bucket() {
    let store = CatalogStore::seeded();
    let moving = store.list(Some("Tavan Lambası"))[0].clone();

    let merged = store
        .update(&moving.id, ProductPatch::category("LED'ler"))
        .expect("seed product exists");

    assert_eq!(merged.category, "LED'ler");
    assert!(
        store
            .list(Some("Tavan Lambası"))
            .iter()
            .all(|p| p.id != moving.id)
    );

    let target = store.list(Some("LED'ler"));
    let last = target.last().expect("target bucket is non-empty");
    assert_eq!(last.id, moving.id);
    // Merged fields travelled with the product
    assert_eq!(last.name, moving.name);
    assert_catalog_consistent(&store);
}

#[test]
fn update_merges_fields_without_moving_when_category_is_unchanged() {
    let store = CatalogStore::seeded();
    let original = store.list(Some("Avize"))[0].clone();

    let patch = ProductPatch {
        price: Some(399.99),
        lifespan: Some(None),
        ..ProductPatch::default()
    };
    let merged = store.update(&original.id, patch).expect("seed product exists");

    assert!((merged.price - 399.99).abs() < f64::EPSILON);
    assert_eq!(merged.lifespan, None);
    assert_eq!(merged.name, original.name);
    // Still first in its bucket
    assert_eq!(store.list(Some("Avize"))[0].id, original.id);
    assert_catalog_consistent(&store);
}

#[test]
fn delete_twice_is_idempotent() {
    let store = CatalogStore::seeded();
    let doomed = store.list(Some("Sensörler"))[1].clone();

    assert!(store.delete(&doomed.id).is_some());
    assert_eq!(store.len(), 19);

    assert!(store.delete(&doomed.id).is_none());
    assert_eq!(store.len(), 19);
    assert_catalog_consistent(&store);
}

#[test]
fn update_on_unknown_id_changes_nothing() {
    let store = CatalogStore::seeded();
    let before = store.list(None).len();

    let result = store.update(&ProductId::new("ghost"), ProductPatch::category("Avize"));

    assert!(result.is_none());
    assert_eq!(store.list(None).len(), before);
    assert_catalog_consistent(&store);
}

#[test]
fn create_rejects_blank_category() {
    let store = CatalogStore::new();
    assert!(store.create(lamp("X", "")).is_err());
    assert!(store.create(lamp("X", "  \t")).is_err());
    assert!(store.is_empty());
}

// ── Listing union property ─────────────────────────────────────────

#[test]
fn unfiltered_listing_stays_an_exact_union_through_mixed_operations() {
    let store = CatalogStore::seeded();
    assert_catalog_consistent(&store);

    // A scripted mix of every mutation kind, checking the union property
    // after each step
    let created_a = store.create(lamp("Atölye Lambası", "Avize")).unwrap();
    assert_catalog_consistent(&store);

    let created_b = store.create(lamp("Bahçe Spotu", "Güneş Enerjili Lamba")).unwrap();
    assert_catalog_consistent(&store);

    store
        .update(&created_a.id, ProductPatch::category("LED'ler"))
        .unwrap();
    assert_catalog_consistent(&store);

    let seed_move = store.list(Some("Sensörler"))[0].clone();
    store
        .update(&seed_move.id, ProductPatch::category("Avize"))
        .unwrap();
    assert_catalog_consistent(&store);

    store.delete(&created_b.id).unwrap();
    assert_catalog_consistent(&store);

    store
        .update(
            &created_a.id,
            ProductPatch {
                name: Some("Atölye LED Lambası".to_string()),
                price: Some(24.5),
                ..ProductPatch::default()
            },
        )
        .unwrap();
    assert_catalog_consistent(&store);

    store.delete(&seed_move.id).unwrap();
    store.delete(&created_a.id).unwrap();
    assert_catalog_consistent(&store);
    assert_eq!(store.len(), 19);
}

// ── Seed catalog ───────────────────────────────────────────────────

#[test]
fn seed_catalog_is_complete_and_consistent() {
    let store = CatalogStore::seeded();
    assert_eq!(store.len(), 20);
    assert_eq!(store.snapshot().len(), 9);
    assert_catalog_consistent(&store);

    let all = store.list(None);
    let media_total: usize = all.iter().map(|p| p.media.len()).sum();
    assert_eq!(media_total, 23);

    // The two seed video entries belong to the smart ceiling light and the
    // LED strip
    let with_video: Vec<&Product> = all
        .iter()
        .filter(|p| {
            p.media
                .iter()
                .any(|m| m.kind == globalled_core::MediaKind::Video)
        })
        .collect();
    assert_eq!(with_video.len(), 2);
    assert_eq!(with_video[0].name, "Akıllı WiFi Tavan Lambası");
    assert_eq!(with_video[1].name, "LED Şerit Işık 5m");
}

#[test]
fn empty_store_lists_nothing_for_any_category() {
    let store = CatalogStore::new();
    assert!(store.list(None).is_empty());
    assert!(store.list(Some("Avize")).is_empty());
    assert!(store.is_empty());
}
