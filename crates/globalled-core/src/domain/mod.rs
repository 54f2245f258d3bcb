//! Domain types for the product catalog.
//!
//! These types represent products and their attached media, independent of
//! any presentation or storage concerns.

pub mod category;
pub mod media;
pub mod product;

pub use category::{CATEGORIES, group_number};
pub use media::{MediaId, MediaKind, MediaReference};
pub use product::{NewProduct, Product, ProductId, ProductPatch};
