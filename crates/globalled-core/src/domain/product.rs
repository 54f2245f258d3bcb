//! Product domain types.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::media::MediaReference;

/// Opaque identifier for a product, assigned at creation and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    ///
    /// Identifiers must never collide within a session; a random UUID
    /// satisfies that without a shared counter.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One sellable item in the catalog.
///
/// Use [`NewProduct`] for products the store has not assigned an id to yet.
///
/// Invariant: the bucket a product is stored under always equals its
/// `category` field. The store's mutation operations keep the two in sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Product code in the `GLB-<GG>-<SS>` convention.
    pub code: String,
    /// Business category; also names the bucket the product lives in.
    pub category: String,
    /// Unit price, non-negative.
    pub price: f64,
    /// Marketing description.
    pub description: String,
    /// Power draw in watts.
    pub power: Option<u32>,
    /// Operating voltage in volts.
    pub voltage: Option<u32>,
    /// Luminous efficiency in percent.
    pub efficiency: Option<u32>,
    /// Rated lifespan in hours.
    pub lifespan: Option<u32>,
    /// Housing or light color.
    pub color: Option<String>,
    /// Housing material.
    pub material: Option<String>,
    /// Attached media, in display order. May be empty.
    #[serde(default)]
    pub media: Vec<MediaReference>,
}

/// A product to be inserted into the catalog (no id yet).
///
/// The store assigns the id on create and returns the full [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub code: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub power: Option<u32>,
    pub voltage: Option<u32>,
    pub efficiency: Option<u32>,
    pub lifespan: Option<u32>,
    pub color: Option<String>,
    pub material: Option<String>,
    #[serde(default)]
    pub media: Vec<MediaReference>,
}

impl NewProduct {
    /// Create a new product with the required fields.
    ///
    /// Optional specs start unset and the media list starts empty.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            category: category.into(),
            price,
            description: description.into(),
            power: None,
            voltage: None,
            efficiency: None,
            lifespan: None,
            color: None,
            material: None,
            media: Vec::new(),
        }
    }

    /// Attach a product id, producing the full [`Product`].
    #[must_use]
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            code: self.code,
            category: self.category,
            price: self.price,
            description: self.description,
            power: self.power,
            voltage: self.voltage,
            efficiency: self.efficiency,
            lifespan: self.lifespan,
            color: self.color,
            material: self.material,
            media: self.media,
        }
    }
}

/// Partial update for an existing product.
///
/// Shallow merge semantics: fields left as `None` are untouched, `Some`
/// replaces the whole field. For the optional spec fields, use
/// `Some(Some(v))` to set, `Some(None)` to clear, `None` to leave unchanged.
/// A present `media` replaces the entire sequence.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub power: Option<Option<u32>>,
    pub voltage: Option<Option<u32>>,
    pub efficiency: Option<Option<u32>>,
    pub lifespan: Option<Option<u32>>,
    pub color: Option<Option<String>>,
    pub material: Option<Option<String>>,
    pub media: Option<Vec<MediaReference>>,
}

impl ProductPatch {
    /// A patch that only moves the product to another category.
    #[must_use]
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// A patch that only replaces the media sequence.
    #[must_use]
    pub fn media(media: Vec<MediaReference>) -> Self {
        Self {
            media: Some(media),
            ..Self::default()
        }
    }

    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.code.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.power.is_none()
            && self.voltage.is_none()
            && self.efficiency.is_none()
            && self.lifespan.is_none()
            && self.color.is_none()
            && self.material.is_none()
            && self.media.is_none()
    }

    /// Merge this patch into a product.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(code) = self.code {
            product.code = code;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(power) = self.power {
            product.power = power;
        }
        if let Some(voltage) = self.voltage {
            product.voltage = voltage;
        }
        if let Some(efficiency) = self.efficiency {
            product.efficiency = efficiency;
        }
        if let Some(lifespan) = self.lifespan {
            product.lifespan = lifespan;
        }
        if let Some(color) = self.color {
            product.color = color;
        }
        if let Some(material) = self.material {
            product.material = material;
        }
        if let Some(media) = self.media {
            product.media = media;
        }
    }
}
