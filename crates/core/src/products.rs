//! Product list stored under `content.products`.
//!
//! Stored documents carry products in more than one shape: a single product
//! object gated by `isOpenProduct`, a bare array of entries, or an object
//! wrapping an array. All of them normalize into [`ProductList`] when read;
//! anything unrecognizable becomes an empty, closed list instead of an error.
//! Editor payloads go through [`deserialize_submitted`] instead, which accepts
//! the same shapes but rejects anything it cannot parse.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LENGTH: u64 = 200;

/// Maximum length of a product description.
pub const MAX_PRODUCT_DESCRIPTION_LENGTH: u64 = 2000;

/// Maximum length of a product or image URL.
pub const MAX_PRODUCT_URL_LENGTH: u64 = 2048;

/// Keys that mark an object as a single legacy product descriptor.
const PRODUCT_FIELD_KEYS: &[&str] = &[
    "productName",
    "productDescription",
    "productURL",
    "productUrl",
    "productStage",
    "productPrice",
    "productImage",
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One product entry shown as a card on the public page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[validate(length(max = MAX_PRODUCT_NAME_LENGTH))]
    pub product_name: Option<String>,
    #[validate(length(max = MAX_PRODUCT_DESCRIPTION_LENGTH))]
    pub product_description: Option<String>,
    #[serde(rename = "productURL", alias = "productUrl")]
    #[validate(length(max = MAX_PRODUCT_URL_LENGTH))]
    pub product_url: Option<String>,
    pub product_stage: Option<String>,
    #[validate(range(min = 0.0))]
    pub product_price: Option<f64>,
    #[validate(length(max = MAX_PRODUCT_URL_LENGTH))]
    pub product_image: Option<String>,
}

impl Product {
    fn is_blank(&self) -> bool {
        self.product_name.is_none()
            && self.product_description.is_none()
            && self.product_url.is_none()
            && self.product_stage.is_none()
            && self.product_price.is_none()
            && self.product_image.is_none()
    }
}

/// Ordered product entries plus the list-level visibility flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductList {
    pub is_open_product: bool,
    #[validate(nested)]
    pub items: Vec<Product>,
}

impl ProductList {
    /// An open list holding `items`.
    pub fn open(items: Vec<Product>) -> Self {
        Self {
            is_open_product: true,
            items,
        }
    }

    /// Whether the product block should be rendered at all.
    pub fn is_visible(&self) -> bool {
        self.is_open_product && !self.items.is_empty()
    }

    /// Normalize any stored or submitted `products` value.
    ///
    /// - array: every entry is a product, the list is open
    /// - object with `items` or `products` array: that list, gated by `isOpenProduct`
    /// - object with product fields: a single-item list, gated by `isOpenProduct`
    /// - anything else: empty and closed
    ///
    /// `isOpenProduct` defaults to `false` on objects. Entries that are not
    /// objects, fail to parse, or carry no product fields are dropped.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(entries) => Self::open(parse_entries(entries)),
            Value::Object(map) => {
                let is_open_product = map
                    .get("isOpenProduct")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);

                let nested = map
                    .get("items")
                    .and_then(Value::as_array)
                    .or_else(|| map.get("products").and_then(Value::as_array));

                let items = match nested {
                    Some(entries) => parse_entries(entries),
                    None if PRODUCT_FIELD_KEYS.iter().any(|k| map.contains_key(*k)) => {
                        parse_entry(value).into_iter().collect()
                    }
                    None => Vec::new(),
                };

                Self {
                    is_open_product,
                    items,
                }
            }
            _ => Self::default(),
        }
    }
}

impl<'de> Deserialize<'de> for ProductList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Strict reader for editor payloads, used on `ContentPatch::products`.
///
/// Accepts the shapes the editor may submit and nothing else:
///
/// - array of product objects: an open list
/// - `{ isOpenProduct?, items | products: [...] }`: that list
/// - a single product object with an optional `isOpenProduct`
/// - `null`: no change
///
/// Unlike [`ProductList::from_value`], entries are never dropped; any value
/// that does not parse is a deserialization error.
pub fn deserialize_submitted<'de, D>(deserializer: D) -> Result<Option<ProductList>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    parse_submitted(value).map_err(serde::de::Error::custom)
}

fn parse_submitted(value: Value) -> Result<Option<ProductList>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Array(entries) => Ok(Some(ProductList::open(parse_strict(entries)?))),
        Value::Object(mut map) => {
            let is_open_product = match map.remove("isOpenProduct") {
                None | Some(Value::Null) => false,
                Some(Value::Bool(flag)) => flag,
                Some(other) => return Err(format!("isOpenProduct must be a boolean, got {other}")),
            };

            let nested = match map.remove("items") {
                Some(items) => Some(items),
                None => map.remove("products"),
            };

            let items = match nested {
                Some(Value::Array(entries)) => parse_strict(entries)?,
                Some(other) => return Err(format!("product items must be an array, got {other}")),
                None if map.is_empty() => Vec::new(),
                None => vec![parse_product(Value::Object(map))?],
            };

            Ok(Some(ProductList {
                is_open_product,
                items,
            }))
        }
        other => Err(format!(
            "products must be an array or an object, got {other}"
        )),
    }
}

fn parse_strict(entries: Vec<Value>) -> Result<Vec<Product>, String> {
    entries.into_iter().map(parse_product).collect()
}

fn parse_product(value: Value) -> Result<Product, String> {
    if !value.is_object() {
        return Err(format!("product entries must be objects, got {value}"));
    }
    serde_json::from_value(value).map_err(|e| format!("invalid product: {e}"))
}

fn parse_entries(entries: &[Value]) -> Vec<Product> {
    entries.iter().filter_map(parse_entry).collect()
}

fn parse_entry(value: &Value) -> Option<Product> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value::<Product>(value.clone())
        .ok()
        .filter(|p| !p.is_blank())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
