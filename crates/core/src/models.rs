//! Domain records read from and written to the document store.
//!
//! Collections are schema-less, so these types are the contract enforced when documents are
//! read back. [`FoodOrder`] keeps the raw document it was decoded from: the report returns
//! every stored field untouched and only adds a computed total.

use crate::constants::{ITEMS_FIELD, PLACED_AT_FIELD, TOTAL_PRICE_FIELD, USERNAME_FIELD};
use crate::error::OrderError;
use crate::json::{document_to_json, number_to_json};
use chrono::{DateTime, Utc};
use mongodb::bson::{self, Bson, Document};
use serde::{Deserialize, Serialize};

/// A purchasable menu item from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub price: f64,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Decodes a catalog document, ignoring any fields beyond `name` and `price`.
    ///
    /// Returns `None` if `name` is not a string. Integer and floating point prices are both
    /// accepted; a missing or non-numeric price is read as 0, so the entry still takes its
    /// place in the price index.
    pub fn from_document(document: &Document) -> Option<Self> {
        let name = document.get_str("name").ok()?;
        let price = document.get("price").and_then(bson_number).unwrap_or(0.0);
        Some(Self::new(name, price))
    }
}

/// A single `{name, quantity}` entry of an order.
///
/// `name` is optional: an entry without a usable name simply never matches the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: Option<String>,
    pub quantity: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: Some(name.into()),
            quantity,
        }
    }

    fn from_bson(index: usize, value: &Bson) -> Result<Self, OrderError> {
        let Bson::Document(entry) = value else {
            return Err(OrderError::LineItemNotObject { index });
        };

        let name = entry.get_str("name").ok().map(str::to_owned);
        let quantity = entry
            .get("quantity")
            .and_then(bson_number)
            .ok_or(OrderError::MissingQuantity { index })?;

        Ok(Self { name, quantity })
    }
}

/// A placed food order together with its decoded line items.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodOrder {
    document: Document,
    items: Vec<LineItem>,
}

impl FoodOrder {
    /// Decodes a stored `food_order` document.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderError`] if `items` is missing, is not an array, or contains an entry
    /// without a numeric quantity.
    pub fn from_document(document: Document) -> Result<Self, OrderError> {
        let items = decode_items(document.get(ITEMS_FIELD))?;
        Ok(Self { document, items })
    }

    /// Builds a new order document ready to be inserted.
    ///
    /// The submitted line items are stored verbatim once they have been checked, so any extra
    /// fields the client sends along (images, descriptions) are kept.
    pub fn place(
        username: Option<String>,
        items: Option<Bson>,
        placed_at: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        let decoded = decode_items(items.as_ref())?;

        let mut document = Document::new();
        if let Some(username) = username {
            document.insert(USERNAME_FIELD, username);
        }
        if let Some(items) = items {
            document.insert(ITEMS_FIELD, items);
        }
        document.insert(
            PLACED_AT_FIELD,
            bson::DateTime::from_millis(placed_at.timestamp_millis()),
        );

        Ok(Self {
            document,
            items: decoded,
        })
    }

    pub fn username(&self) -> Option<&str> {
        self.document.get_str(USERNAME_FIELD).ok()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

fn decode_items(items: Option<&Bson>) -> Result<Vec<LineItem>, OrderError> {
    match items {
        None | Some(Bson::Null) => Err(OrderError::MissingItems),
        Some(Bson::Array(values)) => values
            .iter()
            .enumerate()
            .map(|(index, value)| LineItem::from_bson(index, value))
            .collect(),
        Some(_) => Err(OrderError::ItemsNotArray),
    }
}

/// An order with its computed `totalPrice`. Never written back to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedOrder {
    order: Document,
    total_price: f64,
}

impl EnrichedOrder {
    pub(crate) fn new(order: Document, total_price: f64) -> Self {
        Self { order, total_price }
    }

    pub fn order(&self) -> &Document {
        &self.order
    }

    pub fn username(&self) -> Option<&str> {
        self.order.get_str(USERNAME_FIELD).ok()
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Renders the stored fields plus `totalPrice` as JSON.
    ///
    /// A stored `totalPrice` field, if any, is replaced by the computed one.
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = document_to_json(&self.order);
        if let serde_json::Value::Object(fields) = &mut value {
            fields.insert(TOTAL_PRICE_FIELD.into(), number_to_json(self.total_price));
        }
        value
    }
}

pub(crate) fn bson_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Double(v) => Some(*v),
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        _ => None,
    }
}
