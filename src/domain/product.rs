//! Product domain entity and catalog DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Stock status of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    Available,
    OutOfStock,
    AvailableForPreOrder,
    Backordered,
    AvailableByOrder,
    Discontinued,
}

/// Product domain entity.
///
/// `owner_user_id` is assigned from the creating caller's identity and
/// never changes through the update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner_user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub images: Vec<String>,
    pub category_id: Option<String>,
    pub measurements_description: Option<String>,
    pub material_description: Option<String>,
    pub features: Option<String>,
    #[serde(default)]
    pub color_ids: Vec<String>,
    pub stock_status: StockStatus,
}

/// Incoming product payload.
///
/// Deliberately carries no owner field; ownership is server-assigned
/// and cannot be spoofed by the client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(custom(function = "validate_positive_price"))]
    pub price: Decimal,
    #[serde(default)]
    pub images: Vec<String>,
    pub category_id: Option<String>,
    pub measurements_description: Option<String>,
    pub material_description: Option<String>,
    pub features: Option<String>,
    #[serde(default)]
    pub color_ids: Vec<String>,
    pub stock_status: StockStatus,
}

impl ProductDraft {
    /// Materialize the draft into a product with the given id and owner.
    pub fn into_product(self, id: String, owner_user_id: String) -> Product {
        Product {
            id,
            owner_user_id,
            title: self.title,
            description: self.description,
            price: self.price,
            images: self.images,
            category_id: self.category_id,
            measurements_description: self.measurements_description,
            material_description: self.material_description,
            features: self.features,
            color_ids: self.color_ids,
            stock_status: self.stock_status,
        }
    }
}

fn validate_positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price > Decimal::ZERO {
        return Ok(());
    }
    let mut error = ValidationError::new("positive_price");
    error.message = Some("Price should be more than 0".into());
    Err(error)
}
