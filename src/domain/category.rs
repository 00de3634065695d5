//! Category taxonomy entity and DTOs.

use serde::{Deserialize, Serialize};

/// Hierarchical taxonomy node.
///
/// Acyclicity of the tree is a store-level concern; this layer treats
/// parent/subcategory links as opaque data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub parent_category_id: Option<String>,
    #[serde(default)]
    pub subcategories: Vec<Category>,
    pub image_path: Option<String>,
    pub seo_keywords: Option<String>,
    pub is_active: bool,
}

/// Incoming category payload
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: Option<String>,
    pub parent_category_id: Option<String>,
    #[serde(default)]
    pub subcategories: Vec<Category>,
    pub image_path: Option<String>,
    pub seo_keywords: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CategoryDraft {
    /// Materialize the draft into a category with the given id.
    pub fn into_category(self, id: String) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
            parent_category_id: self.parent_category_id,
            subcategories: self.subcategories,
            image_path: self.image_path,
            seo_keywords: self.seo_keywords,
            is_active: self.is_active,
        }
    }
}
