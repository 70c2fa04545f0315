use serde::{Deserialize, Serialize};

use crate::lenient;

/// An item from the equipment catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "lenient::option")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient::option")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient::option")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub brand: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub stock_quantity: Option<i64>,
}

impl Product {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Unnamed product")
    }

    /// Price formatted for display, e.g. `$129.99`.
    pub fn formatted_price(&self) -> Option<String> {
        self.price.map(|p| format!("${:.2}", p))
    }

    pub fn in_stock(&self) -> bool {
        self.stock_quantity.is_some_and(|q| q > 0)
    }
}
