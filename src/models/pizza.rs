use serde::Deserialize;

/// A single menu entry. `name` is unique within a menu and acts as its key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    pub name: String,
    pub ingredients: String,
    pub price: f64,
    pub photo_name: String,
    #[serde(default)]
    pub sold_out: bool,
}

impl Pizza {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        price: f64,
        photo_name: impl Into<String>,
        sold_out: bool,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            price,
            photo_name: photo_name.into(),
            sold_out,
        }
    }
}
