/// A farmer's listing. `quantity` is the stock still available, in kg.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub farmer_id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    /// Price per kg.
    pub price: f64,
}

/// Payload for listing a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub farmer_id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

impl ProductCreate {
    pub fn new(
        farmer_id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        price: f64,
    ) -> Self {
        Self {
            farmer_id: farmer_id.into(),
            name: name.into(),
            category: category.into(),
            quantity,
            price,
        }
    }
}
