use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductPatch};
use super::actions::{ProductAction, ProductActionResult};

impl Entity for Product {
    type Id = String;
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Product listing.
    ///
    /// # Errors
    /// Rejects a negative or non-finite price.
    fn from_create(id: String, payload: ProductCreate) -> Result<Self, String> {
        if !payload.price.is_finite() || payload.price < 0.0 {
            return Err(format!("Invalid price: {}", payload.price));
        }
        Ok(Self {
            id,
            farmer_id: payload.farmer_id,
            name: payload.name,
            category: payload.category,
            quantity: payload.quantity,
            price: payload.price,
        })
    }

    /// Updates the product's price and/or stock quantity.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(price) = patch.price {
            if !price.is_finite() || price < 0.0 {
                return Err(format!("Invalid price: {}", price));
            }
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    /// Handles product-specific actions.
    ///
    /// An oversized reservation is reported as
    /// [`ProductActionResult::Insufficient`] rather than an error so the caller
    /// gets the available amount back.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::StockLevel(self.quantity)),
            ProductAction::ReserveStock(amount) => {
                if self.quantity >= amount {
                    self.quantity -= amount;
                    Ok(ProductActionResult::Reserved { remaining: self.quantity })
                } else {
                    Ok(ProductActionResult::Insufficient { available: self.quantity })
                }
            }
            ProductAction::ReleaseStock(amount) => {
                self.quantity = self.quantity.saturating_add(amount);
                Ok(ProductActionResult::Released { remaining: self.quantity })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheat(quantity: u32) -> Product {
        Product::from_create(
            "prod-3".into(),
            ProductCreate::new("user-1", "Whole Wheat Grain", "Grains", quantity, 0.80),
        )
        .unwrap()
    }

    #[test]
    fn test_reserve_decrements_stock() {
        let mut product = wheat(10_000);
        let result = product.handle_action(ProductAction::ReserveStock(200)).unwrap();
        assert_eq!(result, ProductActionResult::Reserved { remaining: 9_800 });
        assert_eq!(product.quantity, 9_800);
    }

    #[test]
    fn test_reserve_exact_stock_empties_listing() {
        let mut product = wheat(50);
        product.handle_action(ProductAction::ReserveStock(50)).unwrap();
        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn test_oversized_reservation_leaves_stock() {
        let mut product = wheat(10);
        let result = product.handle_action(ProductAction::ReserveStock(11)).unwrap();
        assert_eq!(result, ProductActionResult::Insufficient { available: 10 });
        assert_eq!(product.quantity, 10);
    }

    #[test]
    fn test_release_returns_reserved_stock() {
        let mut product = wheat(10_000);
        product.handle_action(ProductAction::ReserveStock(200)).unwrap();
        let result = product.handle_action(ProductAction::ReleaseStock(200)).unwrap();
        assert_eq!(result, ProductActionResult::Released { remaining: 10_000 });
        assert_eq!(product.quantity, 10_000);
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = Product::from_create("p".into(), ProductCreate::new("f", "Milk", "Dairy", 1, -1.0));
        assert!(err.is_err());
    }
}
