use tracing::{info, instrument};
use crate::domain::{OrderStatus, ProductCreate, Role, UserCreate};
use super::MarketSystem;

/// The demo catalog. Users get ids `user-1`..`user-6` and products
/// `prod-1`..`prod-5` in this order.
const USERS: [(&str, Role); 6] = [
    ("John Appleseed", Role::Farmer),
    ("Global Produce Inc.", Role::Wholesaler),
    ("FreshMart", Role::Retailer),
    ("Swift Logistics", Role::Logistics),
    ("Maria Garcia", Role::Farmer),
    ("Corner Grocer", Role::Retailer),
];

/// (farmer index into USERS, name, category, kg in stock, price per kg)
const PRODUCTS: [(usize, &str, &str, u32, f64); 5] = [
    (0, "Organic Tomatoes", "Vegetables", 500, 2.50),
    (4, "Fresh Strawberries", "Fruits", 300, 4.00),
    (0, "Whole Wheat Grain", "Grains", 10_000, 0.80),
    (4, "Farm-Fresh Milk", "Dairy", 150, 1.50),
    (0, "Crisp Lettuce Heads", "Vegetables", 400, 1.80),
];

/// (product index into PRODUCTS, buyer index into USERS, kg, status to reach)
const ORDERS: [(usize, usize, u32, OrderStatus); 3] = [
    (0, 2, 100, OrderStatus::Shipped),
    (2, 1, 500, OrderStatus::Delivered),
    (1, 2, 50, OrderStatus::Pending),
];

impl MarketSystem {
    /// Registers the demo users and products. Meant for a freshly started system.
    #[instrument(skip(self))]
    pub async fn seed_demo_data(&self) -> Result<(), String> {
        let mut user_ids = Vec::with_capacity(USERS.len());
        for (name, role) in USERS {
            let user = self
                .user_client
                .create_user(UserCreate::new(name, role))
                .await
                .map_err(|e| e.to_string())?;
            user_ids.push(user.id);
        }

        for (farmer, name, category, quantity, price) in PRODUCTS {
            let payload = ProductCreate::new(user_ids[farmer].clone(), name, category, quantity, price);
            self.product_client
                .create_product(payload)
                .await
                .map_err(|e| e.to_string())?;
        }

        info!(users = USERS.len(), products = PRODUCTS.len(), "Demo data seeded");
        Ok(())
    }

    /// Places the demo orders on top of the demo catalog and walks each one
    /// through the lifecycle to its demo status.
    ///
    /// Stock is reserved like for any order, and the orders keep their
    /// scheduled transitions: the Pending one is auto-accepted and the Shipped
    /// one is delivered once its timers fire.
    #[instrument(skip(self))]
    pub async fn seed_demo_orders(&self) -> Result<(), String> {
        let users = self.user_client.list_users().await.map_err(|e| e.to_string())?;
        let products = self.product_client.list_products().await.map_err(|e| e.to_string())?;
        let carrier = users
            .iter()
            .find(|u| u.role == Role::Logistics)
            .map(|u| u.id.clone())
            .ok_or("No logistics company registered")?;

        for (product, buyer, quantity, status) in ORDERS {
            let (Some(product), Some(buyer)) = (products.get(product), users.get(buyer)) else {
                return Err("Demo catalog missing, seed it first".to_string());
            };
            let order = self
                .order_client
                .create_order(product.id.clone(), buyer.id.clone(), quantity)
                .await
                .map_err(|e| e.to_string())?;
            if status == OrderStatus::Pending {
                continue;
            }

            self.order_client
                .accept_order(order.id.clone())
                .await
                .map_err(|e| e.to_string())?;
            let shipment = self
                .shipment_client
                .create_shipment(order.id.clone(), carrier.clone())
                .await
                .map_err(|e| e.to_string())?;
            if status == OrderStatus::Delivered {
                self.shipment_client
                    .dispatch(shipment.id.clone())
                    .await
                    .map_err(|e| e.to_string())?;
                self.shipment_client
                    .deliver(shipment.id)
                    .await
                    .map_err(|e| e.to_string())?;
            }
        }

        info!(orders = ORDERS.len(), "Demo orders seeded");
        Ok(())
    }
}
