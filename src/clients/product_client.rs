use tracing::{debug, instrument};
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::actor_framework::ResourceClient;

/// Client for the product catalog.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.create(product).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: String, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    #[instrument(skip(self))]
    pub async fn products_by_farmer(&self, farmer_id: String) -> Result<Vec<Product>, ProductError> {
        let products = self.list_products().await?;
        Ok(products.into_iter().filter(|p| p.farmer_id == farmer_id).collect())
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: String) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::CheckStock).await? {
            (ProductActionResult::StockLevel(level), _) => Ok(level),
            (other, _) => Err(ProductError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    /// Takes `quantity` out of stock and returns the product as it is afterwards.
    ///
    /// # Errors
    /// `NotFound` for an unknown product, `InsufficientStock` when the request
    /// exceeds what is left (stock is then untouched).
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: String, quantity: u32) -> Result<Product, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::ReserveStock(quantity)).await? {
            (ProductActionResult::Reserved { .. }, product) => Ok(product),
            (ProductActionResult::Insufficient { available }, _) => Err(ProductError::InsufficientStock {
                requested: quantity,
                available,
            }),
            (other, _) => Err(ProductError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    /// Returns `quantity` to stock, undoing a reservation.
    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: String, quantity: u32) -> Result<Product, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::ReleaseStock(quantity)).await? {
            (ProductActionResult::Released { .. }, product) => Ok(product),
            (other, _) => Err(ProductError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }
}
