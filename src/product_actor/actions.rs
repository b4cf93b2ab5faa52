/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes the given quantity out of stock if enough is available.
    ///
    /// Check and decrement happen inside one actor step, so two concurrent
    /// orders can never both reserve the last kilograms.
    ReserveStock(u32),
    /// Puts previously reserved stock back.
    ReleaseStock(u32),
}

/// Results from ProductActions.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    StockLevel(u32),
    /// Stock was decremented; carries what is left.
    Reserved { remaining: u32 },
    /// Not enough stock; nothing changed.
    Insufficient { available: u32 },
    Released { remaining: u32 },
}
