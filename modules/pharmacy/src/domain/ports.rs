use crate::contract::model::Product;

/// Boundary contract of the cart accumulator. The catalog hands a full
/// product value over on user action; what the cart does with it is its
/// own business (fire-and-forget from this side).
pub trait CartSink: Send + Sync {
    fn add_to_cart(&self, product: Product);
}
