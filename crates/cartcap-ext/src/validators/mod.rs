//! Built-in cart validators.

pub mod add_to_cart;
pub mod update_cart;

pub use add_to_cart::MaxQuantityAddValidator;
pub use update_cart::MaxQuantityUpdateValidator;
