//! Value objects - Immutable objects defined by their attributes

mod money;
mod names;
mod quantity;

pub use money::Money;
pub use names::ProductName;
pub use quantity::QuantityUpdate;
