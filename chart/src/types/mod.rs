//! Domain types for type charts

mod categories;
mod effectiveness;
mod pokemon_type;

pub use categories::Categories;
pub use effectiveness::Effectiveness;
pub use pokemon_type::{TYPE_CHART, Type};
