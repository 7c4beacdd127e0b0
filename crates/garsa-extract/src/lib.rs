pub mod format;
pub mod parse;
pub mod records;

pub use format::{format_price, format_price_per_kg, price_per_kg, PerKgStyle};
pub use parse::{
    extract_embedded_price, parse_price, parse_weight, split_name_weight, EmbeddedPrice,
};
pub use records::{build_records, extract_product, extract_products, BuilderConfig};
