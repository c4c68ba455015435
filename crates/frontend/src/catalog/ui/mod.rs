mod card;
mod page;

pub use card::ProductCard;
pub use page::CatalogPage;
