pub mod feed;
pub mod field;
pub mod schema;

pub use feed::{Feed, FeedTable};
pub use field::Field;
pub use schema::TableSchema;
