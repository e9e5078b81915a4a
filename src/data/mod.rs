pub mod synthetic;
pub mod table;

pub use synthetic::separable_blobs;
pub use table::{parse_table, Dataset};
