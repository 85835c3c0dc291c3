pub mod error;
pub mod preprocess;
pub mod record;
pub mod store;
pub mod table;

pub use error::{StoreError, TableError};
pub use record::{Column, HEADER, WordRecord};
pub use store::{AddOutcome, WordStore};
pub use table::WordTable;
