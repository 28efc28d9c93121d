pub mod extract;

pub use extract::{ValidForm, ValidQuery};
