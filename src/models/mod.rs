//! Domain models with validation at the boundary
//!
//! Request input is validated when constructing these types. Invalid
//! input returns ValidationError, not panic.

pub mod pagination;
pub mod todo;
pub mod validation;

pub use pagination::{Page, PageParams};
pub use todo::{Field, Todo, TodoCreate, TodoUpdate};
pub use validation::ValidationError;
