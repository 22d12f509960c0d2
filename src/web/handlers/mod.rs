pub mod index_handlers;
pub mod resume_handlers;

pub use index_handlers::*;
pub use resume_handlers::*;
