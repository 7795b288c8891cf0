pub mod field_row;
pub mod form;
pub mod select_field;
pub mod submit_button;
pub mod text_field;

// Re-exports for convenience
pub use field_row::*;
pub use form::*;
pub use select_field::*;
pub use submit_button::*;
pub use text_field::*;
