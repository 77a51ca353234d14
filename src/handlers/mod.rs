//! HTTP handlers for kurban CRUD.

pub mod kurban;
pub use kurban::*;
