//! Data Access Layer for the `kurban` table plus request validation.

mod crud;
mod memory;
mod validation;
pub use crud::{KurbanStore, PgKurbanStore};
pub use memory::MemoryKurbanStore;
pub use validation::RequestValidator;
