//! Request extractors.

pub mod body;
pub mod id;
pub use body::KurbanBody;
pub use id::IdParam;
