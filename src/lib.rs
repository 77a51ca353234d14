//! Kurban API: REST CRUD over a single PostgreSQL table of sacrificial-animal records.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig, ServerConfig, StoreKind};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Kurban, KurbanForm, NewKurban};
pub use response::{Envelope, EnvelopeType};
pub use routes::{app, common_routes, kurban_routes};
pub use service::{KurbanStore, MemoryKurbanStore, PgKurbanStore, RequestValidator};
pub use state::AppState;
pub use store::{bootstrap, connect_options, ensure_database_exists, ensure_kurban_table};
