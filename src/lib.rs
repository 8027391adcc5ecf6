//! Password generation library
//!
//! This library generates randomized passwords under user-selected
//! character-class constraints, classifies their strength from an entropy
//! estimate, and keeps a bounded history of recent results. Every enabled
//! category is guaranteed at least one character in the output, duplicate
//! characters can be excluded, and all randomness comes from the operating
//! system CSPRNG - there is no fallback to a non-cryptographic generator.
//!
//! # Features
//!
//! - `async` (default): Enables cancellation of the generation loop and an
//!   async channel-delivering wrapper
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GENERATOR_SETTINGS_PATH`: Custom path for the file-backed settings
//!   store (default: `./pwd-generator-settings.json`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_generator::{OsRandom, Session, FileStore};
//! use secrecy::ExposeSecret;
//!
//! // Restore persisted settings (missing settings fall back to defaults)
//! let store = FileStore::from_env();
//! let mut session = Session::restore(&store);
//! let mut rng = OsRandom;
//!
//! #[cfg(feature = "async")]
//! let generated = session.generate(&mut rng, true, None).unwrap();
//!
//! #[cfg(not(feature = "async"))]
//! let generated = session.generate(&mut rng, true).unwrap();
//!
//! println!("Password: {}", generated.password().expose_secret());
//! println!("Strength: {} ({:.1} bits)", generated.tier(), generated.entropy_bits());
//! ```

// Internal modules
mod builder;
mod category;
mod config;
mod error;
mod history;
mod pool;
mod random;
mod session;
mod store;
mod strength;

// Public API
pub use builder::{MIN_SECURE_LENGTH, build_password};
pub use category::Category;
pub use config::GenerationConfig;
pub use error::GenerateError;
pub use history::{HISTORY_CAPACITY, HistoryBuffer};
pub use pool::CharacterPool;
pub use random::{OsRandom, RandomSource};
pub use session::{GeneratedPassword, Session, generate_password};
pub use store::{
    FileStore, MemoryStore, SETTINGS_PATH_ENV, SettingsStore, StoreError, default_settings_path,
};
pub use strength::{StrengthReport, StrengthTier, classify};

#[cfg(feature = "async")]
pub use session::generate_password_tx;
