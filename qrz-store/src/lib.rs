// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # QRZ Store
//!
//! Persisted user state for the QRZ lookup client.
//!
//! This crate provides:
//!
//! - **CredentialStore**: callsign, encrypted password and session key in
//!   `qrz.json` inside the config directory
//! - **PasswordCipher**: AES-256-GCM with a key derived from the callsign
//! - **Persistence**: atomic, owner-only JSON file I/O
//!
//! ## Usage
//!
//! ```ignore
//! use qrz_store::CredentialStore;
//!
//! let mut store = CredentialStore::open_default().await?;
//! store.set_callsign("W1AW");
//! store.set_password("secret")?;
//! store.save().await?;
//! ```

pub mod credentials;
pub mod crypto;
pub mod error;
pub mod persistence;

pub use credentials::{CredentialStore, StoredCredentials};
pub use crypto::PasswordCipher;
pub use error::StoreError;
pub use persistence::{
    CONFIG_FILE_NAME, default_config_dir, default_config_path, load_json, save_json,
};
