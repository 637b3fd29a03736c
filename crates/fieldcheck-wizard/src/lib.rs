//! # fieldcheck-wizard - Multi-Step Form Flows
//!
//! This crate drives multi-step forms over fieldcheck schemas: each
//! step validates on submit, partial progress persists between steps,
//! and abandoned sessions can be resumed or purged later.
//!
//! ## Features
//!
//! - **Multiple Storage Backends**: Memory, Filesystem
//! - **Partial Progress**: invalid submissions keep their values so
//!   users never retype a step
//! - **Final Re-Validation**: completing a session re-runs every step
//!   schema over the accumulated record
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck::{Record, Rule, Schema};
//! use fieldcheck_wizard::{Wizard, WizardConfig, WizardEngine};
//!
//! #[tokio::main]
//! async fn main() {
//!     let wizard = Wizard::new("signup")
//!         .step("account", Schema::new().field("email", [Rule::required(), Rule::email()]))
//!         .step("profile", Schema::new().field("full_name", [Rule::required()]));
//!
//!     let engine = WizardEngine::new(wizard, WizardConfig::default())
//!         .await
//!         .unwrap();
//!
//!     let progress = engine.start().await.unwrap();
//!     let outcome = engine
//!         .submit_step(
//!             &progress.session,
//!             "account",
//!             Record::new().set("email", "ada@example.com"),
//!         )
//!         .await
//!         .unwrap();
//!     assert!(outcome.is_valid());
//! }
//! ```

pub mod config;
pub mod engine;
pub mod progress;
pub mod storage;

pub use config::{FileStoreConfig, StoreBackend, WizardConfig, WizardTomlConfig};
pub use engine::{Step, StepOutcome, Wizard, WizardEngine};
pub use progress::Progress;
pub use storage::filesystem::FileStore;
pub use storage::memory::MemoryStore;
pub use storage::ProgressStore;
