//! Products Domain
//!
//! An in-memory product catalogue with declarative, translated validation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, JSON codec
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + locked in-memory store)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, validation schema
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_products::{
//!     handlers, product_validator, InMemoryProductRepository, Locale, MatchPolicy,
//!     ProductService,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = product_validator(MatchPolicy::ExactlyOnce, Locale::En)?;
//! let service = ProductService::new(InMemoryProductRepository::seeded(), validator);
//!
//! // Create Axum router, typically nested under /products
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{product_validator, Product, ProductInput, ProductValidator};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use store::ProductStore;
pub use validation::{Locale, MatchPolicy, RegistrationError, ValidationErrors};
