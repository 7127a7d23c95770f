//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the series tracker,
//! including API endpoints, business logic, data access and startup infrastructure.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, ID parsing, and DTO conversion
//! - **Service Layer** (`service/`) - Validation, existence checks and the episode cap
//! - **Data Layer** (`data/`) - The `SeriesStore` port and its SeaORM implementation
//! - **Model Layer** (`model/`) - Domain models and operation-specific input types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the injected series store)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and shutdown signal
//! - **Router** (`router`) - Axum route configuration, middleware layers and API documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request, applies CORS and tracing, and routes to a controller
//! 2. **Controller** parses the ID and body, converts DTOs to domain inputs, calls service
//! 3. **Service** validates input and drives the store
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** returns domain model to controller
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
