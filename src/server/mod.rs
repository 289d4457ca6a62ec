//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations,
//! with WebSocket channels for live notification and chat delivery.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations on SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication and authorization guards
//! - **Gateway** (`gateway/`) - WebSocket session registry, live push, and chat relay
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, registry, chat hub, token service)
//! - **Startup** (`startup`) - Initialization of the database and migrations
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Cron jobs for automated tasks (event reminders)
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the bearer credential to a user and checks permissions
//! 3. **Controller** validates the payload, converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations and emission
//! 5. **Data** queries the database and returns entity models
//! 6. **Gateway** pushes live payloads to connected recipients, when present

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod gateway;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
