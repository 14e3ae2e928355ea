//! Server backend: API endpoints, business logic, data access and
//! infrastructure.
//!
//! # Architecture
//!
//! Layered, with strict direction of dependencies:
//!
//! - **Controller** (`controller/`) - HTTP handlers, access control, DTO conversion
//! - **Service** (`service/`) - business logic; the generic CRUD engine lives here
//! - **Data** (`data/`) - repositories over SeaORM; generic single-table repo + transactional flows
//! - **Model** (`model/`) - params types and pagination
//! - **Error** (`error/`) - application error types and HTTP mapping
//! - **Middleware** (`middleware/`) - the bearer-token role guard
//! - **Storage** (`storage/`) - object store seam and media URL rewriting
//! - **Carrier** (`carrier/`) - shipping carrier client and package builder
//!
//! # Request flow
//!
//! router → guard → controller → service → repository → database →
//! (optional media URL rewrite) → response.

pub mod carrier;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
