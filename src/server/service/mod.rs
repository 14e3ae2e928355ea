//! Service layer: business logic between the controllers and the data
//! layer. The generic `crud` service carries every simple resource; the
//! remaining services orchestrate multi-table flows (auth, cart, checkout,
//! product deep-delete, carrier dispatch).

pub mod auth;
pub mod cart;
pub mod crud;
pub mod order;
pub mod product;
pub mod review;
pub mod shipment;
pub mod voucher;
