//! Database repository layer.
//!
//! `crud` carries the generic single-table repository every simple resource
//! shares; the remaining modules are the repositories whose operations span
//! tables (joins, transactions) and genuinely differ per entity.

pub mod cart;
pub mod crud;
pub mod media;
pub mod order;
pub mod product;
pub mod user;
pub mod voucher;

#[cfg(test)]
mod test;
