//! Shipping carrier integration.
//!
//! `package` turns order lines into one parcel per shop; `client` is the
//! typed HTTP wrapper over the carrier's REST API. Neither retries: a
//! carrier failure surfaces as `CarrierError` and maps to a 400 at the
//! boundary.

mod client;
mod package;

use thiserror::Error;

pub use client::{
    CarrierClient, CreateOrderItem, CreateOrderRequest, CreateOrderResponse, District,
    FeeRequest, FeeResponse, Province, TrackResponse, Ward,
};
pub use package::{build_packages, Package, PackageItem};

#[derive(Error, Debug)]
pub enum CarrierError {
    /// Transport-level failure talking to the carrier.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The carrier answered but rejected the request.
    #[error("Carrier rejected request: {code} {message}")]
    Rejected { code: i64, message: String },

    /// The carrier's response envelope carried no payload.
    #[error("Carrier response missing payload for {0}")]
    EmptyPayload(&'static str),
}
