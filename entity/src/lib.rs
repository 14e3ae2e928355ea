pub mod prelude;

pub mod addresses;
pub mod cart_items;
pub mod carts;
pub mod categories;
pub mod colors;
pub mod media;
pub mod order_items;
pub mod orders;
pub mod product_variants;
pub mod products;
pub mod return_requests;
pub mod reviews;
pub mod shipments;
pub mod shop_offices;
pub mod shops;
pub mod size_profiles;
pub mod user_vouchers;
pub mod users;
pub mod voucher_variants;
pub mod vouchers;
