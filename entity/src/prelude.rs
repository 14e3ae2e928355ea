pub use super::addresses::Entity as Addresses;
pub use super::cart_items::Entity as CartItems;
pub use super::carts::Entity as Carts;
pub use super::categories::Entity as Categories;
pub use super::colors::Entity as Colors;
pub use super::media::Entity as Media;
pub use super::order_items::Entity as OrderItems;
pub use super::orders::Entity as Orders;
pub use super::product_variants::Entity as ProductVariants;
pub use super::products::Entity as Products;
pub use super::return_requests::Entity as ReturnRequests;
pub use super::reviews::Entity as Reviews;
pub use super::shipments::Entity as Shipments;
pub use super::shop_offices::Entity as ShopOffices;
pub use super::shops::Entity as Shops;
pub use super::size_profiles::Entity as SizeProfiles;
pub use super::user_vouchers::Entity as UserVouchers;
pub use super::users::Entity as Users;
pub use super::voucher_variants::Entity as VoucherVariants;
pub use super::vouchers::Entity as Vouchers;
