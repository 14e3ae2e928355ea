pub use sea_orm_migration::prelude::*;

mod m20250210_000001_create_users_table;
mod m20250210_000002_create_addresses_table;
mod m20250210_000003_create_shops_table;
mod m20250210_000004_create_shop_offices_table;
mod m20250210_000005_create_categories_table;
mod m20250210_000006_create_colors_table;
mod m20250210_000007_create_products_table;
mod m20250210_000008_create_product_variants_table;
mod m20250210_000009_create_reviews_table;
mod m20250210_000010_create_media_table;
mod m20250211_000011_create_carts_table;
mod m20250211_000012_create_cart_items_table;
mod m20250211_000013_create_vouchers_table;
mod m20250211_000014_create_voucher_variants_table;
mod m20250211_000015_create_user_vouchers_table;
mod m20250212_000016_create_orders_table;
mod m20250212_000017_create_order_items_table;
mod m20250212_000018_create_shipments_table;
mod m20250213_000019_create_size_profiles_table;
mod m20250213_000020_create_return_requests_table;
mod m20250415_000021_add_sku_to_product_variants;
mod m20250502_000022_add_note_to_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250210_000001_create_users_table::Migration),
            Box::new(m20250210_000002_create_addresses_table::Migration),
            Box::new(m20250210_000003_create_shops_table::Migration),
            Box::new(m20250210_000004_create_shop_offices_table::Migration),
            Box::new(m20250210_000005_create_categories_table::Migration),
            Box::new(m20250210_000006_create_colors_table::Migration),
            Box::new(m20250210_000007_create_products_table::Migration),
            Box::new(m20250210_000008_create_product_variants_table::Migration),
            Box::new(m20250210_000009_create_reviews_table::Migration),
            Box::new(m20250210_000010_create_media_table::Migration),
            Box::new(m20250211_000011_create_carts_table::Migration),
            Box::new(m20250211_000012_create_cart_items_table::Migration),
            Box::new(m20250211_000013_create_vouchers_table::Migration),
            Box::new(m20250211_000014_create_voucher_variants_table::Migration),
            Box::new(m20250211_000015_create_user_vouchers_table::Migration),
            Box::new(m20250212_000016_create_orders_table::Migration),
            Box::new(m20250212_000017_create_order_items_table::Migration),
            Box::new(m20250212_000018_create_shipments_table::Migration),
            Box::new(m20250213_000019_create_size_profiles_table::Migration),
            Box::new(m20250213_000020_create_return_requests_table::Migration),
            Box::new(m20250415_000021_add_sku_to_product_variants::Migration),
            Box::new(m20250502_000022_add_note_to_orders::Migration),
        ]
    }
}
