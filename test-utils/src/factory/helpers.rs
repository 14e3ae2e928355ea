use sea_orm::{DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Monotonic counter used to keep factory defaults unique within a test
/// process (emails, names, codes).
pub fn next_id() -> u32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Creates the full dependency chain for catalog tests: a user, their
/// shop, a category, a color and one product.
pub async fn create_catalog(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::users::Model,
        entity::shops::Model,
        entity::categories::Model,
        entity::colors::Model,
        entity::products::Model,
    ),
    DbErr,
> {
    let user = super::user::create_user(db).await?;
    let shop = super::shop::create_shop(db, user.id).await?;
    let category = super::category::create_category(db).await?;
    let color = super::color::create_color(db).await?;
    let product = super::product::create_product(db, shop.id, category.id).await?;

    Ok((user, shop, category, color, product))
}
