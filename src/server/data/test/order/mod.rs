use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::order::CheckoutDto,
    server::{
        data::{
            cart::CartRepository,
            order::{CheckoutLine, CheckoutParams, OrderRepository},
            voucher::VoucherRepository,
        },
        error::AppError,
        service::order::OrderService,
    },
};

mod cancel;
mod checkout;

/// Seeds a user with an address and one variant (price 50_000, stock 10)
/// sitting in their cart with the given quantity.
async fn seed_cart(
    db: &sea_orm::DatabaseConnection,
    quantity: i32,
) -> Result<
    (
        entity::users::Model,
        entity::addresses::Model,
        entity::product_variants::Model,
        entity::carts::Model,
    ),
    DbErr,
> {
    let (user, _shop, _category, color, product) = factory::helpers::create_catalog(db).await?;
    let address = factory::address::create_address(db, user.id).await?;
    let variant = factory::product_variant::ProductVariantFactory::new(db, product.id, color.id)
        .price(50_000)
        .stock_quantity(10)
        .build()
        .await?;

    let cart_repo = CartRepository::new(db);
    let cart = cart_repo.find_or_create(user.id).await?;
    cart_repo.add_item(cart.id, variant.id, quantity).await?;

    Ok((user, address, variant, cart))
}
