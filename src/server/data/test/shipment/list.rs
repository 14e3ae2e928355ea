use super::*;

async fn seed_order(
    db: &sea_orm::DatabaseConnection,
) -> Result<(entity::orders::Model, entity::shops::Model), DbErr> {
    let (user, shop, _category, color, product) = factory::helpers::create_catalog(db).await?;
    factory::shop_office::create_pickup_office(db, shop.id).await?;
    let address = factory::address::create_address(db, user.id).await?;
    let variant = factory::product_variant::create_variant(db, product.id, color.id).await?;

    let cart_repo = crate::server::data::cart::CartRepository::new(db);
    let cart = cart_repo.find_or_create(user.id).await?;
    cart_repo.add_item(cart.id, variant.id, 1).await?;

    let order_repo = OrderRepository::new(db);
    let order = order_repo
        .create_from_cart(crate::server::data::order::CheckoutParams {
            user_id: user.id,
            address_id: address.id,
            note: None,
            currency_unit: "VND".to_string(),
            total_amount: variant.price,
            lines: vec![crate::server::data::order::CheckoutLine {
                variant_id: variant.id,
                quantity: 1,
                unit_price: variant.price,
                currency_unit: "VND".to_string(),
            }],
            cart_id: cart.id,
            user_voucher_id: None,
        })
        .await?;

    Ok((order, shop))
}

/// Tests that shipments persisted for an order come back through the
/// service, ascending by id.
#[tokio::test]
async fn lists_shipments_for_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, shop) = seed_order(db).await?;

    let now = Utc::now();
    let repo = CrudRepository::<entity::prelude::Shipments>::new(db);
    for code in ["GHN001", "GHN002"] {
        repo.insert(entity::shipments::ActiveModel {
            order_id: ActiveValue::Set(order.id),
            shop_id: ActiveValue::Set(shop.id),
            carrier_code: ActiveValue::Set(Some(code.to_string())),
            service_id: ActiveValue::Set(None),
            fee_amount: ActiveValue::Set(25_000),
            currency_unit: ActiveValue::Set("VND".to_string()),
            status: ActiveValue::Set("CREATED".to_string()),
            expected_delivery: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .await?;
    }

    let carrier = offline_carrier();
    let service = ShipmentService::new(db, &carrier);
    let shipments = service.list_for_order(order.id).await.unwrap();

    assert_eq!(shipments.len(), 2);
    assert_eq!(shipments[0].carrier_code.as_deref(), Some("GHN001"));
    assert_eq!(shipments[1].carrier_code.as_deref(), Some("GHN002"));
    assert!(shipments[0].id < shipments[1].id);

    Ok(())
}

/// Tests that an order with no shipments lists empty.
#[tokio::test]
async fn order_without_shipments_lists_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (order, _shop) = seed_order(db).await?;

    let carrier = offline_carrier();
    let service = ShipmentService::new(db, &carrier);
    let shipments = service.list_for_order(order.id).await.unwrap();

    assert!(shipments.is_empty());

    Ok(())
}
