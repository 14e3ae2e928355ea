use super::*;

async fn seed_categories(db: &sea_orm::DatabaseConnection, count: usize) -> Result<(), DbErr> {
    for _ in 0..count {
        factory::category::create_category(db).await?;
    }
    Ok(())
}

/// Tests that a page never exceeds `per_page` records.
#[tokio::test]
async fn returns_at_most_per_page_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Categories)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_categories(db, 7).await?;

    let page = category_service(db).list(1, 3).await.unwrap();

    assert_eq!(page.items.len(), 3);
    assert_eq!(page.total, 7);
    assert_eq!(page.total_pages, 3);

    Ok(())
}

/// Tests that concatenating all pages yields every record exactly once,
/// ordered by ascending id.
#[tokio::test]
async fn pages_concatenate_to_full_set_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Categories)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_categories(db, 7).await?;

    let service = category_service(db);
    let mut seen = Vec::new();
    for page_no in 1..=3 {
        let page = service.list(page_no, 3).await.unwrap();
        seen.extend(page.items.into_iter().map(|c| c.id));
    }

    assert_eq!(seen.len(), 7);
    let mut sorted = seen.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(seen, sorted);

    Ok(())
}

/// Tests that an empty store yields an empty page, not an error.
#[tokio::test]
async fn empty_store_returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Categories)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = category_service(db).list(1, 10).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);

    Ok(())
}

/// Tests that out-of-range paging parameters are clamped instead of
/// trusted: page 0 reads as page 1, per_page 0 as 1.
#[tokio::test]
async fn clamps_out_of_range_parameters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Categories)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_categories(db, 3).await?;

    let service = category_service(db);

    let page = service.list(0, 10).await.unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.items.len(), 3);

    let page = service.list(1, 0).await.unwrap();
    assert_eq!(page.per_page, 1);
    assert_eq!(page.items.len(), 1);

    Ok(())
}
