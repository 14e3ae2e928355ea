use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> CategoryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Category {id}"),
            description: Some("Test category".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub async fn build(self) -> Result<entity::categories::Model, DbErr> {
        let now = Utc::now();
        entity::categories::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_category(db: &DatabaseConnection) -> Result<entity::categories::Model, DbErr> {
    CategoryFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::Categories;

    #[tokio::test]
    async fn creates_unique_categories() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Categories)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_category(db).await?;
        let second = create_category(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.name, second.name);

        Ok(())
    }
}
