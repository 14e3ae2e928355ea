use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ColorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    hex_code: Option<String>,
}

impl<'a> ColorFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Color {id}"),
            hex_code: Some("#000000".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::colors::Model, DbErr> {
        entity::colors::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            hex_code: ActiveValue::Set(self.hex_code),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_color(db: &DatabaseConnection) -> Result<entity::colors::Model, DbErr> {
    ColorFactory::new(db).build().await
}
