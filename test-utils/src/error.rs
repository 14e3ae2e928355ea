use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    /// Failure to set up or talk to the in-memory test database.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
