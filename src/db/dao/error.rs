use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: Uuid },
    /// A show pointed at an artist or venue that does not exist.
    #[error("{entity} {id} does not exist")]
    MissingReference { entity: &'static str, id: Uuid },
    #[error("Invalid pagination: page={page} page_size={page_size}")]
    InvalidPagination { page: u64, page_size: u64 },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;
