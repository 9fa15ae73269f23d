use crate::db::dao::DaoLayerError;
use crate::forms::FormErrors;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) | Self::Internal(message) => {
                message.as_str()
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::MissingReference { .. } | DaoLayerError::InvalidPagination { .. } => {
                AppError::bad_request(err.to_string())
            }
            DaoLayerError::Db(_) => AppError::internal(err.to_string()),
        }
    }
}

/// Why a create or edit submission was not stored.
#[derive(Debug)]
pub enum SubmitError {
    /// The input was rejected; the form is shown again with messages.
    Invalid(FormErrors),
    /// The input was fine but storing it failed.
    Failed(AppError),
}

impl From<FormErrors> for SubmitError {
    fn from(errors: FormErrors) -> Self {
        Self::Invalid(errors)
    }
}

impl From<AppError> for SubmitError {
    fn from(err: AppError) -> Self {
        Self::Failed(err)
    }
}

impl From<DaoLayerError> for SubmitError {
    fn from(err: DaoLayerError) -> Self {
        Self::Failed(err.into())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;
    use uuid::Uuid;

    use super::AppError;
    use crate::db::dao::DaoLayerError;

    #[test]
    fn dao_errors_map_to_app_errors() {
        let id = Uuid::nil();
        let missing: AppError = DaoLayerError::NotFound { entity: "Venue", id }.into();
        assert!(matches!(missing, AppError::NotFound(_)));
        assert_eq!(missing.message(), format!("Venue not found (id={id})"));

        let db: AppError = DaoLayerError::Db(DbErr::Custom("boom".to_string())).into();
        assert!(matches!(db, AppError::Internal(_)));

        let reference: AppError = DaoLayerError::MissingReference { entity: "Artist", id }.into();
        assert!(matches!(reference, AppError::BadRequest(_)));
    }
}
