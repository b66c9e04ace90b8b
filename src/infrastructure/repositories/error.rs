use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let what = match db_err.kind() {
                ErrorKind::NotNullViolation => "required column missing",
                ErrorKind::CheckViolation => "check constraint violated",
                ErrorKind::UniqueViolation => "unique constraint violated",
                ErrorKind::ForeignKeyViolation => "foreign key constraint violated",
                _ => return DomainError::Persistence(db_err.message().to_string()),
            };
            DomainError::Persistence(format!("{what}: {}", db_err.message()))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
