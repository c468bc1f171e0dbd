use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every failure a service can report, mapped to HTTP in one place.
///
/// Store-level unique violations are translated to the conflict variants
/// via [`ApiError::on_conflict`] right at the insert that triggered them;
/// inserting and catching the violation is the intended mechanism for
/// detecting "already liked" / "already following".
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("user not found")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("insufficient rights")]
    Forbidden,

    #[error("tweet is already liked")]
    AlreadyLiked,

    #[error("you are already following this user")]
    AlreadyFollowing,

    #[error("you cannot follow or unfollow yourself")]
    SelfFollow,

    #[error("file must not exceed {limit} bytes")]
    FileTooLarge { limit: usize },

    #[error(transparent)]
    Database(#[from] diesel::result::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::AlreadyLiked => StatusCode::BAD_REQUEST,
            ApiError::AlreadyFollowing => StatusCode::CONFLICT,
            ApiError::SelfFollow => StatusCode::BAD_REQUEST,
            ApiError::FileTooLarge { .. } => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Io(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "Unauthorized",
            ApiError::NotFound(_) => "NotFound",
            ApiError::Forbidden => "Forbidden",
            ApiError::AlreadyLiked => "LikeError",
            ApiError::AlreadyFollowing | ApiError::SelfFollow => "FollowError",
            ApiError::FileTooLarge { .. } => "FileError",
            ApiError::Database(_) | ApiError::Io(_) | ApiError::Internal(_) => "Error",
        }
    }

    /// Translate a unique-constraint rejection into `conflict`, passing any
    /// other database error through untouched.
    pub fn on_conflict(err: diesel::result::Error, conflict: ApiError) -> ApiError {
        match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => conflict,
            other => ApiError::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("internal error: {}", self);
        }

        let body = Json(json!({
            "result": false,
            "error_type": self.error_type(),
            "error_message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    fn unique_violation() -> DieselError {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_string()),
        )
    }

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound("tweet").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::AlreadyLiked.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::AlreadyFollowing.status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::SelfFollow.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::FileTooLarge { limit: 1024 }.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn error_types_match_the_wire_contract() {
        assert_eq!(ApiError::Unauthorized.error_type(), "Unauthorized");
        assert_eq!(ApiError::NotFound("like").error_type(), "NotFound");
        assert_eq!(ApiError::Forbidden.error_type(), "Forbidden");
        assert_eq!(ApiError::AlreadyLiked.error_type(), "LikeError");
        assert_eq!(ApiError::AlreadyFollowing.error_type(), "FollowError");
        assert_eq!(ApiError::SelfFollow.error_type(), "FollowError");
        assert_eq!(
            ApiError::FileTooLarge { limit: 1024 }.error_type(),
            "FileError"
        );
    }

    #[test]
    fn unique_violation_becomes_the_requested_conflict() {
        let err = ApiError::on_conflict(unique_violation(), ApiError::AlreadyLiked);
        assert!(matches!(err, ApiError::AlreadyLiked));

        let err = ApiError::on_conflict(unique_violation(), ApiError::AlreadyFollowing);
        assert!(matches!(err, ApiError::AlreadyFollowing));
    }

    #[test]
    fn other_database_errors_pass_through() {
        let err = ApiError::on_conflict(DieselError::NotFound, ApiError::AlreadyLiked);
        assert!(matches!(err, ApiError::Database(DieselError::NotFound)));
    }

    #[test]
    fn not_found_message_names_the_entity() {
        assert_eq!(ApiError::NotFound("tweet").to_string(), "tweet not found");
    }
}
