/// Failures surfaced by the recommendation API client
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Could not reach the recommendation service")]
    Transport(#[from] reqwest::Error),

    /// Message taken verbatim from the server's `{ "error": ... }` body
    #[error("{0}")]
    Server(String),

    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Unexpected response from the recommendation service: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = ApiError::Server("Book not found".to_string());
        assert_eq!(err.to_string(), "Book not found");
    }

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(
            ApiError::Status(502).to_string(),
            "Request failed with status 502"
        );
    }
}
