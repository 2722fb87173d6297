//! User-facing wording for fetch failures.
//!
//! The loader does not distinguish failure causes beyond "does this look like
//! a connectivity problem"; everything else about presenting an error is
//! captured here so the view layer can render header, description, and the
//! retry button label without inspecting the underlying error.

use crate::feed::fetcher::FetchError;

/// Display strings for the error view state.
///
/// Carries no behavior: recovery is always [`crate::feed::FeedLoader::retry`],
/// which the button labeled [`ErrorNotice::button_title`] should invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub header: String,
    pub description: String,
    pub button_title: String,
}

impl ErrorNotice {
    pub fn from_error(error: &FetchError) -> Self {
        if error.is_offline() {
            Self {
                header: "You are offline!".to_string(),
                description: "Please check your internet connection and try again.".to_string(),
                button_title: "Retry".to_string(),
            }
        } else {
            Self {
                header: "Oops!".to_string(),
                description: "Something went wrong. Please try again.".to_string(),
                button_title: "Retry".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_errors_get_offline_wording() {
        let notice = ErrorNotice::from_error(&FetchError::Timeout);
        assert_eq!(notice.header, "You are offline!");
        assert!(notice.description.contains("internet"));
        assert_eq!(notice.button_title, "Retry");
    }

    #[test]
    fn test_other_errors_get_generic_wording() {
        for error in [
            FetchError::HttpStatus(500),
            FetchError::ResponseTooLarge,
            FetchError::Fixture(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        ] {
            let notice = ErrorNotice::from_error(&error);
            assert_eq!(notice.header, "Oops!");
            assert!(notice.description.contains("try again"));
            assert_eq!(notice.button_title, "Retry");
        }
    }
}
