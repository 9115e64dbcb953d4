pub mod error;
pub mod i18n;

pub use error::{ApiError, ApiErrorResponse, ApiResult};
pub use i18n::{
    LOCALE_COOKIE, locale_from_accept_language, locale_from_cookie, match_language_tag,
    parse_accept_language,
};
