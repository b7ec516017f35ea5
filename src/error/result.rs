//! Result type alias for bossdex operations.

use super::bossdex_error::BossdexError;
use super::context::ErrorContext;

/// Type alias for Results using BossdexError.
pub type BossdexResult<T> = Result<T, BossdexError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    ///
    /// ```ignore
    /// use bossdex::error::{ErrorContext, ResultExt};
    ///
    /// let bosses = client
    ///     .fetch_bosses()
    ///     .await
    ///     .context(ErrorContext::new("fetch_bosses").with_component("catalog"));
    /// ```
    fn context(self, ctx: ErrorContext) -> BossdexResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> BossdexResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T> ResultExt<T> for BossdexResult<T> {
    fn context(self, ctx: ErrorContext) -> BossdexResult<T> {
        self.map_err(|e| e.with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> BossdexResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

/// Implements [`ResultExt`] for results whose error converts into [`BossdexError`].
macro_rules! impl_result_ext {
    ($($err:ty),* $(,)?) => {
        $(
            impl<T> ResultExt<T> for Result<T, $err> {
                fn context(self, ctx: ErrorContext) -> BossdexResult<T> {
                    self.map_err(|e| BossdexError::from(e).with_context(ctx))
                }

                fn with_context<F>(self, f: F) -> BossdexResult<T>
                where
                    F: FnOnce() -> ErrorContext,
                {
                    self.map_err(|e| BossdexError::from(e).with_context(f()))
                }
            }
        )*
    };
}

impl_result_ext!(
    std::io::Error,
    serde_json::Error,
    crate::catalog::CatalogError,
    crate::preferences::PreferencesError,
    super::system::SystemError,
);
