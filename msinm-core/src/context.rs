//! Explicit application context.
//!
//! The portal used to keep the current language, user, and bearer token on
//! an ambient root scope. Here they live in a value object constructed once
//! at startup and passed down, with defined read/write accessors.

/// Shared application state: locale selection and authentication.
///
/// # Examples
/// ```
/// use msinm_core::AppContext;
///
/// let mut ctx = AppContext::new(vec!["en".into(), "da".into()], "en");
/// assert!(ctx.set_language("da"));
/// ctx.login("sysadmin", "token-123");
/// assert!(ctx.is_authenticated());
/// ctx.logout();
/// assert_eq!(ctx.auth_token(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    language: String,
    languages: Vec<String>,
    user: Option<String>,
    auth_token: Option<String>,
}

impl AppContext {
    /// Construct a context with the supported languages and the initial
    /// selection. The initial language is honoured even when absent from the
    /// supported list, matching a persisted last-selected value from an
    /// older configuration.
    pub fn new(languages: Vec<String>, language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            languages,
            user: None,
            auth_token: None,
        }
    }

    /// Currently selected language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Languages offered by this installation.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Select a language; returns `false` and leaves the selection untouched
    /// when the language is not supported.
    pub fn set_language(&mut self, language: &str) -> bool {
        if self.languages.iter().any(|l| l == language) {
            self.language = language.to_owned();
            true
        } else {
            false
        }
    }

    /// Record a successful login: the user name and the bearer token sent on
    /// subsequent calls.
    pub fn login(&mut self, user: impl Into<String>, token: impl Into<String>) {
        self.user = Some(user.into());
        self.auth_token = Some(token.into());
    }

    /// Clear the user and token, e.g. on explicit logout.
    pub fn logout(&mut self) {
        self.user = None;
        self.auth_token = None;
    }

    /// Handle an authentication-expiry response (401/419): same clearing as
    /// a logout.
    pub fn auth_expired(&mut self) {
        self.logout();
    }

    /// Name of the logged-in user, if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Bearer token for backend calls, if logged in.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Whether a user is currently logged in.
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }
}
