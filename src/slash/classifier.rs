//! Trailing-slash classification.
//!
//! # Rules
//! A path needs a trailing slash unless one of these holds, checked in order:
//! - it already ends with `/`
//! - it is empty and `except_empty` is set
//! - its last segment has an extension and `except_with_extension` is set
//! - it falls under the api root and `except_from_api` is set
//! - the custom exception returns true
//!
//! The api check is a raw string prefix, so with an api root of `api` the
//! path `/apiary` is exempt as well.

use std::fmt;
use std::sync::Arc;

use crate::config::TrailingSlashConfig;
use crate::slash::path;

/// Segment appended to the virtual root to form the api root.
pub const API_SEGMENT: &str = "api";

/// Consumer-supplied exemption. Must be cheap and must not block.
pub type CustomException = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Immutable set of exemption rules, shared across requests.
#[derive(Clone)]
pub struct ExceptionPolicy {
    except_empty: bool,
    except_with_extension: bool,
    except_from_api: bool,
    except: Option<CustomException>,
    api_root: String,
}

impl ExceptionPolicy {
    pub fn builder() -> ExceptionPolicyBuilder {
        ExceptionPolicyBuilder::default()
    }

    pub fn except_empty(&self) -> bool {
        self.except_empty
    }

    pub fn except_with_extension(&self) -> bool {
        self.except_with_extension
    }

    pub fn except_from_api(&self) -> bool {
        self.except_from_api
    }

    pub fn has_custom_exception(&self) -> bool {
        self.except.is_some()
    }

    /// Bare api root, without leading or trailing slashes.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Returns true when the path must be redirected to its slashed form.
    pub fn needs_trailing_slash(&self, path: &str) -> bool {
        !(path.ends_with('/')
            || (self.except_empty && path.is_empty())
            || (self.except_with_extension && path::has_extension(path))
            || (self.except_from_api && self.is_api(path))
            || self.except.as_ref().is_some_and(|except| except(path)))
    }

    fn is_api(&self, url: &str) -> bool {
        path::trim_start(url).starts_with(self.api_root.as_str())
    }
}

impl Default for ExceptionPolicy {
    fn default() -> Self {
        ExceptionPolicyBuilder::default().build()
    }
}

impl fmt::Debug for ExceptionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExceptionPolicy")
            .field("except_empty", &self.except_empty)
            .field("except_with_extension", &self.except_with_extension)
            .field("except_from_api", &self.except_from_api)
            .field("except", &self.except.as_ref().map(|_| "<fn>"))
            .field("api_root", &self.api_root)
            .finish()
    }
}

/// Free-function form of [`ExceptionPolicy::needs_trailing_slash`].
pub fn needs_trailing_slash(path: &str, policy: &ExceptionPolicy) -> bool {
    policy.needs_trailing_slash(path)
}

/// Builder for [`ExceptionPolicy`]. All flags default to true.
pub struct ExceptionPolicyBuilder {
    except_empty: bool,
    except_with_extension: bool,
    except_from_api: bool,
    except: Option<CustomException>,
    virtual_root: String,
}

impl Default for ExceptionPolicyBuilder {
    fn default() -> Self {
        Self {
            except_empty: true,
            except_with_extension: true,
            except_from_api: true,
            except: None,
            virtual_root: "/".to_string(),
        }
    }
}

impl ExceptionPolicyBuilder {
    /// Seed a builder from the `[trailing_slash]` config section.
    ///
    /// A non-empty `except_prefixes` list becomes the custom exception.
    pub fn from_config(config: &TrailingSlashConfig) -> Self {
        let builder = Self::default()
            .except_empty(config.except_empty)
            .except_with_extension(config.except_with_extension)
            .except_from_api(config.except_from_api)
            .virtual_root(config.virtual_root.clone());

        if config.except_prefixes.is_empty() {
            return builder;
        }

        let prefixes = config.except_prefixes.clone();
        builder.except(move |url: &str| prefixes.iter().any(|p| url.starts_with(p.as_str())))
    }

    pub fn except_empty(mut self, value: bool) -> Self {
        self.except_empty = value;
        self
    }

    pub fn except_with_extension(mut self, value: bool) -> Self {
        self.except_with_extension = value;
        self
    }

    pub fn except_from_api(mut self, value: bool) -> Self {
        self.except_from_api = value;
        self
    }

    pub fn except<F>(mut self, except: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.except = Some(Arc::new(except));
        self
    }

    /// Mount point of the application, used to locate the api root.
    pub fn virtual_root(mut self, root: impl Into<String>) -> Self {
        self.virtual_root = root.into();
        self
    }

    pub fn build(self) -> ExceptionPolicy {
        let api_root = path::trim(&path::join_trimming(&self.virtual_root, API_SEGMENT)).to_string();

        ExceptionPolicy {
            except_empty: self.except_empty,
            except_with_extension: self.except_with_extension,
            except_from_api: self.except_from_api,
            except: self.except,
            api_root,
        }
    }
}
