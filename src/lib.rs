//! # css-camelize
//!
//! Rewrites CSS module stylesheets so their class names can be used as
//! camelCase keys: a scoping prefix such as `.profile-page ` is stripped and
//! kebab-case class selectors are converted to camelCase.
//!
//! ```text
//! .profile-page .user-info-card { background-color: blue; }
//! ```
//!
//! becomes
//!
//! ```text
//! .userInfoCard { background-color: blue; }
//! ```
//!
//! The rewriter works on raw text with two regex passes (see the `rewrite` module); it
//! does not parse CSS.

pub mod config;
pub mod error;
pub mod loader;
pub mod rewrite;

pub use config::RewriteConfig;
pub use error::{Result, RewriteError};
pub use loader::{rewrite, rewrite_with, StylesheetLoader};
