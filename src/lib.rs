//! verktyg library
//!
//! Small, stateless helpers for validating form input, formatting headings
//! and prices, and working with names, plus an async directory of users and
//! groups backed by static fixtures.

pub mod config;
pub mod error;
pub mod models;
pub mod stores;
pub mod traits;
pub mod utils;

pub use config::Config;
pub use error::{FetchError, UtilError};
pub use models::{Group, User};
pub use stores::{fetch_groups, fetch_users, StaticDirectoryStore};
pub use traits::DirectoryStore;
pub use utils::formatting::{format_price, make_heading, HeadingLevel, PriceFormatter};
pub use utils::text::{genitive, is_lower_case};
pub use utils::validation::{validate_email, validate_zip};
