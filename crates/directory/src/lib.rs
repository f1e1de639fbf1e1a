//! Membership directory capability for the vouch execution gate.
//!
//! The directory answers two questions and nothing else: "who does this
//! credential belong to?" and "is that principal a member of this group?".
//! Both are single network calls, both fail closed, and a negative
//! membership answer is a valid `false`, never an error.

mod directory;
mod error;
mod github;

pub use directory::{Directory, DynDirectory};
pub use error::DirectoryError;
pub use github::{GithubDirectory, GithubDirectoryConfig};
