pub mod extract;
pub mod lookup;
pub mod response;
pub mod upstream;

pub use crate::domain::model::{LookupQuery, LookupResult, SessionArtifacts};
pub use crate::domain::ports::{ArtifactExtractor, ConfigProvider, Upstream};
pub use crate::utils::error::Result;
