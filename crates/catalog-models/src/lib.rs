pub mod ids;
pub mod error;
pub mod capabilities;
pub mod content;
pub mod movie;
pub mod series;
pub mod documentary;
pub mod watch_history;
pub mod profile;

pub use ids::{ContentId, ProfileId};
pub use error::ValidationError;
pub use capabilities::{DownloadState, Downloadable, Playable, Ratable, StreamProfile, Streamable};
pub use content::{Content, ContentCore};
pub use movie::Movie;
pub use series::Series;
pub use documentary::Documentary;
pub use watch_history::WatchHistoryEntry;
pub use profile::Profile;
