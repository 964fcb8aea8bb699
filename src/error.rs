use crate::models::Dimension;
use thiserror::Error;

/// Contract violations the view-state core can signal. Missing values
/// are not errors; they are filtered or conflated away at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A series was selected that is not a member of the current
    /// collection.
    #[error("unknown series: {0}")]
    UnknownSeries(String),

    /// The dimension has no defined values anywhere in scope, so no
    /// scale can be built for it.
    #[error("no data for dimension {0}")]
    NoData(Dimension),
}
