pub mod record;
pub mod dataset;
pub mod selection;
pub mod query;
pub mod downloader;
pub mod server;


pub use record::LaunchRecord;
pub use dataset::{DataLoadError, Dataset};
pub use selection::{PayloadRange, SiteSelection, ALL_SITES};
pub use query::{
    aggregate_outcomes,
    filter_correlation,
    CorrelationPoint,
    OutcomeBreakdown,
    OutcomeCountRow,
    QueryError,
    SiteSuccessRow,
};
pub use downloader::{DatasetDownloader, DownloadError, DownloaderConfig};
pub use server::{run_server, ApiError, AppState, ServerConfig};
