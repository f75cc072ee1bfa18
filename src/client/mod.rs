pub mod fetcher;
pub mod traits;

pub use fetcher::HttpPredictionClient;
pub use traits::PredictionClient;
