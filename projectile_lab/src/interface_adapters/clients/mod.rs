pub mod results;

pub use results::{ResultsClient, ResultsClientError};
