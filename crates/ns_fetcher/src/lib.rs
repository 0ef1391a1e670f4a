pub mod newsapi;

pub use newsapi::NewsApiClient;

pub mod prelude {
    pub use super::NewsApiClient;
    pub use ns_core::{ArticleRecord, HeadlineSource, NewsApiConfig, Result};
}
