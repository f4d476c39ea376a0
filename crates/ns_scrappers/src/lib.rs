pub mod scrapers;
pub mod cli;
pub mod logging;

pub use cli::{handle_command, FetchArgs};
pub use scrapers::bing::BingNewsScraper;

pub mod prelude {
    pub use super::scrapers::bing::BingNewsScraper;
    pub use ns_core::{NewsFetcher, Result, Error};
}
