pub mod rate_fetcher_service;

pub use rate_fetcher_service::RateFetcherService;
