mod request;

pub use request::{HeaderProfile, RequestFetcher};
