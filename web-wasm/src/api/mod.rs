//! バックエンドAPI

pub mod inspection;

pub use inspection::FetchApi;
