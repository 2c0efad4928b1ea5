pub mod client;
pub mod envelope;
pub mod error;
pub mod normalize;
mod retry;
pub mod raw;
pub mod view;

pub use client::StorefrontClient;
pub use error::ClientError;
pub use normalize::normalize;
pub use raw::RawProduct;
pub use view::{CatalogView, ViewState};
