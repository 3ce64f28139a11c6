pub mod html;
pub mod http;
pub mod traits;

pub use html::HtmlPageExtractor;
pub use http::HttpFetcher;
pub use traits::{DocumentFetcher, ExtractedPage, HtmlExtractor};
