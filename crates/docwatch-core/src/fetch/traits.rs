use crate::fetch::errors::FetchError;

/// Fetches the body of a documentation page.
///
/// One call is one blocking GET. Implementations must report any non-2xx
/// response as an error rather than returning its body.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
