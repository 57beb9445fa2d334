pub use blog::*;
pub use envelope::*;
pub use tag::*;
pub use topic::*;

mod blog;
mod envelope;
mod tag;
mod topic;

use url::Url;

/// `/{collection}/{id}/{slug}`, with the slug percent-encoded as a single
/// path segment so `#`, `?` and `/` survive the round trip.
fn record_path(collection: &str, id: i64, slug: &str) -> String {
    let unslugged = || format!("/{collection}/{id}");
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return unslugged();
    };
    match url.path_segments_mut() {
        Ok(mut segments) => {
            segments.clear().push(collection).push(&id.to_string()).push(slug);
        }
        Err(()) => return unslugged(),
    }
    url.path().to_string()
}
