//! Static site assets: the compiled dashboard bundle and its shell page.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Page served for any path that does not match a file, so the client-side
/// router can take over.
pub const SHELL_PAGE: &str = "index.html";

/// Serve files under `root`, falling back to `root/index.html`.
pub fn service(root: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(root)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(root.join(SHELL_PAGE)))
}
