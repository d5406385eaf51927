/// Which directory will `git clone <url>` create?
///
/// This is the last component of the URL, without a `.git` suffix.
pub fn repository_url_destination(url: &str) -> &str {
    let last_component = url
        .rsplit_once('/')
        .map_or(url, |(_before, after)| after);
    last_component
        .strip_suffix(".git")
        .unwrap_or(last_component)
}
