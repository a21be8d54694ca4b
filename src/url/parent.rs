use crate::Soft404Error;
use url::Url;

/// Returns the URL of the parent directory of `url`'s path
///
/// The returned URL always ends with `/`. The last `/`-delimited path
/// segment is dropped (a trailing slash does not count as a segment), and
/// the URL is reassembled as `scheme://host[:port]` + parent path + `/`.
/// For a bare host the result is `scheme://host/`.
///
/// # Examples
///
/// ```
/// use soft404::url::parent_url;
///
/// assert_eq!(parent_url("http://site.com").unwrap(), "http://site.com/");
/// assert_eq!(parent_url("http://site.com/one").unwrap(), "http://site.com/");
/// assert_eq!(
///     parent_url("http://site.com/one/two").unwrap(),
///     "http://site.com/one/"
/// );
/// ```
pub fn parent_url(url: &str) -> Result<String, Soft404Error> {
    let parsed = parse_absolute(url)?;
    let authority = authority_of(&parsed, url)?;

    let path = parsed.path();
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    let parent = match trimmed.rfind('/') {
        Some(idx) => &trimmed[..idx],
        None => "",
    };

    Ok(format!("{}://{}{}/", parsed.scheme(), authority, parent))
}

/// Returns just the path portion of a URL, or `/` if it has none
///
/// # Examples
///
/// ```
/// use soft404::url::url_path;
///
/// assert_eq!(url_path("http://site.com").unwrap(), "/");
/// assert_eq!(
///     url_path("http://site.com/path/to/page/").unwrap(),
///     "/path/to/page/"
/// );
/// ```
pub fn url_path(url: &str) -> Result<String, Soft404Error> {
    let parsed = parse_absolute(url)?;
    let path = parsed.path();
    if path.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(path.to_string())
    }
}

fn parse_absolute(url: &str) -> Result<Url, Soft404Error> {
    Url::parse(url).map_err(|source| Soft404Error::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

/// Host plus any explicit port, as it appeared in the URL
fn authority_of(parsed: &Url, original: &str) -> Result<String, Soft404Error> {
    let host = parsed.host_str().ok_or_else(|| Soft404Error::MissingHost {
        url: original.to_string(),
    })?;

    Ok(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_of_bare_host() {
        assert_eq!(parent_url("http://site.com").unwrap(), "http://site.com/");
        assert_eq!(parent_url("http://site.com/").unwrap(), "http://site.com/");
    }

    #[test]
    fn test_parent_of_single_segment() {
        assert_eq!(
            parent_url("http://site.com/one").unwrap(),
            "http://site.com/"
        );
        assert_eq!(
            parent_url("http://site.com/one/").unwrap(),
            "http://site.com/"
        );
    }

    #[test]
    fn test_parent_of_nested_path() {
        assert_eq!(
            parent_url("http://site.com/one/two").unwrap(),
            "http://site.com/one/"
        );
        assert_eq!(
            parent_url("http://site.com/one/two/").unwrap(),
            "http://site.com/one/"
        );
    }

    #[test]
    fn test_parent_preserves_port() {
        assert_eq!(
            parent_url("http://127.0.0.1:8080/a/b").unwrap(),
            "http://127.0.0.1:8080/a/"
        );
    }

    #[test]
    fn test_parent_drops_query_and_fragment() {
        assert_eq!(
            parent_url("http://site.com/one/two?x=1#frag").unwrap(),
            "http://site.com/one/"
        );
    }

    #[test]
    fn test_repeated_parent_climbs_one_level_per_call() {
        let url = "http://site.com/a/b/c";
        let p1 = parent_url(url).unwrap();
        assert_eq!(p1, "http://site.com/a/b/");
        let p2 = parent_url(&p1).unwrap();
        assert_eq!(p2, "http://site.com/a/");
        let p3 = parent_url(&p2).unwrap();
        assert_eq!(p3, "http://site.com/");
        // Fixed point at the root
        assert_eq!(parent_url(&p3).unwrap(), "http://site.com/");
    }

    #[test]
    fn test_path_of_bare_host() {
        assert_eq!(url_path("http://site.com").unwrap(), "/");
        assert_eq!(url_path("http://site.com/").unwrap(), "/");
    }

    #[test]
    fn test_path_of_nested_url() {
        assert_eq!(
            url_path("http://site.com/path/to/page/").unwrap(),
            "/path/to/page/"
        );
        assert_eq!(url_path("http://site.com/a/b").unwrap(), "/a/b");
    }

    #[test]
    fn test_malformed_url_propagates() {
        assert!(matches!(
            parent_url("not a url"),
            Err(Soft404Error::InvalidUrl { .. })
        ));
        assert!(matches!(
            url_path("://missing-scheme"),
            Err(Soft404Error::InvalidUrl { .. })
        ));
    }
}
