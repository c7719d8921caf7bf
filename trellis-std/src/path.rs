//! Path normalization and segmentation.
//!
//! Registration and resolution split paths with the same function, so a
//! registered path and a request for it always walk the same trie nodes.

/// The root path, also the first component of every segmented path.
pub const ROOT: &str = "/";

/// Trim whitespace and drop one trailing slash, except on the root path.
pub fn normalize(path: &str) -> &str {
    let path = path.trim();
    if path != ROOT {
        if let Some(stripped) = path.strip_suffix('/') {
            return stripped;
        }
    }
    path
}

/// Split a path into routing components.
///
/// Empty components (leading, trailing or repeated slashes) are dropped and
/// the result starts with [`ROOT`].
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    std::iter::once(ROOT).chain(path.split('/').filter(|c| !c.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/foo/"), "/foo");
        assert_eq!(normalize("/foo"), "/foo");
        assert_eq!(normalize("  /foo/bar/ "), "/foo/bar");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(" / "), "/");
    }

    #[test]
    fn test_normalize_strips_only_one_slash() {
        assert_eq!(normalize("/foo//"), "/foo/");
    }

    #[test]
    fn test_segments() {
        let parts: Vec<_> = segments("/users/42/posts/").collect();
        assert_eq!(parts, ["/", "users", "42", "posts"]);

        let parts: Vec<_> = segments("//a///b").collect();
        assert_eq!(parts, ["/", "a", "b"]);

        let parts: Vec<_> = segments("/").collect();
        assert_eq!(parts, ["/"]);
    }
}
