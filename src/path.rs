use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

/// Map a request path onto the serve root by plain concatenation.
///
/// The decoded path is appended to the root verbatim: no normalization, no
/// existence check, no rejection of `..` segments. A resolved path can
/// therefore escape the root; callers serve trusted clients or put a
/// hardening layer in front.
pub fn resolve(root: &Path, uri_path: &str) -> PathBuf {
    let decoded = percent_decode_str(uri_path).decode_utf8_lossy();
    let mut resolved = root.as_os_str().to_os_string();
    resolved.push(decoded.as_ref());
    PathBuf::from(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_path_to_root() {
        assert_eq!(
            resolve(Path::new("."), "/file.txt"),
            PathBuf::from("./file.txt")
        );
        assert_eq!(
            resolve(Path::new("/srv/files"), "/a/b.txt"),
            PathBuf::from("/srv/files/a/b.txt")
        );
    }

    #[test]
    fn percent_decodes() {
        assert_eq!(
            resolve(Path::new("."), "/with%20space.txt"),
            PathBuf::from("./with space.txt")
        );
    }

    #[test]
    fn root_path_resolves_to_root_itself() {
        assert_eq!(resolve(Path::new("."), "/"), PathBuf::from("./"));
    }

    #[test]
    fn traversal_segments_are_preserved() {
        // Escaping the root is the documented behavior, not an accident.
        assert_eq!(
            resolve(Path::new("."), "/../secret"),
            PathBuf::from("./../secret")
        );
    }
}
