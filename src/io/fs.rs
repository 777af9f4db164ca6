use std::path::{Component, Path, PathBuf};

/// Knowledge base location, relative to the working directory
pub const DEFAULT_KB_PATH: &str = "data/health_info.csv";

/// Join the default knowledge base path onto `base_dir`
pub fn resolve_kb_path(base_dir: &Path) -> PathBuf {
    normalize_path(&base_dir.join(DEFAULT_KB_PATH))
}

/// Lexically collapse `.` and `..` components without touching the filesystem
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_kb_path() {
        assert_eq!(
            resolve_kb_path(Path::new("/srv/healthbot")),
            PathBuf::from("/srv/healthbot/data/health_info.csv")
        );
        assert_eq!(
            resolve_kb_path(Path::new("/srv/healthbot/src/..")),
            PathBuf::from("/srv/healthbot/data/health_info.csv")
        );
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("a/./b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize_path(Path::new("../data")), PathBuf::from("../data"));
        assert_eq!(normalize_path(Path::new("/../etc")), PathBuf::from("/etc"));
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::from("."));
    }
}
