use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const MEALORDER_DIR: &str = ".mealorder";
pub const CONFIG_FILE: &str = ".mealorder/config.yaml";
pub const ORDER_FILE: &str = ".mealorder/order.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn mealorder_dir(root: &Path) -> PathBuf {
    root.join(MEALORDER_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn order_path(root: &Path) -> PathBuf {
    root.join(ORDER_FILE)
}

/// Resolve a user-supplied path against the project root. Absolute paths are
/// returned unchanged.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/kitchen");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/kitchen/.mealorder/config.yaml")
        );
        assert_eq!(
            order_path(root),
            PathBuf::from("/tmp/kitchen/.mealorder/order.yaml")
        );
        assert_eq!(mealorder_dir(root), PathBuf::from("/tmp/kitchen/.mealorder"));
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let root = Path::new("/tmp/kitchen");
        assert_eq!(
            resolve(root, Path::new("menu.yaml")),
            PathBuf::from("/tmp/kitchen/menu.yaml")
        );
        assert_eq!(
            resolve(root, Path::new("/srv/menu.yaml")),
            PathBuf::from("/srv/menu.yaml")
        );
    }
}
