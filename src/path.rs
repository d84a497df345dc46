/// Resolve a relative pathname against a base pathname.
///
/// The last segment of `base` is treated as a file and dropped before the
/// relative segments are appended; `.` segments vanish and `..` segments
/// remove the preceding segment without ever climbing above the root.
///
/// # Examples
///
/// ```
/// use laxurl::resolve_pathname;
///
/// assert_eq!(resolve_pathname("b/c", "/a"), "/b/c");
/// assert_eq!(resolve_pathname("b/c", "/a/"), "/a/b/c");
/// assert_eq!(resolve_pathname("../../../../c", "/a/b/"), "/c");
/// ```
pub fn resolve_pathname(relative: &str, base: &str) -> String {
    if relative.is_empty() {
        return base.to_string();
    }

    let base = if base.is_empty() { "/" } else { base };
    let mut path: Vec<&str> = base.split('/').collect();
    path.pop();
    path.extend(relative.split('/'));

    let last = path.last().copied().unwrap_or_default();
    let mut unshift = false;
    let mut up = 0usize;

    // Walk backwards so each `..` knows how many real segments it still owes
    let mut i = path.len();
    while i > 0 {
        i -= 1;
        match path[i] {
            "." => {
                path.remove(i);
            }
            ".." => {
                path.remove(i);
                up += 1;
            }
            _ if up > 0 => {
                if i == 0 {
                    unshift = true;
                }
                path.remove(i);
                up -= 1;
            }
            _ => {}
        }
    }

    if unshift {
        path.insert(0, "");
    }
    if last == "." || last == ".." {
        path.push("");
    }

    path.join("/")
}
