//! Remote-namespace path handling.
//!
//! Remote paths are always absolute, `/`-separated POSIX strings.  They are
//! normalized by resolving `.` and `..` against a segment stack, never
//! escaping the root, and quoted so the remote shell treats them as literal
//! bytes regardless of spaces, globs or quotes in the name.

/// Normalize a remote path: drop empty and `.` segments, resolve `..`
/// against the accumulated segments (a `..` at the root is a no-op).
/// The result has a single leading `/` and no trailing `/` unless it is
/// exactly `/`.
pub fn normalize(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }
    if stack.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", stack.join("/"))
    }
}

/// Join a child onto a base path and normalize the result.
pub fn join(base: &str, child: &str) -> String {
    normalize(&format!("{}/{}", base, child))
}

/// Quote a string for the remote shell.  Single-quoted, with every literal
/// single quote replaced by `'\''` (close, escaped quote, reopen), so the
/// shell reconstructs exactly the original bytes.
pub fn quote_arg(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// The remote namespace has a single root.
pub fn is_root(path: &str) -> bool {
    path == "/"
}
