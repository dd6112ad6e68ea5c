use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// The parent directory of an href: `OEBPS/content.opf` → `OEBPS`.
pub(crate) fn parent(href: &str) -> &str {
    href.rfind('/')
        .map_or("", |index| if index == 0 { "/" } else { &href[..index] })
}

/// Percent-decode an href into the form zip entries require.
pub(crate) fn decode(encoded: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(encoded).decode_utf8_lossy()
}

/// Resolve a child path against its parent directory, normalizing `.`/`..`.
pub(crate) fn resolve<'a>(parent_dir: &str, relative: &'a str) -> Cow<'a, str> {
    if relative.starts_with('/') || has_scheme(relative) {
        // Absolute paths and scheme-qualified hrefs are resolved already.
        return Cow::Borrowed(relative);
    }

    let mut buf = Path::new(parent_dir).join(relative);
    normalize_href_path(&mut buf);

    // 1: `buf` is UTF-8 as its data derives from `parent_dir` and `relative`.
    // 2: Ensure separators are forward slashes.
    Cow::Owned(buf.to_string_lossy().replace('\\', "/"))
}

/// Compute the href that reaches `to` from the directory containing `from`.
///
/// Both paths must be relative to the same archive base directory:
/// `relativize("text/c1.xhtml", "styles/main.css")` → `../styles/main.css`.
pub(crate) fn relativize(from: &str, to: &str) -> String {
    if to.starts_with('/') || has_scheme(to) {
        return to.to_owned();
    }

    let from_dir: Vec<&str> = parent(from).split('/').filter(|c| !c.is_empty()).collect();
    let to_parts: Vec<&str> = to.split('/').filter(|c| !c.is_empty()).collect();

    let shared = from_dir
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut buf = String::new();
    for _ in shared..from_dir.len() {
        buf.push_str("../");
    }
    buf.push_str(&to_parts[shared..].join("/"));
    buf
}

fn normalize_href_path(original: &mut PathBuf) {
    let mut stack = Vec::new();

    for component in original.components() {
        match component {
            Component::ParentDir => {
                if stack
                    .last()
                    // If the component is the root, disallow popping.
                    .is_some_and(|component| !matches!(component, Component::RootDir))
                {
                    stack.pop();
                }
            }
            Component::CurDir => {}
            _ => {
                stack.push(component);
            }
        }
    }

    *original = PathBuf::from_iter(stack);
}

fn has_scheme(href: &str) -> bool {
    href.contains(':')
}
