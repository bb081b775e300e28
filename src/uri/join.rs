use bytes::{Bytes, BytesMut};
use memchr::memrchr;

/// Resolves the relative reference `rel_path` + `rel_query` against the base
/// `base_path` + `base_query`, returning an owned path-and-query.
///
/// An empty query means "no query". Resolution rules, in priority order:
///
/// 1. empty `rel_path`, empty `rel_query`: the base path and query are kept,
/// 2. empty `rel_path`, non-empty `rel_query`: the base path is kept and the
///    query replaced,
/// 3. `rel_path` starting with `/`: the reference is taken verbatim,
///    including its query even when empty,
/// 4. otherwise `rel_path` is appended to the directory of the base and dot
///    segments are resolved: `.` is dropped, `..` removes the preceding
///    segment but never ascends above the root. The query becomes
///    `rel_query`.
///
/// `base_path` is assumed normalized: non-empty means it starts with `/` and
/// contains no `.` or `..` segments. The precondition is trusted; a
/// non-normalized base yields unspecified but non-panicking output. Debug
/// builds log a warning when it is violated.
pub fn path_join(base_path: &str, base_query: &str, rel_path: &str, rel_query: &str) -> String {
    let mut buf = BytesMut::with_capacity(
        base_path.len() + base_query.len() + rel_path.len() + rel_query.len() + 2,
    );
    join_into(&mut buf, base_path, base_query, rel_path, rel_query);
    // SAFETY: the inputs are `str` and the joiner inserts only ASCII `/`, `?`
    unsafe { String::from_utf8_unchecked(Vec::from(buf)) }
}

/// Scratch-buffer form of [`path_join`].
///
/// The resolved path-and-query is appended to `buf` and returned as a
/// [`Bytes`] view sharing its allocation, leaving `buf` empty with its spare
/// capacity, so a request that resolves several references performs at most
/// one allocation. Pass the scratch buffer drained: bytes already in `buf`
/// are taken into the returned view.
pub fn path_join_buf(
    buf: &mut BytesMut,
    base_path: &str,
    base_query: &str,
    rel_path: &str,
    rel_query: &str,
) -> Bytes {
    join_into(buf, base_path, base_query, rel_path, rel_query);
    buf.split().freeze()
}

fn join_into(
    buf: &mut BytesMut,
    base_path: &str,
    base_query: &str,
    rel_path: &str,
    rel_query: &str,
) {
    debug_check_base(base_path);

    if rel_path.is_empty() {
        if base_path.is_empty() {
            buf.extend_from_slice(b"/");
        } else {
            buf.extend_from_slice(base_path.as_bytes());
        }
        let query = if rel_query.is_empty() { base_query } else { rel_query };
        push_query(buf, query);
        return;
    }

    if rel_path.starts_with('/') {
        // absolute-path reference, overrides the base entirely
        buf.extend_from_slice(rel_path.as_bytes());
    } else {
        let root = buf.len();

        if base_path.is_empty() {
            buf.extend_from_slice(b"/");
        } else {
            // directory of the base: up to and including the last `/`
            let dir = match memrchr(b'/', base_path.as_bytes()) {
                Some(i) => &base_path.as_bytes()[..=i],
                // a normalized non-empty base starts with `/`, stay total anyway
                None => b"/".as_slice(),
            };
            buf.extend_from_slice(dir);
        }

        // `buf[root..]` starts with `/` and keeps ending with `/` after
        // every step below
        for segment in rel_path.split('/') {
            match segment {
                "" | "." => {}
                ".." => pop_segment(buf, root),
                _ => {
                    buf.extend_from_slice(segment.as_bytes());
                    buf.extend_from_slice(b"/");
                }
            }
        }

        // a reference whose last segment is a file drops the trailing `/`
        let dir_ref = matches!(rel_path.rsplit('/').next(), Some("" | "." | ".."));
        if !dir_ref && buf.len() > root + 1 {
            buf.truncate(buf.len() - 1);
        }
    }

    push_query(buf, rel_query);
}

/// Drops the trailing segment of `buf[root..]`, which ends with `/`, never
/// ascending above the root `/`.
fn pop_segment(buf: &mut BytesMut, root: usize) {
    let end = buf.len();
    if end <= root + 1 {
        return;
    }
    match memrchr(b'/', &buf[root..end - 1]) {
        Some(i) => buf.truncate(root + i + 1),
        None => buf.truncate(root + 1),
    }
}

fn push_query(buf: &mut BytesMut, query: &str) {
    if !query.is_empty() {
        buf.extend_from_slice(b"?");
        buf.extend_from_slice(query.as_bytes());
    }
}

/// Base normalization is a documented precondition, trusted in release
/// builds. Debug builds flag a violation without changing the output.
fn debug_check_base(base_path: &str) {
    #[cfg(debug_assertions)]
    {
        use crate::{log::warning, matches};

        let bytes = base_path.as_bytes();
        let normalized = base_path.is_empty()
            || (bytes[0] == b'/'
                && bytes.iter().all(|&b| matches::is_path(b))
                && !base_path.split('/').any(|seg| seg == "." || seg == ".."));
        if !normalized {
            warning!("path_join: base path {base_path:?} is not normalized");
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = base_path;
}
