//! Filesystem-style path utilities.
//!
//! Paths are treated as plain strings of `/`-separated segments; nothing here
//! touches the filesystem. Splitting preserves empty segments, so an absolute
//! path like `/home/daniel/memes` yields a leading empty segment.

/// Return the portion of `path1` up to the point where it diverges from
/// `path2`, i.e. their common base.
///
/// The segments of `path1` before the first differing index are rejoined with
/// `/`. When the paths are identical, `path1` is returned unchanged. When one
/// path is a strict prefix of the other, or the paths share nothing beyond
/// the leading empty segment of two absolute paths, the result is the empty
/// string.
///
/// Note that two absolute paths with different first components share only
/// the leading empty segment, so the common base comes back as `""` rather
/// than `"/"`.
///
/// # Examples
///
/// ```
/// use waypoint::path::relative_to_common_base;
///
/// assert_eq!(
///     relative_to_common_base("/home/daniel/memes", "/home/daniel/work"),
///     "/home/daniel"
/// );
/// assert_eq!(relative_to_common_base("/home/daniel/memes", "/var/logs"), "");
/// ```
pub fn relative_to_common_base(path1: &str, path2: &str) -> String {
    let segments1: Vec<&str> = path1.split('/').collect();
    let segments2: Vec<&str> = path2.split('/').collect();

    // First index (within the shorter path) where the segments differ.
    let divergence = segments1
        .iter()
        .zip(segments2.iter())
        .position(|(a, b)| a != b);

    match divergence {
        Some(index) => segments1[..index].join("/"),
        // Same length and no differing segment: the paths are identical.
        None if segments1.len() == segments2.len() => path1.to_string(),
        // One path is a strict prefix of the other.
        None => String::new(),
    }
}
