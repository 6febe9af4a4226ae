/// Lazy iterator over the elements of a pattern's path part
///
/// For path `/a/{b}/c`, yields: `(1, "a")` → `(3, "{b}")` → `(7, "c")`
///
/// The leading `/` (the root) is never yielded. The root path `/` yields
/// nothing, and one trailing `/` is tolerated, so `/a/` yields only `(1, "a")`.
/// Any other empty element (`/a//b`, `//`) is yielded as `""` so the caller
/// can reject it with its offset.
///
/// Offsets count characters, not bytes: each element starts one past the end
/// of the previous element plus its separator.
///
/// # Performance
///
/// - **Allocations**: Zero (only borrows from input string)
/// - **Complexity**: O(n) over the path length
///
/// # Examples
///
/// ```
/// use uri_pattern::path::SegmentSplit;
///
/// let elements: Vec<(usize, &str)> = SegmentSplit::new("/users/{id}").collect();
/// assert_eq!(elements, vec![(1, "users"), (7, "{id}")]);
/// ```
#[derive(Debug, Clone)]
pub struct SegmentSplit<'a> {
    rest: Option<&'a str>,
    offset: usize,
}

impl<'a> SegmentSplit<'a> {
    /// Creates a splitter for a path that starts with `/`
    ///
    /// A path without the leading separator is split from its first
    /// character; callers validate the separator before splitting.
    pub fn new(path: &'a str) -> Self {
        let body = path.strip_prefix('/').unwrap_or(path);
        let rest = if body.is_empty() {
            None
        } else {
            Some(body.strip_suffix('/').unwrap_or(body))
        };

        Self { rest, offset: 1 }
    }
}

impl<'a> Iterator for SegmentSplit<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;

        let (element, remainder) = match rest.split_once('/') {
            Some((head, tail)) => (head, Some(tail)),
            None => (rest, None),
        };

        let offset = self.offset;
        // +1 for the consumed `/`
        self.offset += element.chars().count() + 1;
        self.rest = remainder;

        Some((offset, element))
    }
}
