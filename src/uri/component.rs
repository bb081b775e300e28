/// Labeled component of a parsed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UrlField {
    Scheme,
    UserInfo,
    Host,
    Port,
    Path,
    Query,
    Fragment,
}

impl UrlField {
    pub(crate) const COUNT: usize = 7;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Span {
    off: u16,
    len: u16,
}

/// Parse result handed over by the URL parser: a presence bit and byte range
/// per labeled component of the original URL text.
///
/// This crate only consumes the result; the parser side fills it with
/// [`set`][ParsedUrl::set].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    field_set: u16,
    spans: [Span; UrlField::COUNT],
}

impl ParsedUrl {
    /// Creates a result with every component absent.
    #[inline]
    pub const fn new() -> Self {
        Self {
            field_set: 0,
            spans: [Span { off: 0, len: 0 }; UrlField::COUNT],
        }
    }

    /// Marks `field` present at byte range `off..off + len` of the URL text.
    #[inline]
    pub const fn set(&mut self, field: UrlField, off: u16, len: u16) {
        self.field_set |= 1 << field as u16;
        self.spans[field as usize] = Span { off, len };
    }

    /// Returns `true` if the parser marked `field` present.
    #[inline]
    pub const fn has(&self, field: UrlField) -> bool {
        self.field_set & (1 << field as u16) != 0
    }

    /// Returns the text of `field` within `url`, or `None` when absent.
    pub fn get<'a>(&self, url: &'a str, field: UrlField) -> Option<&'a str> {
        if !self.has(field) {
            return None;
        }
        let Span { off, len } = self.spans[field as usize];
        url.get(off as usize..off as usize + len as usize)
    }
}

/// Copies the `field` component of `url` into `dest`.
///
/// If the parser did not mark `field` present, `dest` is left completely
/// untouched, so callers pre-initialize it to the default they want.
pub fn copy_url_component(dest: &mut String, u: &ParsedUrl, field: UrlField, url: &str) {
    if let Some(component) = u.get(url, field) {
        dest.clear();
        dest.push_str(component);
    }
}
