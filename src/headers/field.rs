use crate::matches;

/// Flags attached to a [`Field`] view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldFlags(u8);

impl FieldFlags {
    /// No flag set.
    pub const NONE: FieldFlags = FieldFlags(0);

    /// The field must be excluded from compression indexing state.
    pub const NO_INDEX: FieldFlags = FieldFlags(0b0000_0001);

    /// The name storage is not owned by the field; the receiver must not
    /// duplicate or free it.
    pub const NO_COPY_NAME: FieldFlags = FieldFlags(0b0000_0010);

    /// Returns `true` if every flag in `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: FieldFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the raw flag bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitOr for FieldFlags {
    type Output = FieldFlags;

    #[inline]
    fn bitor(self, rhs: FieldFlags) -> FieldFlags {
        FieldFlags(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for FieldFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: FieldFlags) {
        self.0 |= rhs.0;
    }
}

/// Zero-copy (name, value, flags) header field view.
///
/// The view borrows both buffers and holds no ownership; it is handed to the
/// wire-level header representation by value, at which point the receiver
/// copies or compresses the bytes. It must not outlive the buffers it was
/// built from.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub name: &'a [u8],
    pub value: &'a [u8],
    pub flags: FieldFlags,
}

impl<'a> Field<'a> {
    /// Creates a field view with no flag set.
    #[inline]
    pub const fn new(name: &'a [u8], value: &'a [u8]) -> Self {
        Self {
            name,
            value,
            flags: FieldFlags::NONE,
        }
    }
}

/// Creates a [`Field`] referencing `name` and `value` without copying.
///
/// With `no_index` set the field is flagged to be excluded from compression
/// indexing, for sensitive values such as cookies or authorization tokens.
#[inline]
pub const fn make_field<'a>(name: &'a [u8], value: &'a [u8], no_index: bool) -> Field<'a> {
    Field {
        name,
        value,
        flags: if no_index {
            FieldFlags::NO_INDEX
        } else {
            FieldFlags::NONE
        },
    }
}

/// Creates a [`Field`] from a fixed literal name.
///
/// The name length is computed from the literal once, and the field is
/// flagged [`NO_COPY_NAME`][FieldFlags::NO_COPY_NAME] since the name lives in
/// static storage.
///
/// # Panics
///
/// Panics if `name` is not a lowercase token, which for a literal name is a
/// compile time error in const context.
#[inline]
pub const fn make_field_static<'a>(name: &'static str, value: &'a [u8]) -> Field<'a> {
    validate_static_name(name.as_bytes());
    Field {
        name: name.as_bytes(),
        value,
        flags: FieldFlags::NO_COPY_NAME,
    }
}

/// field-name = token, sent lowercase on the wire.
///
/// A leading `:` is accepted for pseudo-header literals.
const fn validate_static_name(bytes: &[u8]) {
    assert!(!bytes.is_empty(), "field name cannot be empty");

    let mut rest = match bytes {
        [b':', rest @ ..] => rest,
        _ => bytes,
    };

    while let [byte, tail @ ..] = rest {
        assert!(
            matches::is_token_lowercase(*byte),
            "field name must be a lowercase token"
        );
        rest = tail;
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &String::from_utf8_lossy(self.name))
            .field("value", &String::from_utf8_lossy(self.value))
            .field("flags", &self.flags)
            .finish()
    }
}
