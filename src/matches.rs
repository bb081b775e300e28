macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            // SAFETY: the pattern size is equal to u8::MAX
            unsafe { *PAT.as_ptr().add($byte as usize) }
        }
    };
}

byte_map! {
    /// Specialized `token` for lowercase only header name.
    ///
    /// token   = 1*tchar
    /// tchar   = "!" / "#" / "$" / "%" / "&" / "'" / "*"
    ///         / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
    ///         / DIGIT / ALPHA
    #[inline(always)]
    pub const fn is_token_lowercase(byte: u8) {
        matches!(
            byte,
            | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*'
            | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
            | b'0'..=b'9' | b'a'..=b'z'
        )
    }
}

byte_map! {
    /// segment         = *pchar
    /// path-abempty    = *( "/" / segment )
    /// pchar           = unreserved / pct-encoded / sub-delims / ":" / "@"
    #[inline(always)]
    pub const fn is_path(byte: u8) {
        byte.is_ascii_alphanumeric()
            || matches!(
                byte,
                | b'-' | b'.' | b'_' | b'~' | b'%'
                | b'!' | b'$' | b'&' | b'\'' | b'(' | b')'
                | b'*' | b'+' | b',' | b';' | b'='
                | b':' | b'@' | b'/'
            )
    }
}
