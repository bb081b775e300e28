//! Status code text lookups and the response-body-presence rule.
use bytes::{Bytes, BytesMut};

/// Returns the standard short reason-phrase for `status`, e.g: `"Not Found"`.
///
/// Codes absent from the table return an empty string, never an error; HTTP/2
/// carries no reason-phrase on the wire so the text is cosmetic anyway.
pub const fn reason_phrase(status: u16) -> &'static str {
    match status {
        100 => "Continue",
        101 => "Switching Protocols",
        103 => "Early Hints",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Content Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        421 => "Misdirected Request",
        425 => "Too Early",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        511 => "Network Authentication Required",
        _ => "",
    }
}

/// Renders `status` as decimal digits into the scratch buffer, e.g: `"404"`.
///
/// No leading zeros; any code fits, not only the conventional three digits.
/// The returned view shares the buffer's allocation, see the crate notes on
/// scratch buffers.
pub fn stringify_status(buf: &mut BytesMut, status: u16) -> Bytes {
    let mut digits = itoa::Buffer::new();
    buf.extend_from_slice(digits.format(status).as_bytes());
    buf.split().freeze()
}

/// Returns `true` if a response with `status` may carry a body.
///
/// Informational responses, `204 No Content` and `304 Not Modified` never
/// carry one.
#[inline]
pub const fn expect_response_body(status: u16) -> bool {
    !matches!(status, 100..=199 | 204 | 304)
}

/// Returns `true` if a response to `method` with `status` may carry a body.
///
/// A response to `HEAD` never carries a body regardless of status; otherwise
/// the status-only rule of [`expect_response_body`] applies.
#[inline]
pub fn expect_response_body_for(method: &str, status: u16) -> bool {
    method != "HEAD" && expect_response_body(status)
}

// ===== Tests =====

#[cfg(test)]
mod test {
    use bytes::BytesMut;

    use super::{expect_response_body, expect_response_body_for, reason_phrase, stringify_status};

    #[test]
    fn test_reason_phrase() {
        assert_eq!(reason_phrase(200), "OK");
        assert_eq!(reason_phrase(404), "Not Found");
        assert_eq!(reason_phrase(451), "Unavailable For Legal Reasons");
        assert_eq!(reason_phrase(999), "");
        assert_eq!(reason_phrase(0), "");
        assert_eq!(reason_phrase(306), "");
    }

    #[test]
    fn test_stringify_status() {
        let mut buf = BytesMut::new();
        assert_eq!(stringify_status(&mut buf, 404), "404".as_bytes());
        assert_eq!(stringify_status(&mut buf, 0), "0".as_bytes());
        assert_eq!(stringify_status(&mut buf, 65535), "65535".as_bytes());

        // views share one scratch buffer
        let a = stringify_status(&mut buf, 200);
        let b = stringify_status(&mut buf, 302);
        assert_eq!(a, "200".as_bytes());
        assert_eq!(b, "302".as_bytes());
    }

    #[test]
    fn test_expect_response_body() {
        assert!(expect_response_body(200));
        assert!(expect_response_body(404));
        assert!(expect_response_body(500));

        assert!(!expect_response_body(100));
        assert!(!expect_response_body(101));
        assert!(!expect_response_body(199));
        assert!(!expect_response_body(204));
        assert!(!expect_response_body(304));
    }

    #[test]
    fn test_expect_response_body_for() {
        assert!(expect_response_body_for("GET", 200));
        assert!(expect_response_body_for("POST", 404));
        assert!(!expect_response_body_for("GET", 204));

        assert!(!expect_response_body_for("HEAD", 200));
        assert!(!expect_response_body_for("HEAD", 404));
        // method comparison is exact, HEAD goes on the wire uppercase
        assert!(expect_response_body_for("head", 200));
    }
}
