/// Token identity of a recognized header field name.
///
/// Only the header names the pipeline is interested in are tokenized.
/// Pseudo-headers carry a `Pseudo` prefix, every other variant names a
/// literal wire header.
///
/// The discriminant doubles as the slot of this token inside
/// [`HeaderIndex`][super::HeaderIndex].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HeaderToken {
    PseudoAuthority,
    PseudoHost,
    PseudoMethod,
    PseudoPath,
    PseudoProtocol,
    PseudoScheme,
    PseudoStatus,
    AcceptEncoding,
    AcceptLanguage,
    AltSvc,
    CacheControl,
    Connection,
    ContentLength,
    ContentType,
    Cookie,
    Date,
    EarlyData,
    Expect,
    Forwarded,
    Host,
    Http2Settings,
    IfModifiedSince,
    KeepAlive,
    Link,
    Location,
    ProxyConnection,
    SecWebsocketAccept,
    SecWebsocketKey,
    Server,
    Te,
    Trailer,
    TransferEncoding,
    Upgrade,
    UserAgent,
    Via,
    XForwardedFor,
    XForwardedProto,
}

impl HeaderToken {
    /// Number of recognized tokens, which is also the size of
    /// [`HeaderIndex`][super::HeaderIndex].
    pub const COUNT: usize = 37;

    /// All recognized tokens, in table order.
    pub const ALL: [HeaderToken; Self::COUNT] = [
        Self::PseudoAuthority,
        Self::PseudoHost,
        Self::PseudoMethod,
        Self::PseudoPath,
        Self::PseudoProtocol,
        Self::PseudoScheme,
        Self::PseudoStatus,
        Self::AcceptEncoding,
        Self::AcceptLanguage,
        Self::AltSvc,
        Self::CacheControl,
        Self::Connection,
        Self::ContentLength,
        Self::ContentType,
        Self::Cookie,
        Self::Date,
        Self::EarlyData,
        Self::Expect,
        Self::Forwarded,
        Self::Host,
        Self::Http2Settings,
        Self::IfModifiedSince,
        Self::KeepAlive,
        Self::Link,
        Self::Location,
        Self::ProxyConnection,
        Self::SecWebsocketAccept,
        Self::SecWebsocketKey,
        Self::Server,
        Self::Te,
        Self::Trailer,
        Self::TransferEncoding,
        Self::Upgrade,
        Self::UserAgent,
        Self::Via,
        Self::XForwardedFor,
        Self::XForwardedProto,
    ];

    /// Returns the wire name of this token, e.g: `"content-length"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PseudoAuthority => ":authority",
            Self::PseudoHost => ":host",
            Self::PseudoMethod => ":method",
            Self::PseudoPath => ":path",
            Self::PseudoProtocol => ":protocol",
            Self::PseudoScheme => ":scheme",
            Self::PseudoStatus => ":status",
            Self::AcceptEncoding => "accept-encoding",
            Self::AcceptLanguage => "accept-language",
            Self::AltSvc => "alt-svc",
            Self::CacheControl => "cache-control",
            Self::Connection => "connection",
            Self::ContentLength => "content-length",
            Self::ContentType => "content-type",
            Self::Cookie => "cookie",
            Self::Date => "date",
            Self::EarlyData => "early-data",
            Self::Expect => "expect",
            Self::Forwarded => "forwarded",
            Self::Host => "host",
            Self::Http2Settings => "http2-settings",
            Self::IfModifiedSince => "if-modified-since",
            Self::KeepAlive => "keep-alive",
            Self::Link => "link",
            Self::Location => "location",
            Self::ProxyConnection => "proxy-connection",
            Self::SecWebsocketAccept => "sec-websocket-accept",
            Self::SecWebsocketKey => "sec-websocket-key",
            Self::Server => "server",
            Self::Te => "te",
            Self::Trailer => "trailer",
            Self::TransferEncoding => "transfer-encoding",
            Self::Upgrade => "upgrade",
            Self::UserAgent => "user-agent",
            Self::Via => "via",
            Self::XForwardedFor => "x-forwarded-for",
            Self::XForwardedProto => "x-forwarded-proto",
        }
    }

    /// Returns the slot of this token inside [`HeaderIndex`][super::HeaderIndex].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Looks up the token for header field name `name`.
///
/// `name` must already be normalized to ASCII lowercase; a name containing
/// uppercase bytes simply does not match. Matching is exact: a single-byte
/// mutation of a recognized name never resolves to a token, so an
/// unrecognized header can not be misclassified as a sensitive one.
///
/// Runs in `O(name.len())` without allocating, and never fails; names outside
/// the table return `None`.
pub fn lookup_token(name: &[u8]) -> Option<HeaderToken> {
    use HeaderToken::*;

    // Candidates are partitioned by length first, which leaves at most a
    // handful of full byte comparisons per input.
    let token = match name.len() {
        2 => match name {
            b"te" => Te,
            _ => return None,
        },
        3 => match name {
            b"via" => Via,
            _ => return None,
        },
        4 => match name {
            b"date" => Date,
            b"host" => Host,
            b"link" => Link,
            _ => return None,
        },
        5 => match name {
            b":host" => PseudoHost,
            b":path" => PseudoPath,
            _ => return None,
        },
        6 => match name {
            b"cookie" => Cookie,
            b"expect" => Expect,
            b"server" => Server,
            _ => return None,
        },
        7 => match name {
            b":method" => PseudoMethod,
            b":scheme" => PseudoScheme,
            b":status" => PseudoStatus,
            b"alt-svc" => AltSvc,
            b"trailer" => Trailer,
            b"upgrade" => Upgrade,
            _ => return None,
        },
        8 => match name {
            b"location" => Location,
            _ => return None,
        },
        9 => match name {
            b":protocol" => PseudoProtocol,
            b"forwarded" => Forwarded,
            _ => return None,
        },
        10 => match name {
            b":authority" => PseudoAuthority,
            b"connection" => Connection,
            b"early-data" => EarlyData,
            b"keep-alive" => KeepAlive,
            b"user-agent" => UserAgent,
            _ => return None,
        },
        12 => match name {
            b"content-type" => ContentType,
            _ => return None,
        },
        13 => match name {
            b"cache-control" => CacheControl,
            _ => return None,
        },
        14 => match name {
            b"content-length" => ContentLength,
            b"http2-settings" => Http2Settings,
            _ => return None,
        },
        15 => match name {
            b"accept-encoding" => AcceptEncoding,
            b"accept-language" => AcceptLanguage,
            b"x-forwarded-for" => XForwardedFor,
            _ => return None,
        },
        16 => match name {
            b"proxy-connection" => ProxyConnection,
            _ => return None,
        },
        17 => match name {
            b"if-modified-since" => IfModifiedSince,
            b"sec-websocket-key" => SecWebsocketKey,
            b"transfer-encoding" => TransferEncoding,
            b"x-forwarded-proto" => XForwardedProto,
            _ => return None,
        },
        20 => match name {
            b"sec-websocket-accept" => SecWebsocketAccept,
            _ => return None,
        },
        _ => return None,
    };

    Some(token)
}

impl std::fmt::Display for HeaderToken {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
