use super::{Field, FieldFlags, HeaderIndex, HeaderToken, make_field, make_field_static};
use super::lookup_token;

#[test]
fn test_lookup_token() {
    assert_eq!(lookup_token(b"content-length"), Some(HeaderToken::ContentLength));
    assert_eq!(lookup_token(b":authority"), Some(HeaderToken::PseudoAuthority));
    assert_eq!(lookup_token(b":protocol"), Some(HeaderToken::PseudoProtocol));
    assert_eq!(lookup_token(b"te"), Some(HeaderToken::Te));
    assert_eq!(lookup_token(b"sec-websocket-accept"), Some(HeaderToken::SecWebsocketAccept));
    assert_eq!(lookup_token(b"x-forwarded-for"), Some(HeaderToken::XForwardedFor));
    assert_eq!(lookup_token(b"x-forwarded-proto"), Some(HeaderToken::XForwardedProto));

    assert_eq!(lookup_token(b""), None);
    assert_eq!(lookup_token(b"x-unknown"), None);
    assert_eq!(lookup_token(b"content-lengt"), None);
    assert_eq!(lookup_token(b"content-lengthh"), None);
    // case normalization is the caller's job, uppercase does not match
    assert_eq!(lookup_token(b"Content-Length"), None);
}

#[test]
fn test_lookup_token_all() {
    for token in HeaderToken::ALL {
        assert_eq!(lookup_token(token.as_str().as_bytes()), Some(token));
    }
}

#[test]
fn test_lookup_token_no_false_positive() {
    // Flipping any single byte of a recognized name must classify as
    // unrecognized, never as another valid token.
    for token in HeaderToken::ALL {
        let name = token.as_str().as_bytes();
        let mut mutated = name.to_vec();
        for pos in 0..name.len() {
            for byte in 0..=u8::MAX {
                if byte == name[pos] {
                    continue;
                }
                mutated[pos] = byte;
                assert_eq!(
                    lookup_token(&mutated),
                    None,
                    "{:?} flipped at {pos} to {byte:#x}",
                    token.as_str(),
                );
            }
            mutated[pos] = name[pos];
        }
    }
}

#[test]
fn test_header_index() {
    let mut index = HeaderIndex::new();
    assert_eq!(index.get(HeaderToken::Host), None);
    assert!(!index.contains(HeaderToken::Host));

    index.record(HeaderToken::Host, 2);
    index.record(HeaderToken::ContentLength, 4);
    assert_eq!(index.get(HeaderToken::Host), Some(2));
    assert_eq!(index.get(HeaderToken::ContentLength), Some(4));
    assert_eq!(index.get(HeaderToken::Cookie), None);

    index.reset();
    assert_eq!(index.get(HeaderToken::Host), None);
    assert_eq!(index, HeaderIndex::default());
}

#[test]
fn test_header_index_position_bound() {
    let mut index = HeaderIndex::new();
    index.record(HeaderToken::Host, i16::MAX as usize);
    assert_eq!(index.get(HeaderToken::Host), Some(i16::MAX as usize));
}

#[test]
#[should_panic]
#[cfg(debug_assertions)]
fn test_header_index_position_overflow() {
    let mut index = HeaderIndex::new();
    index.record(HeaderToken::Host, i16::MAX as usize + 1);
}

#[test]
fn test_header_index_scan() {
    let names: [&[u8]; 5] = [
        b":method",
        b"cookie",
        b"x-custom",
        b"cookie",
        b"content-length",
    ];
    let index = HeaderIndex::scan(names);

    assert_eq!(index.get(HeaderToken::PseudoMethod), Some(0));
    // repeated name keeps the last occurrence
    assert_eq!(index.get(HeaderToken::Cookie), Some(3));
    assert_eq!(index.get(HeaderToken::ContentLength), Some(4));
    // unrecognized names leave no trace
    assert_eq!(index.get(HeaderToken::Host), None);
}

#[test]
fn test_make_field() {
    let value = b"text/html".to_vec();
    let field = make_field(b"content-type", &value, false);
    assert_eq!(field.name, b"content-type");
    assert_eq!(field.value, b"text/html");
    assert_eq!(field.flags, FieldFlags::NONE);

    let field = make_field(b"cookie", b"k=v", true);
    assert!(field.flags.contains(FieldFlags::NO_INDEX));
    assert!(!field.flags.contains(FieldFlags::NO_COPY_NAME));
}

#[test]
fn test_make_field_static() {
    let field = make_field_static("server", b"tsuji");
    assert_eq!(field.name.len(), "server".len());
    assert_eq!(field.name, b"server");
    assert!(field.flags.contains(FieldFlags::NO_COPY_NAME));

    // pseudo-header literals are accepted
    let field = make_field_static(":status", b"200");
    assert_eq!(field.name, b":status");
}

#[test]
fn test_field_flags() {
    let both = FieldFlags::NO_INDEX | FieldFlags::NO_COPY_NAME;
    assert!(both.contains(FieldFlags::NO_INDEX));
    assert!(both.contains(FieldFlags::NO_COPY_NAME));
    assert!(both.contains(FieldFlags::NONE));

    let mut flags = FieldFlags::NONE;
    flags |= FieldFlags::NO_INDEX;
    assert_eq!(flags, FieldFlags::NO_INDEX);

    let field = Field::new(b"date", b"today");
    assert_eq!(field.flags.bits(), 0);
}
