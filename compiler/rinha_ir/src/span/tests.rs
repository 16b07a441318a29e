use super::*;

#[test]
fn test_len_and_emptiness() {
    assert_eq!(Span::new(26, 31).len(), 5);
    assert!(!Span::new(26, 31).is_empty());
    assert!(Span::DUMMY.is_empty());
    assert_eq!(Span::new(9, 3).len(), 0);
}

#[test]
fn test_merge_operand_spans() {
    // `a + b` in `fn (a, b) => { a + b }`
    let lhs = Span::new(26, 27);
    let rhs = Span::new(30, 31);
    assert_eq!(lhs.merge(rhs), Span::new(26, 31));
    assert_eq!(rhs.merge(lhs), Span::new(26, 31));
}

#[test]
fn test_span_try_from_offsets() {
    assert_eq!(Span::try_from_offsets(3, 9), Ok(Span::new(3, 9)));

    let too_large = u64::from(u32::MAX) + 1;
    assert!(matches!(
        Span::try_from_offsets(too_large, too_large),
        Err(SpanError::StartTooLarge(_))
    ));
    assert!(matches!(
        Span::try_from_offsets(0, too_large),
        Err(SpanError::EndTooLarge(_))
    ));
}

#[test]
fn test_span_error_display() {
    assert_eq!(
        SpanError::EndTooLarge(0x1_0000_0000).to_string(),
        "end offset 4294967296 does not fit in 32 bits"
    );
}

#[test]
fn test_span_display_is_start_colon_end() {
    assert_eq!(Span::new(4, 11).to_string(), "4:11");
    assert_eq!(format!("{:?}", Span::new(4, 11)), "4..11");
}

#[test]
fn test_location_identity_includes_file() {
    let a = Location::new(Name::from_raw(1), Span::new(0, 5));
    let b = Location::new(Name::from_raw(2), Span::new(0, 5));
    assert_ne!(a, b);
    assert_eq!(a, Location::new(Name::from_raw(1), Span::new(0, 5)));
}

#[test]
fn test_location_to_keeps_left_file() {
    let a = Location::new(Name::from_raw(1), Span::new(2, 5));
    let b = Location::new(Name::from_raw(2), Span::new(8, 12));
    let joined = a.to(b);
    assert_eq!(joined.file, Name::from_raw(1));
    assert_eq!(joined.span, Span::new(2, 12));
}
