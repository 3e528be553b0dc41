use pathcode_core::{Error, PathCodec};

fn codec() -> PathCodec {
    PathCodec::new(5).unwrap()
}

#[test]
fn removes_a_parent_prefix() {
    assert_eq!(
        codec()
            .remove_parent_code("00001.00002.00003", Some("00001"))
            .unwrap(),
        Some("00002.00003".to_owned())
    );
    assert_eq!(
        codec()
            .remove_parent_code("00001.00002.00003", Some("00001.00002"))
            .unwrap(),
        Some("00003".to_owned())
    );
}

#[test]
fn absent_parent_leaves_the_code_unchanged() {
    assert_eq!(
        codec().remove_parent_code("00001.00002", None).unwrap(),
        Some("00001.00002".to_owned())
    );
    assert_eq!(
        codec().remove_parent_code("00001.00002", Some("")).unwrap(),
        Some("00001.00002".to_owned())
    );
}

#[test]
fn equal_lengths_decompose_to_no_code() {
    assert_eq!(
        codec().remove_parent_code("00001", Some("00001")).unwrap(),
        None
    );
}

#[test]
fn empty_code_is_rejected() {
    assert!(matches!(
        codec().remove_parent_code("", Some("00001")),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        codec().remove_parent_code_by_level("", 1),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn removes_by_level() {
    let code = "00001.00002.00003";
    assert_eq!(
        codec().remove_parent_code_by_level(code, 0).unwrap(),
        Some(code.to_owned())
    );
    assert_eq!(
        codec().remove_parent_code_by_level(code, 1).unwrap(),
        Some("00002.00003".to_owned())
    );
    assert_eq!(
        codec().remove_parent_code_by_level(code, 2).unwrap(),
        Some("00003".to_owned())
    );
    // Consuming every segment leaves no code, not an error.
    assert_eq!(codec().remove_parent_code_by_level(code, 3).unwrap(), None);
}

#[test]
fn level_beyond_depth_is_rejected() {
    assert!(matches!(
        codec().remove_parent_code_by_level("00001.00002", 3),
        Err(Error::InvalidArgument(_))
    ));
}
