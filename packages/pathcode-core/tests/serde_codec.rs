#[cfg(feature = "serde")]
#[test]
fn codec_json_roundtrips_with_its_width() {
    use pathcode_core::PathCodec;

    let codec = PathCodec::new(5).unwrap();
    let json = serde_json::to_string(&codec).expect("serialize PathCodec");

    // Embedders persist the width alongside their tree schema; a rename here
    // would silently break their stored configuration.
    assert!(
        json.contains("\"code_length\":5"),
        "expected code_length field, got: {json}"
    );

    let roundtrip: PathCodec = serde_json::from_str(&json).expect("deserialize PathCodec");
    assert_eq!(roundtrip, codec);
    assert_eq!(roundtrip.create_code(&[1]), Some("00001".to_owned()));
}
