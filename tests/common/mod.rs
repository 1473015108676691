//! Shared test utilities for lzcodec integration tests.

#![allow(dead_code)]

use lzcodec::{compress_to_base64, decompress_from_base64};

/// Strings that exercise every literal width and the dictionary edge cases.
pub const SAMPLE_TEXTS: &[&str] = &[
    "",
    "a",
    "The quick brown fox",
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    "TOBEORNOTTOBEORTOBEORNOT",
    "h\u{e9}llo w\u{f6}rld",
    "\u{65e5}\u{672c}\u{8a9e}\u{30c6}\u{30ad}\u{30b9}\u{30c8}",
    "\u{1F600} emoji \u{1F680}",
    "line one\nline two\r\n\ttabbed\0nul",
];

/// Known Base64 outputs of existing lz-string producers.
pub const BASE64_VECTORS: &[(&str, &str)] = &[
    ("a", "IZA="),
    ("The quick brown fox", "CoCwpgBAjgrglgYwNYQEYCcD2B3AdhAM0wA8g==="),
    ("Hello, world", "BIUwNmD2A0AEDukBOYAmQ==="),
    ("aaaaaaaaaa", "IY1o"),
    ("ababababab", "IYI17Eg="),
    ("TOBEORNOTTOBEORTOBEORNOT", "CoeQQgoiBKByLFJGSpwUA==="),
    ("h\u{e9}llo w\u{f6}rld", "BYS4NmD2AEDuBvAnMATIA==="),
    ("\u{65e5}\u{672c}\u{8a9e}\u{30c6}\u{30ad}\u{30b9}\u{30c8}", "qemhpzR5UYYwyLUMidDIEwxA"),
    ("\u{1F600} emoji", "rwbgA9gECmC2D2BWBLIA"),
    (r#"{"l":5,"v":1}"#, "N4IgNiBcCsA0IDcoEYC+Q==="),
];

/// A progress payload resembling authoring-tool suspend data, with the
/// resume position recorded in all four supported places.
pub fn suspend_payload(slide_index: u32) -> String {
    format!(
        concat!(
            r#"{{"v":2,"d":[{{"n":"intro","c":1}},{{"n":"quiz","c":0}}],"#,
            r#""l":{idx},"scene_slide":"1_{idx}","#,
            r#""vars":[["score",80],["l",{idx}],["scene_slide","1_{idx}"]],"#,
            r#""note":"slide {idx} of 12"}}"#
        ),
        idx = slide_index
    )
}

/// Compress `text` and fail the test if it does not decompress back.
pub fn compress_checked(text: &str) -> String {
    let encoded = compress_to_base64(text);
    let decoded = decompress_from_base64(&encoded).expect("decompress");
    assert_eq!(decoded, text, "round trip of {text:?}");
    encoded
}
