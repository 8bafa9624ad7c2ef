//! Tests for the encode, decode and case functions.

use macrofunc::{UNRESOLVED, evaluate};

const NONE: [&str; 0] = [];

#[test]
fn btoa_encodes_base64() {
    assert_eq!(evaluate("hi", "btoa", &[""]), "aGk=");
    assert_eq!(evaluate("hi", "btoa", &NONE), "aGk=");
    assert_eq!(evaluate("", "btoa", &NONE), "");
    assert_eq!(evaluate("é", "btoa", &NONE), "w6k=");
}

#[test]
fn btoa_rejects_parameters() {
    assert_eq!(evaluate("hi", "btoa", &["x"]), UNRESOLVED);
}

#[test]
fn urlencode_escapes_reserved_characters() {
    assert_eq!(evaluate("a b&c/d?e=f", "urlencode", &NONE), "a%20b%26c%2Fd%3Fe%3Df");
    assert_eq!(evaluate("AZaz09-_.~", "urlencode", &NONE), "AZaz09-_.~");
    assert_eq!(evaluate("1+1", "urlencode", &NONE), "1%2B1");
    assert_eq!(evaluate("é", "urlencode", &NONE), "%C3%A9");
}

#[test]
fn urldecode_decodes_plus_and_percent() {
    assert_eq!(evaluate("a+b%20c", "urldecode", &NONE), "a b c");
    assert_eq!(evaluate("%C3%A9t%C3%A9", "urldecode", &NONE), "été");
    assert_eq!(evaluate("1%2B1", "urldecode", &NONE), "1+1");
}

#[test]
fn urldecode_leaves_malformed_escapes() {
    assert_eq!(evaluate("100%", "urldecode", &NONE), "100%");
    assert_eq!(evaluate("%zz", "urldecode", &NONE), "%zz");
}

#[test]
fn urldecode_replaces_invalid_utf8() {
    assert_eq!(evaluate("a%FFb", "urldecode", &NONE), "a?b");
}

#[test]
fn htmlencode_escapes_special_characters() {
    assert_eq!(
        evaluate("it's <ok>", "htmlencode", &[""]),
        "it&#39;s &lt;ok&gt;"
    );
    assert_eq!(
        evaluate("\"a\" & 'b'", "htmlencode", &NONE),
        "&quot;a&quot; &amp; &#39;b&#39;"
    );
    assert_eq!(evaluate("&amp;", "htmlencode", &NONE), "&amp;amp;");
}

#[test]
fn htmldecode_decodes_entities() {
    assert_eq!(
        evaluate("&lt;p&gt; &amp; &quot;x&quot;", "htmldecode", &NONE),
        "<p> & \"x\""
    );
    assert_eq!(evaluate("&#39;&#x41;&#66;", "htmldecode", &NONE), "'AB");
    assert_eq!(evaluate("&copy; &eacute;", "htmldecode", &NONE), "© é");
    assert_eq!(evaluate("a & b", "htmldecode", &NONE), "a & b");
}

#[test]
fn case_conversion_is_ascii_only() {
    assert_eq!(evaluate("Hello World", "lowercase", &NONE), "hello world");
    assert_eq!(evaluate("Hello World", "uppercase", &NONE), "HELLO WORLD");
    assert_eq!(evaluate("ÄBC", "lowercase", &NONE), "Äbc");
    assert_eq!(evaluate("straße", "uppercase", &NONE), "STRAßE");
}
