use attrmodel::strings::{lower, replace, snake, studly, substr, ucfirst, upper};

#[test]
fn test_replace() {
    assert_eq!(replace("planet", "world", "hello planet", true), "hello world");
    assert_eq!(replace(&["planet"], &["world"], "hello planet", false), "hello world");
}

#[test]
fn test_upper() {
    assert_eq!(upper("hello world"), "HELLO WORLD");
}

#[test]
fn test_lower() {
    assert_eq!(lower("HELLO WORLD"), "hello world");
}

#[test]
fn test_ucfirst() {
    assert_eq!(ucfirst("hello world"), "Hello world");
}

#[test]
fn test_substr() {
    assert_eq!(substr("Hello world", 0, Some(5)), "Hello");
    assert_eq!(substr("Hello world", 6, None), "world");
}

#[test]
fn test_studly() {
    assert_eq!(studly("hello world"), "HelloWorld");
    assert_eq!(studly("hello_world"), "HelloWorld");
}

#[test]
fn test_snake() {
    assert_eq!(snake("HelloWorld", "_"), "hello_world");
    assert_eq!(snake("HelloWorld", "-"), "hello-world");
}
