// volt-core - String method tests
// Copyright (c) 2026 The Volt Authors. MIT licensed.

mod common;
use common::*;

#[test]
fn trim_upper_lower() {
    assert_shows!(r#"show "  hi  ".trim()"#, ["hi"]);
    assert_shows!(r#"show "  hi  ".trimStart()"#, ["hi  "]);
    assert_shows!(r#"show "  hi  ".trimEnd()"#, ["  hi"]);
    assert_shows!(r#"show "volt".upper()"#, ["VOLT"]);
    assert_shows!(r#"show "VOLT".lower()"#, ["volt"]);
}

#[test]
fn chained_methods_are_pure() {
    let src = r#"
set s = "  mixed Case  "
show s.trim().upper()
show s.trim().upper()
show s
"#;
    assert_shows!(src, ["MIXED CASE", "MIXED CASE", "  mixed Case  "]);
}

#[test]
fn replace_replaces_all_occurrences() {
    assert_shows!(r#"show "a-b-c".replace("-", "+")"#, ["a+b+c"]);
}

#[test]
fn split_with_and_without_separator() {
    assert_shows!(r#"show "a,b,c".split(",")"#, ["[a, b, c]"]);
    assert_shows!(r#"show "one two  three".split()"#, ["[one, two, three]"]);
}

#[test]
fn starts_ends_contains() {
    assert_shows!(r#"show "voltage".startsWith("volt")"#, ["true"]);
    assert_shows!(r#"show "voltage".endsWith("age")"#, ["true"]);
    assert_shows!(r#"show "voltage".contains("olt")"#, ["true"]);
    assert_shows!(r#"show "voltage".contains("watt")"#, ["false"]);
}

#[test]
fn index_of_is_code_point_based() {
    assert_shows!(r#"show "hello".indexOf("llo")"#, ["2"]);
    assert_shows!(r#"show "hello".indexOf("z")"#, ["-1"]);
    assert_shows!(r#"show "héllo".indexOf("llo")"#, ["2"]);
    assert_shows!(r#"show "abcabc".lastIndexOf("bc")"#, ["4"]);
}

#[test]
fn slice_is_end_exclusive() {
    assert_shows!(r#"show "abcdef".slice(1, 4)"#, ["bcd"]);
    assert_shows!(r#"show "abcdef".slice(2)"#, ["cdef"]);
    assert_shows!(r#"show "abcdef".slice(-2)"#, ["ef"]);
    assert_shows!(r#"show "abc".slice(2, 1)"#, [""]);
}

#[test]
fn repeat_and_reverse() {
    assert_shows!(r#"show "ab".repeat(3)"#, ["ababab"]);
    assert_shows!(r#"show "volt".reverse()"#, ["tlov"]);
    assert_run_err!(r#"show "x".repeat(-1)"#, "negative");
}

#[test]
fn length_is_in_code_points() {
    assert_shows!(r#"show "héllo".length()"#, ["5"]);
    assert_shows!(r#"show "héllo".length"#, ["5"]);
}

#[test]
fn indexing_yields_single_character_strings() {
    assert_shows!(r#"show "volt"[1]"#, ["o"]);
    assert_run_err!(r#"show "volt"[9]"#, "Index 9 out of range");
}

#[test]
fn to_int_and_to_float() {
    assert_shows!(r#"show "42".toInt() + 1"#, ["43"]);
    assert_shows!(r#"show " 42 ".toInt()"#, ["42"]);
    assert_shows!(r#"show "2.5".toFloat() * 2"#, ["5"]);
    assert_run_err!(r#""abc".toInt()"#, "Cannot convert 'abc' to int");
}

#[test]
fn to_list_splits_into_code_points() {
    assert_shows!(r#"show "abc".toList()"#, ["[a, b, c]"]);
}

#[test]
fn padding() {
    assert_shows!(r#"show "7".padStart(3, "0")"#, ["007"]);
    assert_shows!(r#"show "7".padEnd(3)"#, ["7  "]);
    assert_shows!(r#"show "1234".padStart(2, "0")"#, ["1234"]);
}

#[test]
fn predicates_and_count() {
    assert_shows!(r#"show "123".isDigit()"#, ["true"]);
    assert_shows!(r#"show "12a".isDigit()"#, ["false"]);
    assert_shows!(r#"show "abc".isAlpha()"#, ["true"]);
    assert_shows!(r#"show "".isEmpty()"#, ["true"]);
    assert_shows!(r#"show "banana".count("an")"#, ["2"]);
    assert_shows!(r#"show "banana".charAt(1)"#, ["a"]);
}

#[test]
fn concatenation_coerces_the_other_operand() {
    assert_shows!(r#"show "n=" + 5"#, ["n=5"]);
    assert_shows!(r#"show 5 + "!""#, ["5!"]);
    assert_shows!(r#"show "v" + true + null"#, ["vtruenull"]);
}

#[test]
fn unknown_method_is_an_error() {
    assert_run_err!(r#""s".nope()"#, "String has no method 'nope'");
}

#[test]
fn strings_iterate_by_character() {
    let src = r#"
set out = []
for ch in "abc" { out.push(ch) }
show out
"#;
    assert_shows!(src, ["[a, b, c]"]);
}
