// volt-core - Control flow and operator tests
// Copyright (c) 2026 The Volt Authors. MIT licensed.

mod common;
use common::*;

#[test]
fn for_to_is_half_open() {
    assert_shows!("set s=0; for i in 1 to 5 { set s=s+i }; show s", ["10"]);
}

#[test]
fn for_to_with_equal_bounds_runs_zero_times() {
    assert_shows!("set n=0; for i in 3 to 3 { set n=n+1 }; show n", ["0"]);
}

#[test]
fn for_in_list_and_indexed_variant() {
    let src = r#"
set out = []
for x in [10, 20] { out.push(x) }
for i, v in [10, 20] { out.push(i * 100 + v) }
show out
"#;
    assert_shows!(src, ["[10, 20, 10, 120]"]);
}

#[test]
fn repeat_n_times() {
    assert_shows!("set n=0; for 5 { set n=n+1 }; show n", ["5"]);
}

#[test]
fn while_with_break_and_continue() {
    let src = r#"
set out = []
set i = 0
while true {
    set i = i + 1
    if i == 3 { continue }
    if i > 5 { break }
    out.push(i)
}
show out
"#;
    assert_shows!(src, ["[1, 2, 4, 5]"]);
}

#[test]
fn break_exits_only_the_innermost_loop() {
    let src = r#"
set out = []
for i in 0 to 3 {
    for j in 0 to 3 {
        if j == 1 { break }
        out.push(f"{i}{j}")
    }
}
show out
"#;
    assert_shows!(src, ["[00, 10, 20]"]);
}

#[test]
fn if_elif_else_chains() {
    let src = r#"
func grade(n) {
    if n >= 90 { return "A" }
    else if n >= 80 { return "B" }
    else if n >= 70 { return "C" }
    else { return "F" }
}
show grade(95) + grade(85) + grade(72) + grade(10)
"#;
    assert_shows!(src, ["ABCF"]);
}

#[test]
fn match_selects_by_equality() {
    let src = r#"
func describe(x) {
    match x {
        case 1 { return "one" }
        case "two" { return "two!" }
        default { return "other" }
    }
}
show describe(1)
show describe("two")
show describe([])
"#;
    assert_shows!(src, ["one", "two!", "other"]);
}

#[test]
fn match_without_matching_case_or_default_does_nothing() {
    assert_shows!("match 9 { case 1 { show \"no\" } }\nshow \"after\"", ["after"]);
}

#[test]
fn truthiness_drives_conditions() {
    let src = r#"
set out = []
if "" { out.push("s") }
if 0 { out.push("i") }
if [] { out.push("l") }
if {} { out.push("d") }
if null { out.push("n") }
if "x" { out.push("S") }
if 2 { out.push("I") }
if [0] { out.push("L") }
show out
"#;
    assert_shows!(src, ["[S, I, L]"]);
}

#[test]
fn and_or_return_operand_values() {
    assert_shows!(r#"show 0 or "fallback""#, ["fallback"]);
    assert_shows!("show 1 and 2", ["2"]);
    assert_shows!("show false and 1", ["false"]);
    assert_shows!(r#"show "first" or "second""#, ["first"]);
}

#[test]
fn and_or_short_circuit() {
    let src = r#"
func boom() { throw "called" }
show false and boom()
show true or boom()
"#;
    assert_shows!(src, ["false", "true"]);
}

#[test]
fn symbolic_logical_aliases() {
    assert_shows!("show true && false || !false", ["true"]);
}

#[test]
fn division_always_produces_a_float() {
    assert_shows!("show 7 / 2", ["3.5"]);
    assert_shows!("show 10 / 2", ["5"]);
    assert_shows!("show 1 / 3 > 0.33", ["true"]);
}

#[test]
fn modulo_is_truncated() {
    assert_shows!("show 7 % 3", ["1"]);
    assert_shows!("show -7 % 3", ["-1"]);
    assert_shows!("show 7.5 % 2", ["1.5"]);
}

#[test]
fn division_and_modulo_by_zero_are_errors() {
    assert_run_err!("show 1 / 0", "Division by zero");
    assert_run_err!("show 1 % 0", "Division by zero");
    assert_run_err!("show 1.0 / 0.0", "Division by zero");
}

#[test]
fn unary_operators() {
    assert_shows!("show -5 + 2", ["-3"]);
    assert_shows!("show not 0", ["true"]);
    assert_shows!("show not \"x\"", ["false"]);
}

#[test]
fn numeric_comparisons_cross_int_and_float() {
    assert_shows!("show 1 == 1.0", ["true"]);
    assert_shows!("show 1 < 1.5", ["true"]);
    assert_shows!("show 2.0 >= 2", ["true"]);
}

#[test]
fn cross_type_equality_is_false() {
    assert_shows!(r#"show 1 == "1""#, ["false"]);
    assert_shows!("show null == false", ["false"]);
    assert_shows!(r#"show [1] == [1]"#, ["true"]);
}

#[test]
fn cross_type_ordering_is_an_error() {
    assert_run_err!(r#"show 1 < "2""#, "Cannot compare");
}

#[test]
fn string_ordering_is_lexicographic() {
    assert_shows!(r#"show "apple" < "banana""#, ["true"]);
    assert_shows!(r#"show "b" < "apple""#, ["false"]);
}

#[test]
fn integer_overflow_is_an_error() {
    assert_run_err!(
        "show 9223372036854775807 + 1",
        "Integer overflow"
    );
}

#[test]
fn ask_binds_the_raw_line_as_a_string() {
    let output = run_with_input(
        "ask \"n? \" -> n\nshow type(n)\nshow n + n",
        &["12"],
    )
    .unwrap();
    assert_eq!(output, vec!["string".to_string(), "1212".to_string()]);
}

#[test]
fn comments_are_ignored() {
    let src = r#"
-- a full-line comment
set x = 1 -- a trailing comment
show x
"#;
    assert_shows!(src, ["1"]);
}
