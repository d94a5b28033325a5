// volt-core - List and dict tests
// Copyright (c) 2026 The Volt Authors. MIT licensed.

mod common;
use common::*;

// ============================================================================
// Lists
// ============================================================================

#[test]
fn literals_indexing_and_length() {
    assert_shows!("set xs = [10, 20, 30]\nshow xs[0] + xs[2]", ["40"]);
    assert_shows!("show [1, 2, 3].length()", ["3"]);
    assert_shows!("show [].isEmpty()", ["true"]);
}

#[test]
fn negative_and_out_of_range_indices_are_errors() {
    assert_run_err!("show [1, 2][5]", "Index 5 out of range");
    assert_run_err!("show [1, 2][-1]", "Index -1 out of range");
}

#[test]
fn index_assignment_mutates() {
    assert_shows!("set xs = [1, 2, 3]\nset xs[1] = 9\nshow xs", ["[1, 9, 3]"]);
}

#[test]
fn lists_are_reference_shared() {
    let src = r#"
set a = [1, 2]
set b = a
b.push(3)
show a
"#;
    assert_shows!(src, ["[1, 2, 3]"]);
}

#[test]
fn push_returns_the_new_length() {
    assert_shows!("set xs = [1]\nshow xs.push(2)", ["2"]);
}

#[test]
fn sort_mutates_and_returns_the_receiver() {
    let src = r#"
set xs = [3, 1, 2]
show xs.sort()
show xs
"#;
    assert_shows!(src, ["[1, 2, 3]", "[1, 2, 3]"]);
}

#[test]
fn sort_keeps_unorderable_elements_in_input_order() {
    let src = r#"
set xs = [{n: 2}, {n: 1}, {n: 3}]
xs.sort()
show xs.map((d) => d.n)
"#;
    assert_shows!(src, ["[2, 1, 3]"]);
}

#[test]
fn reverse_mutates_and_returns_self() {
    let src = r#"
set xs = [1, 2, 3]
show xs.reverse()
show xs
"#;
    assert_shows!(src, ["[3, 2, 1]", "[3, 2, 1]"]);
}

#[test]
fn unique_keeps_first_occurrences() {
    assert_shows!("show [1, 2, 1, 3, 2].unique()", ["[1, 2, 3]"]);
}

#[test]
fn map_and_filter_return_fresh_lists() {
    let src = r#"
set xs = [1, 2, 3, 4]
show xs.map((x) => x * x)
show xs.filter((x) => x % 2 == 0)
show xs
"#;
    assert_shows!(src, ["[1, 4, 9, 16]", "[2, 4]", "[1, 2, 3, 4]"]);
}

#[test]
fn reduce_with_and_without_initial_value() {
    assert_shows!("show [1, 2, 3].reduce((a, b) => a + b, 10)", ["16"]);
    assert_shows!("show [1, 2, 3].reduce((a, b) => a + b)", ["6"]);
    assert_run_err!("show [].reduce((a, b) => a + b)", "empty list");
}

#[test]
fn find_and_find_index() {
    let src = r#"
set xs = [4, 8, 15, 16]
show xs.find((x) => x > 10)
show xs.find((x) => x > 100)
show xs.findIndex((x) => x > 10)
"#;
    assert_shows!(src, ["15", "null", "2"]);
}

#[test]
fn every_and_some() {
    assert_shows!("show [2, 4, 6].every((x) => x % 2 == 0)", ["true"]);
    assert_shows!("show [1, 2].every((x) => x > 1)", ["false"]);
    assert_shows!("show [1, 2].some((x) => x > 1)", ["true"]);
    assert_shows!("show [].some((x) => true)", ["false"]);
}

#[test]
fn slice_returns_a_new_list() {
    let src = r#"
set xs = [1, 2, 3, 4]
show xs.slice(1, 3)
show xs.slice(2)
show xs
"#;
    assert_shows!(src, ["[2, 3]", "[3, 4]", "[1, 2, 3, 4]"]);
}

#[test]
fn includes_index_of_sum_join() {
    assert_shows!("show [1, 2, 3].includes(2)", ["true"]);
    assert_shows!("show [1, 2, 3].indexOf(3)", ["2"]);
    assert_shows!("show [1, 2, 3].indexOf(9)", ["-1"]);
    assert_shows!("show [1, 2, 3].sum()", ["6"]);
    assert_shows!("show [1, 2.5].sum()", ["3.5"]);
    assert_shows!("show [1, 2, 3].join(\"-\")", ["1-2-3"]);
    assert_shows!("show [\"a\", \"b\"].join()", ["a,b"]);
}

#[test]
fn first_last_pop() {
    let src = r#"
set xs = [1, 2, 3]
show xs.first()
show xs.last()
show xs.pop()
show xs
"#;
    assert_shows!(src, ["1", "3", "3", "[1, 2]"]);
    assert_run_err!("[].first()", "empty list");
}

#[test]
fn flat_enumerate_count() {
    assert_shows!("show [[1, 2], 3, [4]].flat()", ["[1, 2, 3, 4]"]);
    assert_shows!("show [\"a\", \"b\"].enumerate()", ["[[0, a], [1, b]]"]);
    assert_shows!("show [1, 1, 2].count(1)", ["2"]);
}

#[test]
fn list_concatenation_with_plus() {
    let src = r#"
set a = [1, 2]
set b = [3]
show a + b
show a
"#;
    assert_shows!(src, ["[1, 2, 3]", "[1, 2]"]);
}

#[test]
fn for_each_side_effects() {
    let src = r#"
set total = 0
[1, 2, 3].forEach((x) => total)
set sum = 0
func accumulate(x) { set sum = sum + x }
[1, 2, 3].forEach(accumulate)
show sum
"#;
    assert_shows!(src, ["6"]);
}

// ============================================================================
// Dicts
// ============================================================================

#[test]
fn insertion_order_is_preserved() {
    let src = r#"
set d = {}
set d["b"] = 1
set d["a"] = 2
set d["c"] = 3
show d.keys()
"#;
    assert_shows!(src, ["[b, a, c]"]);
}

#[test]
fn reassignment_does_not_move_a_key() {
    let src = r#"
set d = {a: 1, b: 2}
set d["a"] = 9
show d.keys()
show d
"#;
    assert_shows!(src, ["[a, b]", "{a: 9, b: 2}"]);
}

#[test]
fn merge_returns_a_new_dict_with_override() {
    let src = r#"
set d1={a:1,b:2}; set d2={b:3,c:4}; set d3=d1.merge(d2)
show f"{d1} {d3}"
"#;
    assert_shows!(src, ["{a: 1, b: 2} {a: 1, b: 3, c: 4}"]);
}

#[test]
fn dot_access_reads_and_writes_keys() {
    let src = r#"
set user = {name: "Ada"}
show user.name
set user.age = 36
show user
"#;
    assert_shows!(src, ["Ada", "{name: Ada, age: 36}"]);
}

#[test]
fn missing_keys_are_errors() {
    assert_run_err!("show {a: 1}[\"b\"]", "Key 'b' not found");
    assert_run_err!("show {a: 1}.b", "Key 'b' not found");
}

#[test]
fn index_assignment_inserts_or_updates() {
    let src = r#"
set d = {a: 1}
set d["b"] = 2
set d["a"] = 0
show d
"#;
    assert_shows!(src, ["{a: 0, b: 2}"]);
}

#[test]
fn has_get_remove_size() {
    let src = r#"
set d = {a: 1, b: 2}
show d.has("a")
show d.has("z")
show d.get("z", 42)
show d.remove("a")
show d.size()
show d.keys()
"#;
    assert_shows!(src, ["true", "false", "42", "1", "1", "[b]"]);
}

#[test]
fn values_and_entries() {
    assert_shows!("show {a: 1, b: 2}.values()", ["[1, 2]"]);
    assert_shows!("show {a: 1}.entries()", ["[[a, 1]]"]);
}

#[test]
fn dict_filter_and_map_take_key_value_pairs() {
    let src = r#"
set scores = {ada: 90, bob: 55, cid: 75}
show scores.filter((k, v) => v >= 70)
show scores.map((k, v) => v + 10)
show scores
"#;
    assert_shows!(
        src,
        [
            "{ada: 90, cid: 75}",
            "{ada: 100, bob: 65, cid: 85}",
            "{ada: 90, bob: 55, cid: 75}",
        ]
    );
}

#[test]
fn dicts_are_reference_shared() {
    let src = r#"
set a = {n: 1}
set b = a
set b.n = 2
show a.n
"#;
    assert_shows!(src, ["2"]);
}

#[test]
fn iteration_follows_insertion_order() {
    let src = r#"
set d = {b: 1, a: 2}
set keys = []
set vals = []
for k, v in d {
    keys.push(k)
    vals.push(v)
}
show keys
show vals
"#;
    assert_shows!(src, ["[b, a]", "[1, 2]"]);
}

#[test]
fn non_string_keys_use_their_stable_string_form() {
    assert_shows!("set d = {}\nset d[1] = \"one\"\nshow d", ["{1: one}"]);
}

#[test]
fn destructuring_lists_and_dicts() {
    assert_shows!("set [a, b, c] = [1, 2, 3]\nshow a + b + c", ["6"]);
    assert_shows!(
        "set {name, age} = {name: \"Ada\", age: 36}\nshow f\"{name}/{age}\"",
        ["Ada/36"]
    );
    assert_run_err!("set [a, b] = [1]", "Not enough values");
    assert_run_err!("set {missing} = {a: 1}", "Key 'missing' not found");
}
