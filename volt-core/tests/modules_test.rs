// volt-core - Standard module tests
// Copyright (c) 2026 The Volt Authors. MIT licensed.

mod common;
use common::*;

#[test]
fn unknown_module_is_an_error() {
    assert_run_err!(r#"use "net""#, "Module not found: 'net'");
}

#[test]
fn use_binds_the_module_by_name() {
    assert_shows!(r#"use "math"
show type(math)"#, ["module"]);
}

// ============================================================================
// math
// ============================================================================

#[test]
fn math_constants_and_basics() {
    let src = r#"
use "math"
show math.floor(math.pi * 100)
show math.sqrt(16)
show math.pow(2, 10)
show math.gcd(12, 18)
show math.abs(-3)
show math.floor(2.7)
show math.ceil(2.1)
"#;
    assert_shows!(src, ["314", "4", "1024", "6", "3", "2", "3"]);
}

#[test]
fn math_min_max_and_log() {
    let src = r#"
use "math"
show math.min(3, 7)
show math.max([4, 9, 2])
show math.log(8, 2)
show math.round(math.log(math.e))
"#;
    assert_shows!(src, ["3", "9", "3", "1"]);
}

#[test]
fn math_domain_errors() {
    assert_run_err!(r#"use "math"
math.sqrt(-1)"#, "negative");
    assert_run_err!(r#"use "math"
math.log(0)"#, "positive");
}

#[test]
fn math_functions_need_a_call() {
    assert_run_err!(r#"use "math"
show math.sqrt"#, "is a function");
    assert_run_err!(r#"use "math"
show math.nope"#, "has no property");
}

// ============================================================================
// random
// ============================================================================

#[test]
fn seeded_random_is_reproducible() {
    let src = r#"
use "random"
random.seed(7)
set a = [random.int(1, 100), random.int(1, 100), random.int(1, 100)]
random.seed(7)
set b = [random.int(1, 100), random.int(1, 100), random.int(1, 100)]
show a == b
"#;
    assert_shows!(src, ["true"]);
}

#[test]
fn random_int_respects_inclusive_bounds() {
    let src = r#"
use "random"
set ok = true
for 200 {
    set n = random.int(3, 5)
    if n < 3 or n > 5 { set ok = false }
}
show ok
show random.int(4, 4)
"#;
    assert_shows!(src, ["true", "4"]);
}

#[test]
fn random_float_is_in_unit_interval() {
    let src = r#"
use "random"
set ok = true
for 200 {
    set x = random.float()
    if x < 0 or x >= 1 { set ok = false }
}
show ok
"#;
    assert_shows!(src, ["true"]);
}

#[test]
fn random_bool_returns_booleans() {
    assert_shows!(r#"use "random"
show type(random.bool())"#, ["boolean"]);
}

#[test]
fn random_range_is_half_open() {
    let src = r#"
use "random"
set ok = true
for 200 {
    set n = random.range(6)
    if n < 0 or n > 5 { set ok = false }
}
for 200 {
    set n = random.range(10, 20)
    if n < 10 or n >= 20 { set ok = false }
}
show ok
show random.range(5, 6)
show random.range(0, 10, 5) % 5
"#;
    assert_shows!(src, ["true", "5", "0"]);
}

#[test]
fn random_range_rejects_empty_ranges() {
    assert_run_err!(r#"use "random"
random.range(0)"#, "empty range");
    assert_run_err!(r#"use "random"
random.range(1, 10, 0)"#, "step");
}

#[test]
fn choice_picks_an_element() {
    let src = r#"
use "random"
show random.choice([42])
set xs = [1, 2, 3]
show xs.includes(random.choice(xs))
"#;
    assert_shows!(src, ["42", "true"]);
}

#[test]
fn shuffle_returns_a_new_list_and_keeps_the_original() {
    let src = r#"
use "random"
set xs = [1, 2, 3, 4, 5]
set ys = random.shuffle(xs)
show xs
show ys.sort()
"#;
    assert_shows!(src, ["[1, 2, 3, 4, 5]", "[1, 2, 3, 4, 5]"]);
}

// ============================================================================
// time
// ============================================================================

#[test]
fn time_now_and_calendar() {
    let src = r#"
use "time"
show time.now() > 1500000000
show time.date().length()
show time.year() >= 2024
show time.month() >= 1 and time.month() <= 12
"#;
    assert_shows!(src, ["true", "10", "true", "true"]);
}

#[test]
fn time_clock_fields_are_in_range() {
    let src = r#"
use "time"
show time.hour() >= 0 and time.hour() <= 23
show time.minute() >= 0 and time.minute() <= 59
show time.second() >= 0 and time.second() <= 60
show time.timestamp() > 1500000000
show time.clock() >= 0
"#;
    assert_shows!(src, ["true", "true", "true", "true", "true"]);
}

#[test]
fn datetime_breaks_out_the_current_moment() {
    let src = r#"
use "time"
set d = time.datetime()
show d.keys()
show d.month >= 1 and d.month <= 12
"#;
    assert_shows!(
        src,
        ["[year, month, day, hour, minute, second]", "true"]
    );
}

#[test]
fn format_renders_strftime_directives() {
    let src = r#"
use "time"
show time.format("%Y").length()
show time.format(0, "%Y-%m-%d").length()
"#;
    assert_shows!(src, ["4", "10"]);
}

#[test]
fn format_rejects_unknown_directives() {
    assert_run_err!(
        r#"use "time"
time.format("%Q")"#,
        "invalid format string"
    );
}

#[test]
fn elapsed_is_monotonic() {
    let src = r#"
use "time"
set t0 = time.elapsed()
set d = time.elapsed(t0)
show d >= 0
"#;
    assert_shows!(src, ["true"]);
}

// ============================================================================
// file
// ============================================================================

fn temp_path(name: &str) -> String {
    let dir = std::env::temp_dir();
    dir.join(format!("volt_test_{}_{}", std::process::id(), name))
        .display()
        .to_string()
}

#[test]
fn file_write_read_round_trip() {
    let path = temp_path("round_trip.txt");
    let src = format!(
        r#"
use "file"
file.write("{path}", "line1\nline2\n")
show file.exists("{path}")
show file.read("{path}").contains("line1")
show file.readlines("{path}")
show file.size("{path}")
file.delete("{path}")
show file.exists("{path}")
"#
    );
    assert_shows!(
        src.as_str(),
        ["true", "true", "[line1, line2]", "12", "false"]
    );
}

#[test]
fn file_append_extends() {
    let path = temp_path("append.txt");
    let src = format!(
        r#"
use "file"
file.write("{path}", "a")
file.append("{path}", "b")
show file.read("{path}")
file.delete("{path}")
"#
    );
    assert_shows!(src.as_str(), ["ab"]);
}

#[test]
fn file_copy_duplicates_contents() {
    let src_path = temp_path("copy_src.txt");
    let dst_path = temp_path("copy_dst.txt");
    let src = format!(
        r#"
use "file"
file.write("{src_path}", "payload")
file.copy("{src_path}", "{dst_path}")
show file.read("{dst_path}")
show file.exists("{src_path}")
file.delete("{src_path}")
file.delete("{dst_path}")
"#
    );
    assert_shows!(src.as_str(), ["payload", "true"]);
}

#[test]
fn file_rename_moves_the_file() {
    let old_path = temp_path("rename_old.txt");
    let new_path = temp_path("rename_new.txt");
    let src = format!(
        r#"
use "file"
file.write("{old_path}", "moved")
file.rename("{old_path}", "{new_path}")
show file.exists("{old_path}")
show file.read("{new_path}")
file.delete("{new_path}")
"#
    );
    assert_shows!(src.as_str(), ["false", "moved"]);
}

#[test]
fn file_read_of_missing_path_is_catchable() {
    let path = temp_path("missing.txt");
    let src = format!(
        r#"
use "file"
try {{ file.read("{path}") }} catch e {{ show "io error" }}
"#
    );
    assert_shows!(src.as_str(), ["io error"]);
}

#[test]
fn file_delete_of_missing_path_is_a_no_op() {
    let path = temp_path("ghost.txt");
    let src = format!(
        r#"
use "file"
file.delete("{path}")
show "ok"
"#
    );
    assert_shows!(src.as_str(), ["ok"]);
}
