// volt-core - Exception handling tests
// Copyright (c) 2026 The Volt Authors. MIT licensed.

mod common;
use common::*;

#[test]
fn catch_then_finally_ordering() {
    let src = r#"try { throw "x" } catch e { show f"c:{e}" } finally { show "f" }"#;
    assert_shows!(src, ["c:x", "f"]);
}

#[test]
fn rethrow_from_catch_propagates_outward() {
    let src = r#"try { try { throw "a" } catch e { throw "b" } } catch e { show e }"#;
    assert_shows!(src, ["b"]);
}

#[test]
fn try_without_throw_skips_catch() {
    let src = r#"try { show "ok" } catch e { show "caught" }"#;
    assert_shows!(src, ["ok"]);
}

#[test]
fn finally_runs_on_normal_completion() {
    let src = r#"try { show "body" } finally { show "cleanup" }"#;
    assert_shows!(src, ["body", "cleanup"]);
}

#[test]
fn finally_runs_when_the_exception_is_not_caught() {
    let io = CaptureIo::new();
    let interp = Interpreter::with_io(Box::new(io.clone()));
    let result = interp.run(r#"try { throw "boom" } finally { show "cleanup" }"#);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("boom"));
    assert_eq!(io.output(), vec!["cleanup".to_string()]);
}

#[test]
fn finally_runs_on_return() {
    let src = r#"
func f() {
    try { return 1 } finally { show "cleanup" }
}
show f()
"#;
    assert_shows!(src, ["cleanup", "1"]);
}

#[test]
fn finally_runs_on_break_and_continue() {
    let src = r#"
set log = []
for i in 0 to 4 {
    try {
        if i == 1 { continue }
        if i == 3 { break }
    } finally { log.push(i) }
}
show log
"#;
    assert_shows!(src, ["[0, 1, 2, 3]"]);
}

#[test]
fn exception_from_finally_replaces_the_inflight_one() {
    let src = r#"try { try { throw "a" } finally { throw "b" } } catch e { show e }"#;
    assert_shows!(src, ["b"]);
}

#[test]
fn catch_does_not_intercept_break() {
    let src = r#"
set log = []
for i in 0 to 3 {
    try {
        if i == 1 { break }
    } catch e { show "caught" }
    log.push(i)
}
show log
"#;
    assert_shows!(src, ["[0]"]);
}

#[test]
fn runtime_errors_are_catchable_as_messages() {
    let src = r#"try { show 1 / 0 } catch e { show e }"#;
    assert_shows!(src, ["Division by zero"]);
}

#[test]
fn undefined_name_is_catchable() {
    let src = r#"try { show missing } catch e { show e }"#;
    assert_shows!(src, ["Undefined variable: 'missing'"]);
}

#[test]
fn thrown_values_keep_their_type() {
    let src = r#"
try { throw {code: 404, msg: "nope"} } catch e {
    show e.code
    show e["msg"]
}
"#;
    assert_shows!(src, ["404", "nope"]);
}

#[test]
fn throw_across_function_frames() {
    let src = r#"
func deep() { throw "from deep" }
func mid() { deep() }
try { mid() } catch e { show e }
"#;
    assert_shows!(src, ["from deep"]);
}

#[test]
fn uncaught_throw_fails_the_program() {
    assert_run_err!(r#"throw "boom""#, "boom");
}

#[test]
fn catch_variable_is_scoped_to_the_handler() {
    let src = r#"
try { throw "x" } catch err { show err }
show type(err)
"#;
    assert_run_err!(src, "Undefined variable: 'err'");
}
