// volt-core - time module
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! `use "time"` — wall-clock and monotonic time.
//!
//! `now` reports epoch seconds; the calendar functions and `format` use the
//! local timezone; `elapsed` and `clock` are monotonic, measured from
//! interpreter start.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

use indexmap::IndexMap;

use crate::context::Ctx;
use crate::error::{Error, Result};
use crate::value::{Value, VoltModule};

use super::{check_args, want_int, want_number, want_str_arg};

pub fn module() -> VoltModule {
    VoltModule {
        name: "time",
        consts: Vec::new(),
        funcs: vec![
            ("now", time_now),
            ("timestamp", time_timestamp),
            ("clock", time_clock),
            ("date", time_date),
            ("year", time_year),
            ("month", time_month),
            ("day", time_day),
            ("hour", time_hour),
            ("minute", time_minute),
            ("second", time_second),
            ("format", time_format),
            ("datetime", time_datetime),
            ("elapsed", time_elapsed),
        ],
    }
}

/// `time.now()` — seconds since the Unix epoch, as an integer.
fn time_now(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("time.now", args, 0)?;
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::eval(format!("time.now: {}", e)))?;
    Ok(Value::Int(duration.as_secs() as i64))
}

/// `time.timestamp()` — seconds since the Unix epoch, with a fractional
/// part.
fn time_timestamp(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("time.timestamp", args, 0)?;
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::eval(format!("time.timestamp: {}", e)))?;
    Ok(Value::Float(duration.as_secs_f64()))
}

/// `time.clock()` — monotonic seconds, suitable for measuring intervals.
fn time_clock(ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("time.clock", args, 0)?;
    Ok(Value::Float(ctx.elapsed_secs()))
}

/// `time.date()` — the local date as an ISO-8601 string (YYYY-MM-DD).
fn time_date(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("time.date", args, 0)?;
    Ok(Value::str(Local::now().format("%Y-%m-%d").to_string()))
}

fn time_year(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("time.year", args, 0)?;
    Ok(Value::Int(i64::from(Local::now().year())))
}

fn time_month(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("time.month", args, 0)?;
    Ok(Value::Int(i64::from(Local::now().month())))
}

fn time_day(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("time.day", args, 0)?;
    Ok(Value::Int(i64::from(Local::now().day())))
}

fn time_hour(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("time.hour", args, 0)?;
    Ok(Value::Int(i64::from(Local::now().hour())))
}

fn time_minute(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("time.minute", args, 0)?;
    Ok(Value::Int(i64::from(Local::now().minute())))
}

fn time_second(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("time.second", args, 0)?;
    Ok(Value::Int(i64::from(Local::now().second())))
}

/// `time.format(fmt)` — the current local time rendered with strftime
/// directives; `time.format(t, fmt)` renders the epoch timestamp `t`.
/// An unknown directive raises instead of producing garbage.
fn time_format(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    let (moment, fmt) = match args {
        [fmt] => (Local::now(), want_str_arg("time.format", fmt)?),
        [stamp, fmt] => {
            let secs = want_int("time.format", stamp)?;
            let moment: DateTime<Local> = Local
                .timestamp_opt(secs, 0)
                .single()
                .ok_or_else(|| {
                    Error::value_error(format!("time.format: invalid timestamp {}", secs))
                })?;
            (moment, want_str_arg("time.format", fmt)?)
        }
        _ => return Err(Error::arity_range("time.format", 1, 2, args.len())),
    };

    let items: Vec<Item<'_>> = StrftimeItems::new(&fmt).collect();
    if items.contains(&Item::Error) {
        return Err(Error::value_error(format!(
            "time.format: invalid format string '{}'",
            fmt
        )));
    }
    Ok(Value::str(
        moment.format_with_items(items.into_iter()).to_string(),
    ))
}

/// `time.datetime()` — the current local time broken out into a dict with
/// `year`, `month`, `day`, `hour`, `minute` and `second` keys.
fn time_datetime(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("time.datetime", args, 0)?;
    let now = Local::now();
    let mut map = IndexMap::new();
    map.insert("year".to_string(), Value::Int(i64::from(now.year())));
    map.insert("month".to_string(), Value::Int(i64::from(now.month())));
    map.insert("day".to_string(), Value::Int(i64::from(now.day())));
    map.insert("hour".to_string(), Value::Int(i64::from(now.hour())));
    map.insert("minute".to_string(), Value::Int(i64::from(now.minute())));
    map.insert("second".to_string(), Value::Int(i64::from(now.second())));
    Ok(Value::dict(map))
}

/// `time.elapsed()` — monotonic seconds since interpreter start;
/// `time.elapsed(t0)` — seconds since the earlier reading `t0`.
fn time_elapsed(ctx: &Ctx, args: &[Value]) -> Result<Value> {
    match args {
        [] => Ok(Value::Float(ctx.elapsed_secs())),
        [t0] => {
            let t0 = want_number("time.elapsed", t0)?;
            Ok(Value::Float(ctx.elapsed_secs() - t0))
        }
        _ => Err(Error::arity_range("time.elapsed", 0, 1, args.len())),
    }
}
