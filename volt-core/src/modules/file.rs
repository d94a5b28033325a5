// volt-core - file module
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! `use "file"` — filesystem access relative to the process working
//! directory. Failures surface as catchable I/O errors.

use std::fs;
use std::path::Path;

use crate::context::Ctx;
use crate::error::{Error, Result};
use crate::eval::stringify;
use crate::value::{Value, VoltModule};

use super::{check_args, want_str_arg};

pub fn module() -> VoltModule {
    VoltModule {
        name: "file",
        consts: Vec::new(),
        funcs: vec![
            ("read", file_read),
            ("write", file_write),
            ("append", file_append),
            ("readlines", file_readlines),
            ("exists", file_exists),
            ("size", file_size),
            ("delete", file_delete),
            ("copy", file_copy),
            ("rename", file_rename),
            ("list", file_list),
            ("isdir", file_isdir),
            ("isfile", file_isfile),
            ("mkdir", file_mkdir),
        ],
    }
}

fn file_read(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("file.read", args, 1)?;
    let path = want_str_arg("file.read", &args[0])?;
    fs::read_to_string(&path)
        .map(Value::str)
        .map_err(|e| Error::io("file.read", Some(path), e))
}

fn file_write(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("file.write", args, 2)?;
    let path = want_str_arg("file.write", &args[0])?;
    let text = stringify(&args[1])?;
    fs::write(&path, text).map_err(|e| Error::io("file.write", Some(path), e))?;
    Ok(Value::Null)
}

fn file_append(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    use std::io::Write;

    check_args("file.append", args, 2)?;
    let path = want_str_arg("file.append", &args[0])?;
    let text = stringify(&args[1])?;
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| Error::io("file.append", Some(path.clone()), e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| Error::io("file.append", Some(path), e))?;
    Ok(Value::Null)
}

/// `file.readlines(path)` — list of lines without trailing newlines.
fn file_readlines(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("file.readlines", args, 1)?;
    let path = want_str_arg("file.readlines", &args[0])?;
    let text = fs::read_to_string(&path)
        .map_err(|e| Error::io("file.readlines", Some(path), e))?;
    Ok(Value::list(text.lines().map(Value::str).collect()))
}

fn file_exists(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("file.exists", args, 1)?;
    let path = want_str_arg("file.exists", &args[0])?;
    Ok(Value::Bool(Path::new(&path).exists()))
}

/// `file.size(path)` — size in bytes.
fn file_size(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("file.size", args, 1)?;
    let path = want_str_arg("file.size", &args[0])?;
    let meta =
        fs::metadata(&path).map_err(|e| Error::io("file.size", Some(path), e))?;
    Ok(Value::Int(meta.len() as i64))
}

fn file_delete(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("file.delete", args, 1)?;
    let path = want_str_arg("file.delete", &args[0])?;
    if Path::new(&path).exists() {
        fs::remove_file(&path).map_err(|e| Error::io("file.delete", Some(path), e))?;
    }
    Ok(Value::Null)
}

fn file_copy(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("file.copy", args, 2)?;
    let src = want_str_arg("file.copy", &args[0])?;
    let dst = want_str_arg("file.copy", &args[1])?;
    fs::copy(&src, &dst).map_err(|e| Error::io("file.copy", Some(src), e))?;
    Ok(Value::Null)
}

fn file_rename(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("file.rename", args, 2)?;
    let from = want_str_arg("file.rename", &args[0])?;
    let to = want_str_arg("file.rename", &args[1])?;
    fs::rename(&from, &to).map_err(|e| Error::io("file.rename", Some(from), e))?;
    Ok(Value::Null)
}

fn file_list(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("file.list", args, 1)?;
    let path = want_str_arg("file.list", &args[0])?;
    let entries =
        fs::read_dir(&path).map_err(|e| Error::io("file.list", Some(path.clone()), e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io("file.list", Some(path.clone()), e))?;
        names.push(Value::str(entry.file_name().to_string_lossy()));
    }
    Ok(Value::list(names))
}

fn file_isdir(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("file.isdir", args, 1)?;
    let path = want_str_arg("file.isdir", &args[0])?;
    Ok(Value::Bool(Path::new(&path).is_dir()))
}

fn file_isfile(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("file.isfile", args, 1)?;
    let path = want_str_arg("file.isfile", &args[0])?;
    Ok(Value::Bool(Path::new(&path).is_file()))
}

fn file_mkdir(_ctx: &Ctx, args: &[Value]) -> Result<Value> {
    check_args("file.mkdir", args, 1)?;
    let path = want_str_arg("file.mkdir", &args[0])?;
    fs::create_dir_all(&path).map_err(|e| Error::io("file.mkdir", Some(path), e))?;
    Ok(Value::Null)
}
