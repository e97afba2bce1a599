//! End-to-end import tests: notebooks on disk, through the full
//! finder/loader pipeline, out to live module attributes.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::fs;
use std::path::Path;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use quill_eval::{Shell, Value};
use quill_import::{ImportContext, ImportError, Module};

fn write_notebook(dir: &Path, file_name: &str, cells: &str) {
    let json = format!(r#"{{"version": 1, "cells": [{cells}]}}"#);
    fs::write(dir.join(file_name), json).unwrap();
}

fn context_in(dir: &Path) -> ImportContext {
    let ctx = ImportContext::new(Rc::new(Shell::new()));
    ctx.add_search_path(dir.to_path_buf());
    ctx
}

fn attr(ctx: &ImportContext, module: &Module, name: &str) -> Option<Value> {
    let name = ctx.shell().interner().intern(name);
    module.ns().borrow().get(name)
}

#[test]
fn test_import_executes_cells_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    write_notebook(
        tmp.path(),
        "Counts.qnb",
        r#"{"kind": "code", "source": "x = 1"},
           {"kind": "code", "source": "y = x + 1"}"#,
    );

    let ctx = context_in(tmp.path());
    let module = ctx.import("Counts").unwrap();

    assert_eq!(attr(&ctx, &module, "x").unwrap(), Value::Int(1));
    assert_eq!(attr(&ctx, &module, "y").unwrap(), Value::Int(2));
}

#[test]
fn test_non_code_cells_are_skipped() {
    let tmp = tempfile::tempdir().unwrap();
    write_notebook(
        tmp.path(),
        "Notes.qnb",
        r##"{"kind": "markdown", "source": "# overview"},
           {"kind": "code", "source": "z = 5"},
           {"kind": "raw", "source": "scratch"}"##,
    );

    let ctx = context_in(tmp.path());
    let module = ctx.import("Notes").unwrap();

    assert_eq!(attr(&ctx, &module, "z").unwrap(), Value::Int(5));
    assert_eq!(module.ns().borrow().len(), 1);
}

#[test]
fn test_underscore_name_falls_back_to_spaced_file() {
    let tmp = tempfile::tempdir().unwrap();
    write_notebook(
        tmp.path(),
        "Foo Bar.qnb",
        r#"{"kind": "code", "source": "ok = true"}"#,
    );

    let ctx = context_in(tmp.path());
    let module = ctx.import("Foo_Bar").unwrap();

    assert_eq!(attr(&ctx, &module, "ok").unwrap(), Value::Bool(true));
    assert_eq!(module.path(), tmp.path().join("Foo Bar.qnb"));
}

#[test]
fn test_reimport_returns_same_module_without_rereading() {
    let tmp = tempfile::tempdir().unwrap();
    write_notebook(
        tmp.path(),
        "Once.qnb",
        r#"{"kind": "code", "source": "x = 1"}"#,
    );

    let ctx = context_in(tmp.path());
    let first = ctx.import("Once").unwrap();

    // A re-import must not touch the file again.
    write_notebook(
        tmp.path(),
        "Once.qnb",
        r#"{"kind": "code", "source": "x = 999"}"#,
    );
    let second = ctx.import("Once").unwrap();

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(attr(&ctx, &second, "x").unwrap(), Value::Int(1));
}

#[test]
fn test_self_import_terminates() {
    let tmp = tempfile::tempdir().unwrap();
    write_notebook(
        tmp.path(),
        "Cycle.qnb",
        r#"{"kind": "code", "source": "import Cycle\nx = 1"}"#,
    );

    let ctx = context_in(tmp.path());
    let module = ctx.import("Cycle").unwrap();

    assert_eq!(attr(&ctx, &module, "x").unwrap(), Value::Int(1));
    // The inner import bound the (then partially built) module itself.
    assert!(matches!(
        attr(&ctx, &module, "Cycle").unwrap(),
        Value::Module(_)
    ));
}

#[test]
fn test_cross_module_import() {
    let tmp = tempfile::tempdir().unwrap();
    write_notebook(
        tmp.path(),
        "Base.qnb",
        r#"{"kind": "code", "source": "value = 10"}"#,
    );
    write_notebook(
        tmp.path(),
        "Derived.qnb",
        r#"{"kind": "code", "source": "import Base\ndoubled = Base.value * 2"}"#,
    );

    let ctx = context_in(tmp.path());
    let module = ctx.import("Derived").unwrap();

    assert_eq!(attr(&ctx, &module, "doubled").unwrap(), Value::Int(20));
    assert!(ctx.registered("Base").is_some());
}

#[test]
fn test_failed_cell_restores_user_ns_and_propagates() {
    let tmp = tempfile::tempdir().unwrap();
    write_notebook(
        tmp.path(),
        "Broken.qnb",
        r#"{"kind": "code", "source": "x = 1"},
           {"kind": "code", "source": "y = missing + 1"},
           {"kind": "code", "source": "z = 3"}"#,
    );

    let ctx = context_in(tmp.path());
    let before = ctx.shell().user_ns();

    let err = ctx.import("Broken").unwrap_err();
    assert!(matches!(err, ImportError::Execution { .. }));
    assert!(ctx.shell().user_ns().ptr_eq(&before));
}

#[test]
fn test_failed_import_leaves_partial_module_registered() {
    let tmp = tempfile::tempdir().unwrap();
    write_notebook(
        tmp.path(),
        "Partial.qnb",
        r#"{"kind": "code", "source": "x = 1"},
           {"kind": "code", "source": "boom = 1 / 0"}"#,
    );

    let ctx = context_in(tmp.path());
    assert!(ctx.import("Partial").is_err());

    // Registration happens before execution, so the half-built module
    // stays reachable. Cells before the failure already ran.
    let partial = ctx.registered("Partial").unwrap();
    assert_eq!(attr(&ctx, &partial, "x").unwrap(), Value::Int(1));
    assert!(attr(&ctx, &partial, "boom").is_none());
}

#[test]
fn test_missing_module_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let ctx = context_in(tmp.path());

    let err = ctx.import("Nowhere").unwrap_err();
    assert!(matches!(err, ImportError::ModuleNotFound(name) if name == "Nowhere"));
}

#[test]
fn test_plain_source_fallback() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("Util.ql"), "answer = 42").unwrap();

    let ctx = context_in(tmp.path());
    let module = ctx.import("Util").unwrap();

    assert_eq!(attr(&ctx, &module, "answer").unwrap(), Value::Int(42));
}

#[test]
fn test_notebook_wins_over_source_file() {
    let tmp = tempfile::tempdir().unwrap();
    write_notebook(
        tmp.path(),
        "Both.qnb",
        r#"{"kind": "code", "source": "origin = 1"}"#,
    );
    fs::write(tmp.path().join("Both.ql"), "origin = 2").unwrap();

    let ctx = context_in(tmp.path());
    let module = ctx.import("Both").unwrap();

    assert_eq!(attr(&ctx, &module, "origin").unwrap(), Value::Int(1));
}

#[test]
fn test_malformed_notebook_is_hard_error() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("Bad.qnb"), "{not json").unwrap();

    let ctx = context_in(tmp.path());
    assert!(matches!(
        ctx.import("Bad").unwrap_err(),
        ImportError::Notebook(_)
    ));
}

#[test]
fn test_interactive_syntax_transformed_before_execution() {
    let tmp = tempfile::tempdir().unwrap();
    write_notebook(
        tmp.path(),
        "Interactive.qnb",
        r#"{"kind": "code", "source": "%directive\nx = 7\nx?"}"#,
    );

    let ctx = context_in(tmp.path());
    let module = ctx.import("Interactive").unwrap();
    assert_eq!(attr(&ctx, &module, "x").unwrap(), Value::Int(7));
}

#[test]
fn test_script_sees_module_attributes() {
    let tmp = tempfile::tempdir().unwrap();
    write_notebook(
        tmp.path(),
        "Data.qnb",
        r#"{"kind": "code", "source": "n = 6"}"#,
    );

    let ctx = context_in(tmp.path());
    let shell = ctx.shell().clone();
    let ns = shell.user_ns();
    let result = shell.execute("import Data\nData.n * 7", &ns, &ctx).unwrap();
    assert_eq!(result, Value::Int(42));
}

#[test]
fn test_search_path_order_respected() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    write_notebook(
        first.path(),
        "Pick.qnb",
        r#"{"kind": "code", "source": "from = 1"}"#,
    );
    write_notebook(
        second.path(),
        "Pick.qnb",
        r#"{"kind": "code", "source": "from = 2"}"#,
    );

    let ctx = ImportContext::new(Rc::new(Shell::new()));
    ctx.add_search_path(second.path().to_path_buf());
    ctx.prepend_search_path(first.path().to_path_buf());

    let module = ctx.import("Pick").unwrap();
    assert_eq!(attr(&ctx, &module, "from").unwrap(), Value::Int(1));
}
