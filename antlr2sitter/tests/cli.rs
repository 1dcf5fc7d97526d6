use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn grammar_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn translates_grammar_file() {
    let file = grammar_file("expr : INT ('+' INT)* ;\nINT : [0-9]+ ;\n");

    Command::cargo_bin("antlr2sitter")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "expr: $ => seq($.INT, repeat(seq(\"+\", $.INT))),",
        ))
        .stdout(predicate::str::contains(
            "INT: $ => \"a\", // needs completion",
        ));
}

#[test]
fn keep_order_flag_interleaves_lexer_rules() {
    let file = grammar_file("a : '1' ;\nX : 'x' ;\nb : '2' ;\n");

    let assert = Command::cargo_bin("antlr2sitter")
        .unwrap()
        .arg(file.path())
        .arg("--keep-order")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let a = stdout.find("a: $ =>").unwrap();
    let x = stdout.find("X: $ =>").unwrap();
    let b = stdout.find("b: $ =>").unwrap();
    assert!(a < x && x < b, "output:\n{}", stdout);
}

#[test]
fn reports_syntax_errors() {
    let file = grammar_file("expr : INT");

    Command::cargo_bin("antlr2sitter")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("syntax errors"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_file_reports_context() {
    Command::cargo_bin("antlr2sitter")
        .unwrap()
        .arg("no-such-file.g4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-file.g4"));
}
