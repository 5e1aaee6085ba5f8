// Integration tests for the BASIC to C compiler

use std::fs;
use std::path::Path;
use tinybasc::{compile, CompileError, ErrorKind};

fn compile_demo(name: &str) -> String {
    let path = Path::new("demos").join(name);
    let source = fs::read_to_string(&path).expect("Failed to read demo file");
    compile(&source).unwrap_or_else(|e| panic!("{} failed to compile: {}", name, e))
}

#[test]
fn test_output_layout() {
    let output = compile("LET x = 5\nPRINT x\n").expect("Compilation failed");

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "#include <stdio.h>");
    assert_eq!(lines[1], "int main(void){");
    assert_eq!(lines[2], "float x;");
    assert_eq!(lines[lines.len() - 2], "return 0;");
    assert_eq!(lines[lines.len() - 1], "}");
}

#[test]
fn test_undeclared_variable_scenario() {
    let err = compile("PRINT x\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Semantic);
    assert!(err.to_string().contains("'x'"), "message: {}", err);
}

#[test]
fn test_undeclared_label_scenario() {
    let err = compile("LABEL a\nGOTO b\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Semantic);
    assert!(err.to_string().contains("'b'"), "message: {}", err);
}

#[test]
fn test_malformed_number_scenario() {
    let err = compile("LET x = 12.3.4\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lexical);
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn test_if_scenario() {
    let output = compile("IF 1 == 1 THEN\nPRINT \"hi\"\nENDIF\n").expect("Compilation failed");
    assert!(output.contains("printf(\"hi\\n\");"));
}

#[test]
fn test_first_error_wins() {
    // Undeclared variable on line 2 is reported before the bad GOTO on line 3
    let err = compile("LET a = 1\nPRINT b\nGOTO nowhere\n").unwrap_err();
    assert!(matches!(err, CompileError::UndeclaredVariable { .. }));
}

#[test]
fn test_deeply_nested_blocks() {
    let depth = 200;
    let mut source = String::new();
    for _ in 0..depth {
        source.push_str("IF 1 < 2 THEN\n");
    }
    source.push_str("PRINT \"deep\"\n");
    for _ in 0..depth {
        source.push_str("ENDIF\n");
    }

    let output = compile(&source).expect("Compilation failed");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.iter().filter(|l| l.starts_with("if(")).count(), depth);
    // Every block plus the end of main
    assert_eq!(lines.iter().filter(|l| **l == "}").count(), depth + 1);
}

#[test]
fn test_demo_programs_compile() {
    let hello = compile_demo("hello.bas");
    assert!(hello.contains("printf(\"hello, world\\n\");"));

    let fib = compile_demo("fib.bas");
    for var in ["a", "b", "c", "n"] {
        assert_eq!(fib.matches(&format!("float {};", var)).count(), 1);
    }
    assert!(fib.contains("while(n < 10){"));

    let average = compile_demo("average.bas");
    assert!(average.contains("more:\n"));
    assert!(average.contains("goto more;\n"));
    assert!(average.contains("scanf(\"%f\", &count)"));
}

#[test]
fn test_balanced_braces_in_demos() {
    for name in ["hello.bas", "fib.bas", "average.bas"] {
        let output = compile_demo(name);
        assert_eq!(
            output.matches('{').count(),
            output.matches('}').count(),
            "unbalanced braces in {}",
            name
        );
    }
}
