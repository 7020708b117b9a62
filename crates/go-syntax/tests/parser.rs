use go_syntax::ast::{
    Decl, DeclTok, ElseBranch, Expr, Node, Spec, Stmt,
};
use go_syntax::{parse, Error, LexError, ParseError};
use test_case::test_case;

fn parse_file(src: &str) -> go_syntax::ast::File {
    match parse(src).unwrap() {
        Node::File(file) => file,
        other => panic!("expected a file, got {other:?}"),
    }
}

#[test]
fn package_clause_yields_a_file() {
    let _ = tracing_subscriber::fmt().try_init();

    let file = parse_file("package main\n");
    assert_eq!(file.package.name, "main");
    assert!(file.decls.is_empty());
}

#[test]
fn hello_world_structure() {
    let file = parse_file(include_str!("../../../testdata/valid/hello_world.go"));
    assert_eq!(file.decls.len(), 2);

    let Decl::Gen(import) = &file.decls[0] else {
        panic!("expected an import, got {:?}", file.decls[0]);
    };
    assert_eq!(import.tok, DeclTok::Import);
    let Spec::Import(spec) = &import.specs[0] else {
        panic!("expected an import spec");
    };
    assert_eq!(spec.path.value.as_deref(), Some("fmt"));
    assert!(spec.name.is_none());

    let Decl::Func(func) = &file.decls[1] else {
        panic!("expected a function, got {:?}", file.decls[1]);
    };
    assert_eq!(func.name, "main");
    assert!(func.recv.is_none());
    assert!(func.ty.params.is_empty());
    assert!(func.ty.results.is_empty());
    assert_eq!(func.body.list.len(), 1);
}

#[test]
fn grouped_import_is_one_declaration() {
    let file = parse_file("package main\n\nimport (\n    \"fmt\"\n    \"math\"\n)\n");
    assert_eq!(file.decls.len(), 1);
    let Decl::Gen(import) = &file.decls[0] else {
        panic!("expected an import group");
    };
    assert_eq!(import.specs.len(), 2);
}

#[test]
fn import_aliases_and_dot_imports() {
    let file = parse_file("package main\n\nimport f \"fmt\"\nimport . \"strings\"\n");
    let names: Vec<Option<String>> = file
        .decls
        .iter()
        .map(|decl| match decl {
            Decl::Gen(gen) => match &gen.specs[0] {
                Spec::Import(spec) => spec.name.as_ref().map(|n| n.name.clone()),
                other => panic!("expected an import spec, got {other:?}"),
            },
            other => panic!("expected an import, got {other:?}"),
        })
        .collect();
    assert_eq!(names, vec![Some("f".to_string()), Some(".".to_string())]);
}

#[test]
fn snippet_without_package_is_a_top_level_item() {
    let node = parse("var b, c int = 1, 2\n").unwrap();
    let Node::Decl(Decl::Stmt(Stmt::Decl(decl_stmt))) = node else {
        panic!("expected a declaration statement, got {node:?}");
    };
    assert_eq!(decl_stmt.decl.tok, DeclTok::Var);
    let Spec::Value(spec) = &decl_stmt.decl.specs[0] else {
        panic!("expected a value spec");
    };
    assert_eq!(spec.names, vec!["b".to_string(), "c".to_string()]);
    assert!(matches!(spec.ty, Some(Expr::Ident(ref ident)) if ident.name == "int"));
    assert_eq!(spec.values.len(), 2);
}

#[test]
fn multiple_snippet_items_form_a_sequence() {
    let node = parse("a := 1\nb := 2\n").unwrap();
    let Node::Seq(decls) = node else {
        panic!("expected a sequence, got {node:?}");
    };
    assert_eq!(decls.len(), 2);
}

#[test]
fn bare_range_has_no_iteration_variables() {
    let node = parse("for range xs {\n    f()\n}\n").unwrap();
    let Node::Decl(Decl::Stmt(Stmt::Range(range))) = node else {
        panic!("expected a range statement, got {node:?}");
    };
    assert!(range.key.is_none());
    assert!(range.value.is_none());
    assert!(range.tok.is_none());
}

#[test]
fn type_switch_assertion_has_no_type() {
    let node = parse("t := i.(type)\n").unwrap();
    let Node::Decl(Decl::Stmt(Stmt::Assign(assign))) = node else {
        panic!("expected an assignment, got {node:?}");
    };
    let Expr::TypeAssert(assert_expr) = &assign.rhs[0] else {
        panic!("expected a type assertion, got {:?}", assign.rhs[0]);
    };
    assert!(assert_expr.ty.is_none());
}

#[test]
fn variadic_parameter_and_spread_call() {
    let node = parse("func sum(nums ...int) {\n    sum(nums...)\n}\n").unwrap();
    let Node::Decl(Decl::Func(func)) = node else {
        panic!("expected a function, got {node:?}");
    };

    let field = &func.ty.params.list[0];
    assert_eq!(field.name.as_deref(), Some("nums"));
    assert!(matches!(field.ty, Expr::Ellipsis(_)));

    let Stmt::Expr(expr_stmt) = &func.body.list[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Call(call) = &expr_stmt.expr else {
        panic!("expected a call");
    };
    assert!(call.ellipsis);
    assert_eq!(call.args.len(), 1);
}

#[test]
fn default_arm_is_an_anonymous_case_clause() {
    let node = parse(concat!(
        "switch i {\n",
        "case 1:\n",
        "    f()\n",
        "default:\n",
        "    g()\n",
        "}\n",
    ))
    .unwrap();
    let Node::Decl(Decl::Stmt(Stmt::Switch(switch))) = node else {
        panic!("expected a switch, got {node:?}");
    };
    assert!(switch.init.is_none());
    assert!(switch.tag.is_some());

    let arms: Vec<usize> = switch
        .body
        .list
        .iter()
        .map(|stmt| match stmt {
            Stmt::Case(clause) => clause.list.len(),
            other => panic!("expected a case clause, got {other:?}"),
        })
        .collect();
    assert_eq!(arms, vec![1, 0]);
}

#[test]
fn else_if_chains_nest_on_the_else_branch() {
    let node = parse(concat!(
        "if a {\n",
        "    f()\n",
        "} else if b {\n",
        "    g()\n",
        "} else {\n",
        "    h()\n",
        "}\n",
    ))
    .unwrap();
    let Node::Decl(Decl::Stmt(Stmt::If(if_stmt))) = node else {
        panic!("expected an if, got {node:?}");
    };
    let Some(ElseBranch::If(nested)) = &if_stmt.els else {
        panic!("expected an else-if branch");
    };
    assert!(matches!(nested.els, Some(ElseBranch::Block(_))));
}

#[test]
fn method_declaration_has_a_receiver() {
    let node = parse("func (r rect) area() float64 {\n    return r.width\n}\n").unwrap();
    let Node::Decl(Decl::Func(func)) = node else {
        panic!("expected a function, got {node:?}");
    };
    let recv = func.recv.expect("expected a receiver");
    assert_eq!(recv.list[0].name.as_deref(), Some("r"));
    assert_eq!(func.name, "area");
}

#[test]
fn keywords_do_not_swallow_identifier_prefixes() {
    // `packages` must lex as one identifier, not `package` + `s`.
    let node = parse("packages := 1\n").unwrap();
    assert!(matches!(node, Node::Decl(Decl::Stmt(Stmt::Assign(_)))));
}

#[test]
fn lexer_error_is_located_at_the_first_illegal_character() {
    let err = parse("package ~\n").unwrap_err();
    let Error::Lex(lex) = err else {
        panic!("expected a lexer error, got {err:?}");
    };
    assert_eq!(
        lex,
        LexError {
            ch: '~',
            offset: 8
        }
    );
    assert_eq!(lex.to_string(), "Illegal character '~'");

    // Inputs differing only after the illegal character fail the same.
    let other = parse("package ~ xyz(((\n").unwrap_err();
    assert_eq!(other, Error::Lex(lex));
}

#[test_case("" ; "empty input")]
#[test_case("func main() {}" ; "empty block")]
#[test_case("a := 1 b := 2" ; "missing statement terminator")]
#[test_case("func f( {" ; "unclosed parameter list")]
#[test_case("x := " ; "missing right hand side")]
fn invalid_inputs_are_parse_errors(src: &str) {
    match parse(src) {
        Err(Error::Parse(_)) => {}
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn parse_errors_carry_the_offending_lexeme() {
    let err = parse("a := 1 b := 2\n").unwrap_err();
    let Error::Parse(ParseError::UnexpectedToken { lexeme, .. }) = err else {
        panic!("expected an unexpected-token error, got {err:?}");
    };
    assert_eq!(lexeme, "b");
}
