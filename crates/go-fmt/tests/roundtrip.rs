use pretty_assertions::assert_eq;
use test_case::test_case;

macro_rules! assert_roundtrip {
    ($src:expr) => {{
        let s = $src;
        assert_eq!(s, go_fmt::format_source(s).unwrap());
    }};
}

#[test_case("package_only", include_str!("../../../testdata/valid/package_only.go"))]
#[test_case("hello_world", include_str!("../../../testdata/valid/hello_world.go"))]
#[test_case("imports_single", include_str!("../../../testdata/valid/imports_single.go"))]
#[test_case("imports_grouped", include_str!("../../../testdata/valid/imports_grouped.go"))]
#[test_case("imports_named", include_str!("../../../testdata/valid/imports_named.go"))]
#[test_case("comments", include_str!("../../../testdata/valid/comments.go"))]
#[test_case("func_types", include_str!("../../../testdata/valid/func_types.go"))]
#[test_case("declarations", include_str!("../../../testdata/valid/declarations.go"))]
#[test_case("for", include_str!("../../../testdata/valid/for.go"))]
#[test_case("if_else", include_str!("../../../testdata/valid/if_else.go"))]
#[test_case("switch", include_str!("../../../testdata/valid/switch.go"))]
#[test_case("variadic", include_str!("../../../testdata/valid/variadic.go"))]
#[test_case("closures", include_str!("../../../testdata/valid/closures.go"))]
#[test_case("struct_interface", include_str!("../../../testdata/valid/struct_interface.go"))]
#[test_case("slices_maps", include_str!("../../../testdata/valid/slices_maps.go"))]
#[test_case("range", include_str!("../../../testdata/valid/range.go"))]
#[test_case("labels", include_str!("../../../testdata/valid/labels.go"))]
#[test_case("operators", include_str!("../../../testdata/valid/operators.go"))]
#[test_case("type_assert", include_str!("../../../testdata/valid/type_assert.go"))]
#[test_case("pointers", include_str!("../../../testdata/valid/pointers.go"))]
fn roundtrip_fixture(name: &str, src: &str) {
    let once = go_fmt::format_source(src)
        .unwrap_or_else(|err| panic!("{name} failed to parse: {err}"));
    assert_eq!(src, once, "{name} did not round-trip");

    // Unparsing a reparse of the output must be a fixed point.
    let twice = go_fmt::format_source(&once).unwrap();
    assert_eq!(once, twice, "{name} is not idempotent");
}

#[test]
fn fmt_smoke() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .try_init();

    assert_roundtrip!("package main\n");
}

// The concrete snippet scenarios: inputs without a `package` clause
// round-trip through a top-level item or sequence.

#[test]
fn roundtrip_top_level_value_spec() {
    assert_roundtrip!("var b, c int = 1, 2\n");
}

#[test]
fn roundtrip_for_snippet() {
    assert_roundtrip!("for j := 7; j <= 9; j++ {\n    fmt.Println(j)\n}\n");
}

#[test]
fn roundtrip_if_chain_snippet() {
    assert_roundtrip!(concat!(
        "if num := 9; num < 0 {\n",
        "    fmt.Println(num, \"is negative\")\n",
        "} else if num < 10 {\n",
        "    fmt.Println(num, \"has 1 digit\")\n",
        "} else {\n",
        "    fmt.Println(num, \"has multiple digits\")\n",
        "}\n",
    ));
}

#[test]
fn roundtrip_type_switch_snippet() {
    assert_roundtrip!(concat!(
        "switch t := i.(type) {\n",
        "case bool:\n",
        "    fmt.Println(\"bool\")\n",
        "case int, float32:\n",
        "    fmt.Println(\"number\")\n",
        "default:\n",
        "    fmt.Println(t)\n",
        "}\n",
    ));
}

#[test]
fn roundtrip_variadic_snippet() {
    assert_roundtrip!(concat!(
        "func sum(nums ...int) {\n",
        "    total := 0\n",
        "    fmt.Println(total)\n",
        "}\n",
        "\n",
        "sum(nums...)\n",
    ));
}

#[test]
fn roundtrip_closure_snippet() {
    assert_roundtrip!(concat!(
        "func counters() (func() int, func() int) {\n",
        "    i := 0\n",
        "    j := 0\n",
        "    return func() int {\n",
        "        i++\n",
        "        return i\n",
        "    }, func() int {\n",
        "        j--\n",
        "        return j\n",
        "    }\n",
        "}\n",
    ));
}

#[test]
fn canonicalization_trims_surrounding_whitespace() {
    let formatted = go_fmt::format_source("\npackage main\n\n\n").unwrap();
    assert_eq!(formatted, "package main\n");
}

#[test]
fn lexer_error_propagates_unchanged() {
    let err = go_fmt::format_source("package ~\n").unwrap_err();
    assert_eq!(err.to_string(), "Illegal character '~'");
}

// Unparser-only cases for trees that cannot come out of the parser in
// this exact shape.
mod constructed {
    use go_syntax::ast::{
        AssignOp, AssignStmt, CallExpr, CompositeLit, Decl, Expr, ExprStmt, Ident, Node, Stmt,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_lhs_assignment_elides_lhs_and_operator() {
        let call = Expr::Call(CallExpr {
            fun: Box::new(Expr::Ident(Ident::new("f"))),
            args: Vec::new(),
            ellipsis: false,
        });
        let node = Node::Decl(Decl::Stmt(Stmt::Assign(AssignStmt {
            lhs: vec![Expr::Ident(Ident::new("_"))],
            op: AssignOp::Assign,
            rhs: vec![call],
        })));

        assert_eq!(go_fmt::unparse(&node), "f()\n");
    }

    #[test]
    fn non_blank_lhs_is_kept() {
        let node = Node::Decl(Decl::Stmt(Stmt::Assign(AssignStmt {
            lhs: vec![Expr::Ident(Ident::new("x"))],
            op: AssignOp::Define,
            rhs: vec![Expr::Ident(Ident::new("y"))],
        })));

        assert_eq!(go_fmt::unparse(&node), "x := y\n");
    }

    #[test]
    fn empty_composite_renders_inline_braces() {
        let node = Node::Decl(Decl::Stmt(Stmt::Expr(ExprStmt {
            expr: Expr::Composite(CompositeLit {
                ty: Box::new(Expr::Ident(Ident::new("T"))),
                elts: Vec::new(),
                incomplete: false,
            }),
        })));

        assert_eq!(go_fmt::unparse(&node), "T{}\n");
    }
}
