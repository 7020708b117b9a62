use go_syntax::ast::{Expr, Stmt};
use go_syntax::parse;
use go_syntax::visitor::{walk_expr, walk_node, walk_stmt, Visitor};

#[derive(Default)]
struct Recorder {
    events: Vec<&'static str>,
}

impl Visitor for Recorder {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        self.events.push(stmt_name(stmt));
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        self.events.push(expr_name(expr));
        walk_expr(self, expr);
    }
}

fn stmt_name(stmt: &Stmt) -> &'static str {
    match stmt {
        Stmt::Expr(_) => "expr_stmt",
        Stmt::Assign(_) => "assign",
        Stmt::Return(_) => "return",
        Stmt::Branch(_) => "branch",
        Stmt::Labeled(_) => "labeled",
        Stmt::If(_) => "if",
        Stmt::For(_) => "for",
        Stmt::Range(_) => "range",
        Stmt::Switch(_) => "switch",
        Stmt::Case(_) => "case",
        Stmt::Block(_) => "block",
        Stmt::Decl(_) => "decl",
    }
}

fn expr_name(expr: &Expr) -> &'static str {
    match expr {
        Expr::Ident(_) => "ident",
        Expr::BasicLit(_) => "basic_lit",
        Expr::Binary(_) => "binary",
        Expr::Unary(_) => "unary",
        Expr::Paren(_) => "paren",
        Expr::Selector(_) => "selector",
        Expr::Index(_) => "index",
        Expr::Slice(_) => "slice",
        Expr::Call(_) => "call",
        Expr::Star(_) => "star",
        Expr::TypeAssert(_) => "type_assert",
        Expr::Composite(_) => "composite",
        Expr::KeyValue(_) => "key_value",
        Expr::FuncLit(_) => "func_lit",
        Expr::Ellipsis(_) => "ellipsis",
        Expr::FuncType(_) => "func_type",
        Expr::ArrayType(_) => "array_type",
        Expr::MapType(_) => "map_type",
        Expr::StructType(_) => "struct_type",
        Expr::InterfaceType(_) => "interface_type",
        Expr::Comment(_) => "comment",
    }
}

fn trace(source: &str) -> Vec<&'static str> {
    let node = parse(source).unwrap();
    let mut recorder = Recorder::default();
    walk_node(&mut recorder, &node);
    recorder.events
}

#[test]
fn traversal_is_source_ordered() {
    assert_eq!(
        trace("x := f(1 + 2)\n"),
        [
            "assign",
            "ident",
            "call",
            "ident",
            "binary",
            "basic_lit",
            "basic_lit",
        ]
    );
}

#[test]
fn file_traversal_descends_into_function_bodies() {
    assert_eq!(
        trace(include_str!("../../../testdata/valid/hello_world.go")),
        ["expr_stmt", "call", "selector", "ident", "basic_lit"]
    );
}

#[test]
fn struct_fields_are_visited_through_the_type_spec() {
    assert_eq!(
        trace("type point struct {\n    x int\n    y int\n}\n"),
        ["decl", "struct_type", "ident", "ident"]
    );
}

#[test]
fn if_chains_visit_every_branch() {
    let source = concat!(
        "if a {\n",
        "    f()\n",
        "} else if b {\n",
        "    g()\n",
        "} else {\n",
        "    h()\n",
        "}\n",
    );
    assert_eq!(
        trace(source),
        [
            "if", "ident", "expr_stmt", "call", "ident", "ident", "expr_stmt", "call", "ident",
            "expr_stmt", "call", "ident",
        ]
    );
}
