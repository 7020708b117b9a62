//! Owned AST node types for the supported Go subset.
//!
//! The tree shape follows Go's own `go/ast` package: every node kind is a
//! tagged variant with a fixed attribute set, children are owned by their
//! parent, and there is no sharing between subtrees. Nodes are produced by
//! the parser and consumed read-only by the unparser.

use serde::{Deserialize, Serialize};
use strum::Display;

/// The root of a parse: a whole file when a `package` clause is present,
/// otherwise a single top-level item or a sequence of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    File(File),
    Decl(Decl),
    Seq(Vec<Decl>),
}

/// A source file with a `package` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub package: Package,
    pub decls: Vec<Decl>,
}

/// `package X`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
}

/// A line comment. `text` excludes the `//` prefix and the trailing
/// newline; both are re-added when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
}

/// A top-level item: a declaration, a comment, or a bare statement.
///
/// Bare statements let small snippets without a `package` clause
/// round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    Gen(GenDecl),
    Func(FuncDecl),
    Comment(Comment),
    Stmt(Stmt),
}

/// The keyword introducing a [`GenDecl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum DeclTok {
    #[strum(serialize = "import")]
    Import,
    #[strum(serialize = "var")]
    Var,
    #[strum(serialize = "const")]
    Const,
    #[strum(serialize = "type")]
    Type,
}

/// A (possibly grouped) `import`/`var`/`const`/`type` declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenDecl {
    pub tok: DeclTok,
    pub specs: Vec<Spec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

/// One import path, optionally renamed (`import f "fmt"`) or
/// dot-imported (`import . "fmt"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSpec {
    pub name: Option<Ident>,
    pub path: BasicLit,
}

/// `var a, b int = 1, 2` and friends. An empty `values` list means a
/// declaration without initializers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSpec {
    pub names: Vec<String>,
    pub ty: Option<Expr>,
    pub values: Vec<Expr>,
}

/// `type Name struct { ... }` / `type Name interface { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub name: Ident,
    pub ty: Expr,
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub recv: Option<FieldList>,
    pub name: String,
    pub ty: FuncType,
    pub body: BlockStmt,
}

// region: Expressions

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Ident(Ident),
    BasicLit(BasicLit),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Paren(ParenExpr),
    Selector(SelectorExpr),
    Index(IndexExpr),
    Slice(SliceExpr),
    Call(CallExpr),
    Star(StarExpr),
    TypeAssert(TypeAssertExpr),
    Composite(CompositeLit),
    KeyValue(KeyValueExpr),
    FuncLit(FuncLit),
    Ellipsis(Ellipsis),
    FuncType(FuncType),
    ArrayType(ArrayType),
    MapType(MapType),
    StructType(StructType),
    InterfaceType(InterfaceType),
    Comment(Comment),
}

impl Expr {
    /// Whether the expression is the blank identifier `_`.
    #[must_use]
    pub fn is_blank_ident(&self) -> bool {
        matches!(self, Expr::Ident(ident) if ident.name == "_")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The kind tag of a [`BasicLit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    Str,
    True,
    False,
}

/// A literal. `value` holds the lexeme without the surrounding quotes
/// for strings and chars, and is `None` for `true`/`false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicLit {
    pub kind: LitKind,
    pub value: Option<String>,
}

impl BasicLit {
    pub fn new(kind: LitKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub x: Box<Expr>,
    pub op: BinOp,
    pub y: Box<Expr>,
}

/// A unary operation. `right` is true for the postfix forms `x++`
/// and `x--`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnOp,
    pub x: Box<Expr>,
    pub right: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenExpr {
    pub x: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorExpr {
    pub x: Box<Expr>,
    pub sel: Ident,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
    pub x: Box<Expr>,
    pub index: Box<Expr>,
}

/// `x[low:high]`, or `x[low:high:max]` when `slice3` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceExpr {
    pub x: Box<Expr>,
    pub low: Option<Box<Expr>>,
    pub high: Option<Box<Expr>>,
    pub max: Option<Box<Expr>>,
    pub slice3: bool,
}

/// A call. `ellipsis` records a spread final argument (`f(xs...)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub fun: Box<Expr>,
    pub args: Vec<Expr>,
    pub ellipsis: bool,
}

/// Both the pointer type `*T` and the dereference `*p`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarExpr {
    pub x: Box<Expr>,
}

/// `x.(T)`; `ty` is `None` for the `x.(type)` form of a type switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAssertExpr {
    pub x: Box<Expr>,
    pub ty: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeLit {
    pub ty: Box<Expr>,
    pub elts: Vec<Expr>,
    pub incomplete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValueExpr {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncLit {
    pub ty: FuncType,
    pub body: BlockStmt,
}

/// A variadic field type: `...T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipsis {
    pub ty: Box<Expr>,
}

// endregion

// region: Types

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncType {
    pub params: FieldList,
    pub results: FieldList,
}

/// `[len]T`, or the slice `[]T` when `len` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayType {
    pub len: Option<Box<Expr>>,
    pub elt: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapType {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructType {
    pub fields: FieldList,
    pub incomplete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceType {
    pub methods: FieldList,
    pub incomplete: bool,
}

/// Possibly empty, never missing: an empty parameter list is
/// `FieldList { list: vec![] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldList {
    pub list: Vec<Field>,
}

impl FieldList {
    pub fn new(list: Vec<Field>) -> Self {
        Self { list }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// A parameter, result, struct field, or interface method. A field
/// without a name is positional (return types, embedded fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: Option<String>,
    pub ty: Expr,
}

// endregion

// region: Statements

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Expr(ExprStmt),
    Assign(AssignStmt),
    Return(ReturnStmt),
    Branch(BranchStmt),
    Labeled(LabeledStmt),
    If(IfStmt),
    For(ForStmt),
    Range(RangeStmt),
    Switch(SwitchStmt),
    Case(CaseClause),
    Block(BlockStmt),
    Decl(DeclStmt),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStmt {
    pub list: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignStmt {
    pub lhs: Vec<Expr>,
    pub op: AssignOp,
    pub rhs: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub results: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchStmt {
    pub tok: BranchTok,
    pub label: Option<String>,
}

/// A free-standing label (`L:`). The statement that follows is a
/// sibling, not a child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledStmt {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub init: Option<Box<Stmt>>,
    pub cond: Expr,
    pub body: BlockStmt,
    pub els: Option<ElseBranch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElseBranch {
    If(Box<IfStmt>),
    Block(BlockStmt),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub cond: Option<Expr>,
    pub post: Option<Box<Stmt>>,
    pub body: BlockStmt,
}

/// `for k, v := range x { ... }`. Without iteration variables `key`,
/// `value` and `tok` are all absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeStmt {
    pub key: Option<Expr>,
    pub value: Option<Expr>,
    pub tok: Option<RangeTok>,
    pub x: Expr,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStmt {
    pub init: Option<Box<Stmt>>,
    pub tag: Option<Expr>,
    pub body: BlockStmt,
}

/// One `case`/`default` arm; an empty `list` is the `default` arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseClause {
    pub list: Vec<Expr>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclStmt {
    pub decl: GenDecl,
}

// endregion

// region: Operators

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum BinOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Quo,
    #[strum(serialize = "%")]
    Rem,
    #[strum(serialize = "&")]
    And,
    #[strum(serialize = "|")]
    Or,
    #[strum(serialize = "^")]
    Xor,
    #[strum(serialize = "<<")]
    Shl,
    #[strum(serialize = ">>")]
    Shr,
    #[strum(serialize = "&^")]
    AndNot,
    #[strum(serialize = "&&")]
    Land,
    #[strum(serialize = "||")]
    Lor,
    #[strum(serialize = "<-")]
    Arrow,
    #[strum(serialize = "==")]
    Eql,
    #[strum(serialize = "!=")]
    Neq,
    #[strum(serialize = "<")]
    Lss,
    #[strum(serialize = "<=")]
    Leq,
    #[strum(serialize = ">")]
    Gtr,
    #[strum(serialize = ">=")]
    Geq,
}

impl BinOp {
    /// Left/right binding power, following Go's operator precedence.
    /// Left associativity falls out of `left < right`.
    #[must_use]
    pub fn binding_power(self) -> (u8, u8) {
        use BinOp::*;
        match self {
            Arrow => (1, 2),
            Lor => (3, 4),
            Land => (5, 6),
            Eql | Neq | Lss | Leq | Gtr | Geq => (7, 8),
            Add | Sub | Or | Xor => (9, 10),
            Mul | Quo | Rem | Shl | Shr | And | AndNot => (11, 12),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum UnOp {
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "^")]
    Xor,
    #[strum(serialize = "!")]
    Not,
    #[strum(serialize = "&")]
    And,
    #[strum(serialize = "++")]
    Inc,
    #[strum(serialize = "--")]
    Dec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum AssignOp {
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = ":=")]
    Define,
    #[strum(serialize = "+=")]
    AddAssign,
    #[strum(serialize = "-=")]
    SubAssign,
    #[strum(serialize = "*=")]
    MulAssign,
    #[strum(serialize = "/=")]
    QuoAssign,
    #[strum(serialize = "%=")]
    RemAssign,
    #[strum(serialize = "&=")]
    AndAssign,
    #[strum(serialize = "|=")]
    OrAssign,
    #[strum(serialize = "^=")]
    XorAssign,
    #[strum(serialize = "&^=")]
    AndNotAssign,
    #[strum(serialize = "<<=")]
    ShlAssign,
    #[strum(serialize = ">>=")]
    ShrAssign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum BranchTok {
    #[strum(serialize = "break")]
    Break,
    #[strum(serialize = "continue")]
    Continue,
    #[strum(serialize = "goto")]
    Goto,
    #[strum(serialize = "fallthrough")]
    Fallthrough,
}

/// The token between the iteration variables and `range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum RangeTok {
    #[strum(serialize = ":=")]
    Define,
    #[strum(serialize = "=")]
    Assign,
}

// endregion
