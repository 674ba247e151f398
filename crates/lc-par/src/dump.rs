//! AST dump formats (diagnostic, stable).
//!
//! The typed tree is rendered back onto the tag vocabulary of the
//! grammar (`PROG`, `FDEF`, `COND`, `BRANCH`, ...): internal nodes list
//! their children, leaves embed their scalar as `TAG[value]`.

use lc_util::DumpFormat;
use serde::Serialize;

use crate::ast::{BinOp, Expr, FnDef, Op, Program, UnOp};

/// One node of the rendered tree.
#[derive(Serialize)]
struct DumpNode {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<DumpNode>,
}

fn branch(name: &str, children: Vec<DumpNode>) -> DumpNode {
    DumpNode {
        name: name.to_string(),
        children,
    }
}

fn leaf(tag: &str, value: impl std::fmt::Display) -> DumpNode {
    DumpNode {
        name: format!("{tag}[{value}]"),
        children: Vec::new(),
    }
}

/// Renders a parsed program in the requested format.
///
/// The txt form indents two spaces per level. The json form nests
/// `{"name", "children"}` objects with two-space indentation and omits
/// the `children` key on leaves.
pub fn dump_ast(program: &Program, format: DumpFormat) -> String {
    let tree = program_node(program);
    match format {
        DumpFormat::Txt => {
            let mut lines = Vec::new();
            render_txt(&tree, 0, &mut lines);
            lines.join("\n")
        }
        DumpFormat::Json => {
            serde_json::to_string_pretty(&tree).expect("dump tree serializes to JSON")
        }
    }
}

fn render_txt(node: &DumpNode, level: usize, lines: &mut Vec<String>) {
    lines.push(format!("{}{}", "  ".repeat(level), node.name));
    for child in &node.children {
        render_txt(child, level + 1, lines);
    }
}

fn program_node(program: &Program) -> DumpNode {
    branch("PROG", program.funcs.iter().map(fdef_node).collect())
}

fn fdef_node(func: &FnDef) -> DumpNode {
    let args = func
        .params
        .iter()
        .map(|param| leaf("FARG", param))
        .collect();
    branch(
        "FDEF",
        vec![
            leaf("FNAME", func.name),
            branch("FARGS", args),
            branch("FBODY", ops_nodes(&func.body)),
        ],
    )
}

fn ops_nodes(ops: &[Op]) -> Vec<DumpNode> {
    ops.iter().map(op_node).collect()
}

fn op_node(op: &Op) -> DumpNode {
    match op {
        Op::VarDecl(name) => branch("VARDECL", vec![leaf("NAME", name)]),
        Op::Assign(name, value) => {
            branch("VARASGN", vec![leaf("VAR", name), expr_node(value)])
        }
        Op::Read(name) => branch("READ", vec![leaf("VAR", name)]),
        Op::Write(value) => branch("WRITE", vec![expr_node(value)]),
        Op::Return(value) => branch("RETURN", vec![expr_node(value)]),
        Op::If {
            cond,
            then_ops,
            else_ops,
        } => {
            let mut children = vec![
                branch("COND", vec![expr_node(cond)]),
                branch("BRANCH", ops_nodes(then_ops)),
            ];
            if let Some(else_ops) = else_ops {
                children.push(branch("BRANCH", ops_nodes(else_ops)));
            }
            branch("IF", children)
        }
        Op::While { cond, body } => branch(
            "WHILE",
            vec![
                branch("COND", vec![expr_node(cond)]),
                branch("BRANCH", ops_nodes(body)),
            ],
        ),
        Op::Expr(expr) => expr_node(expr),
    }
}

fn expr_node(expr: &Expr) -> DumpNode {
    match expr {
        Expr::Int(value) => leaf("INT", value),
        Expr::Float(value) => leaf("FLOAT", format!("{value:?}")),
        Expr::Var(name) => leaf("VAR", name),
        Expr::Call(name, args) => {
            let mut children = vec![leaf("FNAME", name)];
            children.extend(args.iter().map(expr_node));
            branch("FCALL", children)
        }
        Expr::Unary(op, operand) => {
            let tag = match op {
                UnOp::Neg => "NEG",
                UnOp::Not => "NOT",
            };
            branch(tag, vec![expr_node(operand)])
        }
        Expr::Binary(op, lhs, rhs) => {
            branch(bin_tag(*op), vec![expr_node(lhs), expr_node(rhs)])
        }
    }
}

fn bin_tag(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "ADD",
        BinOp::Sub => "SUB",
        BinOp::Mul => "MUL",
        BinOp::Div => "DIV",
        BinOp::Pow => "POW",
        BinOp::And => "AND",
        BinOp::Or => "OR",
        BinOp::Equ => "EQU",
        BinOp::Neq => "NEQ",
        BinOp::Leq => "LEQ",
        BinOp::Les => "LES",
        BinOp::Geq => "GEQ",
        BinOp::Grt => "GRT",
    }
}
