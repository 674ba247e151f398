//! The Python emitter.
//!
//! Output discipline: four spaces per nesting level, function bodies at
//! level one, every binary expression fully parenthesized so the target
//! language never re-parses precedence. Evaluation order follows the
//! tree: operands left to right, call arguments in source order.

use lc_par::{BinOp, Expr, FnDef, Op, Program, UnOp};

/// One indentation step.
const INDENT: &str = "    ";

/// Walks a program and accumulates the emitted lines.
///
/// The generator records the arity of `main` while emitting function
/// blocks; the bootstrap footer slices that many arguments off the
/// process argv.
pub struct PyGenerator {
    lines: Vec<String>,
    main_arity: usize,
}

impl Default for PyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PyGenerator {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            main_arity: 0,
        }
    }

    /// Emits the complete output program, consuming the generator.
    pub fn generate(mut self, program: &Program) -> Vec<String> {
        self.lines.push("from sys import argv".to_string());
        self.lines.push(String::new());
        self.lines.push(String::new());

        for func in &program.funcs {
            self.emit_fn(func);
        }

        self.emit_footer();
        self.lines
    }

    fn emit_fn(&mut self, func: &FnDef) {
        let params: Vec<String> = if func.name.as_str() == "main" {
            // main may be called with fewer argv entries than it has
            // parameters; defaults keep the bootstrap call valid.
            self.main_arity = func.params.len();
            func.params.iter().map(|p| format!("{p}=0")).collect()
        } else {
            func.params.iter().map(|p| p.to_string()).collect()
        };

        self.lines.push(format!("def {}({}):", func.name, params.join(",")));
        if emits_nothing(&func.body) {
            self.lines.push(format!("{INDENT}pass"));
        } else {
            self.emit_ops(&func.body, 1);
        }
        self.lines.push(String::new());
        self.lines.push(String::new());
    }

    fn emit_ops(&mut self, ops: &[Op], level: usize) {
        for op in ops {
            self.emit_op(op, level);
        }
    }

    fn emit_op(&mut self, op: &Op, level: usize) {
        let pad = INDENT.repeat(level);
        match op {
            // Declarations produce no output: the target introduces
            // variables on first assignment.
            Op::VarDecl(_) => {}

            Op::Assign(name, value) => {
                self.lines.push(format!("{pad}{name} = {}", emit_expr(value)));
            }

            // Two-level numeric coercion: integer first, float on
            // failure.
            Op::Read(name) => {
                let inner = INDENT.repeat(level + 1);
                self.lines.push(format!("{pad}{name} = input()"));
                self.lines.push(format!("{pad}try:"));
                self.lines.push(format!("{inner}{name} = int({name})"));
                self.lines.push(format!("{pad}except ValueError:"));
                self.lines.push(format!("{inner}{name} = float({name})"));
            }

            Op::Write(value) => {
                self.lines.push(format!("{pad}print({})", emit_expr(value)));
            }

            Op::Return(value) => {
                self.lines.push(format!("{pad}return {}", emit_expr(value)));
            }

            Op::If {
                cond,
                then_ops,
                else_ops,
            } => {
                // An empty then-branch gets its `pass` inline after the
                // colon; an empty else-branch disappears entirely.
                let inline_pass = if emits_nothing(then_ops) { "pass" } else { "" };
                self.lines
                    .push(format!("{pad}if {}:{inline_pass}", emit_expr(cond)));
                if !emits_nothing(then_ops) {
                    self.emit_ops(then_ops, level + 1);
                }
                if let Some(else_ops) = else_ops {
                    if !emits_nothing(else_ops) {
                        self.lines.push(format!("{pad}else:"));
                        self.emit_ops(else_ops, level + 1);
                    }
                }
            }

            Op::While { cond, body } => {
                let inline_pass = if emits_nothing(body) { "pass" } else { "" };
                self.lines
                    .push(format!("{pad}while {}:{inline_pass}", emit_expr(cond)));
                if !emits_nothing(body) {
                    self.emit_ops(body, level + 1);
                }
            }

            Op::Expr(expr) => {
                self.lines.push(format!("{pad}{}", emit_expr(expr)));
            }
        }
    }

    fn emit_footer(&mut self) {
        self.lines.push("if __name__ == '__main__':".to_string());
        self.lines.push(format!("{INDENT}try:"));
        self.lines.push(format!(
            "{INDENT}{INDENT}print(f\"returned: {{main(*argv[1:{}]) or 0}}\")",
            self.main_arity + 1
        ));
        self.lines.push(format!("{INDENT}except NameError:"));
        self.lines.push(format!(
            "{INDENT}{INDENT}print(\"Entry point 'main' not defined\")"
        ));
        self.lines.push(String::new());
    }
}

/// True if emitting `ops` would produce no lines. Declarations elide,
/// so a branch of nothing but `let`s still needs its `pass`.
fn emits_nothing(ops: &[Op]) -> bool {
    ops.iter().all(|op| matches!(op, Op::VarDecl(_)))
}

/// Renders an expression. Binary operations parenthesize themselves
/// unconditionally.
fn emit_expr(expr: &Expr) -> String {
    match expr {
        Expr::Int(value) => value.to_string(),
        Expr::Float(value) => format!("{value:?}"),
        Expr::Var(name) => name.to_string(),
        Expr::Call(name, args) => {
            let args: Vec<String> = args.iter().map(emit_expr).collect();
            format!("{}({})", name, args.join(", "))
        }
        Expr::Unary(op, operand) => {
            let symbol = match op {
                UnOp::Neg => "-",
                UnOp::Not => "not ",
            };
            format!("{symbol}{}", emit_expr(operand))
        }
        Expr::Binary(op, lhs, rhs) => {
            format!("({}{}{})", emit_expr(lhs), bin_symbol(*op), emit_expr(rhs))
        }
    }
}

fn bin_symbol(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Pow => "**",
        BinOp::And => " and ",
        BinOp::Or => " or ",
        BinOp::Equ => "==",
        BinOp::Neq => "!=",
        BinOp::Leq => "<=",
        BinOp::Les => "<",
        BinOp::Geq => ">=",
        BinOp::Grt => ">",
    }
}

/// Generates the output program for a parsed AST.
pub fn generate(program: &Program) -> Vec<String> {
    PyGenerator::new().generate(program)
}
