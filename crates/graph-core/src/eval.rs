// File: crates/graph-core/src/eval.rs
// Summary: Adapter over the evalexpr engine: notation rewriting plus compiled single-variable evaluation.

use evalexpr::{
    build_operator_tree, ContextWithMutableVariables, EvalexprResult, HashMapContext, Node, Value,
};

/// A compiled expression over the single free variable `x`.
/// Compile once per series, evaluate once per sample.
pub struct Expression {
    node: Node,
}

impl Expression {
    pub fn compile(text: &str) -> EvalexprResult<Self> {
        let node = build_operator_tree(&prepare(text))?;
        Ok(Self { node })
    }

    /// Evaluate under the binding `{x}` with `pi` and `e` in scope.
    /// Errors if the expression fails to evaluate or yields a non-number.
    pub fn eval(&self, x: f64) -> EvalexprResult<f64> {
        let mut ctx = HashMapContext::new();
        ctx.set_value("x".into(), Value::Float(x))?;
        ctx.set_value("pi".into(), Value::Float(std::f64::consts::PI))?;
        ctx.set_value("e".into(), Value::Float(std::f64::consts::E))?;
        self.node.eval_with_context(&ctx)?.as_number()
    }
}

/// Function names accepted in user input, mapped to the evaluator's
/// namespaced builtins. Matched against whole identifiers only, so `sin`
/// inside `asin` is never touched.
const FUNCTIONS: [(&str, &str); 18] = [
    ("sin", "math::sin"),
    ("cos", "math::cos"),
    ("tan", "math::tan"),
    ("asin", "math::asin"),
    ("acos", "math::acos"),
    ("atan", "math::atan"),
    ("atan2", "math::atan2"),
    ("sinh", "math::sinh"),
    ("cosh", "math::cosh"),
    ("tanh", "math::tanh"),
    ("sqrt", "math::sqrt"),
    ("cbrt", "math::cbrt"),
    ("abs", "math::abs"),
    ("ln", "math::ln"),
    ("exp", "math::exp"),
    ("log", "math::log10"), // log(x) reads as base 10
    ("log2", "math::log2"),
    ("log10", "math::log10"),
];

fn rename(ident: &str) -> &str {
    for &(name, replacement) in &FUNCTIONS {
        if ident == name {
            return replacement;
        }
    }
    ident
}

/// Rewrite user-facing math notation into the evaluator's dialect:
/// `**` becomes `^`, known function names gain their `math::` namespace,
/// and bare integer literals become floats so that `1/2` divides in the
/// reals. Decimal and scientific-notation literals pass through untouched.
fn prepare(text: &str) -> String {
    let text = text.replace("**", "^");
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let ident: String = chars[start..i].iter().collect();
            if out.ends_with("::") {
                // already qualified by the user, leave it alone
                out.push_str(&ident);
            } else {
                out.push_str(rename(&ident));
            }
        } else if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                out.extend(&chars[start..i]);
            } else if is_exponent(&chars, i) {
                i += 1;
                if chars[i] == '+' || chars[i] == '-' {
                    i += 1;
                }
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                out.extend(&chars[start..i]);
            } else {
                // digits right after a dot are the fraction of a leading-dot
                // literal like `.5` and are already float
                let follows_dot = out.ends_with('.');
                out.extend(&chars[start..i]);
                if !follows_dot {
                    out.push_str(".0");
                }
            }
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

/// True when `chars[i]` starts a scientific-notation exponent (`e5`, `e-3`).
fn is_exponent(chars: &[char], i: usize) -> bool {
    if i >= chars.len() || (chars[i] != 'e' && chars[i] != 'E') {
        return false;
    }
    match chars.get(i + 1) {
        Some(d) if d.is_ascii_digit() => true,
        Some('+') | Some('-') => matches!(chars.get(i + 2), Some(d) if d.is_ascii_digit()),
        _ => false,
    }
}
