//! Calculator Tool
//!
//! Evaluates arithmetic expressions: `+ - * / ^`, parentheses, unary
//! minus. Errors come back as text, never as a failure.

use async_trait::async_trait;

use agent_core::Tool;

pub struct CalculatorTool;

#[async_trait]
impl Tool for CalculatorTool {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Evaluate math expressions"
    }

    async fn invoke(&self, expression: &str) -> String {
        match evaluate(expression) {
            Ok(value) => format!("Result: {}", format_value(value)),
            Err(message) => format!("Error evaluating: {message}"),
        }
    }
}

/// Render integral results without a fractional part (`4`, not `4.0`)
fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn evaluate(expression: &str) -> std::result::Result<f64, String> {
    let expr: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if expr.is_empty() {
        return Err("empty expression".into());
    }
    eval_expr(&expr)
}

/// Recursive evaluator: innermost parentheses first, then operators by
/// ascending precedence, splitting at the rightmost occurrence so that
/// same-precedence chains stay left-associative.
fn eval_expr(expr: &str) -> std::result::Result<f64, String> {
    if let Some(start) = expr.rfind('(') {
        let end = expr[start..]
            .find(')')
            .ok_or_else(|| "unbalanced parentheses".to_string())?;
        let inner = eval_expr(&expr[start + 1..start + end])?;
        let rewritten = format!("{}{}{}", &expr[..start], inner, &expr[start + end + 1..]);
        return eval_expr(&rewritten);
    }
    if expr.contains(')') {
        return Err("unbalanced parentheses".into());
    }

    // Addition/subtraction (lowest precedence, split last in the tree).
    // The previous character must end a number, otherwise the sign is unary.
    for (i, c) in expr.char_indices().rev() {
        if (c == '+' || c == '-') && i > 0 {
            let prev = expr.as_bytes()[i - 1] as char;
            if prev.is_ascii_digit() || prev == '.' {
                let left = eval_expr(&expr[..i])?;
                let right = eval_expr(&expr[i + 1..])?;
                return Ok(if c == '+' { left + right } else { left - right });
            }
        }
    }

    // Multiplication/division
    for (i, c) in expr.char_indices().rev() {
        if c == '*' || c == '/' {
            let left = eval_expr(&expr[..i])?;
            let right = eval_expr(&expr[i + 1..])?;
            if c == '/' {
                if right == 0.0 {
                    return Err("division by zero".into());
                }
                return Ok(left / right);
            }
            return Ok(left * right);
        }
    }

    // Exponentiation
    if let Some(i) = expr.find('^') {
        let base = eval_expr(&expr[..i])?;
        let exponent = eval_expr(&expr[i + 1..])?;
        return Ok(base.powf(exponent));
    }

    expr.parse::<f64>()
        .map_err(|_| format!("invalid number '{expr}'"))
}
