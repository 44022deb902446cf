//! Infix to postfix conversion
//!
//! A restricted shunting-yard: four left-associative binary operators in two
//! precedence tiers, parentheses for grouping, and nothing else (no unary
//! minus, no exponentiation).
//!
//! | Token       | Rank |
//! |-------------|------|
//! | `*` `/`     | 3    |
//! | `+` `-`     | 2    |
//! | `(`         | 1    |
//!
//! An open paren sits on the operator stack as a floor: every real operator
//! outranks it, so only a matching `)` ever removes it.
//!
//! The generic entry point is [`to_postfix`], which works over any operand
//! type. [`infix_to_postfix`] is the character-level front end: operands are
//! single ASCII uppercase letters or digits, and whitespace is ignored.
//!
//! # Example
//!
//! ```rust
//! use textbook_structures::expression::{evaluate_postfix, infix_to_postfix};
//!
//! assert_eq!(infix_to_postfix("(A+B)*C").unwrap(), "AB+C*");
//!
//! let postfix = infix_to_postfix("((9+5)-(8-6)*(5-1))").unwrap();
//! assert_eq!(postfix, "95+86-51-*-");
//! assert_eq!(evaluate_postfix(&postfix), Ok(6));
//! ```

use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

/// Error type for expression conversion and evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// A `)` without a matching `(`, or a `(` that is never closed
    #[error("unbalanced parenthesis")]
    UnbalancedParen,
    /// A character that is neither an operand, an operator, a paren, nor whitespace
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedChar { ch: char, position: usize },
    /// An operator was reached with fewer than two operands available
    #[error("operator is missing an operand")]
    MissingOperand,
    /// More than one value was left once the expression was consumed
    #[error("expression leaves unused operands")]
    TrailingOperands,
    /// A letter operand has no bound value
    #[error("operand {0:?} has no value")]
    UnboundOperand(char),
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow")]
    Overflow,
}

/// A binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Mul | Operator::Div => 3,
            Operator::Add | Operator::Sub => 2,
        }
    }

    /// Applies the operator with checked integer arithmetic
    ///
    /// Division truncates toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, ExpressionError> {
        let result = match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Sub => lhs.checked_sub(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
            Operator::Div => {
                if rhs == 0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(ExpressionError::Overflow)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One lexical unit of an infix or postfix expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<T> {
    Operand(T),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl<T: fmt::Display> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(value) => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// An entry on the pending-operator stack
#[derive(Debug, Clone, Copy)]
enum Pending {
    OpenParen,
    Op(Operator),
}

impl Pending {
    fn precedence(self) -> u8 {
        match self {
            Pending::OpenParen => 1,
            Pending::Op(op) => op.precedence(),
        }
    }
}

/// Converts an infix token sequence into postfix order
///
/// Operands pass straight through. An operator first pops every pending
/// operator of greater or equal rank, which makes all four operators
/// left-associative. Parentheses never reach the output.
///
/// # Errors
/// [`ExpressionError::UnbalancedParen`] when a `)` finds no open paren on the
/// stack, or when a `(` is still pending at the end of input. Operand and
/// operator alternation is not checked here; [`evaluate_postfix`] reports
/// those mistakes.
pub fn to_postfix<T, I>(tokens: I) -> Result<Vec<Token<T>>, ExpressionError>
where
    I: IntoIterator<Item = Token<T>>,
{
    let mut pending: SmallVec<[Pending; 16]> = SmallVec::new();
    let mut output = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(value) => output.push(Token::Operand(value)),
            Token::LeftParen => pending.push(Pending::OpenParen),
            Token::RightParen => loop {
                match pending.pop() {
                    Some(Pending::OpenParen) => break,
                    Some(Pending::Op(op)) => output.push(Token::Operator(op)),
                    None => return Err(ExpressionError::UnbalancedParen),
                }
            },
            Token::Operator(op) => {
                while let Some(&top) = pending.last() {
                    match top {
                        Pending::Op(top_op) if top.precedence() >= op.precedence() => {
                            pending.pop();
                            output.push(Token::Operator(top_op));
                        }
                        _ => break,
                    }
                }
                pending.push(Pending::Op(op));
            }
        }
    }

    while let Some(top) = pending.pop() {
        match top {
            Pending::Op(op) => output.push(Token::Operator(op)),
            Pending::OpenParen => return Err(ExpressionError::UnbalancedParen),
        }
    }

    Ok(output)
}

/// Splits an infix string into single-character tokens
///
/// Operands are ASCII uppercase letters and ASCII digits. Whitespace is
/// skipped; positions in errors count characters, whitespace included.
pub fn tokenize(expr: &str) -> Result<Vec<Token<char>>, ExpressionError> {
    let mut tokens = Vec::with_capacity(expr.len());
    for (position, ch) in expr.chars().enumerate() {
        let token = match ch {
            c if c.is_whitespace() => continue,
            c if c.is_ascii_uppercase() || c.is_ascii_digit() => Token::Operand(c),
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            c => match Operator::from_symbol(c) {
                Some(op) => Token::Operator(op),
                None => return Err(ExpressionError::UnexpectedChar { ch: c, position }),
            },
        };
        tokens.push(token);
    }
    Ok(tokens)
}

/// Converts an infix string such as `"A+B*C"` into its postfix form `"ABC*+"`
pub fn infix_to_postfix(expr: &str) -> Result<String, ExpressionError> {
    let postfix = to_postfix(tokenize(expr)?)?;
    Ok(postfix.iter().map(ToString::to_string).collect())
}

/// Evaluates a postfix string whose operands are all digits
pub fn evaluate_postfix(expr: &str) -> Result<i64, ExpressionError> {
    evaluate_postfix_with(expr, |_| None)
}

/// Evaluates a postfix string, looking up letter operands in `bindings`
///
/// Digits stand for their own value. Whitespace is skipped.
///
/// # Errors
/// [`ExpressionError::MissingOperand`] when an operator finds fewer than two
/// values, [`ExpressionError::TrailingOperands`] when more than one value is
/// left, [`ExpressionError::UnboundOperand`] for a letter `bindings` does not
/// know, and the arithmetic errors of [`Operator::apply`].
pub fn evaluate_postfix_with<F>(expr: &str, bindings: F) -> Result<i64, ExpressionError>
where
    F: Fn(char) -> Option<i64>,
{
    let mut values: SmallVec<[i64; 16]> = SmallVec::new();

    for (position, ch) in expr.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        if let Some(digit) = ch.to_digit(10) {
            values.push(i64::from(digit));
        } else if ch.is_ascii_uppercase() {
            values.push(bindings(ch).ok_or(ExpressionError::UnboundOperand(ch))?);
        } else if let Some(op) = Operator::from_symbol(ch) {
            let rhs = values.pop().ok_or(ExpressionError::MissingOperand)?;
            let lhs = values.pop().ok_or(ExpressionError::MissingOperand)?;
            values.push(op.apply(lhs, rhs)?);
        } else {
            return Err(ExpressionError::UnexpectedChar { ch, position });
        }
    }

    let result = values.pop().ok_or(ExpressionError::MissingOperand)?;
    if !values.is_empty() {
        return Err(ExpressionError::TrailingOperands);
    }
    Ok(result)
}
