//! Genome codec: bit string → token sequence → text.
//!
//! Genes are read left to right, most significant bit first. The decoder
//! keeps only genes that fit an alternating `operator, operand, operator, …`
//! grammar, starting with an operator:
//!
//! | Gene value | Role |
//! |---|---|
//! | 0–9 | operand (digit) |
//! | 10 | `+` |
//! | 11 | `-` |
//! | 12 | `*` |
//! | 13 | `/` |
//! | 14+ | unused |
//!
//! A gene that does not fit the expected role is skipped and the
//! expectation is left unchanged.

use std::fmt;

/// A binary arithmetic operator encoded by gene values 10–13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Maps a gene value to an operator, if it encodes one.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            10 => Some(Operator::Add),
            11 => Some(Operator::Subtract),
            12 => Some(Operator::Multiply),
            13 => Some(Operator::Divide),
            _ => None,
        }
    }

    /// The gene value encoding this operator.
    pub fn code(self) -> u8 {
        match self {
            Operator::Add => 10,
            Operator::Subtract => 11,
            Operator::Multiply => 12,
            Operator::Divide => 13,
        }
    }

    /// Applies the operator to the running value.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Operator::Add => " + ",
            Operator::Subtract => " - ",
            Operator::Multiply => " * ",
            Operator::Divide => " / ",
        }
    }
}

/// One decoded gene: an operator or a single digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Op(Operator),
    Digit(u8),
}

impl Token {
    /// The gene value this token was decoded from.
    pub fn code(self) -> u8 {
        match self {
            Token::Op(op) => op.code(),
            Token::Digit(d) => d,
        }
    }

    pub fn is_operator(self) -> bool {
        matches!(self, Token::Op(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Op(op) => f.write_str(op.symbol()),
            Token::Digit(d) => write!(f, "{d}"),
        }
    }
}

/// Converts one gene to its integer value, most significant bit first.
pub fn gene_value(gene: &[bool]) -> u8 {
    gene.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit))
}

/// Decodes a genome into its alternating token sequence.
///
/// The result starts with an operator, strictly alternates, and may end
/// with a dangling operator. Its length never exceeds
/// `bits.len() / gene_length`. A trailing partial gene is ignored.
///
/// Division by a literal zero is removed by
/// [`rewrite_division_by_zero`] before returning.
///
/// # Panics
/// Panics if `gene_length` is zero or greater than 8.
pub fn decode(bits: &[bool], gene_length: usize) -> Vec<Token> {
    assert!(
        (1..=8).contains(&gene_length),
        "gene_length must be between 1 and 8"
    );

    let mut tokens = Vec::with_capacity(bits.len() / gene_length);
    let mut expect_operator = true;

    for gene in bits.chunks_exact(gene_length) {
        let value = gene_value(gene);
        if expect_operator {
            if let Some(op) = Operator::from_code(value) {
                tokens.push(Token::Op(op));
                expect_operator = false;
            }
        } else if value < 10 {
            tokens.push(Token::Digit(value));
            expect_operator = true;
        }
    }

    rewrite_division_by_zero(&mut tokens);
    tokens
}

/// Rewrites every `/` immediately followed by the digit `0` into `+`.
///
/// The gene count is unchanged, so the genome stays as mutable as before;
/// only its interpretation changes. Returns the number of rewrites.
pub fn rewrite_division_by_zero(tokens: &mut [Token]) -> usize {
    let mut rewritten = 0;
    for i in 0..tokens.len().saturating_sub(1) {
        if tokens[i] == Token::Op(Operator::Divide) && tokens[i + 1] == Token::Digit(0) {
            tokens[i] = Token::Op(Operator::Add);
            rewritten += 1;
        }
    }
    rewritten
}

/// Renders a token sequence as text, e.g. `" + 2 * 3"`.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}
