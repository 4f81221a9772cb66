//! [Token]s are the lexical units a lexer produces and a parser consumes.
//!
//! A [Token] pairs its [TokenData] with a [Provenance]. [TokenData] is a
//! closed sum type: marker tokens carry no payload, while identifier,
//! operator, integer and float tokens carry exactly one typed payload.
//! Since the [TokenKind] is derived from the data, the kind and the payload
//! can never disagree.
//!
//! A parser that only holds a lookahead [Token] can ask for its
//! [kind](Token::get_kind) and then for the one payload it cares about.
//! Asking for the wrong payload is reported as an
//! [ErrorKind::InvalidAccess](crate::result::ErrorKind::InvalidAccess) error
//! whose inner error is an [InvalidAccessErr]. Matching on
//! [Token::data] avoids the check altogether:
//! ```
//! use lexis::token::{MathOp, Token, TokenData};
//!
//! let tok = Token::math_op_at(MathOp::Times, "a * b");
//! let prec = match tok.data() {
//!     TokenData::MathematicalOp(MathOp::Times | MathOp::Divide) => 2,
//!     TokenData::MathematicalOp(_) => 1,
//!     _ => 0,
//! };
//! assert_eq!(prec, 2);
//! assert_eq!(tok.to_string(), "MathOpToken[*]@a * b");
//! ```

use std::fmt::Display;

use thiserror::Error;

use crate::{
    access_error, arg_err, arg_err_noinfo,
    provenance::{HasProvenance, Provenance},
    result::{Error, Result},
    utils::float::FixedPoint,
};

/// Index into the (external) symbol table. Not validated.
pub type SymbolEntry = usize;

/// The discriminant of a [Token].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    EndOfInput,
    EndOfStatement,
    AssignmentOp,
    OpenParen,
    CloseParen,
    Identifier,
    MathematicalOp,
    IntegerValue,
    FloatValue,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 9] = [
        TokenKind::EndOfInput,
        TokenKind::EndOfStatement,
        TokenKind::AssignmentOp,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Identifier,
        TokenKind::MathematicalOp,
        TokenKind::IntegerValue,
        TokenKind::FloatValue,
    ];

    /// The label a token of this kind is rendered with.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EndToken",
            TokenKind::EndOfStatement => "EndStatementToken",
            TokenKind::AssignmentOp => "AssignmentOpToken",
            TokenKind::OpenParen => "OpenParenthesisToken",
            TokenKind::CloseParen => "CloseParenthesisToken",
            TokenKind::Identifier => "IdentifierToken",
            TokenKind::MathematicalOp => "MathOpToken",
            TokenKind::IntegerValue => "IntegerToken",
            TokenKind::FloatValue => "FloatToken",
        }
    }

    /// Tokens of marker kinds carry no payload.
    pub fn is_marker(self) -> bool {
        !matches!(
            self,
            TokenKind::Identifier
                | TokenKind::MathematicalOp
                | TokenKind::IntegerValue
                | TokenKind::FloatValue
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Same as the variant name.
        write!(f, "{:?}", self)
    }
}

/// The payload-less token kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Marker {
    #[default]
    EndOfInput,
    EndOfStatement,
    AssignmentOp,
    OpenParen,
    CloseParen,
}

impl Marker {
    pub fn kind(self) -> TokenKind {
        match self {
            Marker::EndOfInput => TokenKind::EndOfInput,
            Marker::EndOfStatement => TokenKind::EndOfStatement,
            Marker::AssignmentOp => TokenKind::AssignmentOp,
            Marker::OpenParen => TokenKind::OpenParen,
            Marker::CloseParen => TokenKind::CloseParen,
        }
    }
}

#[derive(Debug, Error)]
#[error("{0} is not a marker kind, its tokens carry a payload")]
pub struct NotAMarkerErr(pub TokenKind);

impl TryFrom<TokenKind> for Marker {
    type Error = Error;

    fn try_from(kind: TokenKind) -> Result<Self> {
        match kind {
            TokenKind::EndOfInput => Ok(Marker::EndOfInput),
            TokenKind::EndOfStatement => Ok(Marker::EndOfStatement),
            TokenKind::AssignmentOp => Ok(Marker::AssignmentOp),
            TokenKind::OpenParen => Ok(Marker::OpenParen),
            TokenKind::CloseParen => Ok(Marker::CloseParen),
            TokenKind::Identifier
            | TokenKind::MathematicalOp
            | TokenKind::IntegerValue
            | TokenKind::FloatValue => arg_err_noinfo!(NotAMarkerErr(kind)),
        }
    }
}

/// Arithmetic operator carried by [TokenKind::MathematicalOp] tokens.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MathOp {
    #[default]
    Plus,
    Minus,
    Times,
    Divide,
}

impl MathOp {
    pub fn symbol(self) -> char {
        match self {
            MathOp::Plus => '+',
            MathOp::Minus => '-',
            MathOp::Times => '*',
            MathOp::Divide => '/',
        }
    }

    /// The operator spelled by `c`, if any.
    pub fn try_from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(MathOp::Plus),
            '-' => Some(MathOp::Minus),
            '*' => Some(MathOp::Times),
            '/' => Some(MathOp::Divide),
            _ => None,
        }
    }
}

impl Display for MathOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// What a [Token] is, without where it came from.
///
/// Equality is structural: same variant and equal payloads.
/// Float payloads compare with IEEE semantics, so a `NaN` float
/// is never equal to anything, itself included.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TokenData {
    Marker(Marker),
    Identifier(SymbolEntry),
    MathematicalOp(MathOp),
    IntegerValue(i64),
    FloatValue(f64),
}

impl TokenData {
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenData::Marker(marker) => marker.kind(),
            TokenData::Identifier(_) => TokenKind::Identifier,
            TokenData::MathematicalOp(_) => TokenKind::MathematicalOp,
            TokenData::IntegerValue(_) => TokenKind::IntegerValue,
            TokenData::FloatValue(_) => TokenKind::FloatValue,
        }
    }

    pub fn symbol_entry(&self) -> Option<SymbolEntry> {
        match self {
            TokenData::Identifier(entry) => Some(*entry),
            _ => None,
        }
    }

    pub fn operation(&self) -> Option<MathOp> {
        match self {
            TokenData::MathematicalOp(op) => Some(*op),
            _ => None,
        }
    }

    pub fn integer_value(&self) -> Option<i64> {
        match self {
            TokenData::IntegerValue(value) => Some(*value),
            _ => None,
        }
    }

    pub fn float_value(&self) -> Option<f64> {
        match self {
            TokenData::FloatValue(value) => Some(*value),
            _ => None,
        }
    }
}

impl Default for TokenData {
    fn default() -> Self {
        TokenData::Marker(Marker::default())
    }
}

impl From<Marker> for TokenData {
    fn from(value: Marker) -> Self {
        TokenData::Marker(value)
    }
}

impl From<MathOp> for TokenData {
    fn from(value: MathOp) -> Self {
        TokenData::MathematicalOp(value)
    }
}

/// Renders as `<Label>` for markers and `<Label>[<payload>]` otherwise.
impl Display for TokenData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self.kind().label();
        match self {
            TokenData::Marker(_) => write!(f, "{label}"),
            TokenData::Identifier(entry) => write!(f, "{label}[{entry}]"),
            TokenData::MathematicalOp(op) => write!(f, "{label}[{op}]"),
            TokenData::IntegerValue(value) => write!(f, "{label}[{value}]"),
            TokenData::FloatValue(value) => write!(f, "{label}[{}]", FixedPoint(*value)),
        }
    }
}

/// The payload accessors of [Token].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Accessor {
    SymbolEntry,
    Operation,
    IntegerValue,
    FloatValue,
}

impl Accessor {
    /// The only kind this accessor succeeds on.
    pub fn expected_kind(self) -> TokenKind {
        match self {
            Accessor::SymbolEntry => TokenKind::Identifier,
            Accessor::Operation => TokenKind::MathematicalOp,
            Accessor::IntegerValue => TokenKind::IntegerValue,
            Accessor::FloatValue => TokenKind::FloatValue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Accessor::SymbolEntry => "get_symbol_entry",
            Accessor::Operation => "get_operation",
            Accessor::IntegerValue => "get_integer_value",
            Accessor::FloatValue => "get_float_value",
        }
    }
}

impl Display for Accessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A payload accessor was called on a token of another kind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Tried to {accessor}() on {found} token, expected {expected}")]
pub struct InvalidAccessErr {
    pub accessor: Accessor,
    pub expected: TokenKind,
    pub found: TokenKind,
}

/// A lexical token. Immutable once built.
///
/// Two tokens are equal when their [TokenData] are equal;
/// the [Provenance] is ignored.
#[derive(Clone, Debug, Default)]
pub struct Token {
    data: TokenData,
    provenance: Provenance,
}

impl Token {
    /// Token with no known provenance.
    pub fn new(data: impl Into<TokenData>) -> Self {
        Token {
            data: data.into(),
            provenance: Provenance::default(),
        }
    }

    pub fn with_provenance(data: impl Into<TokenData>, provenance: impl Into<Provenance>) -> Self {
        Token {
            data: data.into(),
            provenance: provenance.into(),
        }
    }

    pub fn marker(marker: Marker) -> Self {
        Self::new(marker)
    }

    pub fn marker_at(marker: Marker, provenance: impl Into<Provenance>) -> Self {
        Self::with_provenance(marker, provenance)
    }

    pub fn identifier(entry: SymbolEntry) -> Self {
        Self::new(TokenData::Identifier(entry))
    }

    pub fn identifier_at(entry: SymbolEntry, provenance: impl Into<Provenance>) -> Self {
        Self::with_provenance(TokenData::Identifier(entry), provenance)
    }

    pub fn math_op(op: MathOp) -> Self {
        Self::new(op)
    }

    pub fn math_op_at(op: MathOp, provenance: impl Into<Provenance>) -> Self {
        Self::with_provenance(op, provenance)
    }

    pub fn integer(value: i64) -> Self {
        Self::new(TokenData::IntegerValue(value))
    }

    pub fn integer_at(value: i64, provenance: impl Into<Provenance>) -> Self {
        Self::with_provenance(TokenData::IntegerValue(value), provenance)
    }

    pub fn float(value: f64) -> Self {
        Self::new(TokenData::FloatValue(value))
    }

    pub fn float_at(value: f64, provenance: impl Into<Provenance>) -> Self {
        Self::with_provenance(TokenData::FloatValue(value), provenance)
    }

    /// Marker token of `kind`. Payload kinds are rejected with
    /// [ErrorKind::InvalidArgument](crate::result::ErrorKind::InvalidArgument):
    /// their tokens are built from the payload itself.
    pub fn from_kind(kind: TokenKind) -> Result<Self> {
        Self::from_kind_at(kind, Provenance::default())
    }

    pub fn from_kind_at(kind: TokenKind, provenance: impl Into<Provenance>) -> Result<Self> {
        let provenance = provenance.into();
        match Marker::try_from(kind) {
            Ok(marker) => Ok(Self::with_provenance(marker, provenance)),
            Err(_) => arg_err!(provenance, NotAMarkerErr(kind)),
        }
    }

    pub fn get_kind(&self) -> TokenKind {
        self.data.kind()
    }

    pub fn get_provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// The data, for matching over all variants at once.
    pub fn data(&self) -> &TokenData {
        &self.data
    }

    pub fn is_marker(&self) -> bool {
        matches!(self.data, TokenData::Marker(_))
    }

    /// Symbol table index of an [identifier](TokenKind::Identifier) token.
    pub fn get_symbol_entry(&self) -> Result<SymbolEntry> {
        self.data
            .symbol_entry()
            .ok_or_else(|| self.invalid_access(Accessor::SymbolEntry))
    }

    /// Operator of a [mathematical operator](TokenKind::MathematicalOp) token.
    pub fn get_operation(&self) -> Result<MathOp> {
        self.data
            .operation()
            .ok_or_else(|| self.invalid_access(Accessor::Operation))
    }

    /// Value of an [integer](TokenKind::IntegerValue) token.
    pub fn get_integer_value(&self) -> Result<i64> {
        self.data
            .integer_value()
            .ok_or_else(|| self.invalid_access(Accessor::IntegerValue))
    }

    /// Value of a [float](TokenKind::FloatValue) token.
    pub fn get_float_value(&self) -> Result<f64> {
        self.data
            .float_value()
            .ok_or_else(|| self.invalid_access(Accessor::FloatValue))
    }

    fn invalid_access(&self, accessor: Accessor) -> Error {
        let found = self.get_kind();
        log::debug!(
            "{}() on a {} token from {}",
            accessor,
            found,
            self.provenance
        );
        access_error!(
            &self.provenance,
            InvalidAccessErr {
                accessor,
                expected: accessor.expected_kind(),
                found,
            }
        )
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl From<TokenData> for Token {
    fn from(value: TokenData) -> Self {
        Token::new(value)
    }
}

impl HasProvenance for Token {
    fn provenance(&self) -> &Provenance {
        &self.provenance
    }
}

/// Renders as `<Label>@<provenance>` for markers and
/// `<Label>[<payload>]@<provenance>` otherwise.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.data, self.provenance)
    }
}
