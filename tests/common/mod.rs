use lexis::token::{Marker, MathOp, Token};

/// Install a logger so that `RUST_LOG=debug` shows what the library reports.
pub fn init_env_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One token of every kind, as a lexer would produce them for
/// `x = (1 + 2.5) * y;`.
pub fn lexed_statement() -> Vec<Token> {
    vec![
        Token::identifier_at(0, "x"),
        Token::marker_at(Marker::AssignmentOp, "="),
        Token::marker_at(Marker::OpenParen, "("),
        Token::integer_at(1, "1"),
        Token::math_op_at(MathOp::Plus, "+"),
        Token::float_at(2.5, "2.5"),
        Token::marker_at(Marker::CloseParen, ")"),
        Token::math_op_at(MathOp::Times, "*"),
        Token::identifier_at(1, "y"),
        Token::marker_at(Marker::EndOfStatement, ";"),
        Token::default(),
    ]
}
