use expect_test::expect;
use lexis::{
    provenance::{HasProvenance, NO_INFO},
    result::ErrorKind,
    token::{Accessor, InvalidAccessErr, MathOp, Token, TokenData, TokenKind},
};

mod common;
use common::{init_env_logger, lexed_statement};

#[test]
fn kind_matches_constructor() {
    init_env_logger();
    for kind in TokenKind::ALL {
        match Token::from_kind_at(kind, "src") {
            Ok(tok) => {
                assert!(kind.is_marker());
                assert!(tok.is_marker());
                assert_eq!(tok.get_kind(), kind);
            }
            Err(err) => {
                // Payload tokens can only be built from their payload.
                assert!(!kind.is_marker());
                assert_eq!(err.kind, ErrorKind::InvalidArgument);
                assert_eq!(err.provenance.as_str(), "src");
            }
        }
    }
    assert_eq!(Token::identifier(9).get_kind(), TokenKind::Identifier);
    assert_eq!(Token::math_op(MathOp::Divide).get_kind(), TokenKind::MathematicalOp);
    assert_eq!(Token::integer(-1).get_kind(), TokenKind::IntegerValue);
    assert_eq!(Token::float(0.5).get_kind(), TokenKind::FloatValue);
}

#[test]
fn default_token() {
    let tok = Token::default();
    assert_eq!(tok.get_kind(), TokenKind::EndOfInput);
    assert_eq!(tok.get_provenance().as_str(), NO_INFO);
    assert!(tok.get_provenance().is_unknown());
    assert_eq!(tok.to_string(), "EndToken@<noinfo>");
}

#[test]
fn matching_accessors_return_payload() {
    let ident = Token::identifier_at(usize::MAX, "huge");
    assert_eq!(ident.get_symbol_entry().unwrap(), usize::MAX);

    let op = Token::math_op(MathOp::Minus);
    assert_eq!(op.get_operation().unwrap(), MathOp::Minus);

    let int = Token::integer(i64::MIN);
    assert_eq!(int.get_integer_value().unwrap(), i64::MIN);

    let float = Token::float(-3.75);
    assert_eq!(float.get_float_value().unwrap(), -3.75);

    let nan = Token::float(f64::NAN);
    assert!(nan.get_float_value().unwrap().is_nan());
}

#[test]
fn mismatched_accessors_fail() {
    init_env_logger();
    for tok in lexed_statement() {
        let kind = tok.get_kind();
        let attempts = [
            (Accessor::SymbolEntry, tok.get_symbol_entry().err()),
            (Accessor::Operation, tok.get_operation().err()),
            (Accessor::IntegerValue, tok.get_integer_value().err()),
            (Accessor::FloatValue, tok.get_float_value().err()),
        ];
        for (accessor, err) in attempts {
            if accessor.expected_kind() == kind {
                assert!(err.is_none(), "{accessor}() failed on {tok}");
                continue;
            }
            let err = err.unwrap_or_else(|| panic!("{accessor}() succeeded on {tok}"));
            assert_eq!(err.kind, ErrorKind::InvalidAccess);
            assert_eq!(err.provenance(), tok.get_provenance());
            let inner = err
                .err
                .downcast_ref::<InvalidAccessErr>()
                .expect("inner error must be InvalidAccessErr");
            assert_eq!(inner.accessor, accessor);
            assert_eq!(inner.found, kind);
            assert_eq!(inner.expected, accessor.expected_kind());
        }
    }
}

#[test]
fn identifier_zero_is_not_an_integer() {
    let tok = Token::identifier(0);
    let err = tok.get_integer_value().unwrap_err();
    expect![[r#"Tried to get_integer_value() on Identifier token, expected IntegerValue"#]]
        .assert_eq(&err.err.to_string());
    assert!(err.provenance.is_unknown());
}

#[test]
fn error_names_accessor_and_kind() {
    let messages: Vec<_> = [
        Token::float_at(1.0, "1.0").get_symbol_entry().unwrap_err(),
        Token::integer_at(1, "1").get_operation().unwrap_err(),
        Token::math_op_at(MathOp::Plus, "+").get_float_value().unwrap_err(),
        Token::from_kind_at(TokenKind::OpenParen, "(")
            .unwrap()
            .get_integer_value()
            .unwrap_err(),
    ]
    .iter()
    .map(|err| format!("[{}] {}", err.provenance, err.err))
    .collect();
    expect![[r#"
        [
            "[1.0] Tried to get_symbol_entry() on FloatValue token, expected Identifier",
            "[1] Tried to get_operation() on IntegerValue token, expected MathematicalOp",
            "[+] Tried to get_float_value() on MathematicalOp token, expected FloatValue",
            "[(] Tried to get_integer_value() on OpenParen token, expected IntegerValue",
        ]
    "#]]
    .assert_debug_eq(&messages);
}

// A consumer peeks at the kind first, then takes the payload it needs.
#[test]
fn check_then_access() {
    let tokens = lexed_statement();
    let mut symbols = vec![];
    let mut literal_sum = 0.0;
    for tok in &tokens {
        match tok.get_kind() {
            TokenKind::Identifier => symbols.push(tok.get_symbol_entry().unwrap()),
            TokenKind::IntegerValue => literal_sum += tok.get_integer_value().unwrap() as f64,
            TokenKind::FloatValue => literal_sum += tok.get_float_value().unwrap(),
            _ => (),
        }
    }
    assert_eq!(symbols, vec![0, 1]);
    assert_eq!(literal_sum, 3.5);

    let ops: Vec<_> = tokens
        .iter()
        .filter_map(|tok| match tok.data() {
            TokenData::MathematicalOp(op) => Some(*op),
            _ => None,
        })
        .collect();
    assert_eq!(ops, vec![MathOp::Plus, MathOp::Times]);
}
