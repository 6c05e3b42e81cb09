//! Tests for the `blake2fme` subcommands and vector runner.
use blake2fme::cmd::{
    parse_hex,
    vectors::{execute_vector, execute_vector_file, find_all_json_tests, Vector, VectorErrorKind},
    Error, MainCmd,
};
use clap::Parser;
use std::path::{Path, PathBuf};

const ABC_INPUT: &str = "0x0000000c48c9bdf267e6096a3ba7ca8485ae67bb2bf894fe72f36e3cf1361d5f3af54fa5d182e6ad7f520e511f6c3e2b8c68059b6bbd41fbabd9831f79217e1319cde05b61626300000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000300000000000000000000000000000001";
const ABC_OUTPUT: &str = "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d17d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923";

fn manifest_path(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(rel)
}

fn vector(input: &str) -> Vector {
    Vector {
        name: "test".to_string(),
        input: input.to_string(),
        expected: None,
        error: None,
        gas: None,
        slow: false,
    }
}

#[test]
fn hex_prefix_is_optional() {
    assert_eq!(parse_hex("0x0a0b").unwrap(), vec![10, 11]);
    assert_eq!(parse_hex("0a0b").unwrap(), vec![10, 11]);
    assert_eq!(parse_hex(" 0x ").unwrap(), Vec::<u8>::new());
    assert!(parse_hex("0xzz").is_err());
}

#[test]
fn compress_command() {
    let MainCmd::Compress(cmd) = MainCmd::parse_from(["blake2fme", "compress", ABC_INPUT]) else {
        panic!("expected compress");
    };
    let out = cmd.execute().unwrap();
    assert_eq!(hex::encode(out.bytes), ABC_OUTPUT);
    assert_eq!(out.gas_used, 12);
}

#[test]
fn compress_command_out_of_gas() {
    let cmd = MainCmd::parse_from(["blake2fme", "compress", ABC_INPUT, "--gas-limit", "11"]);
    assert!(matches!(
        cmd.run(),
        Err(Error::Precompile(blake2f::Error::OutOfGas))
    ));
}

#[test]
fn compress_command_rejects_bad_hex() {
    let cmd = MainCmd::parse_from(["blake2fme", "compress", "0x0g"]);
    assert!(matches!(cmd.run(), Err(Error::Hex(_))));
}

#[test]
fn subcommands_are_inferred() {
    assert!(matches!(
        MainCmd::try_parse_from(["blake2fme", "dec", ABC_INPUT]),
        Ok(MainCmd::Decode(_))
    ));
    assert!(MainCmd::try_parse_from(["blake2fme", "vectors"]).is_err());
}

#[test]
fn decode_command_renders_fields() {
    let MainCmd::Decode(cmd) = MainCmd::parse_from(["blake2fme", "decode", ABC_INPUT]) else {
        panic!("expected decode");
    };
    let args = blake2f::decode_input(&parse_hex(ABC_INPUT).unwrap()).unwrap();
    let text = cmd.render(&args).unwrap();
    assert!(text.starts_with("rounds: 12\n"));
    assert!(text.contains("0x6a09e667f2bdc948"));
    assert!(text.contains("m:      0x616263"));
    assert!(text.contains("t:      [0x3, 0x0]"));
    assert!(text.ends_with("f:      true"));

    let MainCmd::Decode(cmd) = MainCmd::parse_from(["blake2fme", "decode", ABC_INPUT, "--json"])
    else {
        panic!("expected decode");
    };
    let json: serde_json::Value = serde_json::from_str(&cmd.render(&args).unwrap()).unwrap();
    assert_eq!(json["rounds"], 12);
    assert_eq!(json["f"], true);
    assert_eq!(json["m"].as_array().unwrap().len(), 128);
}

#[test]
fn vector_outcomes() {
    let mut v = vector(ABC_INPUT);
    assert!(matches!(
        execute_vector(&v),
        Err(VectorErrorKind::MissingExpectation)
    ));

    v.expected = Some(ABC_OUTPUT.to_string());
    execute_vector(&v).unwrap();

    v.gas = Some(11);
    assert!(matches!(
        execute_vector(&v),
        Err(VectorErrorKind::UnexpectedError { got: Some(_), expected: None })
    ));

    v.expected = None;
    v.error = Some("out of gas".to_string());
    execute_vector(&v).unwrap();

    v.gas = None;
    assert!(matches!(
        execute_vector(&v),
        Err(VectorErrorKind::UnexpectedError { got: None, .. })
    ));
}

#[test]
fn bundled_vectors_pass() {
    let path = manifest_path("data/eip152.json");
    assert_eq!(find_all_json_tests(&path), vec![path.clone()]);
    // Three of the twelve vectors are slow.
    assert_eq!(execute_vector_file(&path, false, false).unwrap(), 9);
}

#[test]
fn slow_vectors_run_only_when_requested() {
    let path = manifest_path("tests/fixtures/slow.json");
    assert_eq!(execute_vector_file(&path, false, false).unwrap(), 1);
    assert_eq!(execute_vector_file(&path, true, false).unwrap(), 2);

    let cmd = MainCmd::parse_from([
        "blake2fme",
        "vectors",
        path.to_str().unwrap(),
        "--include-slow",
    ]);
    cmd.run().unwrap();
}

#[test]
fn data_dir_is_walked() {
    let files = find_all_json_tests(&manifest_path("data"));
    assert_eq!(files, vec![manifest_path("data/eip152.json")]);
}

#[test]
fn mismatch_is_reported() {
    let path = manifest_path("tests/fixtures/mismatch.json");
    let err = execute_vector_file(&path, false, false).unwrap_err();
    assert_eq!(err.name, "wrong_output");
    assert!(matches!(err.kind, VectorErrorKind::UnexpectedOutput { .. }));

    let err = execute_vector_file(&path, false, true).unwrap_err();
    assert!(matches!(
        err.kind,
        VectorErrorKind::Failed { failed: 1, total: 2 }
    ));
}

#[test]
fn vectors_command_rejects_missing_path() {
    let cmd = MainCmd::parse_from(["blake2fme", "vectors", "/definitely/not/here"]);
    let Err(Error::Vectors(err)) = cmd.run() else {
        panic!("expected a vectors error");
    };
    assert!(matches!(err.kind, VectorErrorKind::InvalidPath));
}
