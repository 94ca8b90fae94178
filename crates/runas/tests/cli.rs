use predicates::prelude::*;
use runas_test_utils::sandbox::Sandbox;
use runas_test_utils::server::TestServer;
use runas_test_utils::{UCD_3D_TO_43, UCD_SAMPLE};

fn stdout_of(sb: &Sandbox, args: &[&str]) -> String {
    let output = sb.cmd("runas").args(args).output().expect("run runas");
    assert!(output.status.success(), "runas {args:?} failed: {output:?}");
    String::from_utf8(output.stdout)
        .expect("utf-8 stdout")
        .trim_end()
        .replace('\t', " | ")
}

fn sandbox_with(ucd: &str) -> Sandbox {
    let mut sb = Sandbox::new();
    sb.write_ucd(ucd);
    sb
}

#[test]
fn single_word_two_matches() {
    let sb = sandbox_with(UCD_3D_TO_43);
    insta::assert_snapshot!(stdout_of(&sb, &["SIGN"]), @r"
    U+003D | = | EQUALS SIGN
    U+003E | > | GREATER-THAN SIGN
    ");
}

#[test]
fn words_in_any_order_and_case() {
    let sb = sandbox_with(UCD_3D_TO_43);
    insta::assert_snapshot!(stdout_of(&sb, &["capital", "latin"]), @r"
    U+0041 | A | LATIN CAPITAL LETTER A
    U+0042 | B | LATIN CAPITAL LETTER B
    U+0043 | C | LATIN CAPITAL LETTER C
    ");
}

#[test]
fn single_match() {
    let sb = sandbox_with(UCD_3D_TO_43);
    insta::assert_snapshot!(stdout_of(&sb, &["mark"]), @"U+003F | ? | QUESTION MARK");
}

#[test]
fn alias_and_hyphenated_names_match() {
    let sb = sandbox_with(UCD_SAMPLE);
    insta::assert_snapshot!(stdout_of(&sb, &["quote"]), @r"
    U+0027 | ' | APOSTROPHE (APOSTROPHE-QUOTE)
    U+2358 | ⍘ | APL FUNCTIONAL SYMBOL QUOTE UNDERBAR
    U+235E | ⍞ | APL FUNCTIONAL SYMBOL QUOTE QUAD
    ");
}

#[test]
fn astral_code_points() {
    let sb = sandbox_with(UCD_SAMPLE);
    insta::assert_snapshot!(stdout_of(&sb, &["cat", "smiling"]), @r"
    U+1F638 | 😸 | GRINNING CAT FACE WITH SMILING EYES
    U+1F63A | 😺 | SMILING CAT FACE WITH OPEN MOUTH
    U+1F63B | 😻 | SMILING CAT FACE WITH HEART-SHAPED EYES
    ");
}

#[test]
fn hyphenated_query_word() {
    let sb = sandbox_with(UCD_SAMPLE);
    insta::assert_snapshot!(stdout_of(&sb, &["heart-shaped"]), @"U+1F63B | 😻 | SMILING CAT FACE WITH HEART-SHAPED EYES");
}

#[test]
fn no_match_is_not_an_error() {
    let sb = sandbox_with(UCD_3D_TO_43);
    sb.cmd("runas")
        .arg("cruzeiro")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn blank_or_separator_only_query_prints_nothing() {
    let sb = sandbox_with(UCD_3D_TO_43);
    for query in ["", " ", "-"] {
        sb.cmd("runas")
            .arg(query)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}

#[test]
fn debug_flag_logs_resolved_database() {
    let sb = sandbox_with(UCD_3D_TO_43);
    sb.cmd("runas")
        .args(["--debug", "sign"])
        .assert()
        .success()
        .stderr(predicate::str::contains("database"));
}

#[test]
fn query_is_required() {
    let sb = sandbox_with(UCD_3D_TO_43);
    sb.cmd("runas").assert().failure().code(2);
}

#[test]
fn downloads_missing_database() {
    let server = TestServer::ok(UCD_SAMPLE);
    let mut sb = Sandbox::new();
    sb.set_ucd_url(server.url("/UnicodeData.txt"));

    sb.cmd("runas")
        .arg("cruzeiro")
        .assert()
        .success()
        .stdout("U+20A2\t₢\tCRUZEIRO SIGN\n")
        .stderr(predicate::str::contains("not found, downloading"))
        .stderr(predicate::str::contains(server.url("/UnicodeData.txt")));
    assert_eq!(std::fs::read_to_string(&sb.ucd_path).unwrap(), UCD_SAMPLE);

    sb.cmd("runas").arg("cruzeiro").assert().success();
    assert_eq!(server.hits(), 1);
}

#[test]
fn failed_download_exits_with_diagnostic() {
    let sb = Sandbox::new();
    sb.cmd("runas")
        .arg("sign")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Failed to download"));
    assert!(!sb.ucd_path.exists());
}

#[test]
fn default_path_is_in_home_directory() {
    let sb = Sandbox::new();
    std::fs::write(sb.home.join("UnicodeData.txt"), UCD_3D_TO_43).unwrap();
    sb.cmd("runas")
        .env_remove("UCD_PATH")
        .arg("commercial")
        .assert()
        .success()
        .stdout("U+0040\t@\tCOMMERCIAL AT\n");
}
