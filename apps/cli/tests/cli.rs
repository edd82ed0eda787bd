#![allow(deprecated)] // Command::cargo_bin is deprecated but still supported

use assert_cmd::Command;
use predicates::prelude::*;

fn curp() -> Command {
    Command::cargo_bin("curp").unwrap()
}

#[test]
fn valid_code_exits_zero() {
    curp()
        .arg("GOMJ800101HDFRRL01")
        .assert()
        .success()
        .stdout(predicate::str::contains("The CURP is valid, correct format."))
        .stdout(predicate::str::contains("DISTRITO FEDERAL"));
}

#[test]
fn any_invalid_code_exits_one() {
    curp()
        .args(["GOMJ800101HDFRRL01", "AB12"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("must be exactly 18 uppercase alphanumeric"));
}

#[test]
fn failure_still_reports_every_code() {
    curp()
        .args(["AB12", "GOMJ800101HDFRRL01", "12ABCD345678EFGHI9"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("The CURP is valid, correct format."))
        .stdout(predicate::str::contains("The CURP has an incorrect format."))
        .stdout(predicate::str::ends_with("\n"));
}

#[test]
fn json_output_uses_wire_names() {
    curp()
        .args(["--json", "1234800101HDFRRL01"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"mensaje\":\"The CURP has an incorrect format.\""))
        .stdout(predicate::str::contains("\"total_numeros\":12"));
}

#[test]
fn reads_codes_from_stdin() {
    curp()
        .arg("--json")
        .write_stdin("gomj800101hdfrrl01\n\nlopm920315mnlprr05\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("NUEVO LEÓN"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 2));
}

#[test]
fn pretty_requires_json() {
    curp().args(["--pretty", "AB12"]).assert().failure().stderr(predicate::str::contains("--json"));
}
