use curp_derive::curp_error;
use std::borrow::Cow;

#[curp_error]
pub enum SampleError {
    #[error("IO failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal failure{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn io_failure() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk gone"))
}

#[test]
fn curp_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/curp_error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), SampleError> {
        io_failure()?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert!(matches!(err, SampleError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO failure: disk gone");
}

#[test]
fn context_is_attached_to_source_errors() {
    let err = io_failure().context("loading table").unwrap_err();
    assert_eq!(err.to_string(), "IO failure (loading table): disk gone");
}

#[test]
fn context_is_attached_to_own_errors() {
    let res: Result<(), SampleError> =
        Err(SampleError::Rejected { message: "too short".into(), context: None });
    let err = res.context("shape check").unwrap_err();
    assert_eq!(err.to_string(), "Rejected (shape check): too short");
}

#[test]
fn strings_convert_into_internal() {
    let err: SampleError = "unexpected".into();
    assert!(matches!(err, SampleError::Internal { .. }));

    let err: SampleError = format!("code {}", 7).into();
    assert_eq!(err.to_string(), "Internal failure: code 7");
}
