use curp_derive::curp_error;
use std::borrow::Cow;

#[curp_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Shape error{}: {message}", format_context(.context))]
    Shape { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err::<(), _>(std::io::Error::other("boom")).context("reading input")?;
    Ok(())
}

fn main() {
    let _ = read();
    let _: DemoError = "static".into();
    let _: DemoError = String::from("owned").into();
}
