use gnomix_derive::gnomix_error;
use std::borrow::Cow;

#[gnomix_error]
pub enum SeedError {
    #[error("Seed read failed{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Seed rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal seed error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn missing_file() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "seed.json"))
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn load() -> Result<(), SeedError> {
        missing_file()?;
        Ok(())
    }

    let err = load().unwrap_err();
    assert!(matches!(err, SeedError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "Seed read failed: seed.json");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = missing_file().context("Reading seed").unwrap_err();
    assert_eq!(err.to_string(), "Seed read failed (Reading seed): seed.json");
}

#[test]
fn context_is_attached_to_own_results() {
    let result: Result<(), SeedError> =
        Err(SeedError::Rejected { message: "duplicate id".into(), context: None });

    let err = result.context("faqs").unwrap_err();
    assert_eq!(err.to_string(), "Seed rejected (faqs): duplicate id");
}

#[test]
fn strings_become_internal_errors() {
    let owned: SeedError = format!("counter at {}", u64::MAX).into();
    assert!(matches!(owned, SeedError::Internal { .. }));

    let borrowed: SeedError = "unexpected".into();
    assert_eq!(borrowed.to_string(), "Internal seed error: unexpected");
}
