mod health_check;
mod submit_form;

pub use health_check::health_check;
pub use submit_form::submit_form;
pub use submit_form::SubmitFormError;

/// Write an error and its full source chain, for the `Debug` impls of the
/// crate's error enums; logs then show the root cause, not just the
/// outermost message.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
