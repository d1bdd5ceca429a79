use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Turns a cancelled prompt into `None` so the caller can keep the old value.
pub fn optional_answer<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_prompt_cancelled(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_answer_value() {
        let answer = optional_answer(Ok::<_, InquireError>("text".to_string()));
        assert_eq!(answer.ok().flatten(), Some("text".to_string()));
    }

    #[test]
    fn test_optional_answer_cancelled() {
        let answer = optional_answer::<String>(Err(InquireError::OperationCanceled));
        assert!(matches!(answer, Ok(None)));

        let answer = optional_answer::<String>(Err(InquireError::OperationInterrupted));
        assert!(matches!(answer, Ok(None)));
    }

    #[test]
    fn test_optional_answer_other_error() {
        let answer = optional_answer::<String>(Err(InquireError::Custom("boom".into())));
        assert!(answer.is_err());
    }
}
