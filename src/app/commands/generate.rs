use crate::app::AppContext;
use crate::domain::{AppError, FieldSet, build_prompt};
use crate::ports::{ClipboardWriter, StatusSink};

/// Execute the generate command: validate the field set and assemble the prompt.
///
/// Goal is checked before language/stack. On failure the status sink carries
/// the validation message and no prompt is produced.
pub fn execute<P, F, S>(ctx: &mut AppContext<P, F, S>, fields: &FieldSet) -> Result<String, AppError>
where
    P: ClipboardWriter,
    F: ClipboardWriter,
    S: StatusSink,
{
    if fields.goal.is_empty() {
        let err = AppError::GoalRequired;
        ctx.status_mut().error(&err.to_string());
        return Err(err);
    }

    if fields.language_stack.is_empty() {
        let err = AppError::LanguageStackRequired;
        ctx.status_mut().error(&err.to_string());
        return Err(err);
    }

    Ok(build_prompt(fields))
}
