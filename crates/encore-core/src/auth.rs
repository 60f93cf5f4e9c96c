use crate::errors::CoreError;
use crate::model::JudgeProfile;
use crate::storage::Store;

/// Checks a judge's credentials against the judge directory. Deliberately an
/// opaque equality comparison on the stored credential; the response never
/// distinguishes "unknown email" from "wrong password".
pub fn authenticate_judge(
    store: &Store,
    email: &str,
    password: &str,
) -> Result<JudgeProfile, CoreError> {
    if email.is_empty() || password.is_empty() {
        return Err(CoreError::InvalidInput(
            "email and password are required".into(),
        ));
    }
    let judge = store.judge_by_email(email)?.ok_or(CoreError::Unauthorized)?;
    if judge.password != password {
        return Err(CoreError::Unauthorized);
    }
    Ok(JudgeProfile::from(judge))
}
