use tokio::fs;

use crate::{error::RenameError, model::RenamePlan};

pub async fn rename_path(plan: &RenamePlan) -> Result<(), RenameError> {
    let target = plan.target();
    if fs::try_exists(&target).await? {
        return Err(RenameError::TargetExists(target));
    }

    fs::rename(&plan.entry.path, &target).await?;

    Ok(())
}
