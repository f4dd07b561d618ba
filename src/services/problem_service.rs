//! Problem service

use uuid::Uuid;

use crate::{
    db::store::ProblemStore,
    error::{AppError, AppResult},
    models::{FieldErrors, Problem, User},
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// Validate a problem and store it on behalf of `editor`.
    ///
    /// Edit rights of an existing problem are checked against the stored row.
    /// A new problem may be created by anyone who could edit it once stored.
    pub async fn save<S: ProblemStore + ?Sized>(
        store: &S,
        problem: &Problem,
        editor: &User,
    ) -> AppResult<Problem> {
        let allowed = match store.find_by_id(problem.id).await? {
            Some(existing) => existing.editable_by(Some(editor)),
            None => problem.editable_by(Some(editor)),
        };
        if !allowed {
            tracing::warn!(problem = %problem.name, editor = %editor.username, "Rejected problem edit");
            return Err(AppError::Forbidden(
                "Cannot edit other users' problems".to_string(),
            ));
        }

        let errors = problem.validate(store).await?;
        if !errors.is_empty() {
            tracing::info!(
                problem = %problem.name,
                fields = ?errors.keys().collect::<Vec<_>>(),
                "Problem failed validation"
            );
            return Err(AppError::InvalidFields(errors));
        }

        let stored = store.save(problem).await?;
        tracing::info!(problem = %stored.name, id = %stored.id, editor = %editor.username, "Saved problem");

        Ok(stored)
    }

    /// Get a problem by name if `viewer` may see it
    pub async fn get_viewable<S: ProblemStore + ?Sized>(
        store: &S,
        name: &str,
        viewer: Option<&User>,
    ) -> AppResult<Problem> {
        store
            .find_by_name(name)
            .await?
            .filter(|problem| problem.viewable_by(viewer))
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    /// Delete problem
    pub async fn delete<S: ProblemStore + ?Sized>(
        store: &S,
        id: Uuid,
        editor: &User,
    ) -> AppResult<()> {
        let problem = store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        if !problem.editable_by(Some(editor)) {
            return Err(AppError::Forbidden(
                "Cannot delete other users' problems".to_string(),
            ));
        }

        store.delete(id).await?;
        tracing::info!(problem = %problem.name, editor = %editor.username, "Deleted problem");

        Ok(())
    }

    /// Validate the named problem as stored
    pub async fn revalidate<S: ProblemStore + ?Sized>(
        store: &S,
        name: &str,
    ) -> AppResult<(Problem, FieldErrors)> {
        let problem = store
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Problem {} not found", name)))?;

        let errors = problem.validate(store).await?;
        Ok((problem, errors))
    }

    /// Re-run validation over every stored problem, returning the invalid ones
    pub async fn revalidate_all<S: ProblemStore + ?Sized>(
        store: &S,
    ) -> AppResult<Vec<(Problem, FieldErrors)>> {
        let problems = store.list_all().await?;
        tracing::info!(count = problems.len(), "Revalidating problems");

        let results =
            futures::future::try_join_all(problems.iter().map(|p| p.validate(store))).await?;

        Ok(problems
            .into_iter()
            .zip(results)
            .filter(|(_, errors)| !errors.is_empty())
            .collect())
    }
}
