//! Worker enumeration across a project and its descendants.

use std::collections::HashSet;

use tracing::warn;
use uuid::Uuid;

use crate::{CoreError, CoreResult, ProjectDirectory};

/// Collects members reachable through the project tree.
pub struct SubtreeService;

impl SubtreeService {
    /// Direct members of `project_id` plus members of every descendant.
    pub fn users_for_project_and_subprojects<S>(
        store: &S,
        project_id: Uuid,
    ) -> CoreResult<Vec<Uuid>>
    where
        S: ProjectDirectory + ?Sized,
    {
        Self::ensure_project(store, project_id)?;
        let mut collector = UserCollector::default();
        collector.extend(store.members_of(project_id));
        collector.extend(Self::users_for_subprojects(store, project_id)?);
        Ok(collector.users)
    }

    /// Members of every descendant at any depth, excluding the project's own
    /// membership list.
    pub fn users_for_subprojects<S>(store: &S, project_id: Uuid) -> CoreResult<Vec<Uuid>>
    where
        S: ProjectDirectory + ?Sized,
    {
        Self::ensure_project(store, project_id)?;
        let mut visited = HashSet::from([project_id]);
        let mut collector = UserCollector::default();
        Self::walk(store, project_id, &mut visited, &mut collector);
        Ok(collector.users)
    }

    fn walk<S>(
        store: &S,
        parent_id: Uuid,
        visited: &mut HashSet<Uuid>,
        collector: &mut UserCollector,
    ) where
        S: ProjectDirectory + ?Sized,
    {
        for child_id in store.sub_projects(parent_id) {
            if !visited.insert(child_id) {
                warn!(
                    project = %child_id,
                    parent = %parent_id,
                    "project tree cycle detected; skipping revisited project"
                );
                continue;
            }
            collector.extend(store.members_of(child_id));
            Self::walk(store, child_id, visited, collector);
        }
    }

    fn ensure_project<S>(store: &S, project_id: Uuid) -> CoreResult<()>
    where
        S: ProjectDirectory + ?Sized,
    {
        store
            .project(project_id)
            .map(|_| ())
            .ok_or(CoreError::ProjectNotFound(project_id))
    }
}

/// Keeps first-seen order while dropping duplicates.
#[derive(Default)]
struct UserCollector {
    seen: HashSet<Uuid>,
    users: Vec<Uuid>,
}

impl UserCollector {
    fn extend(&mut self, ids: impl IntoIterator<Item = Uuid>) {
        for id in ids {
            if self.seen.insert(id) {
                self.users.push(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_domain::{BillingLedger, Project, User};

    #[test]
    fn cyclic_tree_terminates() {
        let mut ledger = BillingLedger::new("Cycle");
        let worker = ledger.add_user(User::new("w", "Worker"));
        let mut first = Project::new("First");
        let mut second = Project::new("Second").with_parent(first.id);
        second.add_member(worker);
        first.parent_id = Some(second.id);
        let first_id = ledger.add_project(first);
        ledger.add_project(second);

        let users = SubtreeService::users_for_subprojects(&ledger, first_id).unwrap();
        assert_eq!(users, vec![worker]);
    }

    #[test]
    fn unknown_project_is_not_found() {
        let ledger = BillingLedger::new("Empty");
        let err = SubtreeService::users_for_project_and_subprojects(&ledger, Uuid::new_v4())
            .unwrap_err();
        assert!(matches!(err, CoreError::ProjectNotFound(_)));
    }
}
