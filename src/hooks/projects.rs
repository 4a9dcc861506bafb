//! 毕业设计项目资源钩子
//!
//! 加入项目同时改变全局列表与"我的项目"列表，
//! 依赖关系声明在失效图中（Projects → MyProjects, ProjectMembers）。

use leptos::prelude::*;

use crate::api::endpoints::Endpoint;
use crate::models::{Project, ProjectMember, ProjectPayload};
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, QuerySpec, use_list_query,
    use_mutation_ctx, use_query,
};
use crate::query::key::{QueryKey, ResourceTag};

pub fn use_projects() -> QueryHandle<Vec<Project>> {
    use_list_query(ResourceTag::Projects, Endpoint::Projects)
}

pub fn use_my_projects() -> QueryHandle<Vec<Project>> {
    use_list_query(ResourceTag::MyProjects, Endpoint::MyProjects)
}

/// 项目成员；项目未选中时不发请求
pub fn use_project_members(
    project_id: Signal<Option<i64>>,
) -> QueryHandle<Vec<ProjectMember>> {
    use_query(Signal::derive(move || {
        QuerySpec::when(project_id.get(), |id| {
            QuerySpec::new(
                QueryKey::scoped(ResourceTag::ProjectMembers, id),
                Endpoint::ProjectMembers(id),
            )
        })
    }))
}

#[derive(Clone, Copy)]
pub struct ProjectActions {
    ctx: MutationCtx,
}

pub fn use_project_actions() -> ProjectActions {
    ProjectActions {
        ctx: use_mutation_ctx(),
    }
}

impl ProjectActions {
    pub fn create(&self, payload: ProjectPayload) {
        self.ctx.submit(
            Endpoint::CreateProject,
            payload,
            MutationPlan::new(&[ResourceTag::Projects], "Project created")
                .with_patch(PatchPlan::Insert(ResourceTag::Projects)),
        );
    }

    /// 加入项目：失效图把 my-projects 与成员列表一并拉取
    pub fn join(&self, project_id: i64) {
        self.ctx.submit_empty(
            Endpoint::JoinProject(project_id),
            MutationPlan::new(&[ResourceTag::Projects], "Joined project"),
        );
    }
}
