//! 院系资源钩子

use crate::api::endpoints::{Endpoint, Entity};
use crate::models::{Department, DepartmentPayload};
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, use_list_query, use_mutation_ctx,
};
use crate::query::key::ResourceTag;

pub fn use_departments() -> QueryHandle<Vec<Department>> {
    use_list_query(ResourceTag::Departments, Endpoint::List(Entity::Departments))
}

#[derive(Clone, Copy)]
pub struct DepartmentActions {
    ctx: MutationCtx,
}

pub fn use_department_actions() -> DepartmentActions {
    DepartmentActions {
        ctx: use_mutation_ctx(),
    }
}

impl DepartmentActions {
    pub fn create(&self, payload: DepartmentPayload) {
        self.ctx.submit(
            Endpoint::Create(Entity::Departments),
            payload,
            MutationPlan::new(&[ResourceTag::Departments], "Department created")
                .with_patch(PatchPlan::Insert(ResourceTag::Departments)),
        );
    }

    pub fn update(&self, id: i64, payload: DepartmentPayload) {
        self.ctx.submit(
            Endpoint::Update(Entity::Departments, id),
            payload,
            MutationPlan::new(&[ResourceTag::Departments], "Department updated")
                .with_patch(PatchPlan::ReplaceById(ResourceTag::Departments)),
        );
    }

    pub fn delete(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::Delete(Entity::Departments, id),
            MutationPlan::new(&[ResourceTag::Departments], "Department deleted")
                .with_patch(PatchPlan::RemoveById(ResourceTag::Departments, id)),
        );
    }
}
