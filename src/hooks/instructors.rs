//! 教师资源钩子

use leptos::prelude::*;

use crate::api::endpoints::{Endpoint, Entity};
use crate::models::{Instructor, InstructorPayload};
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, QuerySpec, use_list_query,
    use_mutation_ctx, use_query,
};
use crate::query::key::{QueryKey, ResourceTag};

pub fn use_instructors() -> QueryHandle<Vec<Instructor>> {
    use_list_query(ResourceTag::Instructors, Endpoint::List(Entity::Instructors))
}

pub fn use_instructors_by_department(
    department_id: Signal<Option<i64>>,
) -> QueryHandle<Vec<Instructor>> {
    use_query(Signal::derive(move || {
        QuerySpec::when(department_id.get(), |id| {
            QuerySpec::new(
                QueryKey::scoped(ResourceTag::Instructors, id),
                Endpoint::InstructorsByDepartment(id),
            )
        })
    }))
}

#[derive(Clone, Copy)]
pub struct InstructorActions {
    ctx: MutationCtx,
}

pub fn use_instructor_actions() -> InstructorActions {
    InstructorActions {
        ctx: use_mutation_ctx(),
    }
}

impl InstructorActions {
    pub fn create(&self, payload: InstructorPayload) {
        self.ctx.submit(
            Endpoint::Create(Entity::Instructors),
            payload,
            MutationPlan::new(&[ResourceTag::Instructors], "Instructor created")
                .with_patch(PatchPlan::Insert(ResourceTag::Instructors)),
        );
    }

    pub fn update(&self, id: i64, payload: InstructorPayload) {
        self.ctx.submit(
            Endpoint::Update(Entity::Instructors, id),
            payload,
            MutationPlan::new(&[ResourceTag::Instructors], "Instructor updated")
                .with_patch(PatchPlan::ReplaceById(ResourceTag::Instructors)),
        );
    }

    pub fn delete(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::Delete(Entity::Instructors, id),
            MutationPlan::new(&[ResourceTag::Instructors], "Instructor deleted")
                .with_patch(PatchPlan::RemoveById(ResourceTag::Instructors, id)),
        );
    }
}
