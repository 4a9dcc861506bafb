//! 课程资源钩子

use leptos::prelude::*;

use crate::api::endpoints::{Endpoint, Entity};
use crate::models::{Course, CoursePayload};
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, QuerySpec, use_list_query,
    use_mutation_ctx, use_query,
};
use crate::query::key::{QueryKey, ResourceTag};

pub fn use_courses() -> QueryHandle<Vec<Course>> {
    use_list_query(ResourceTag::Courses, Endpoint::List(Entity::Courses))
}

pub fn use_courses_by_department(department_id: Signal<Option<i64>>) -> QueryHandle<Vec<Course>> {
    use_query(Signal::derive(move || {
        QuerySpec::when(department_id.get(), |id| {
            QuerySpec::new(
                QueryKey::scoped(ResourceTag::Courses, id),
                Endpoint::CoursesByDepartment(id),
            )
        })
    }))
}

#[derive(Clone, Copy)]
pub struct CourseActions {
    ctx: MutationCtx,
}

pub fn use_course_actions() -> CourseActions {
    CourseActions {
        ctx: use_mutation_ctx(),
    }
}

impl CourseActions {
    pub fn create(&self, payload: CoursePayload) {
        self.ctx.submit(
            Endpoint::Create(Entity::Courses),
            payload,
            MutationPlan::new(&[ResourceTag::Courses], "Course created")
                .with_patch(PatchPlan::Insert(ResourceTag::Courses)),
        );
    }

    pub fn update(&self, id: i64, payload: CoursePayload) {
        self.ctx.submit(
            Endpoint::Update(Entity::Courses, id),
            payload,
            MutationPlan::new(&[ResourceTag::Courses], "Course updated")
                .with_patch(PatchPlan::ReplaceById(ResourceTag::Courses)),
        );
    }

    pub fn delete(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::Delete(Entity::Courses, id),
            MutationPlan::new(&[ResourceTag::Courses], "Course deleted")
                .with_patch(PatchPlan::RemoveById(ResourceTag::Courses, id)),
        );
    }
}
