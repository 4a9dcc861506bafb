//! 班级（section）资源钩子

use leptos::prelude::*;

use crate::api::endpoints::{Endpoint, Entity};
use crate::models::{Section, SectionPayload};
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, QuerySpec, use_list_query,
    use_mutation_ctx, use_query,
};
use crate::query::key::{QueryKey, ResourceTag};

pub fn use_sections() -> QueryHandle<Vec<Section>> {
    use_list_query(ResourceTag::Sections, Endpoint::List(Entity::Sections))
}

/// 按院系筛选；院系未选中时不发请求
pub fn use_sections_by_department(
    department_id: Signal<Option<i64>>,
) -> QueryHandle<Vec<Section>> {
    use_query(Signal::derive(move || {
        QuerySpec::when(department_id.get(), |id| {
            QuerySpec::new(
                QueryKey::scoped(ResourceTag::Sections, id),
                Endpoint::SectionsByDepartment(id),
            )
        })
    }))
}

#[derive(Clone, Copy)]
pub struct SectionActions {
    ctx: MutationCtx,
}

pub fn use_section_actions() -> SectionActions {
    SectionActions {
        ctx: use_mutation_ctx(),
    }
}

impl SectionActions {
    pub fn create(&self, payload: SectionPayload) {
        self.ctx.submit(
            Endpoint::Create(Entity::Sections),
            payload,
            MutationPlan::new(&[ResourceTag::Sections], "Section created")
                .with_patch(PatchPlan::Insert(ResourceTag::Sections)),
        );
    }

    pub fn update(&self, id: i64, payload: SectionPayload) {
        self.ctx.submit(
            Endpoint::Update(Entity::Sections, id),
            payload,
            MutationPlan::new(&[ResourceTag::Sections], "Section updated")
                .with_patch(PatchPlan::ReplaceById(ResourceTag::Sections)),
        );
    }

    pub fn delete(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::Delete(Entity::Sections, id),
            MutationPlan::new(&[ResourceTag::Sections], "Section deleted")
                .with_patch(PatchPlan::RemoveById(ResourceTag::Sections, id)),
        );
    }
}
