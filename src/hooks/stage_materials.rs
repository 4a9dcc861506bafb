//! 阶段（年级）资料资源钩子

use crate::api::endpoints::Endpoint;
use crate::models::{StageMaterial, StageMaterialPayload};
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, use_list_query, use_mutation_ctx,
};
use crate::query::key::ResourceTag;

/// 当前登录学生所在年级的资料
pub fn use_student_materials() -> QueryHandle<Vec<StageMaterial>> {
    use_list_query(ResourceTag::StageMaterials, Endpoint::StudentMaterials)
}

#[derive(Clone, Copy)]
pub struct StageMaterialActions {
    ctx: MutationCtx,
}

pub fn use_stage_material_actions() -> StageMaterialActions {
    StageMaterialActions {
        ctx: use_mutation_ctx(),
    }
}

impl StageMaterialActions {
    pub fn create(&self, payload: StageMaterialPayload) {
        self.ctx.submit(
            Endpoint::CreateStageMaterial,
            payload,
            MutationPlan::new(&[ResourceTag::StageMaterials], "Material added")
                .with_patch(PatchPlan::Insert(ResourceTag::StageMaterials)),
        );
    }

    pub fn update(&self, id: i64, payload: StageMaterialPayload) {
        self.ctx.submit(
            Endpoint::UpdateStageMaterial(id),
            payload,
            MutationPlan::new(&[ResourceTag::StageMaterials], "Material updated")
                .with_patch(PatchPlan::ReplaceById(ResourceTag::StageMaterials)),
        );
    }

    pub fn delete(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::DeleteStageMaterial(id),
            MutationPlan::new(&[ResourceTag::StageMaterials], "Material deleted")
                .with_patch(PatchPlan::RemoveById(ResourceTag::StageMaterials, id)),
        );
    }
}
