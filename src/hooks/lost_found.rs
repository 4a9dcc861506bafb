//! 失物招领资源钩子

use crate::api::endpoints::Endpoint;
use crate::models::{LostItem, LostItemPayload};
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, use_list_query, use_mutation_ctx,
};
use crate::query::key::ResourceTag;

pub fn use_lost_items() -> QueryHandle<Vec<LostItem>> {
    use_list_query(ResourceTag::LostItems, Endpoint::LostItems)
}

#[derive(Clone, Copy)]
pub struct LostFoundActions {
    ctx: MutationCtx,
}

pub fn use_lost_found_actions() -> LostFoundActions {
    LostFoundActions {
        ctx: use_mutation_ctx(),
    }
}

impl LostFoundActions {
    pub fn report(&self, payload: LostItemPayload) {
        self.ctx.submit(
            Endpoint::CreateLostItem,
            payload,
            MutationPlan::new(&[ResourceTag::LostItems], "Item reported")
                .with_patch(PatchPlan::Insert(ResourceTag::LostItems)),
        );
    }

    pub fn resolve(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::ResolveLostItem(id),
            MutationPlan::new(&[ResourceTag::LostItems], "Item marked as resolved")
                .with_patch(PatchPlan::ReplaceById(ResourceTag::LostItems)),
        );
    }

    pub fn delete(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::DeleteLostItem(id),
            MutationPlan::new(&[ResourceTag::LostItems], "Item deleted")
                .with_patch(PatchPlan::RemoveById(ResourceTag::LostItems, id)),
        );
    }
}
