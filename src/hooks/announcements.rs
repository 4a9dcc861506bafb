//! 公告资源钩子

use crate::api::endpoints::Endpoint;
use crate::models::{Announcement, AnnouncementPayload};
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, use_list_query, use_mutation_ctx,
};
use crate::query::key::ResourceTag;

pub fn use_announcements() -> QueryHandle<Vec<Announcement>> {
    use_list_query(ResourceTag::Announcements, Endpoint::Announcements)
}

#[derive(Clone, Copy)]
pub struct AnnouncementActions {
    ctx: MutationCtx,
}

pub fn use_announcement_actions() -> AnnouncementActions {
    AnnouncementActions {
        ctx: use_mutation_ctx(),
    }
}

impl AnnouncementActions {
    pub fn create(&self, payload: AnnouncementPayload) {
        self.ctx.submit(
            Endpoint::CreateAnnouncement,
            payload,
            MutationPlan::new(&[ResourceTag::Announcements], "Announcement posted")
                .with_patch(PatchPlan::Insert(ResourceTag::Announcements)),
        );
    }
}
