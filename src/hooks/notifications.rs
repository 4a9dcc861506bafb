//! 通知资源钩子

use crate::api::endpoints::Endpoint;
use crate::models::Notification;
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, use_list_query, use_mutation_ctx,
};
use crate::query::key::ResourceTag;

pub fn use_notifications() -> QueryHandle<Vec<Notification>> {
    use_list_query(ResourceTag::Notifications, Endpoint::Notifications)
}

#[derive(Clone, Copy)]
pub struct NotificationActions {
    ctx: MutationCtx,
}

pub fn use_notification_actions() -> NotificationActions {
    NotificationActions {
        ctx: use_mutation_ctx(),
    }
}

impl NotificationActions {
    pub fn mark_read(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::MarkNotificationRead(id),
            MutationPlan::new(&[ResourceTag::Notifications], "Notification marked as read")
                .with_patch(PatchPlan::ReplaceById(ResourceTag::Notifications)),
        );
    }
}
