//! 课表资源钩子
//!
//! 注意：与早期实现不同，这里的 update/delete 也一律失效课表缓存；
//! 一致失效是默认正确行为，任何例外都必须显式声明。

use leptos::prelude::*;

use crate::api::endpoints::Endpoint;
use crate::models::{ScheduleEntry, SchedulePayload};
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, QuerySpec, use_list_query,
    use_mutation_ctx, use_query,
};
use crate::query::key::{QueryKey, ResourceTag};

/// 当前登录学生的课表
pub fn use_student_schedule() -> QueryHandle<Vec<ScheduleEntry>> {
    use_list_query(ResourceTag::Schedules, Endpoint::StudentSchedule)
}

/// 某班级的课表（管理端）；班级未选中时不发请求
pub fn use_section_schedules(
    section_id: Signal<Option<i64>>,
) -> QueryHandle<Vec<ScheduleEntry>> {
    use_query(Signal::derive(move || {
        QuerySpec::when(section_id.get(), |id| {
            QuerySpec::new(
                QueryKey::scoped(ResourceTag::Schedules, id),
                Endpoint::SchedulesBySection(id),
            )
        })
    }))
}

#[derive(Clone, Copy)]
pub struct ScheduleActions {
    ctx: MutationCtx,
}

pub fn use_schedule_actions() -> ScheduleActions {
    ScheduleActions {
        ctx: use_mutation_ctx(),
    }
}

impl ScheduleActions {
    pub fn create(&self, payload: SchedulePayload) {
        self.ctx.submit(
            Endpoint::CreateSchedule,
            payload,
            MutationPlan::new(&[ResourceTag::Schedules], "Schedule entry created"),
        );
    }

    pub fn update(&self, id: i64, payload: SchedulePayload) {
        self.ctx.submit(
            Endpoint::UpdateSchedule(id),
            payload,
            MutationPlan::new(&[ResourceTag::Schedules], "Schedule entry updated")
                .with_patch(PatchPlan::ReplaceById(ResourceTag::Schedules)),
        );
    }

    pub fn delete(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::DeleteSchedule(id),
            MutationPlan::new(&[ResourceTag::Schedules], "Schedule entry deleted")
                .with_patch(PatchPlan::RemoveById(ResourceTag::Schedules, id)),
        );
    }
}
