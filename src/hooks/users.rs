//! 用户管理资源钩子（管理端）

use leptos::prelude::*;

use crate::api::endpoints::Endpoint;
use crate::models::User;
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, QuerySpec, use_list_query,
    use_mutation_ctx, use_query,
};
use crate::query::key::{QueryKey, ResourceTag};

pub fn use_users() -> QueryHandle<Vec<User>> {
    use_list_query(ResourceTag::Users, Endpoint::Users)
}

/// 按 id 查询单个用户；id 缺失时不发请求
pub fn use_user(user_id: Signal<Option<i64>>) -> QueryHandle<User> {
    use_query(Signal::derive(move || {
        QuerySpec::when(user_id.get(), |id| {
            QuerySpec::new(QueryKey::scoped(ResourceTag::Users, id), Endpoint::User(id))
        })
    }))
}

#[derive(Clone, Copy)]
pub struct UserActions {
    ctx: MutationCtx,
}

pub fn use_user_actions() -> UserActions {
    UserActions {
        ctx: use_mutation_ctx(),
    }
}

impl UserActions {
    /// 批准待审核账号（注册后需要管理端放行）
    pub fn approve(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::ApproveUser(id),
            MutationPlan::new(&[ResourceTag::Users], "User approved"),
        );
    }

    pub fn delete(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::DeleteUser(id),
            MutationPlan::new(&[ResourceTag::Users], "User deleted")
                .with_patch(PatchPlan::RemoveById(ResourceTag::Users, id)),
        );
    }
}
