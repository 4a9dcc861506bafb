//! 审计日志资源钩子（只读）

use crate::api::endpoints::Endpoint;
use crate::models::AuditLog;
use crate::query::hook::{QueryHandle, use_list_query};
use crate::query::key::ResourceTag;

pub fn use_audit_logs() -> QueryHandle<Vec<AuditLog>> {
    use_list_query(ResourceTag::AuditLogs, Endpoint::AuditLogs)
}
