//! 考试资源钩子

use crate::api::endpoints::Endpoint;
use crate::models::{Exam, ExamPayload};
use crate::query::hook::{
    MutationCtx, MutationPlan, PatchPlan, QueryHandle, use_list_query, use_mutation_ctx,
};
use crate::query::key::ResourceTag;

/// 当前登录学生的考试安排
pub fn use_student_exams() -> QueryHandle<Vec<Exam>> {
    use_list_query(ResourceTag::Exams, Endpoint::StudentExams)
}

#[derive(Clone, Copy)]
pub struct ExamActions {
    ctx: MutationCtx,
}

pub fn use_exam_actions() -> ExamActions {
    ExamActions {
        ctx: use_mutation_ctx(),
    }
}

impl ExamActions {
    pub fn create(&self, payload: ExamPayload) {
        self.ctx.submit(
            Endpoint::CreateExam,
            payload,
            MutationPlan::new(&[ResourceTag::Exams], "Exam created")
                .with_patch(PatchPlan::Insert(ResourceTag::Exams)),
        );
    }

    pub fn update(&self, id: i64, payload: ExamPayload) {
        self.ctx.submit(
            Endpoint::UpdateExam(id),
            payload,
            MutationPlan::new(&[ResourceTag::Exams], "Exam updated")
                .with_patch(PatchPlan::ReplaceById(ResourceTag::Exams)),
        );
    }

    pub fn delete(&self, id: i64) {
        self.ctx.submit_empty(
            Endpoint::DeleteExam(id),
            MutationPlan::new(&[ResourceTag::Exams], "Exam deleted")
                .with_patch(PatchPlan::RemoveById(ResourceTag::Exams, id)),
        );
    }
}
