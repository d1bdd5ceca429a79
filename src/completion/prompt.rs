use crate::form::FormState;

/// Fixed system instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "당신은 학생 기록을 보완하는 전문 교육 AI 조교입니다. \
     제공된 정보를 바탕으로 객관적이고 구체적인 학생 기록을 보완하여 작성해주세요. \
     학생의 강점을 부각시키고, 기록에 대해 개선이 필요한 부분은 건설적으로 제안해주세요.";

/// Fixed five-point output format appended to every user message.
pub const OUTPUT_TEMPLATE: &str = "다음 형식으로 보완된 학생 기록을 작성해주세요:
1. 성취 수준 분석
2. 관찰된 역량 설명
3. 학생의 강점
4. 개선이 필요한 부분
5. 학생 기록 작성 방향 제안";

/// A system/user message pair ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            system: SYSTEM_INSTRUCTION.to_string(),
            user: build_user_content(
                &form.achievement_standards,
                &form.student_achievement,
                &form.competencies,
            ),
        }
    }
}

/// Builds the user message from the form fields.
///
/// Field text is embedded verbatim; nothing is escaped or truncated.
pub fn build_user_content(
    achievement_standards: &str,
    student_achievement: &str,
    competencies: &[String],
) -> String {
    format!(
        "성취기준: {achievement_standards}\n\
         학생의 성취 수준 및 관찰 내용: {student_achievement}\n\
         관찰된 역량: {}\n\n\
         {OUTPUT_TEMPLATE}",
        competencies.join(", ")
    )
}
