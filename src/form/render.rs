//! Builds the page shown after every action and prints it to the terminal.
//!
//! Rendering is split in two: [`render_page`] is a pure function of the form
//! and session state, [`print_page`] writes the result with terminal styles.

use super::controller::{FormState, Phase};
use crate::export::EXPORT_FILE_NAME;
use crate::session::{Record, SessionStore};
use crate::ui::Style;

pub const TITLE: &str = "📚 학생 기록 보완 시스템";
pub const DESCRIPTION: &str =
    "학생의 성취 수준, 관찰 내용, 역량 등을 입력하면 AI가 보완된 기록을 제안합니다.";

/// Shown while the completion call is outstanding.
pub const BUSY_MESSAGE: &str = "AI가 보완된 기록을 생성 중입니다...";

const EMPTY_FIELD: &str = "(비어 있음)";

/// A message attached to the page for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Error(String),
}

/// One labelled form field as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    pub filled: bool,
}

/// Everything the terminal shows after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub title: &'static str,
    pub description: &'static str,
    /// Left column: the form fields.
    pub fields: Vec<FieldView>,
    pub notice: Option<Notice>,
    pub busy: bool,
    /// Right column: the output of the submission that just succeeded.
    pub output: Option<&'a str>,
    /// Right column: all records in submission order.
    pub history: &'a [Record],
    pub download_available: bool,
}

fn field(label: &'static str, value: &str) -> FieldView {
    let filled = !value.trim().is_empty();
    FieldView {
        label,
        value: if filled {
            value.to_string()
        } else {
            EMPTY_FIELD.to_string()
        },
        filled,
    }
}

/// Builds the page for the given form, phase and session.
pub fn render_page<'a>(
    form: &FormState,
    phase: Phase,
    session: &'a SessionStore,
    latest_output: Option<&'a str>,
    notice: Option<Notice>,
) -> Page<'a> {
    let history = session.history();

    Page {
        title: TITLE,
        description: DESCRIPTION,
        fields: vec![
            field("성취기준", &form.achievement_standards),
            field("학생의 성취 수준 및 관찰 내용", &form.student_achievement),
            field("관찰된 역량", &form.competencies.join(", ")),
        ],
        notice,
        busy: phase == Phase::Submitting,
        output: if phase == Phase::Success {
            latest_output
        } else {
            None
        },
        history,
        download_available: !history.is_empty(),
    }
}

/// Prints the page: the form first, then the output and history.
pub fn print_page(page: &Page<'_>) {
    println!("{}", Style::header(page.title));
    println!("{}", Style::secondary(page.description));
    println!();

    print_form(&page.fields);

    match &page.notice {
        Some(Notice::Warning(message)) => {
            eprintln!("{} {message}", Style::warning("Warning:"));
            eprintln!();
        }
        Some(Notice::Error(message)) => {
            eprintln!("{} {message}", Style::error("Error:"));
            eprintln!();
        }
        None => {}
    }

    if page.busy {
        println!("{}", Style::secondary(BUSY_MESSAGE));
        println!();
    }

    if let Some(output) = page.output {
        println!("{}", Style::header("보완된 학생 기록"));
        println!("{output}");
        println!();
    }

    if !page.history.is_empty() {
        print_history(page.history);
    }

    if page.download_available {
        println!(
            "{} {}",
            Style::command("/export"),
            Style::hint(format!("기록 이력 다운로드 ({EXPORT_FILE_NAME})"))
        );
        println!();
    }
}

pub fn print_form(fields: &[FieldView]) {
    println!("{}", Style::header("학생 정보 입력"));
    for f in fields {
        println!("  {}", Style::label(format!("{}:", f.label)));
        for line in f.value.lines() {
            if f.filled {
                println!("    {}", Style::value(line));
            } else {
                println!("    {}", Style::secondary(line));
            }
        }
    }
    println!();
}

pub fn print_history(history: &[Record]) {
    println!("{}", Style::header("기록 이력"));
    for record in history {
        println!("{}", Style::label("입력:"));
        println!("{}", record.input);
        println!("{}", Style::label("AI 보완 기록:"));
        println!("{}", record.output);
        println!("{}", Style::secondary("---"));
    }
    println!();
}
