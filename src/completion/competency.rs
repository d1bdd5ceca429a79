//! The fixed competency labels offered by the form.

use crate::ui::Style;

/// Competency labels in display order.
pub const COMPETENCIES: &[&str] = &[
    "자기관리 역량",
    "지식정보처리 역량",
    "창의적 사고 역량",
    "심미적 감성 역량",
    "의사소통 역량",
    "공동체 역량",
    "비판적 사고력",
    "문제 해결 및 혁신 능력",
];

/// Prints all competency labels to stdout.
pub fn print_competencies() {
    println!("{}", Style::header("관찰 가능한 역량"));
    for (i, label) in COMPETENCIES.iter().enumerate() {
        println!("  {} {}", Style::code(format!("{:>2}", i + 1)), Style::value(label));
    }
}
