use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Editor, MultiSelect, Text};
use std::path::Path;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::completion::{COMPETENCIES, Completer};
use crate::export;
use crate::form::{FormController, Notice, SubmitOutcome, print_page};
use crate::form::render::{BUSY_MESSAGE, print_form, print_history};
use crate::ui::{Spinner, Style, optional_answer};

const NO_HISTORY_WARNING: &str = "아직 다운로드할 기록 이력이 없습니다.";

/// Which free-text field an editor prompt is filling.
#[derive(Debug, Clone, Copy)]
enum TextField {
    AchievementStandards,
    StudentAchievement,
}

impl TextField {
    const fn label(self) -> &'static str {
        match self {
            Self::AchievementStandards => "성취기준:",
            Self::StudentAchievement => "학생의 성취 수준 및 관찰 내용:",
        }
    }
}

/// The interactive form for one session.
pub struct FormApp<C> {
    controller: FormController<C>,
    render_config: RenderConfig<'static>,
}

impl<C: Completer> FormApp<C> {
    pub fn new(controller: FormController<C>) -> Self {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        Self {
            controller,
            render_config,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.controller.store().session_id());
        print_page(&self.controller.page(None));
        ui::print_help();

        loop {
            let input = Text::new("")
                .with_render_config(self.render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("/help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Text(_) => {
                        ui::print_warning("Use /observation to enter text, or /help for commands");
                    }
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await? {
                            break;
                        }
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `false` when the session should end.
    async fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::Standard => {
                self.edit_text(TextField::AchievementStandards)?;
                print_page(&self.controller.page(None));
            }
            SlashCommand::Observation => {
                self.edit_text(TextField::StudentAchievement)?;
                print_page(&self.controller.page(None));
            }
            SlashCommand::Competencies => {
                self.select_competencies()?;
                print_page(&self.controller.page(None));
            }
            SlashCommand::Submit => self.submit().await,
            SlashCommand::Form => {
                print_form(&self.controller.page(None).fields);
            }
            SlashCommand::History => {
                if self.controller.history().is_empty() {
                    println!("{}", Style::secondary("기록 이력이 없습니다."));
                    println!();
                } else {
                    print_history(self.controller.history());
                }
            }
            SlashCommand::Export(target) => self.export(target.as_deref()),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        Ok(true)
    }

    fn edit_text(&mut self, field: TextField) -> Result<()> {
        let current = match field {
            TextField::AchievementStandards => &self.controller.form().achievement_standards,
            TextField::StudentAchievement => &self.controller.form().student_achievement,
        };

        let answer = match Editor::new(field.label())
            .with_predefined_text(current)
            .with_render_config(self.render_config)
            .prompt()
        {
            Ok(text) => Some(text),
            Err(inquire::InquireError::IO(e)) => {
                // No usable $EDITOR: fall back to a single-line prompt.
                tracing::debug!("editor unavailable: {e}");
                optional_answer(
                    Text::new(field.label())
                        .with_initial_value(current)
                        .with_render_config(self.render_config)
                        .prompt(),
                )?
            }
            Err(e) => optional_answer(Err(e))?,
        };

        let Some(text) = answer else {
            return Ok(());
        };
        let text = text.trim_end().to_string();

        match field {
            TextField::AchievementStandards => self.controller.set_achievement_standards(text),
            TextField::StudentAchievement => self.controller.set_student_achievement(text),
        }
        Ok(())
    }

    fn select_competencies(&mut self) -> Result<()> {
        let selected: Vec<usize> = COMPETENCIES
            .iter()
            .enumerate()
            .filter(|(_, label)| {
                self.controller
                    .form()
                    .competencies
                    .iter()
                    .any(|c| c.as_str() == **label)
            })
            .map(|(i, _)| i)
            .collect();

        let answer = optional_answer(
            MultiSelect::new("관찰된 역량:", COMPETENCIES.to_vec())
                .with_default(&selected)
                .with_render_config(self.render_config)
                .prompt(),
        )?;

        if let Some(labels) = answer {
            self.controller
                .set_competencies(labels.into_iter().map(str::to_string).collect());
        }
        Ok(())
    }

    async fn submit(&mut self) {
        let spinner = self
            .controller
            .form()
            .is_complete()
            .then(|| Spinner::new(BUSY_MESSAGE));

        let outcome = self.controller.submit().await;
        if let Some(spinner) = &spinner {
            spinner.stop();
        }

        let notice = match outcome {
            SubmitOutcome::Rejected(warning) => Some(Notice::Warning(warning.to_string())),
            SubmitOutcome::Completed(_) => None,
            SubmitOutcome::Failed(message) => Some(Notice::Error(message)),
        };

        print_page(&self.controller.page(notice));
        self.controller.finish();
    }

    fn export(&self, target: Option<&Path>) {
        let history = self.controller.history();
        if history.is_empty() {
            ui::print_warning(NO_HISTORY_WARNING);
            return;
        }

        match export::export_history(history, target) {
            Ok(path) => {
                crate::status!(
                    "{} 기록 이력을 저장했습니다: {}",
                    Style::success("✓"),
                    Style::value(path.display())
                );
            }
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }
}
