use inquire::autocompletion::{Autocomplete, Replacement};
use std::path::PathBuf;

// Available slash commands: (command, description)
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/standard", "성취기준 입력"),
    ("/observation", "학생의 성취 수준 및 관찰 내용 입력"),
    ("/competencies", "관찰된 역량 선택"),
    ("/submit", "기록 보완 요청"),
    ("/form", "현재 입력 내용 보기"),
    ("/history", "기록 이력 보기"),
    ("/export", "기록 이력 다운로드 (CSV)"),
    ("/help", "도움말"),
    ("/quit", "종료"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Standard,
    Observation,
    Competencies,
    Submit,
    Form,
    History,
    Export(Option<PathBuf>),
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));

    let command = match name {
        "standard" | "s" => SlashCommand::Standard,
        "observation" | "o" => SlashCommand::Observation,
        "competencies" | "c" => SlashCommand::Competencies,
        "submit" => SlashCommand::Submit,
        "form" => SlashCommand::Form,
        "history" => SlashCommand::History,
        "export" => SlashCommand::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "help" => SlashCommand::Help,
        "quit" | "exit" | "q" => SlashCommand::Quit,
        _ => SlashCommand::Unknown(cmd.split_whitespace().collect::<Vec<_>>().join(" ")),
    };

    Input::Command(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn test_parse_text_input() {
        assert_eq!(
            parse_input("  그룹 활동  "),
            Input::Text("그룹 활동".to_string())
        );
    }

    #[test]
    fn test_parse_field_commands() {
        assert_eq!(
            parse_input("/standard"),
            Input::Command(SlashCommand::Standard)
        );
        assert_eq!(
            parse_input("/o"),
            Input::Command(SlashCommand::Observation)
        );
        assert_eq!(
            parse_input("/competencies"),
            Input::Command(SlashCommand::Competencies)
        );
    }

    #[test]
    fn test_parse_submit_and_views() {
        assert_eq!(parse_input("/submit"), Input::Command(SlashCommand::Submit));
        assert_eq!(parse_input("/form"), Input::Command(SlashCommand::Form));
        assert_eq!(
            parse_input("/history"),
            Input::Command(SlashCommand::History)
        );
    }

    #[test]
    fn test_parse_export_without_path() {
        assert_eq!(
            parse_input("/export"),
            Input::Command(SlashCommand::Export(None))
        );
    }

    #[test]
    fn test_parse_export_with_path() {
        assert_eq!(
            parse_input("/export  out/기록.csv "),
            Input::Command(SlashCommand::Export(Some(PathBuf::from("out/기록.csv"))))
        );
    }

    #[test]
    fn test_parse_quit_commands() {
        for cmd in ["/quit", "/exit", "/q"] {
            assert_eq!(parse_input(cmd), Input::Command(SlashCommand::Quit));
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/unknown  arg"),
            Input::Command(SlashCommand::Unknown("unknown arg".to_string()))
        );
    }

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/s").unwrap();
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].starts_with("/standard"));
        assert!(suggestions[1].starts_with("/submit"));

        let suggestions = completer.get_suggestions("/e").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/export"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/submit  기록 보완 요청".to_string();
        let completion = completer.get_completion("/su", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/submit".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        let completion = completer.get_completion("/x", None).unwrap();
        assert!(completion.is_none());
    }
}
