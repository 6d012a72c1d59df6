// tests/chat_parser_tests.rs
//
// Проверяем:
//
// 1) Грамматика /timerchange и /tc:
//    - двухтокенная форма: валидные секунды хода, общий лимит выключается;
//    - трёхтокенная форма: секунды или пара "минуты:секунды";
//    - регистр первого токена не важен.
//
// 2) Политика отката:
//    - любая невалидная команда сбрасывает ОБА лимита к дефолтам;
//    - текст фидбека при отказе строго фиксированный.
//
// 3) Фильтр автора:
//    - чужая команда не меняет конфиг вообще.

use turn_timer_engine::chat::{
    apply_chat_message, parse_timer_change, ChatOutcome, CommandError,
};
use turn_timer_engine::time_ctrl::{TimerConfig, TOTAL_TIMEOUT_DISABLED, TURN_TIMEOUT_DEFAULT};

const LOCAL: &str = "HeroPlayer";

const REJECTED_FEEDBACK: &str =
    "Invalid command. Turn timeout set to default. Total timeout disabled.";

/// Утилита: конфиг, заведомо отличающийся от дефолтного.
fn non_default_config() -> TimerConfig {
    TimerConfig {
        turn_timeout_secs: 45,
        total_timeout_secs: 300,
    }
}

// ----------------------
// валидные команды
// ----------------------

#[test]
fn every_valid_turn_seconds_value_applies_and_disables_total() {
    for secs in 1..=90 {
        let mut config = non_default_config();
        let text = format!("/tc {secs}");

        let outcome = apply_chat_message(&text, LOCAL, LOCAL, &mut config);

        assert!(
            matches!(outcome, ChatOutcome::Applied { .. }),
            "ожидали Applied для {secs}, получили {outcome:?}"
        );
        assert_eq!(config.turn_timeout_secs, secs);
        assert_eq!(config.total_timeout_secs, TOTAL_TIMEOUT_DISABLED);
    }
}

#[test]
fn three_token_form_accepts_minutes_seconds_pair() {
    let mut config = TimerConfig::new();
    let outcome = apply_chat_message("/tc 30 2:15", LOCAL, LOCAL, &mut config);

    assert!(matches!(outcome, ChatOutcome::Applied { .. }));
    assert_eq!(config.turn_timeout_secs, 30);
    assert_eq!(config.total_timeout_secs, 135);
}

#[test]
fn pair_separator_can_be_colon_dot_or_comma() {
    for sep in [':', '.', ','] {
        let mut config = TimerConfig::new();
        let text = format!("/timerchange 20 1{sep}40");

        let outcome = apply_chat_message(&text, LOCAL, LOCAL, &mut config);

        assert!(
            matches!(outcome, ChatOutcome::Applied { .. }),
            "разделитель {sep:?} должен приниматься"
        );
        assert_eq!(config.total_timeout_secs, 100);
    }
}

#[test]
fn three_token_form_accepts_bare_seconds() {
    let mut config = TimerConfig::new();
    let outcome = apply_chat_message("/tc 15 240", LOCAL, LOCAL, &mut config);

    assert!(matches!(outcome, ChatOutcome::Applied { .. }));
    assert_eq!(config.total_timeout_secs, 240);
}

#[test]
fn first_token_is_case_insensitive() {
    for text in ["/TC 10", "/TimerChange 10", "/TIMERCHANGE 10"] {
        let mut config = TimerConfig::new();
        let outcome = apply_chat_message(text, LOCAL, LOCAL, &mut config);

        assert!(
            matches!(outcome, ChatOutcome::Applied { .. }),
            "ожидали Applied для {text:?}"
        );
        assert_eq!(config.turn_timeout_secs, 10);
    }
}

#[test]
fn applied_feedback_mentions_both_values() {
    let mut config = TimerConfig::new();

    match apply_chat_message("/tc 30 2:30", LOCAL, LOCAL, &mut config) {
        ChatOutcome::Applied { feedback } => {
            assert!(feedback.contains("30"), "фидбек: {feedback}");
            assert!(feedback.contains("150"), "фидбек: {feedback}");
        }
        other => panic!("ожидали Applied, получили {other:?}"),
    }
}

// ----------------------
// невалидные команды и откат
// ----------------------

#[test]
fn out_of_range_or_garbage_turn_seconds_reject_and_reset_both() {
    for bad in ["0", "91", "-5", "abc"] {
        let mut config = non_default_config();
        let text = format!("/tc {bad}");

        let outcome = apply_chat_message(&text, LOCAL, LOCAL, &mut config);

        match outcome {
            ChatOutcome::Rejected { feedback } => {
                assert_eq!(feedback, REJECTED_FEEDBACK);
            }
            other => panic!("ожидали Rejected для {bad:?}, получили {other:?}"),
        }
        assert_eq!(config.turn_timeout_secs, TURN_TIMEOUT_DEFAULT);
        assert_eq!(config.total_timeout_secs, TOTAL_TIMEOUT_DISABLED);
    }
}

#[test]
fn zero_total_budget_is_rejected() {
    let mut config = non_default_config();
    let outcome = apply_chat_message("/tc 30 0", LOCAL, LOCAL, &mut config);

    assert!(matches!(outcome, ChatOutcome::Rejected { .. }));
    assert_eq!(config, TimerConfig::new());
}

#[test]
fn malformed_pair_is_rejected() {
    for bad in ["2:xx", ":30", "2:", "1:2:3"] {
        let mut config = non_default_config();
        let text = format!("/tc 30 {bad}");

        let outcome = apply_chat_message(&text, LOCAL, LOCAL, &mut config);

        assert!(
            matches!(outcome, ChatOutcome::Rejected { .. }),
            "ожидали Rejected для {bad:?}"
        );
        assert_eq!(config, TimerConfig::new());
    }
}

#[test]
fn wrong_token_count_is_rejected() {
    for text in ["/tc", "/timerchange", "/tc 30 2:15 extra"] {
        let mut config = non_default_config();
        let outcome = apply_chat_message(text, LOCAL, LOCAL, &mut config);

        assert!(
            matches!(outcome, ChatOutcome::Rejected { .. }),
            "ожидали Rejected для {text:?}"
        );
        assert_eq!(config, TimerConfig::new());
    }
}

// ----------------------
// фильтр автора / не наши сообщения
// ----------------------

#[test]
fn command_from_foreign_author_changes_nothing() {
    let mut config = non_default_config();
    let before = config;

    let outcome = apply_chat_message("/tc 10", "Opponent", LOCAL, &mut config);

    assert_eq!(outcome, ChatOutcome::NotApplicable);
    assert_eq!(config, before);
}

#[test]
fn plain_chat_text_is_not_applicable() {
    let mut config = non_default_config();
    let before = config;

    for text in ["gl hf", "", "tc 30", "/timer 30"] {
        let outcome = apply_chat_message(text, LOCAL, LOCAL, &mut config);
        assert_eq!(outcome, ChatOutcome::NotApplicable, "текст: {text:?}");
    }
    assert_eq!(config, before);
}

// ----------------------
// parse_timer_change: таксономия ошибок
// ----------------------

#[test]
fn parse_errors_carry_the_offending_token() {
    match parse_timer_change("/tc abc") {
        Err(CommandError::Parse(token)) => assert_eq!(token, "abc"),
        other => panic!("ожидали Parse, получили {other:?}"),
    }

    match parse_timer_change("/tc 95") {
        Err(CommandError::Range(v)) => assert_eq!(v, 95),
        other => panic!("ожидали Range, получили {other:?}"),
    }

    match parse_timer_change("/tc 30 1 2 3") {
        Err(CommandError::Arity(n)) => assert_eq!(n, 5),
        other => panic!("ожидали Arity, получили {other:?}"),
    }
}
