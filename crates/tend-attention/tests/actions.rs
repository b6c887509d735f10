mod common;

use tend_attention::actions::recommend_actions;
use tend_attention::signal::{Severity, Signal, SignalCategory};
use tend_core::models::action::ActionType;

use common::ClientBuilder;

fn signal(category: SignalCategory) -> Signal {
    Signal {
        category,
        severity: Severity::Attention,
        message: String::new(),
        icon: String::new(),
    }
}

const ALL_CATEGORIES: [SignalCategory; 8] = [
    SignalCategory::Presence,
    SignalCategory::Adherence,
    SignalCategory::Emotional,
    SignalCategory::Energy,
    SignalCategory::Sleep,
    SignalCategory::Recovery,
    SignalCategory::Progress,
    SignalCategory::Balance,
];

#[test]
fn open_record_is_always_last() {
    let client = ClientBuilder::new("Ines").build().identity();
    for category in ALL_CATEGORIES {
        let actions = recommend_actions(Some(&signal(category)), &client);
        assert!(actions.len() >= 2, "{category:?}");
        assert_eq!(actions.last().unwrap().action_type, ActionType::OpenRecord);
        assert_eq!(
            actions.iter().filter(|a| a.action_type == ActionType::OpenRecord).count(),
            1
        );
    }
}

#[test]
fn no_signal_leaves_only_the_record() {
    let client = ClientBuilder::new("Ines").build().identity();
    let actions = recommend_actions(None, &client);
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].action_type, ActionType::OpenRecord);
}

#[test]
fn action_sets_follow_the_category() {
    let client = ClientBuilder::new("Ines").build().identity();
    let types = |category| {
        recommend_actions(Some(&signal(category)), &client)
            .into_iter()
            .map(|a| a.action_type)
            .collect::<Vec<_>>()
    };

    assert_eq!(
        types(SignalCategory::Presence),
        [ActionType::SendMessage, ActionType::OpenRecord]
    );
    assert_eq!(
        types(SignalCategory::Adherence),
        [ActionType::AdjustPlan, ActionType::SendMessage, ActionType::OpenRecord]
    );
    assert_eq!(
        types(SignalCategory::Emotional),
        [ActionType::SendMessage, ActionType::ScheduleCall, ActionType::OpenRecord]
    );
    assert_eq!(types(SignalCategory::Energy), types(SignalCategory::Emotional));
    assert_eq!(
        types(SignalCategory::Sleep),
        [ActionType::LogObservation, ActionType::SendMessage, ActionType::OpenRecord]
    );
    assert_eq!(
        types(SignalCategory::Recovery),
        [ActionType::LogObservation, ActionType::SendMessage, ActionType::OpenRecord]
    );
    assert_eq!(types(SignalCategory::Balance), types(SignalCategory::Progress));
}

#[test]
fn templates_are_addressed_to_the_client() {
    let client = ClientBuilder::new("Margaux").build().identity();
    for category in ALL_CATEGORIES {
        for action in recommend_actions(Some(&signal(category)), &client) {
            let Some(template) = action.template else {
                assert_ne!(action.action_type, ActionType::SendMessage);
                continue;
            };
            assert!(template.starts_with("Hi Margaux,"), "{template}");
            assert!(!template.contains('{'), "{template}");
        }
    }
}
