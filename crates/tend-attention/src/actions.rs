//! Suggested next steps for a client, derived from their signal.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tend_core::models::action::ActionType;
use tend_core::models::client::ClientIdentity;

use crate::signal::{Signal, SignalCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuggestedAction {
    pub action_type: ActionType,
    pub label: String,
    pub description: String,
    /// Pre-filled message body, already addressed to the client.
    pub template: Option<String>,
}

struct ActionSpec {
    action_type: ActionType,
    label: &'static str,
    description: &'static str,
    template: Option<&'static str>,
}

const NAME_PLACEHOLDER: &str = "{first_name}";

const CHECK_IN: ActionSpec = ActionSpec {
    action_type: ActionType::SendMessage,
    label: "Send a check-in message",
    description: "A short note to reconnect and ask how things are going.",
    template: Some(
        "Hi {first_name}, I noticed we haven't been in touch for a little while. \
         How are you doing? I'm here if you'd like to talk anything through.",
    ),
};

const ADJUST_PLAN: ActionSpec = ActionSpec {
    action_type: ActionType::AdjustPlan,
    label: "Adjust the care plan",
    description: "Open the care plan and lighten or reorder the daily habits.",
    template: None,
};

const PROPOSE_ADJUSTMENT: ActionSpec = ActionSpec {
    action_type: ActionType::SendMessage,
    label: "Propose an adjustment",
    description: "Suggest a simpler version of the plan for the coming week.",
    template: Some(
        "Hi {first_name}, this week looked a bit harder to fit into your days. \
         Would it help if we simplified a few habits for the next week?",
    ),
};

const SUPPORTIVE_MESSAGE: ActionSpec = ActionSpec {
    action_type: ActionType::SendMessage,
    label: "Send a supportive message",
    description: "Acknowledge the difficult stretch and offer support.",
    template: Some(
        "Hi {first_name}, I can see the last few days have been tougher. \
         Be gentle with yourself. Is there anything I can do to support you right now?",
    ),
};

const PROPOSE_CALL: ActionSpec = ActionSpec {
    action_type: ActionType::ScheduleCall,
    label: "Propose a call",
    description: "Offer a short call to talk through how things are going.",
    template: None,
};

const LOG_OBSERVATION: ActionSpec = ActionSpec {
    action_type: ActionType::LogObservation,
    label: "Log an observation",
    description: "Record what the device data shows in the client's file.",
    template: None,
};

const SLEEP_GUIDANCE: ActionSpec = ActionSpec {
    action_type: ActionType::SendMessage,
    label: "Share sleep guidance",
    description: "Send a few practical tips for a calmer evening routine.",
    template: Some(
        "Hi {first_name}, your nights look a little shorter lately. \
         A screen-free half hour before bed and a consistent bedtime can make a real difference. \
         Want to try it this week?",
    ),
};

const RECOVERY_GUIDANCE: ActionSpec = ActionSpec {
    action_type: ActionType::SendMessage,
    label: "Share recovery guidance",
    description: "Suggest easing off and prioritising rest for a few days.",
    template: Some(
        "Hi {first_name}, your body seems to be asking for a bit more recovery right now. \
         Consider lighter activity and some extra rest over the next few days.",
    ),
};

const CONGRATULATIONS: ActionSpec = ActionSpec {
    action_type: ActionType::SendMessage,
    label: "Send congratulations",
    description: "Celebrate the consistency and keep the momentum going.",
    template: Some(
        "Hi {first_name}, I wanted to say how great your week has been. \
         Your consistency is really paying off. Keep it up!",
    ),
};

const OPEN_RECORD: ActionSpec = ActionSpec {
    action_type: ActionType::OpenRecord,
    label: "Open the full record",
    description: "See the journal, device data and history in detail.",
    template: None,
};

fn action_set(category: SignalCategory) -> &'static [ActionSpec] {
    match category {
        SignalCategory::Presence => &[CHECK_IN],
        SignalCategory::Adherence => &[ADJUST_PLAN, PROPOSE_ADJUSTMENT],
        SignalCategory::Emotional | SignalCategory::Energy => &[SUPPORTIVE_MESSAGE, PROPOSE_CALL],
        SignalCategory::Sleep => &[LOG_OBSERVATION, SLEEP_GUIDANCE],
        SignalCategory::Recovery => &[LOG_OBSERVATION, RECOVERY_GUIDANCE],
        SignalCategory::Progress | SignalCategory::Balance => &[CONGRATULATIONS],
    }
}

impl ActionSpec {
    fn render(&self, client: &ClientIdentity) -> SuggestedAction {
        SuggestedAction {
            action_type: self.action_type,
            label: self.label.to_string(),
            description: self.description.to_string(),
            template: self
                .template
                .map(|t| t.replace(NAME_PLACEHOLDER, &client.first_name)),
        }
    }
}

/// Actions for `signal`, with "open the full record" always last.
pub fn recommend_actions(signal: Option<&Signal>, client: &ClientIdentity) -> Vec<SuggestedAction> {
    let specific = signal.map_or(&[][..], |s| action_set(s.category));
    specific
        .iter()
        .chain(std::iter::once(&OPEN_RECORD))
        .map(|spec| spec.render(client))
        .collect()
}
