//! Marketing journey models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_JOURNEY_NAME: &str = "Post-purchase flow";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JourneyTrigger {
    #[default]
    TicketPurchased,
    EventPublished,
    AbandonedCheckout,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Channel {
    #[default]
    Email,
    #[serde(rename = "SMS")]
    Sms,
    Push,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    #[default]
    AllUsers,
    Kampala,
    Nairobi,
    FirstTimeBuyers,
    Organizers,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JourneyStatus {
    #[default]
    Draft,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JourneyNodeKind {
    Trigger,
    Delay,
    Branch,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JourneyNode {
    pub id: String,
    pub kind: JourneyNodeKind,
    pub label: String,
}

impl JourneyNode {
    fn new(id: &str, kind: JourneyNodeKind, label: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            label: label.to_string(),
        }
    }
}

/// The flow every new journey starts from.
pub fn default_flow() -> Vec<JourneyNode> {
    vec![
        JourneyNode::new("N1", JourneyNodeKind::Trigger, "Ticket Purchased"),
        JourneyNode::new("N2", JourneyNodeKind::Delay, "Wait 2 hours"),
        JourneyNode::new("N3", JourneyNodeKind::Branch, "IF open rate < 15%"),
        JourneyNode::new("N4", JourneyNodeKind::Message, "SMS: Reminder & venue details"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Journey {
    pub id: Uuid,
    pub name: String,
    pub trigger: JourneyTrigger,
    pub channel: Channel,
    pub segment: Segment,
    pub status: JourneyStatus,
    pub nodes: Vec<JourneyNode>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateJourneyDto {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub trigger: Option<JourneyTrigger>,
    pub channel: Option<Channel>,
    pub segment: Option<Segment>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateJourneyDto {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub trigger: Option<JourneyTrigger>,
    pub channel: Option<Channel>,
    pub segment: Option<Segment>,
}

/// Outcome of the "Test" button: a single message sent to the editor.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JourneyTestResponse {
    pub journey_id: Uuid,
    pub channel: Channel,
    pub message: String,
}

/// Query parameters for listing journeys.
#[derive(Debug, Default, Deserialize)]
pub struct JourneyFilterParams {
    pub status: Option<JourneyStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flow_shape() {
        let flow = default_flow();
        let kinds: Vec<_> = flow.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                JourneyNodeKind::Trigger,
                JourneyNodeKind::Delay,
                JourneyNodeKind::Branch,
                JourneyNodeKind::Message
            ]
        );
        assert_eq!(flow[0].label, "Ticket Purchased");
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Channel::Sms).unwrap(), r#""SMS""#);
        assert_eq!(
            serde_json::to_string(&Segment::FirstTimeBuyers).unwrap(),
            r#""first_time_buyers""#
        );
        assert_eq!(
            serde_json::from_str::<JourneyTrigger>(r#""abandoned_checkout""#).unwrap(),
            JourneyTrigger::AbandonedCheckout
        );
    }

    #[test]
    fn test_create_dto_validation() {
        let dto = CreateJourneyDto {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = CreateJourneyDto {
            name: Some("Abandoned cart nudge".to_string()),
            channel: Some(Channel::Push),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
