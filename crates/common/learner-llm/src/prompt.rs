use crate::types::{ChatMessage, ContentPart, HintRequest, ImageUrl, MessageContent, Role};

pub const SYSTEM_PROMPT: &str = "\
You are an educational coding assistant helping users learn how to solve programming problems.
When given a coding problem (like from LeetCode), you should:
1. Understand the problem
2. Provide helpful hints without giving away the solution
3. Give example approaches or patterns they might consider
4. Explain relevant concepts or algorithms
5. Encourage learning and understanding over just getting the answer

Never provide the complete solution code unless explicitly asked.
Focus on teaching problem-solving skills and building understanding.";

/// Used when screenshots are sent without any question text.
pub const DEFAULT_USER_PROMPT: &str =
    "Here are screenshots of the problem I'm working on. Please give me hints to get started.";

/// System prompt, then prior turns, then the new question with its images.
pub fn build_messages(request: &HintRequest) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(request.history.len() + 2);
    messages.push(ChatMessage {
        role: Role::System,
        content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
    });

    messages.extend(
        request
            .history
            .iter()
            .filter(|turn| turn.role != Role::System)
            .map(|turn| ChatMessage {
                role: turn.role,
                content: MessageContent::Text(turn.content.clone()),
            }),
    );

    let text = request
        .prompt
        .as_deref()
        .map(str::trim)
        .filter(|prompt| !prompt.is_empty())
        .unwrap_or(DEFAULT_USER_PROMPT);

    let mut parts = Vec::with_capacity(request.screenshots.len() + 1);
    parts.push(ContentPart::Text {
        text: text.to_string(),
    });
    parts.extend(request.screenshots.iter().map(|url| ContentPart::ImageUrl {
        image_url: ImageUrl {
            url: url.clone(),
            detail: None,
        },
    }));

    messages.push(ChatMessage {
        role: Role::User,
        content: MessageContent::Parts(parts),
    });
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatTurn;

    #[test]
    fn system_prompt_comes_first() {
        let messages = build_messages(&HintRequest {
            prompt: Some("How do I start?".into()),
            ..Default::default()
        });

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(
            messages[0].content,
            MessageContent::Text(SYSTEM_PROMPT.to_string())
        );
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn screenshots_follow_the_question_text() {
        let messages = build_messages(&HintRequest {
            screenshots: vec!["data:a".into(), "data:b".into()],
            prompt: None,
            history: vec![],
        });

        let MessageContent::Parts(parts) = &messages[1].content else {
            panic!("user message should carry content parts");
        };
        assert_eq!(
            parts[0],
            ContentPart::Text {
                text: DEFAULT_USER_PROMPT.to_string()
            }
        );
        let urls: Vec<_> = parts[1..]
            .iter()
            .map(|part| match part {
                ContentPart::ImageUrl { image_url } => image_url.url.as_str(),
                ContentPart::Text { .. } => panic!("unexpected text part"),
            })
            .collect();
        assert_eq!(urls, vec!["data:a", "data:b"]);
    }

    #[test]
    fn history_is_kept_in_order_without_system_turns() {
        let messages = build_messages(&HintRequest {
            screenshots: vec![],
            prompt: Some("And the edge cases?".into()),
            history: vec![
                ChatTurn {
                    role: Role::User,
                    content: "first".into(),
                },
                ChatTurn {
                    role: Role::System,
                    content: "ignored".into(),
                },
                ChatTurn {
                    role: Role::Assistant,
                    content: "second".into(),
                },
            ],
        });

        let roles: Vec<_> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(messages[2].content, MessageContent::Text("second".into()));
    }
}
