//! Scripted pet-health assistant.
//!
//! Replies are picked by keyword; there is no diagnosis logic.

use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hola, ¿cómo puedo ayudarte con la salud de tu mascota?";

const COUGH_REPLY: &str = "🐶 La tos en mascotas puede deberse a varias causas. Recomiendo:\n• Observar su comportamiento\n• Verificar temperatura\n• Consultar veterinario si persiste";

const ALLERGY_REPLY: &str = "🤧 Las alergias en mascotas suelen manifestarse con:\n• Picazón en la piel\n• Enrojecimiento\n• Estornudos\n\nConsulta con un veterinario para diagnóstico preciso";

const GENERAL_REPLY: &str = "🐾 Para cuidar mejor a tu mascota:\n• Mantén su área limpia\n• Proporciona alimentación adecuada\n• Visitas regulares al veterinario\n\n¡Estoy aquí para ayudarte!";

/// Checked in order; the first keyword contained in the query wins.
const KEYWORD_REPLIES: &[(&str, &str)] = &[("tos", COUGH_REPLY), ("alergia", ALLERGY_REPLY)];

pub fn bot_response(query: &str) -> &'static str {
    let lower = query.to_lowercase();
    KEYWORD_REPLIES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(GENERAL_REPLY)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub from: Sender,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![Self::greeting()],
            next_id: 2,
        }
    }

    fn greeting() -> ChatMessage {
        ChatMessage {
            id: 1,
            text: GREETING.to_string(),
            from: Sender::Bot,
        }
    }

    /// 送出使用者訊息並附加機器人回覆；空白輸入不處理
    pub fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }

        let reply = bot_response(input);
        self.push(input.to_string(), Sender::User);
        self.push(reply.to_string(), Sender::Bot);
        self.messages.last()
    }

    pub fn clear(&mut self) {
        self.messages = vec![Self::greeting()];
        self.next_id = 2;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, text: String, from: Sender) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            from,
        });
        self.next_id += 1;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_replies() {
        assert_eq!(bot_response("Mi perro tiene tos"), COUGH_REPLY);
        assert_eq!(bot_response("ALERGIA en la piel"), ALLERGY_REPLY);
        assert_eq!(bot_response("¿Qué vacunas necesita?"), GENERAL_REPLY);
    }

    #[test]
    fn test_cough_is_checked_before_allergy() {
        assert_eq!(bot_response("tos y alergia"), COUGH_REPLY);
    }

    #[test]
    fn test_session_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].text, GREETING);
        assert_eq!(session.messages()[0].from, Sender::Bot);
    }

    #[test]
    fn test_send_appends_user_and_bot_messages() {
        let mut session = ChatSession::new();
        let reply = session.send("tiene alergia").unwrap().clone();

        assert_eq!(reply.from, Sender::Bot);
        assert_eq!(reply.text, ALLERGY_REPLY);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].from, Sender::User);
        assert_eq!(messages[1].text, "tiene alergia");
        assert!(messages[1].id < messages[2].id);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert!(session.send("   ").is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_clear_resets_to_greeting() {
        let mut session = ChatSession::new();
        session.send("hola");
        session.clear();
        assert_eq!(session.messages(), &[ChatSession::greeting()]);
    }
}
