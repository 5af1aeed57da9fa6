//! Support chat with a travel agent.
//!
//! Replies are canned and chosen by keyword; the conversation lives only for
//! the current session.

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The traveler using the app
    Traveler,
    /// The agency
    Agent,
}

/// A single chat message.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    /// Whether this message was written by the local traveler.
    pub fn is_local(&self) -> bool {
        self.sender == Sender::Traveler
    }
}

/// Display name of the agent.
pub const AGENT_NAME: &str = "Equipe Moveasy";

const GREETING: &str = "Olá! Sou da equipe Moveasy. Como posso ajudar com a sua viagem?";

/// Conversation state.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Start a conversation with the agent's greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Sender::Agent, GREETING)],
        }
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send a traveler message and append the agent's reply.
    ///
    /// Blank input is ignored. Returns whether anything was sent.
    pub fn send(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        self.messages.push(ChatMessage::new(Sender::Traveler, text));
        self.messages
            .push(ChatMessage::new(Sender::Agent, auto_reply(text)));
        tracing::debug!("Chat message sent ({} in session)", self.messages.len());
        true
    }
}

/// Pick the agent's reply for a traveler message.
pub fn auto_reply(text: &str) -> &'static str {
    let text = text.to_lowercase();

    if text.contains("cancel") {
        "Cancelamentos com até 48 horas de antecedência são gratuitos. Qual pedido você quer cancelar?"
    } else if text.contains("reserva") {
        "Suas reservas ficam em \"Meus pedidos\". Posso ajudar a alterar alguma data?"
    } else if text.contains("preço") || text.contains("preco") || text.contains("valor") {
        "Os valores são por pessoa. Para viagens personalizadas enviamos um orçamento em até 24 horas."
    } else {
        "Obrigado pela mensagem! Um de nossos agentes vai responder em instantes."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Agent);
    }

    #[test]
    fn test_blank_message_ignored() {
        let mut session = ChatSession::new();
        assert!(!session.send("   "));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_send_appends_reply() {
        let mut session = ChatSession::new();
        assert!(session.send("  Quero cancelar minha reserva "));

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[1].is_local());
        assert_eq!(messages[1].text, "Quero cancelar minha reserva");
        assert!(messages[2].text.starts_with("Cancelamentos"));
    }

    #[test]
    fn test_auto_reply_keywords() {
        assert!(auto_reply("Qual o VALOR?").starts_with("Os valores"));
        assert!(auto_reply("minha reserva").contains("Meus pedidos"));
        assert!(auto_reply("oi").starts_with("Obrigado"));
    }
}
