use crate::constants::canned::{FAREWELL_KEYWORDS, GREETING_KEYWORDS, QUIZ_TRIGGERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Farewell,
    None,
}

/// Keyword classification over the lowercased message. Greeting is checked
/// before farewell; a message matching both sets classifies as a greeting.
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();
    if GREETING_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Intent::Greeting;
    }
    if FAREWELL_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Intent::Farewell;
    }
    Intent::None
}

/// Returns the requested quiz topic when the message contains one of the
/// fixed trigger phrases. The first trigger found (in table order) wins and
/// the topic is the lowercased remainder after it; an empty remainder means
/// the message is ordinary chat.
pub fn detect_quiz_request(message: &str) -> Option<String> {
    let lower = message.to_lowercase();
    for trigger in QUIZ_TRIGGERS {
        if let Some(idx) = lower.find(trigger) {
            let topic = lower[idx + trigger.len()..].trim();
            if topic.is_empty() {
                return None;
            }
            return Some(topic.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_detects_greeting() {
        assert_eq!(classify("Hola profe, ¿cómo va?"), Intent::Greeting);
        assert_eq!(classify("QUIUBO"), Intent::Greeting);
    }

    #[test]
    fn classify_detects_farewell() {
        assert_eq!(classify("bueno, chao pues"), Intent::Farewell);
        assert_eq!(classify("Adiós y gracias"), Intent::Farewell);
    }

    #[test]
    fn classify_prefers_greeting_over_farewell() {
        assert_eq!(classify("hola y chao"), Intent::Greeting);
    }

    #[test]
    fn classify_returns_none_for_plain_questions() {
        assert_eq!(classify("¿qué es un átomo?"), Intent::None);
    }

    #[test]
    fn detect_quiz_request_extracts_topic() {
        assert_eq!(
            detect_quiz_request("Hazme un examen de álgebra lineal"),
            Some("álgebra lineal".to_string())
        );
        assert_eq!(
            detect_quiz_request("por favor hazme un quiz sobre la independencia"),
            Some("la independencia".to_string())
        );
    }

    #[test]
    fn detect_quiz_request_lowercases_topic() {
        assert_eq!(
            detect_quiz_request("QUIERO UN QUIZ DE Historia De Colombia"),
            Some("historia de colombia".to_string())
        );
    }

    #[test]
    fn detect_quiz_request_needs_a_topic() {
        assert_eq!(detect_quiz_request("hazme un examen de"), None);
        assert_eq!(detect_quiz_request("hazme un examen de   "), None);
    }

    #[test]
    fn detect_quiz_request_ignores_plain_chat() {
        assert_eq!(detect_quiz_request("explícame las fracciones"), None);
    }
}
