//! Fixed MentorIA reply strings and intent keyword tables.
//!
//! The persona is an Antioquian tutor; all canned strings are paisa Spanish
//! and are part of the public API contract, so changing them breaks clients
//! that match on exact text.

pub const GREETING_REPLY: &str =
    "¡Hola parce! Soy MentorIA, tu tutor virtual antioqueño. ¿Qué tema quieres aprender hoy?";

pub const FAREWELL_REPLY: &str = "¡Listo pues, cuídate y sigue estudiando con ganas!";

/// Returned when the message is empty or whitespace-only.
pub const EMPTY_MESSAGE_REPLY: &str = "Escribí algo, mijo.";

/// Terminal reply once every generation tier has been exhausted.
pub const ENGINE_UNAVAILABLE_REPLY: &str = "Ahora mismo no puedo procesar eso.";

pub const DEFAULT_TOPIC: &str = "tema general";
pub const DEFAULT_LEVEL: &str = "basico";

/// Confirmation sent when an extended-chat message triggered quiz creation.
pub fn quiz_created_reply(topic: &str) -> String {
    format!("Listo pues, mijo. Te preparé un examen de '{}'.", topic)
}

pub const GREETING_KEYWORDS: &[&str] = &["hola", "buenas", "quiubo", "qué más"];

pub const FAREWELL_KEYWORDS: &[&str] = &["adiós", "adios", "chao", "hasta luego", "nos vemos"];

/// Phrases that turn a chat message into a quiz request. Matching is done on
/// the lowercased message; the topic is whatever follows the phrase. No entry
/// is a substring of another, so first match and longest match coincide.
pub const QUIZ_TRIGGERS: &[&str] = &[
    "hazme un examen de",
    "hazme un quiz de",
    "hazme una prueba de",
    "hazme un test de",
    "hazme un parcial de",
    "hazme una evaluación de",
    "quiero un examen de",
    "quiero un quiz de",
    "quiero una prueba de",
    "quiero un test de",
    "quiero un parcial de",
    "quiero una evaluación de",
    "preparame un examen de",
    "preparame un quiz de",
    "preparame una prueba de",
    "preparame un test de",
    "preparame un parcial de",
    "preparame una evaluación de",
    "dame un examen de",
    "dame un quiz de",
    "dame una prueba de",
    "dame un parcial de",
    "dame un test de",
    "hazme un quiz sobre",
    "hazme un examen sobre",
    "hazme una prueba sobre",
    "hazme un test sobre",
];
