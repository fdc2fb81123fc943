//! Prompt builders for the tutoring persona and the quiz JSON request.

/// Tutoring prompt: persona, pedagogy constraints, the student's level and
/// their question. Both generation tiers receive exactly this text, which is
/// also what the prompt-echo strip looks for in local-engine output.
pub fn tutor_prompt(message: &str, level: &str) -> String {
    format!(
        r#"Eres MentorIA, un tutor virtual antioqueño. Responde pedagógicamente adaptando la explicación al nivel del estudiante: {level}.
Explica el tema de manera clara, con ejemplos locales y cercanos, y mantén un tono amigable y motivador.

Pregunta del estudiante: {message}
Respuesta:"#
    )
}

/// Strict quiz prompt: asks for a JSON object only, with the exact shape the
/// salvage parser and quiz deserializer expect.
pub fn quiz_json_prompt(topic: &str, n: usize) -> String {
    format!(
        r#"Genera un cuestionario de {n} preguntas sobre "{topic}".
Devuélvelo SOLO como JSON válido:

{{
  "topic": "{topic}",
  "questions": [
    {{
      "id": "q1",
      "text": "Texto de la pregunta",
      "options": [{{"key":"a","text":"opción A"}},{{"key":"b","text":"opción B"}},{{"key":"c","text":"opción C"}},{{"key":"d","text":"opción D"}}],
      "answer": "b",
      "explanation": "Explicación breve (1-2 oraciones)"
    }}
  ]
}}"#
    )
}
