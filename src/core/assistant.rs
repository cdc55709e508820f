use crate::core::selection::Comparison;
use crate::domain::model::ChatMessage;
use crate::domain::ports::TextGenerator;

const GREETING: &str = "Hello! I'm your AI health assistant. \
Please describe your symptoms and I'll help you find the right doctor.";

const APOLOGY: &str = "I apologize, but I'm having trouble analyzing your symptoms \
right now. Please try again or consult with a doctor directly.";

/// AI-backed symptom-description chat. Keeps an in-memory transcript; replies
/// append in completion order and a failed generation turns into a fixed
/// apology rather than an error.
pub struct SymptomChecker<G: TextGenerator> {
    generator: G,
    model: String,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
}

impl<G: TextGenerator> SymptomChecker<G> {
    pub fn new(generator: G, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            generator,
            model: model.into(),
            max_tokens,
            messages: vec![ChatMessage::assistant(GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record the user's symptoms, ask the AI collaborator for an assessment
    /// and append its reply. Returns the reply text.
    pub async fn analyze(&mut self, symptoms: &str) -> String {
        self.messages.push(ChatMessage::user(symptoms));

        let prompt = symptom_prompt(symptoms);
        let reply = match self
            .generator
            .generate(&prompt, &self.model, self.max_tokens)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Symptom analysis failed: {}", e);
                APOLOGY.to_string()
            }
        };

        self.messages.push(ChatMessage::assistant(reply.clone()));
        reply
    }

    /// Natural-language rationale for a two-doctor comparison. Falls back to
    /// the deterministic rating-rule summary when the AI call fails.
    pub async fn justify_comparison(&self, comparison: &Comparison) -> String {
        let prompt = comparison_prompt(comparison);
        match self
            .generator
            .generate(&prompt, &self.model, self.max_tokens)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Comparison rationale failed: {}", e);
                comparison.summary()
            }
        }
    }

    /// Start a new conversation, keeping only the initial greeting.
    pub fn reset(&mut self) {
        self.messages = vec![ChatMessage::assistant(GREETING)];
    }
}

fn symptom_prompt(symptoms: &str) -> String {
    format!(
        "You are a virtual medical assistant for a mobile app called \"One-Tap Doctor\" \
that helps users in Uttarakhand, India. Based on the user's symptoms, return:\n\n\
1. A short summary of the possible condition (in simple language).\n\
2. A recommendation for the type of doctor they should consult.\n\
3. A recommendation for the top 2 doctors in either Dehradun or Haldwani \
(use realistic Indian doctor names).\n\
4. A brief reason why those doctors are suitable.\n\n\
Format your response clearly with emojis and sections.\n\n\
User's symptoms: \"{}\"",
        symptoms
    )
}

fn comparison_prompt(comparison: &Comparison) -> String {
    let describe = |d: &crate::domain::model::Doctor| {
        format!(
            "{} ({}, {}): {} years experience, rated {}, speaks {}, currently {}",
            d.name,
            d.specialization,
            d.city,
            d.experience_years,
            d.rating,
            d.languages.join(", "),
            d.availability
        )
    };

    format!(
        "Compare these two doctors for a patient choosing a consultation and say \
which one is the better choice, with a short reason:\n- {}\n- {}",
        describe(&comparison.first),
        describe(&comparison.second)
    )
}
