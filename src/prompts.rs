//! Prompt text for the LLM burnout assessment call.

/// System role content sent with every assessment request.
pub const SYSTEM_PROMPT: &str = "You are a professional mental health AI assistant. Provide accurate, compassionate analysis while maintaining appropriate boundaries. Always prioritize user wellbeing.";

/// Build the user prompt asking the model to assess `text`.
///
/// The model is instructed to answer with a single JSON object in the
/// camelCase assessment shape; anything else fails parsing downstream and
/// routes the request to the keyword classifier.
pub fn analysis_prompt(text: &str) -> String {
    format!(
        r#"You are a mental health AI assistant specializing in emotional state analysis and burnout detection. Analyze the following text for emotional state, burnout symptoms, and specific wellness needs.

Text to analyze: "{text}"

Provide a comprehensive analysis including:
1. Overall burnout risk level (none, low, medium, high) - use "none" for happy/positive states
2. Sentiment analysis (positive, neutral, negative)
3. Specific mood state (happy, content, stressed, anxious, exhausted, overwhelmed)
4. Key topics mentioned (work, sleep, relationships, exercise, diet, etc.)
5. Specific stress indicators present
6. Confidence level in your analysis (0-100)
7. Brief explanation of your reasoning

IMPORTANT:
- If the user expresses happiness, joy, excitement, or general positivity, set burnoutLevel to "none"
- For "none" burnout level, focus on maintaining wellbeing and preventive care
- For other levels, provide targeted interventions

Respond in JSON format:
{{
  "burnoutLevel": "none|low|medium|high",
  "sentiment": "positive|neutral|negative",
  "moodState": "happy|content|stressed|anxious|exhausted|overwhelmed",
  "keyTopics": ["work", "sleep", "relationships"],
  "stressIndicators": ["indicator1", "indicator2"],
  "confidence": 85,
  "reasoning": "brief explanation"
}}

Analysis guidelines:
- Happy/Positive: "amazing", "great", "happy", "excited", "love", "wonderful" → burnoutLevel: "none"
- Content/Balanced: "good", "fine", "okay", "managing" → burnoutLevel: "low"
- Stressed: "stressed", "tired", "overworked" → burnoutLevel: "medium"
- Critical: "exhausted", "overwhelmed", "burnout" → burnoutLevel: "high"

Consider these wellness indicators:
- Physical energy and sleep quality
- Emotional balance and mood
- Work satisfaction and boundaries
- Social connections and relationships
- Physical activity and nutrition
- Stress management techniques"#
    )
}
