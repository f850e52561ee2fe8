//! Prompt builders for the model-backed features.
//!
//! Each builder is deterministic: the quote is embedded verbatim inside
//! quotation marks, the target JSON shape appears as a literal example, and
//! the prompt closes by instructing the model to return only that JSON.
//! Optional context fields are length-capped so prompts stay bounded; the
//! quote itself is never truncated.

/// Longest context field (style, theme, tone) embedded in a prompt.
const MAX_CONTEXT_FIELD_LEN: usize = 120;

/// Truncate a context field on a character boundary.
fn clip_context(field: &str) -> &str {
    match field.char_indices().nth(MAX_CONTEXT_FIELD_LEN) {
        Some((idx, _)) => &field[..idx],
        None => field,
    }
}

/// Prompt asking for sentiment analysis of a quote.
pub fn sentiment_prompt(text: &str) -> String {
    format!(
        r#"Analyze the sentiment and emotional tone of the following quote.

Quote: "{text}"

Return a JSON object with:
1. sentiment: "positive", "negative", or "neutral"
2. score: a number between -1 and 1, where -1 is very negative, 0 is neutral, and 1 is very positive
3. emotions: an object with scores for joy, sadness, anger, fear, surprise (values between 0 and 1)

The response should be valid JSON with the following structure:
{{
  "sentiment": "positive|negative|neutral",
  "score": 0.75,
  "emotions": {{
    "joy": 0.8,
    "sadness": 0.1,
    "anger": 0.05,
    "fear": 0.1,
    "surprise": 0.3
  }}
}}

Do not include any explanation or additional text outside of the JSON."#
    )
}

/// Prompt asking for an enhanced quote, variations, and insights.
pub fn enhance_prompt(text: &str, style: Option<&str>) -> String {
    let style_line = match style {
        Some(s) if !s.trim().is_empty() => format!(
            "I'd like the enhancement to match this style/tone: {}\n\n",
            clip_context(s.trim())
        ),
        _ => String::new(),
    };

    format!(
        r#"I have a quote that I'd like to enhance and get variations of. Here's the original quote:

"{text}"

{style_line}Please provide the following in JSON format:
1. An enhanced version of the quote that maintains its core message but makes it more impactful
2. Three alternative variations of the quote with different tones or styles
3. Insights about the quote's theme, tone, and advice on how to visually present it

The response should be valid JSON with the following structure:
{{
  "enhancedQuote": "Enhanced version here",
  "variations": ["Variation 1", "Variation 2", "Variation 3"],
  "insights": {{
    "theme": "Brief description of the quote's theme",
    "tone": "Description of the quote's tone",
    "styleAdvice": "Brief advice on visual presentation"
  }}
}}

Do not include any explanation or additional text outside of the JSON."#
    )
}

/// Prompt asking for four image concepts for a quote design.
pub fn image_ideas_prompt(text: &str, theme: Option<&str>, tone: Option<&str>) -> String {
    let theme_line = match theme {
        Some(t) if !t.trim().is_empty() => format!("Theme: {}\n", clip_context(t.trim())),
        _ => String::new(),
    };
    let tone_line = match tone {
        Some(t) if !t.trim().is_empty() => format!("Tone: {}\n", clip_context(t.trim())),
        _ => String::new(),
    };

    format!(
        r#"I need creative image ideas for a quote design. Here's the information:

Quote: "{text}"
{theme_line}{tone_line}
Please suggest 4 different image ideas that would complement this quote. For each idea, provide:
1. A short description of the image concept
2. The visual style (e.g., minimalist, photographic, watercolor, etc.)
3. A detailed text prompt that could be used with an image generation AI to create this image

The response should be valid JSON with the following structure:
{{
  "ideas": [
    {{
      "description": "Description of image idea 1",
      "style": "Style of image 1",
      "prompt": "Detailed prompt for image generation AI"
    }},
    {{
      "description": "Description of image idea 2",
      "style": "Style of image 2",
      "prompt": "Detailed prompt for image generation AI"
    }},
    ...and so on for the remaining ideas
  ]
}}

Do not include any explanation or additional text outside of the JSON."#
    )
}
