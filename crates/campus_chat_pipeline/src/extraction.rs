//! Structured-output extraction for query synthesis.
//!
//! Model responses often wrap JSON in markdown code fences or surround it with
//! stray text even when told not to. The extractor tolerates those patterns,
//! but a response with no parseable object of the right shape is a
//! model-service failure, not something to pass downstream as SQL.

use campus_chat_core::QueryOutput;
use campus_chat_error::{CampusChatResult, GeminiError, GeminiErrorKind};

/// Parse the query model's response into the structured output shape.
///
/// # Errors
///
/// Returns a model-service error if the response holds no JSON object or the
/// object does not conform to [`QueryOutput`].
///
/// # Examples
///
/// ```
/// use campus_chat_pipeline::parse_query_output;
///
/// let response = "```json\n{\"query\": \"SELECT 1\"}\n```";
/// let output = parse_query_output(response).unwrap();
/// assert_eq!(output.query, "SELECT 1");
/// ```
pub fn parse_query_output(response: &str) -> CampusChatResult<QueryOutput> {
    let json = extract_json(response).ok_or_else(|| {
        tracing::error!(
            response_length = response.len(),
            "No JSON object found in query model response"
        );
        GeminiError::new(GeminiErrorKind::MalformedResponse(format!(
            "no JSON object in response (length {})",
            response.len()
        )))
    })?;

    let output: QueryOutput = serde_json::from_str(&json).map_err(|e| {
        let preview: String = json.chars().take(100).collect();
        tracing::error!(error = %e, json_preview = %preview, "Query output parsing failed");
        GeminiError::new(GeminiErrorKind::MalformedResponse(format!(
            "{} (JSON: {}...)",
            e, preview
        )))
    })?;

    if output.query.trim().is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::MalformedResponse(
            "query field is empty".to_string(),
        ))
        .into());
    }

    Ok(output)
}

/// Extract a JSON object from a response that may contain markdown or extra text.
fn extract_json(response: &str) -> Option<String> {
    if let Some(json) = extract_from_code_block(response)
        && json.starts_with('{')
    {
        return Some(json);
    }
    extract_balanced(response)
}

/// Extract content from a ```json (or bare ```) code fence.
fn extract_from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")?;
    let content_start = start + 3;
    // Skip an optional language specifier line
    let skip_to = response[content_start..]
        .find('\n')
        .map(|n| content_start + n + 1)
        .unwrap_or(content_start);

    match response[skip_to..].find("```") {
        Some(end) => Some(response[skip_to..skip_to + end].trim().to_string()),
        // No closing fence, likely a truncated response
        None => Some(response[skip_to..].trim().to_string()),
    }
}

/// Extract the first balanced `{ ... }` object, respecting string literals.
fn extract_balanced(response: &str) -> Option<String> {
    let start = response.find('{')?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}
