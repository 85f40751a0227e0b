//! Prompt construction for both model calls.
//!
//! The subject and teacher enumerations are embedded here as static text, not
//! read from the database, exactly as the deployment expects them. They must
//! be updated by hand if the underlying schedule changes.

/// System instruction for query synthesis, with the schema descriptor spliced in.
pub fn query_system_message(table_info: &str) -> String {
    format!(
        r#"You are an AI assistant for Campus Chatbot.
Your role is to convert natural language questions about classrooms, schedules, and resources into SQL queries.
Use the following table schema to guide your query construction:

{table_info}

Information of subjects: subject_code subject_name
BS201 Linear Algebra and Numerical methods
ARI203 Artificial Intelligence and Its Applications
ARI205 Computer Networks
ARI207 Analog Electronics
ARI209 Mechatronic Systems and Applications
HSAR211 Engineering Economics
ARI251 Artificial Intelligence Lab
ARI253 Electronics Lab
ARI255 Mechatronic Systems and Applications Lab
ARI257 Computer Networks Lab

Information of teachers: Teacher_name, subject
Hariya Ms. Teena: Engineering Economics
Dr. Jyoti: Linear Algebra and Numerical methods
Tyagi Ms. Himani: Artificial Intelligence and Its Applications
Kumar Dr. Ashok: Computer Networks Lab
Arya Dr. Rajendra: Mechatronic Systems and Applications Lab
Batra Prof. Kriti: Analog Electronics
Bhatia Dr. Anshul: Computer Networks

Instructions:
- Respond with a single JSON object of the form {{"query": "<SQL>"}} and nothing else.
- The query value must be the SQL only, no extra text.
- Ensure it is valid SQL for PostgreSQL.
- Do not assume columns not listed in the schema.
- Use proper formatting and quotes where necessary.
- The user may have a typo in the input question, fix that and then generate the best query.

Examples:
1.  "question": "which teacher teaches mechatronics",
    "query": {{"query": "SELECT DISTINCT teacher_name FROM rooms_schedule WHERE subject_name LIKE '%Mechatronic%'"}}
"#
    )
}

/// Persona instruction for answer synthesis.
pub const REPLY_SYSTEM_MESSAGE: &str = "You are an AI assistant being used in a college campus to help students in getting information about their schedules, rooms, resources and teachers.";

/// User instruction for answer synthesis, embedding the pipeline state verbatim.
pub fn reply_user_message(question: &str, query: &str, result: &str) -> String {
    format!(
        r#"Given the user's question, a previous model has generated an SQL query.
Use the result of that query to answer the original question clearly.

User's original question: {question}
LLM generated SQL query: {query}
Result of that query: {result}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_system_message_embeds_schema() {
        let msg = query_system_message("CREATE TABLE rooms_schedule (room_no TEXT);");
        assert!(msg.contains("CREATE TABLE rooms_schedule"));
        assert!(msg.contains("Mechatronic Systems and Applications"));
        assert!(msg.contains(r#"{"query": "<SQL>"}"#));
    }

    #[test]
    fn test_reply_user_message_embeds_state() {
        let msg = reply_user_message("who teaches AI?", "SELECT 1", "[]");
        assert!(msg.contains("who teaches AI?"));
        assert!(msg.contains("SELECT 1"));
        assert!(msg.contains("Result of that query: []"));
    }
}
