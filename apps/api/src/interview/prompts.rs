// All LLM prompt constants for the Interview module.
// Placeholders are filled via template::render before the prompt is sent.

/// Question prompt template. Replace `{job_role}` before sending.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"You are an expert interviewer for technical roles. Based on the job role provided,
generate one challenging but realistic interview question that would be asked in a real interview.
The question should test both technical knowledge and practical application.

Job Role: {job_role}

Generate a single, focused technical interview question for this role.
"#;

/// Feedback prompt template. Replace `{job_role}`, `{question}`, `{answer}`
/// before sending. The response contract is the three literal section headers
/// `RATING:`, `FEEDBACK:`, `EXPERT ANSWER:` in that order — the feedback
/// parser depends on them.
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"You are an expert technical interviewer evaluating a candidate's response to a technical interview question.

Job Role: {job_role}
Interview Question: {question}
Candidate's Answer: {answer}

Evaluate the answer and provide detailed feedback with the following structure:

RATING:
First, rate the answer on a scale of 1-5 stars (where 1 is poor and 5 is excellent).
Provide your numerical rating first (just the number 1-5), followed by a brief explanation of the rating.

FEEDBACK:
Then provide 3-4 bullet points of specific feedback, mentioning both strengths and areas for improvement.
Consider:
1. Technical accuracy (is the information correct?)
2. Completeness (did they cover all necessary aspects?)
3. Clarity (was the explanation clear and well-structured?)
4. Practical relevance (did they show practical understanding, not just theory?)

EXPERT ANSWER:
Finally, provide a model answer that would impress an interviewer for this role. This answer should be concise
but comprehensive, demonstrating deep expertise, practical experience, and strategic thinking.
Show what a top-tier candidate would say to this question.
"#;
