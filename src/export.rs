//! CSV rendering of a survey's collected responses.

use csv::{QuoteStyle, WriterBuilder};

use crate::error::Result;
use crate::model::api::desc::AdminSurveyDescription;
use crate::model::common::Answer;

/// Render the admin view's responses as CSV: one column for the response ID
/// and submission time, then one per question in schema order. Every field
/// is quoted; sequence answers are joined with `"; "`.
pub fn responses_csv(view: &AdminSurveyDescription) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    let mut header = vec!["Response ID".to_string(), "Submitted At".to_string()];
    header.extend(view.survey.questions.iter().map(|question| question.text.clone()));
    writer.write_record(&header)?;

    for response in &view.responses {
        let mut record = vec![response.id.clone(), response.submitted_at.to_rfc3339()];
        record.extend(view.survey.questions.iter().map(|question| {
            match response.data.get(&question.id) {
                Some(Answer::One(value)) => value.clone(),
                Some(Answer::Number(value)) => value.to_string(),
                Some(Answer::Many(values)) => values.join("; "),
                None => String::new(),
            }
        }));
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes).expect("CSV output is valid UTF-8"))
}
