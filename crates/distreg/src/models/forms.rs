//! Form payloads for the two-step submission workflow.

use serde::Deserialize;

use distreg_core::registration::NewDistributor;

/// Payload for the registration form (POST /submit).
///
/// Fields default to empty strings rather than rejecting the request at the
/// extractor, so an absent field surfaces as a `ValidationError` instead of
/// a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub distributor_name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl RegistrationForm {
    pub fn into_new_distributor(self) -> NewDistributor {
        NewDistributor {
            distributor_name: self.distributor_name,
            contact_person: self.contact_person,
            email: self.email,
            phone: self.phone,
            address: self.address,
        }
    }
}

/// Payload for the questionnaire form (POST /submit-answers).
///
/// The questionnaire is fixed at ten questions; any `qN` field absent from
/// the request is simply not recorded.
#[derive(Debug, Deserialize)]
pub struct AnswersForm {
    pub distributor_id: i64,
    pub q1: Option<String>,
    pub q2: Option<String>,
    pub q3: Option<String>,
    pub q4: Option<String>,
    pub q5: Option<String>,
    pub q6: Option<String>,
    pub q7: Option<String>,
    pub q8: Option<String>,
    pub q9: Option<String>,
    pub q10: Option<String>,
}

impl AnswersForm {
    /// Flattens the fixed fields into `(question_number, answer)` pairs.
    ///
    /// A field present but blank becomes a recorded question with no answer
    /// text; a field absent from the request produces no pair at all.
    pub fn answers(&self) -> Vec<(u32, Option<String>)> {
        let fields = [
            &self.q1, &self.q2, &self.q3, &self.q4, &self.q5, &self.q6, &self.q7, &self.q8,
            &self.q9, &self.q10,
        ];

        fields
            .into_iter()
            .enumerate()
            .filter_map(|(i, field)| {
                field.as_ref().map(|text| {
                    let answer = if text.is_empty() {
                        None
                    } else {
                        Some(text.clone())
                    };
                    (i as u32 + 1, answer)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_form(distributor_id: i64) -> AnswersForm {
        AnswersForm {
            distributor_id,
            q1: None,
            q2: None,
            q3: None,
            q4: None,
            q5: None,
            q6: None,
            q7: None,
            q8: None,
            q9: None,
            q10: None,
        }
    }

    #[test]
    fn absent_fields_produce_no_pairs() {
        let mut form = empty_form(1);
        form.q1 = Some("Yes".to_string());
        form.q2 = Some("No".to_string());

        assert_eq!(
            form.answers(),
            vec![
                (1, Some("Yes".to_string())),
                (2, Some("No".to_string())),
            ]
        );
    }

    #[test]
    fn blank_fields_record_the_question_without_text() {
        let mut form = empty_form(1);
        form.q3 = Some(String::new());

        assert_eq!(form.answers(), vec![(3, None)]);
    }

    #[test]
    fn question_numbers_follow_field_positions() {
        let mut form = empty_form(1);
        form.q10 = Some("Last".to_string());

        assert_eq!(form.answers(), vec![(10, Some("Last".to_string()))]);
    }

    #[test]
    fn fully_empty_form_yields_no_answers() {
        assert!(empty_form(1).answers().is_empty());
    }
}
