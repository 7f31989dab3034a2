//! Static instrument catalogs. All question text, answer keys, weights and
//! interpretation copy live here; the rest of the crate treats them as data.

pub mod instructions;
pub mod inventory;
pub mod investor;
pub mod literacy;

use crate::assessments::domain::Question;

/// Convenience lookup across the two choice-based instruments.
pub fn find_question(question_id: &str) -> Option<Question> {
    investor::questions()
        .into_iter()
        .chain(literacy::questions())
        .find(|question| question.id == question_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::domain::{QuestionKind, RiskDomain, RiskLevel};
    use std::collections::BTreeSet;

    #[test]
    fn investor_catalog_is_well_formed() {
        let questions = investor::questions();
        assert_eq!(questions.len(), investor::QUESTION_COUNT);

        let ids: BTreeSet<_> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), questions.len(), "question ids must be unique");

        for question in &questions {
            assert_eq!(question.kind, QuestionKind::MultipleChoice);
            assert!(question.options.len() >= 2);
            for option in &question.options {
                assert!(
                    investor::choice_weight(question.id, option.value) > 0,
                    "option {}/{} has no weight",
                    question.id,
                    option.value
                );
            }
        }
    }

    #[test]
    fn investor_weight_is_zero_for_unknown_pairs() {
        assert_eq!(investor::choice_weight("risk_pref_q1", "z"), 0);
        assert_eq!(investor::choice_weight("no_such_question", "a"), 0);
    }

    #[test]
    fn literacy_catalog_matches_answer_key() {
        let questions = literacy::questions();
        assert_eq!(questions.len(), 4);

        for id in literacy::OBJECTIVE_IDS {
            let question = questions
                .iter()
                .find(|q| q.id == id)
                .unwrap_or_else(|| panic!("missing objective question {id}"));
            let key = literacy::correct_choice(id).expect("objective question has a key");
            assert!(
                question.options.iter().any(|option| option.value == key),
                "answer key {key} is not an option of {id}"
            );
        }

        let likert = questions
            .iter()
            .find(|q| q.id == literacy::SELF_ASSESSMENT_ID)
            .expect("self-assessment question present");
        assert_eq!(likert.kind, QuestionKind::Likert5);
        assert_eq!(literacy::correct_choice(literacy::SELF_ASSESSMENT_ID), None);
    }

    #[test]
    fn inventory_items_partition_into_domains() {
        let items = inventory::items();
        assert_eq!(items.len(), inventory::ITEM_COUNT);

        let ids: BTreeSet<_> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, (1..=30).collect::<BTreeSet<u8>>());

        for domain in RiskDomain::ordered() {
            let members = inventory::domain_items(domain);
            assert_eq!(members.len(), 6);
            for id in members {
                let item = items
                    .iter()
                    .find(|item| item.id == id)
                    .unwrap_or_else(|| panic!("missing inventory item {id}"));
                assert_eq!(item.domain, domain);
            }
        }
    }

    #[test]
    fn inventory_anchors_cover_the_scale() {
        assert_eq!(inventory::anchor(0), None);
        assert_eq!(inventory::anchor(8), None);
        for value in inventory::SCALE_MIN..=inventory::SCALE_MAX {
            assert!(inventory::anchor(value).is_some());
        }
        assert_eq!(inventory::anchor(1), Some("Extremamente improvável"));
        assert_eq!(inventory::anchor(7), Some("Extremamente provável"));
    }

    #[test]
    fn every_domain_and_level_has_an_interpretation() {
        for domain in RiskDomain::ordered() {
            for level in [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low] {
                assert!(!inventory::interpretation(domain, level).is_empty());
            }
        }
    }

    #[test]
    fn find_question_spans_both_instruments() {
        assert!(find_question("risk_pref_q7").is_some());
        assert!(find_question("finlit_q4").is_some());
        assert!(find_question("made_up").is_none());
    }

    #[test]
    fn instructions_have_three_notices() {
        let notices = instructions::notices();
        assert_eq!(notices.len(), 3);
        assert_eq!(notices[0].heading, "FIQUE ATENTO!");
    }
}
