use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use crate::db::Question;

/// Ids of the candidates whose text was already asked this round.
pub fn seen_ids(candidates: &[Question], previous_questions: &[String]) -> HashSet<i64> {
    let asked: HashSet<&str> = previous_questions.iter().map(String::as_str).collect();
    candidates
        .iter()
        .filter(|q| asked.contains(q.question.as_str()))
        .map(|q| q.id)
        .collect()
}

/// Pick one candidate uniformly at random among those whose id is not in
/// `seen`. `None` means the round is exhausted.
pub fn pick_unseen<R: Rng + ?Sized>(
    candidates: &[Question],
    seen: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question> {
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();
    unseen.choose(rng).map(|q| (*q).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::NewQuestion;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn questions(n: i64) -> Vec<Question> {
        (1..=n)
            .map(|id| NewQuestion::new(format!("q{id}"), "a", 1, 1).with_id(id))
            .collect()
    }

    #[test]
    fn seen_ids_cover_every_row_sharing_a_text() {
        let mut candidates = questions(3);
        candidates.push(NewQuestion::new("q2", "again", 1, 1).with_id(9));
        let previous = vec!["q2".to_string(), "not a candidate".to_string()];
        assert_eq!(seen_ids(&candidates, &previous), HashSet::from([2, 9]));
        assert!(seen_ids(&candidates, &[]).is_empty());
    }

    #[test]
    fn never_returns_seen_question() {
        let candidates = questions(5);
        let seen = HashSet::from([1, 2, 4, 5]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = pick_unseen(&candidates, &seen, &mut rng).unwrap();
            assert_eq!(picked.id, 3);
        }
    }

    #[test]
    fn exhausted_round_returns_none() {
        let candidates = questions(3);
        let seen = HashSet::from([1, 2, 3]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_unseen(&candidates, &seen, &mut rng).is_none());
        assert!(pick_unseen(&[], &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn a_full_round_visits_every_question_once() {
        let candidates = questions(6);
        let mut seen = HashSet::new();
        let mut rng = StdRng::seed_from_u64(42);
        while let Some(q) = pick_unseen(&candidates, &seen, &mut rng) {
            assert!(seen.insert(q.id), "question {} repeated", q.id);
        }
        assert_eq!(seen.len(), candidates.len());
    }
}
