//! Domain Services
//!
//! Quiz question selection. Pure: the eligible set is computed by the store,
//! the draw happens here so fairness does not depend on store-specific
//! random functions.

use rand::Rng;

use crate::domain::entities::Question;

/// Draw one question uniformly at random from the eligible set.
///
/// Returns `None` when the set is empty, which ends a quiz session.
pub fn select_next<R>(mut eligible: Vec<Question>, rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    if eligible.is_empty() {
        return None;
    }
    let index = rng.random_range(0..eligible.len());
    Some(eligible.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Difficulty;
    use kernel::id::{CategoryId, QuestionId};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn questions(n: i32) -> Vec<Question> {
        (1..=n)
            .map(|i| Question {
                id: QuestionId::new(i),
                question: format!("Question {i}?"),
                answer: format!("Answer {i}"),
                category: CategoryId::new(1),
                difficulty: Difficulty::new(1).unwrap(),
            })
            .collect()
    }

    #[test]
    fn test_empty_set_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select_next(Vec::new(), &mut rng).is_none());
    }

    #[test]
    fn test_single_candidate_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = select_next(questions(1), &mut rng).unwrap();
            assert_eq!(picked.id, QuestionId::new(1));
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let a = select_next(questions(10), &mut StdRng::seed_from_u64(99)).unwrap();
        let b = select_next(questions(10), &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_selection_is_roughly_uniform() {
        const N: i32 = 6;
        const TRIALS: usize = 6_000;

        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; N as usize];
        for _ in 0..TRIALS {
            let picked = select_next(questions(N), &mut rng).unwrap();
            counts[(picked.id.get() - 1) as usize] += 1;
        }

        // Expected 1000 each; 150 is about five standard deviations
        for (i, count) in counts.iter().enumerate() {
            assert!(
                (850..=1150).contains(count),
                "question {} drawn {} times out of {}",
                i + 1,
                count,
                TRIALS
            );
        }
    }
}
