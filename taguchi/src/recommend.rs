//! Optimal-level recommender: picks the best level per factor
//! and renders a recommendation string.

use crate::effects::MainEffect;

/// For each effect, picks the level index with the extremum of its mean —
/// `argmax` when `higher_is_better`, else `argmin` — breaking ties by the
/// lowest level index, and renders `"<factor>=level_<1-based-index>"` per
/// factor, joined with `", "`.
#[must_use]
pub fn recommend(effects: &[MainEffect], higher_is_better: bool) -> String {
    effects
        .iter()
        .map(|effect| {
            let best = best_level_index(effect.level_means(), higher_is_better);
            format!("{}=level_{}", effect.factor(), best + 1)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn best_level_index(level_means: &[f64], higher_is_better: bool) -> usize {
    let mut best_idx = 0;
    let mut best_value = level_means[0];
    for (idx, &value) in level_means.iter().enumerate().skip(1) {
        let better = if higher_is_better {
            value > best_value
        } else {
            value < best_value
        };
        if better {
            best_idx = idx;
            best_value = value;
        }
    }
    best_idx
}


#[cfg(test)]
mod test_support {
    use crate::effects::MainEffect;

    pub(super) fn make(factor: &str, level_means: &[f64]) -> MainEffect {
        MainEffect::for_tests(factor.to_owned(), level_means.to_vec())
    }
}
