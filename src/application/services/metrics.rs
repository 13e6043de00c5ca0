use crate::domain::models::{DietMetrics, Meal};

/// Folds meals, already in creation order, into [`DietMetrics`].
///
/// `best_sequence` is the longest contiguous run of meals sharing the same
/// in-diet flag, whichever flag that is.
pub fn summarize<'a, I>(meals: I) -> DietMetrics
where
    I: IntoIterator<Item = &'a Meal>,
{
    summarize_flags(meals.into_iter().map(|meal| meal.in_diet))
}

pub fn summarize_flags<I>(flags: I) -> DietMetrics
where
    I: IntoIterator<Item = bool>,
{
    let mut metrics = DietMetrics::default();
    let mut current: Option<(bool, u64)> = None;

    for in_diet in flags {
        metrics.total_meals += 1;
        if in_diet {
            metrics.total_meals_in_diet += 1;
        } else {
            metrics.total_meals_not_in_diet += 1;
        }

        let run = match current {
            Some((flag, len)) if flag == in_diet => len + 1,
            Some((_, len)) => {
                metrics.best_sequence = metrics.best_sequence.max(len);
                1
            }
            None => 1,
        };
        current = Some((in_diet, run));
    }

    if let Some((_, len)) = current {
        metrics.best_sequence = metrics.best_sequence.max(len);
    }

    metrics
}
