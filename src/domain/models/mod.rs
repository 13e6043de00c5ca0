pub mod meal;
pub mod metrics;
pub mod user;

pub use meal::{Meal, MealChanges};
pub use metrics::DietMetrics;
pub use user::User;
