pub mod answers;
pub mod assets;
pub mod plan;
pub mod profile;
pub mod trades_per_day;

pub use answers::{PlanInputs, QuestionnaireAnswers};
pub use plan::{generate, generate_plan, GeneratedPlan, RiskBudget};
pub use profile::{ExperienceLevel, RiskProfile};
