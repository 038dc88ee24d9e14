//! Profile scoring and skill-radar computation over GitHub insights.
//!
//! Everything under [`core`] is a pure function of an [`insights::Insights`]
//! record; the binary adds config, logging and report rendering around it.

pub mod cli;
pub mod config;
pub mod core;
pub mod insights;

pub use crate::core::plan::{ImprovementPlan, compute_improvement_plan};
pub use crate::core::radar::{SkillScore, SkillVector, compute_skill_radar, primary_skill};
pub use crate::core::score::{ProfileScore, Rating, Tip, compute_profile_score, score_insights};
pub use crate::insights::{Insights, load_insights};
