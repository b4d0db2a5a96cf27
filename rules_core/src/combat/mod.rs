//! Combat statistics - armor class and hit points

mod armor_class;
mod hit_points;

pub use armor_class::armor_class;
pub use hit_points::{average_level_gain, hit_point_record, max_hit_points, roll_hit_die};

pub(crate) use hit_points::per_level_bonus;
