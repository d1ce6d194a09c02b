pub mod logistic_curve;
pub mod price_divergence;
pub mod reward_conveyor;
pub mod spot_price;

pub use logistic_curve::*;
pub use price_divergence::*;
pub use reward_conveyor::*;
pub use spot_price::*;
