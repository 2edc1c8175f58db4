// Day 3: everything that reads the submarine's binary diagnostic report

mod bit_vector;
pub use bit_vector::{parse_report, report_width, BitVector, MAX_WIDTH};

mod bit_counts;
pub use bit_counts::{count_ones, count_ones_at};

mod power_consumption;
pub use power_consumption::{power_consumption, PowerConsumption};

mod rating;
pub use rating::{
    co2_scrubber_rating, life_support, oxygen_generator_rating, select, BitCriteria, LifeSupport,
};
