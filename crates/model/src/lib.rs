pub mod accessibility;
pub mod database_info;
pub mod intersection;
pub mod line;
pub mod stat;
pub mod station;

pub use serde_with;

pub trait ExampleData {
    fn example_data() -> Self;
}
