use utility::id::{HasId, Id};

pub mod accessibility;
pub mod database_info;
pub mod intersection;
pub mod line;
pub mod station;

pub trait DatabaseRow {
    type Model: HasId;

    fn get_id(&self) -> Id<Self::Model>;
    fn to_model(self) -> Self::Model;
}

pub fn to_models<R: DatabaseRow>(rows: Vec<R>) -> Vec<R::Model> {
    rows.into_iter().map(|row| row.to_model()).collect::<Vec<_>>()
}
