use model::line::Line;
use utility::id::Id;

use crate::{
    database::{not_found_to_none, Database, Repo},
    RequestResult,
};

#[derive(Debug, Clone)]
pub struct LineRepository<D: Database> {
    database: D,
}

impl<D: Database> LineRepository<D> {
    pub fn new(database: D) -> Self {
        Self { database }
    }

    /// All lines, ordered by id descending.
    pub async fn get_lines(&self) -> RequestResult<Vec<Line>> {
        Ok(Repo::<Line>::get_all(&mut self.database.reader()).await?)
    }

    pub async fn get_line(&self, id: Id<Line>) -> RequestResult<Option<Line>> {
        Ok(not_found_to_none(
            Repo::<Line>::get(&mut self.database.reader(), id).await,
        )?)
    }
}
