pub mod documents;
pub mod projets;
pub mod referentiels;
pub mod sprints;
pub mod taches;
