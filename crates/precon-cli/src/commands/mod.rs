pub mod mortgage;
pub mod plan;
pub mod report;
